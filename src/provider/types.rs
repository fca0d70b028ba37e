use super::error::{ProviderError, ProviderResult};

pub const DEFAULT_PROVIDER_BIN: &str = "gcloud";
pub const DEFAULT_MACHINE_TYPE: &str = "f1-micro";
pub const DEFAULT_IMAGE: &str = "gcr.io/google-samples/microservices-demo/loadgenerator:v0.10.0";
pub const WORKER_NAME_PREFIX: &str = "loadgenerator";
pub const INSTALL_URL: &str = "https://cloud.google.com/sdk/docs/install";

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Provider CLI executable, resolved through PATH
    pub binary: String,
    /// Machine type for every worker
    pub machine_type: String,
    /// Container image the worker runs
    pub image: String,
    /// Prefix shared by all worker instance names
    pub name_prefix: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            binary: DEFAULT_PROVIDER_BIN.to_string(),
            machine_type: DEFAULT_MACHINE_TYPE.to_string(),
            image: DEFAULT_IMAGE.to_string(),
            name_prefix: WORKER_NAME_PREFIX.to_string(),
        }
    }
}

/// Parameters for a single worker launch.
#[derive(Debug, Clone)]
pub struct LaunchSpec {
    pub target: String,
    pub zone: String,
    /// Empty means the image decides which scenarios run
    pub scenarios: Vec<String>,
}

impl LaunchSpec {
    pub fn new(
        target: impl Into<String>,
        zone: impl Into<String>,
        scenarios: Vec<String>,
    ) -> ProviderResult<Self> {
        let target = target.into();
        let zone = zone.into();
        if target.is_empty() {
            return Err(ProviderError::EmptyField("target address"));
        }
        if zone.is_empty() {
            return Err(ProviderError::EmptyField("zone"));
        }
        Ok(Self {
            target,
            zone,
            scenarios,
        })
    }
}

#[derive(Debug, Clone)]
pub struct TeardownSpec {
    pub names: Vec<String>,
    pub zone: String,
}

impl TeardownSpec {
    /// Duplicate names are collapsed, keeping first-seen order.
    pub fn new(names: Vec<String>, zone: impl Into<String>) -> ProviderResult<Self> {
        let zone = zone.into();
        if zone.is_empty() {
            return Err(ProviderError::EmptyField("zone"));
        }
        let mut unique: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            if name.is_empty() {
                return Err(ProviderError::EmptyField("worker name"));
            }
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        if unique.is_empty() {
            return Err(ProviderError::NoWorkers);
        }
        Ok(Self {
            names: unique,
            zone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_spec_requires_target_and_zone() {
        assert!(matches!(
            LaunchSpec::new("", "us-central1-c", vec![]),
            Err(ProviderError::EmptyField("target address"))
        ));
        assert!(matches!(
            LaunchSpec::new("10.0.0.5", "", vec![]),
            Err(ProviderError::EmptyField("zone"))
        ));
        // Format is the provider's problem
        assert!(LaunchSpec::new("not-an-ip", "nowhere", vec![]).is_ok());
    }

    #[test]
    fn test_teardown_spec_dedupes_names() {
        let spec = TeardownSpec::new(
            vec!["a".into(), "b".into(), "a".into(), "c".into()],
            "z",
        )
        .unwrap();
        assert_eq!(spec.names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_teardown_spec_rejects_empty_input() {
        assert!(matches!(
            TeardownSpec::new(vec![], "z"),
            Err(ProviderError::NoWorkers)
        ));
        assert!(matches!(
            TeardownSpec::new(vec!["a".into()], ""),
            Err(ProviderError::EmptyField("zone"))
        ));
    }
}
