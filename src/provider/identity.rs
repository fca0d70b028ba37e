use super::error::ProviderError;
use rand::Rng;
use std::fmt;

pub const IDENTITY_LEN: usize = 4;
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Short random tag that keeps workers launched close together from colliding on name.
///
/// Not a security token and not globally unique; the provider rejects
/// duplicate instance names on its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkerIdentity(String);

impl WorkerIdentity {
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
        let id = (0..IDENTITY_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for WorkerIdentity {
    type Error = ProviderError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let valid = value.len() == IDENTITY_LEN
            && value.bytes().all(|b| ALPHABET.contains(&b));
        if valid {
            Ok(Self(value.to_string()))
        } else {
            Err(ProviderError::InvalidIdentity(value.to_string()))
        }
    }
}

impl fmt::Display for WorkerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
