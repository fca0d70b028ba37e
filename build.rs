use std::env;
use std::process::Command;

/// Short git hash of HEAD, or `None` when git is unavailable or this is not a checkout.
fn git_short_hash() -> Option<String> {
    let output = match Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
    {
        Ok(output) => output,
        Err(_) => {
            println!("cargo:warning=Could not run git; version will not include a commit hash");
            return None;
        }
    };

    if !output.status.success() {
        println!(
            "cargo:warning=git rev-parse failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return None;
    }

    let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!hash.is_empty()).then_some(hash)
}

fn main() {
    let base = env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let is_release = env::var("PROFILE").map(|p| p == "release").unwrap_or(false);
    let wants_hash = is_release || env::var("LOADGEN_VERSION_WITH_HASH").is_ok();

    let version = if wants_hash {
        match git_short_hash() {
            Some(hash) => format!("{} ({})", base, hash),
            None => base,
        }
    } else {
        format!("{} (dev)", base)
    };

    println!("cargo:rustc-env=LOADGEN_BUILD_VERSION={}", version);
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/packed-refs");
    println!("cargo:rerun-if-env-changed=LOADGEN_VERSION_WITH_HASH");
}
