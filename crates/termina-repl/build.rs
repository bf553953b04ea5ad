//! Stamps the git revision and build date into the `termina` binary.

use std::path::Path;
use std::process::Command;

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn main() {
    // Source tarballs ship without .git
    if Path::new("../../.git").exists() {
        println!("cargo::rerun-if-changed=../../.git/HEAD");
        println!("cargo::rerun-if-changed=../../.git/refs/heads/");
    }

    let hash = git_short_hash().unwrap_or_else(|| "unknown".to_string());
    let date = chrono::Utc::now().format("%Y-%m-%d");

    println!("cargo:rustc-env=TERMINA_GIT_HASH={hash}");
    println!("cargo:rustc-env=TERMINA_BUILD_DATE={date}");
}
