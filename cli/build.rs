//! Captures the git revision, commit time and tree state for `--version`.

use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn main() {
    let revision = git(&["rev-parse", "HEAD"]).unwrap_or_default();
    let timestamp = git(&["log", "-1", "--format=%cI"]).unwrap_or_default();
    let dirty = git(&["status", "--porcelain"])
        .map(|status| (!status.is_empty()).to_string())
        .unwrap_or_default();

    println!("cargo:rustc-env=GH_SCAN_REVISION={revision}");
    println!("cargo:rustc-env=GH_SCAN_COMMIT_TIME={timestamp}");
    println!("cargo:rustc-env=GH_SCAN_DIRTY={dirty}");
    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=../.git/index");
}
