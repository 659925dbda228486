use std::path::{Path, PathBuf};
use std::process::Command;

const SHA_ENV: &str = "TASKNEST_BUILD_SHA";

fn git(repo_root: &Path, args: &[&str]) -> Option<String> {
    let out = Command::new("git").arg("-C").arg(repo_root).args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let s = String::from_utf8_lossy(&out.stdout).trim().to_string();
    (!s.is_empty()).then_some(s)
}

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let repo_root = PathBuf::from(manifest_dir).join("..");

    // Rebuild when HEAD moves so `--version` stays accurate
    if let Some(git_dir) = git(&repo_root, &["rev-parse", "--absolute-git-dir"]) {
        println!("cargo:rerun-if-changed={git_dir}/HEAD");
        println!("cargo:rerun-if-changed={git_dir}/refs/heads");
    }
    println!("cargo:rerun-if-env-changed={SHA_ENV}");

    // Packagers without a checkout can pass the SHA in
    let sha = std::env::var(SHA_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| git(&repo_root, &["rev-parse", "--short", "HEAD"]))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env={SHA_ENV}={sha}");
}
