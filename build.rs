
use std::{process::Command, env};
use anyhow::{self, Context};

fn main() {
    let git_version = git_describe().unwrap_or_else(|e| {
        println!("cargo:warning=No git version ({e}), using package version");
        env::var("CARGO_PKG_VERSION").unwrap_or_default()
    });
    println!("Using GIT_VERSION={}", git_version);
    println!("cargo:rustc-env=GIT_VERSION={}", git_version);
    println!("cargo:rerun-if-changed=.git/HEAD");
}

fn git_describe() -> anyhow::Result<String> {
    let output = Command::new("git")
        .args(&["describe", "--always"])
        .output().context("Failed to get git version")?;
    exit_ok(output.status)?;

    let version = String::from_utf8(output.stdout)?.trim().to_owned();
    if version.is_empty() {
        anyhow::bail!("empty git describe output")
    }
    Ok(version)
}

fn exit_ok(status: std::process::ExitStatus) -> anyhow::Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(anyhow::format_err!("Exited with status {}", status.code().unwrap_or(-1)))
    }
}
