#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path of the built `example-catalog` binary.
pub fn catalog_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_example-catalog"))
}

/// Command for the CLI with the environment scrubbed of catalog overrides.
pub fn catalog_command() -> Command {
    let mut cmd = Command::new(catalog_binary());
    cmd.env_remove("EXAMPLE_CATALOG_PATH");
    cmd.env_remove("EXAMPLE_CATALOG_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Run a command that is expected to fail, returning its output.
pub fn run_command_expect_failure(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        bail!(
            "command {:?} unexpectedly succeeded\nstdout: {}",
            cmd,
            String::from_utf8_lossy(&output.stdout)
        );
    }
    Ok(output)
}

/// A minimal valid record for fixture catalogs.
pub fn example(key: &str, title: &str) -> Value {
    json!({
        "key": key,
        "title": title,
        "language": "Process",
        "description": format!("{title} explained."),
        "code": format!("{key}:\n  - step one\n  - step two"),
    })
}

pub fn catalog_document(examples: Vec<Value>) -> Value {
    json!({
        "schema_version": "example_catalog_v1",
        "examples": examples,
    })
}

/// Write a catalog document into `dir` and return its path.
pub fn write_catalog(dir: &TempDir, name: &str, document: &Value) -> Result<PathBuf> {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_vec_pretty(document)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

pub fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
