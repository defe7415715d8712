// External command invocation

use crate::error::{FetchError, Result};
use log::debug;
use std::process::Command;

/// Runs external tools and hands back their trimmed standard output.
pub trait CommandRunner {
    /// Run `program` with `args`. Fails when the program cannot be spawned or
    /// exits with a non-zero status.
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;

    /// Whether `program` can be found on the PATH
    fn exists(&self, program: &str) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        debug!("Running {} {:?}", program, args);

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| FetchError::command_not_found(format!("{}: {}", program, e)))?;

        if !output.status.success() {
            return Err(FetchError::command_failed(format!(
                "{} exited with {}",
                program, output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn exists(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
