//! In-memory capabilities.
//!
//! Every probe reads the host through a trait object, so tests can build a
//! host out of canned command output, file contents and statistics.

use crate::core::host::{HostSource, Usage};
use crate::core::interfaces::{Interface, NetworkSource};
use crate::error::{FetchError, Result};
use crate::platform::command::CommandRunner;
use crate::platform::env::Environment;
use crate::platform::fs::FileReader;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};

/// Commands with canned output. Unregistered commands fail to spawn.
#[derive(Debug, Default, Clone)]
pub struct FakeCommands {
    outputs: HashMap<String, std::result::Result<String, String>>,
    on_path: BTreeSet<String>,
}

impl FakeCommands {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(program: &str, args: &[&str]) -> String {
        std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Register `program args...` as succeeding with `output`. The program is
    /// also placed on the PATH.
    pub fn with_output(mut self, program: &str, args: &[&str], output: &str) -> Self {
        self.outputs
            .insert(Self::key(program, args), Ok(output.to_string()));
        self.on_path.insert(program.to_string());
        self
    }

    /// Register `program args...` as exiting with a failure status
    pub fn with_failure(mut self, program: &str, args: &[&str]) -> Self {
        self.outputs
            .insert(Self::key(program, args), Err(format!("{} failed", program)));
        self.on_path.insert(program.to_string());
        self
    }

    /// Put a program on the PATH without registering any invocation
    pub fn with_program(mut self, program: &str) -> Self {
        self.on_path.insert(program.to_string());
        self
    }
}

impl CommandRunner for FakeCommands {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        match self.outputs.get(&Self::key(program, args)) {
            Some(Ok(output)) => Ok(output.trim().to_string()),
            Some(Err(msg)) => Err(FetchError::command_failed(msg.clone())),
            None => Err(FetchError::command_not_found(program)),
        }
    }

    fn exists(&self, program: &str) -> bool {
        self.on_path.contains(program)
    }
}

/// A tiny in-memory filesystem. Directories are implied by file paths.
#[derive(Debug, Default, Clone)]
pub struct FakeFiles {
    files: BTreeMap<PathBuf, String>,
}

impl FakeFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.files.insert(path.into(), contents.to_string());
        self
    }
}

impl FileReader for FakeFiles {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            FetchError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        })
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<String>> {
        let names: BTreeSet<String> = self
            .files
            .keys()
            .filter_map(|file| file.strip_prefix(path).ok())
            .filter_map(|rest| rest.components().next())
            .map(|first| first.as_os_str().to_string_lossy().into_owned())
            .collect();

        if names.is_empty() {
            return Err(FetchError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )));
        }

        Ok(names.into_iter().collect())
    }
}

#[derive(Debug, Default, Clone)]
pub struct FakeEnv {
    vars: HashMap<String, String>,
    home: Option<PathBuf>,
    hostname: Option<String>,
}

impl FakeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn with_hostname(mut self, hostname: &str) -> Self {
        self.hostname = Some(hostname.to_string());
        self
    }
}

impl Environment for FakeEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).filter(|value| !value.is_empty()).cloned()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn hostname(&self) -> Option<String> {
        self.hostname.clone()
    }
}

/// Host statistics. Anything left unset is unavailable.
#[derive(Debug, Default, Clone)]
pub struct FakeHost {
    pub os_description: Option<String>,
    pub kernel_version: Option<String>,
    pub uptime_secs: Option<u64>,
    pub cpu_brand: Option<String>,
    pub cpu_count: usize,
    pub memory: Option<Usage>,
    pub disks: HashMap<PathBuf, Usage>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_disk(mut self, mount_point: impl Into<PathBuf>, usage: Usage) -> Self {
        self.disks.insert(mount_point.into(), usage);
        self
    }
}

fn missing(what: &str) -> FetchError {
    FetchError::unavailable(format!("{} not set on fake host", what))
}

impl HostSource for FakeHost {
    fn os_description(&self) -> Result<String> {
        self.os_description.clone().ok_or_else(|| missing("os"))
    }

    fn kernel_version(&self) -> Result<String> {
        self.kernel_version.clone().ok_or_else(|| missing("kernel"))
    }

    fn uptime_secs(&self) -> Result<u64> {
        self.uptime_secs.ok_or_else(|| missing("uptime"))
    }

    fn cpu_brand(&self) -> Result<String> {
        self.cpu_brand.clone().ok_or_else(|| missing("cpu"))
    }

    fn cpu_count(&self) -> usize {
        self.cpu_count
    }

    fn memory(&self) -> Result<Usage> {
        self.memory.ok_or_else(|| missing("memory"))
    }

    fn disk_usage(&self, mount_point: &Path) -> Result<Usage> {
        self.disks
            .get(mount_point)
            .copied()
            .ok_or_else(|| missing("disk"))
    }
}

/// Interface list; `None` makes enumeration itself fail.
#[derive(Debug, Default, Clone)]
pub struct FakeNetwork {
    pub interfaces: Option<Vec<Interface>>,
}

impl FakeNetwork {
    pub fn new(interfaces: Vec<Interface>) -> Self {
        Self {
            interfaces: Some(interfaces),
        }
    }

    pub fn failing() -> Self {
        Self { interfaces: None }
    }
}

impl NetworkSource for FakeNetwork {
    fn interfaces(&self) -> Result<Vec<Interface>> {
        self.interfaces
            .clone()
            .ok_or_else(|| FetchError::unavailable("interface enumeration failed"))
    }
}
