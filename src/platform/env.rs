// Process environment lookups, wrapped so probes can be fed fake values

use std::path::PathBuf;
use sysinfo::System;

pub trait Environment {
    /// Value of an environment variable. Empty values count as unset.
    fn var(&self, name: &str) -> Option<String>;

    /// Home directory of the invoking user
    fn home_dir(&self) -> Option<PathBuf>;

    /// Network name of this machine
    fn hostname(&self) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn hostname(&self) -> Option<String> {
        System::host_name()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
    }
}
