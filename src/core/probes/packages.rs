use super::{settle, ProbeContext};
use crate::error::{FetchError, Result};
use crate::platform::Platform;
use log::debug;

/// A package manager and the query that lists its installed packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageManager {
    pub name: &'static str,
    pub args: &'static [&'static str],
    /// Only lines starting with this count; `None` counts every non-blank line
    pub line_prefix: Option<&'static str>,
    pub macos_only: bool,
}

/// Checked in this order; the first manager on the PATH wins
pub const MANAGERS: [PackageManager; 4] = [
    PackageManager {
        name: "dpkg",
        args: &["-l"],
        line_prefix: Some("ii"),
        macos_only: false,
    },
    PackageManager {
        name: "pacman",
        args: &["-Q"],
        line_prefix: None,
        macos_only: false,
    },
    PackageManager {
        name: "rpm",
        args: &["-qa"],
        line_prefix: None,
        macos_only: false,
    },
    PackageManager {
        name: "brew",
        args: &["list", "--formula"],
        line_prefix: None,
        macos_only: true,
    },
];

/// `"<count> (<manager>)"`
pub fn probe(ctx: &ProbeContext) -> String {
    settle("packages", package_count(ctx))
}

fn package_count(ctx: &ProbeContext) -> Result<String> {
    let manager = MANAGERS
        .iter()
        .filter(|m| !m.macos_only || ctx.platform == Platform::MacOs)
        .find(|m| ctx.commands.exists(m.name))
        .ok_or_else(|| FetchError::unavailable("no known package manager on PATH"))?;

    debug!("Counting packages with {}", manager.name);
    let output = ctx.commands.run(manager.name, manager.args)?;
    Ok(format!("{} ({})", count_packages(&output, manager.line_prefix), manager.name))
}

pub fn count_packages(output: &str, line_prefix: Option<&str>) -> usize {
    output
        .lines()
        .filter(|line| match line_prefix {
            Some(prefix) => line.starts_with(prefix),
            None => !line.trim().is_empty(),
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::probes::test_support::FakeSystem;
    use crate::core::probes::UNKNOWN;
    use crate::platform::fake::FakeCommands;

    const DPKG: &str = "\
Desired=Unknown/Install/Remove/Purge/Hold
||/ Name           Version      Architecture Description
+++-==============-============-============-=================================
ii  adduser        3.134        all          add and remove users and groups
ii  apt            2.6.1        amd64        commandline package manager
rc  oldpkg         1.0          amd64        removed package
ii  bash           5.2.15-2     amd64        GNU Bourne Again SHell
";

    #[test]
    fn test_count_packages() {
        assert_eq!(count_packages(DPKG, Some("ii")), 3);
        assert_eq!(count_packages("bash 5.2\nzsh 5.9\n\n", None), 2);
    }

    #[test]
    fn test_dpkg_beats_pacman() {
        let mut sys = FakeSystem::new(Platform::Linux);
        sys.commands = FakeCommands::new()
            .with_output("dpkg", &["-l"], DPKG)
            .with_output("pacman", &["-Q"], "bash 5.2\nzsh 5.9\n");
        assert_eq!(probe(&sys.ctx()), "3 (dpkg)");
    }

    #[test]
    fn test_pacman() {
        let mut sys = FakeSystem::new(Platform::Linux);
        sys.commands = FakeCommands::new().with_output("pacman", &["-Q"], "bash 5.2\nzsh 5.9\n");
        assert_eq!(probe(&sys.ctx()), "2 (pacman)");
    }

    #[test]
    fn test_brew_only_on_macos() {
        let commands = FakeCommands::new().with_output("brew", &["list", "--formula"], "git\nripgrep\nwget\n");

        let mut sys = FakeSystem::new(Platform::MacOs);
        sys.commands = commands.clone();
        assert_eq!(probe(&sys.ctx()), "3 (brew)");

        let mut sys = FakeSystem::new(Platform::Linux);
        sys.commands = commands;
        assert_eq!(probe(&sys.ctx()), UNKNOWN);
    }

    #[test]
    fn test_failed_query_does_not_fall_through() {
        let mut sys = FakeSystem::new(Platform::Linux);
        sys.commands = FakeCommands::new()
            .with_failure("dpkg", &["-l"])
            .with_output("rpm", &["-qa"], "bash-5.2\n");
        assert_eq!(probe(&sys.ctx()), UNKNOWN);
    }

    #[test]
    fn test_no_manager() {
        let sys = FakeSystem::new(Platform::Linux);
        assert_eq!(probe(&sys.ctx()), UNKNOWN);
    }
}
