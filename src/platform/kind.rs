// Platform classification, done once per run

use crate::platform::env::Environment;

/// Environment variable set by the Android runtime (Termux included)
pub const ANDROID_MARKER: &str = "ANDROID_ROOT";

/// The target environments probes branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Linux,
    MacOs,
    Windows,
    Other,
}

impl Platform {
    /// Classify the running host.
    ///
    /// The Android marker wins over the compile target, since Termux binaries
    /// are plain Linux builds.
    pub fn detect(env: &dyn Environment) -> Self {
        if env.var(ANDROID_MARKER).is_some() {
            return Platform::Android;
        }
        Self::from_target()
    }

    /// Classification from the compile target alone
    pub fn from_target() -> Self {
        if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Other
        }
    }

    /// Android runs a Linux kernel and exposes most of its pseudo-files, so
    /// Linux strategies remain valid fallbacks there.
    pub fn is_linux_family(self) -> bool {
        matches!(self, Platform::Android | Platform::Linux)
    }

    pub fn name(self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::fake::FakeEnv;

    #[test]
    fn test_android_marker_wins() {
        let env = FakeEnv::new().with_var(ANDROID_MARKER, "/system");
        assert_eq!(Platform::detect(&env), Platform::Android);
    }

    #[test]
    fn test_without_marker_uses_target() {
        let env = FakeEnv::new();
        assert_eq!(Platform::detect(&env), Platform::from_target());
    }

    #[test]
    fn test_linux_family() {
        assert!(Platform::Android.is_linux_family());
        assert!(Platform::Linux.is_linux_family());
        assert!(!Platform::MacOs.is_linux_family());
        assert!(!Platform::Windows.is_linux_family());
        assert!(!Platform::Other.is_linux_family());
    }
}
