use aperfetch::core::host::Usage;
use aperfetch::core::interfaces::Interface;
use aperfetch::core::{collect_facts, Fact, ProbeContext};
use aperfetch::platform::fake::{FakeCommands, FakeEnv, FakeFiles, FakeHost, FakeNetwork};
use aperfetch::platform::Platform;

struct Laptop {
    commands: FakeCommands,
    files: FakeFiles,
    env: FakeEnv,
    host: FakeHost,
    network: FakeNetwork,
}

impl Laptop {
    fn new() -> Self {
        let mut host = FakeHost::new().with_disk(
            "/",
            Usage {
                used_bytes: 107_374_182_400,
                total_bytes: 536_870_912_000,
            },
        );
        host.os_description = Some("Linux 24.04 Ubuntu".to_string());
        host.kernel_version = Some("6.8.0-31-generic".to_string());
        host.uptime_secs = Some(93_784);
        host.cpu_brand = Some("12th Gen Intel(R) Core(TM) i7-1260P".to_string());
        host.cpu_count = 16;
        host.memory = Some(Usage {
            used_bytes: 2_147_483_648,
            total_bytes: 8_589_934_592,
        });

        Self {
            commands: FakeCommands::new()
                .with_output(
                    "lspci",
                    &[],
                    "00:02.0 VGA compatible controller: Intel Corporation Alder Lake-P GT2 [Iris Xe Graphics] (rev 0c)",
                )
                .with_output("xrandr", &[], "eDP-1 connected\n   1920x1200     60.00*+\n")
                .with_output("dpkg", &["-l"], "ii  bash 5.2 amd64 shell\nii  zsh 5.9 amd64 shell\n")
                .with_output("pacman", &["-Q"], "bash 5.2\n"),
            files: FakeFiles::new()
                .with_file("/etc/os-release", "NAME=\"Ubuntu\"\nPRETTY_NAME=\"Ubuntu 24.04 LTS\"\n")
                .with_file("/sys/class/dmi/id/sys_vendor", "Framework\n")
                .with_file("/sys/class/dmi/id/product_name", "Laptop (12th Gen Intel Core)\n")
                .with_file("/sys/class/power_supply/BAT1/capacity", "80\n")
                .with_file("/sys/class/power_supply/BAT1/status", "Discharging\n"),
            env: FakeEnv::new()
                .with_home("/home/grace")
                .with_hostname("framework")
                .with_var("SHELL", "/bin/bash"),
            host,
            network: FakeNetwork::new(vec![
                Interface {
                    name: "lo".to_string(),
                    is_up: true,
                    is_loopback: true,
                    addrs: vec!["127.0.0.1/8".to_string()],
                },
                Interface {
                    name: "wlp166s0".to_string(),
                    is_up: true,
                    is_loopback: false,
                    addrs: vec!["fe80::1/64".to_string(), "192.168.1.10/24".to_string()],
                },
            ]),
        }
    }

    fn ctx(&self, platform: Platform) -> ProbeContext<'_> {
        ProbeContext {
            platform,
            commands: &self.commands,
            files: &self.files,
            env: &self.env,
            host: &self.host,
            network: &self.network,
        }
    }
}

fn texts(facts: &[Fact]) -> Vec<String> {
    facts.iter().map(Fact::text).collect()
}

#[test]
fn test_full_linux_fact_order() {
    let laptop = Laptop::new();
    let facts = collect_facts(&laptop.ctx(Platform::Linux));

    assert_eq!(
        texts(&facts),
        vec![
            "grace@framework",
            "-----------------",
            "OS: Ubuntu 24.04 LTS",
            "Kernel: 6.8.0-31-generic",
            "Uptime: 1 days, 2 hours, 3 mins",
            "Shell: bash",
            "CPU: 12th Gen Intel(R) Core(TM) i7-1260P (16)",
            "GPU: Intel Corporation Alder Lake-P GT2 [Iris Xe Graphics] (rev 0c)",
            "Memory: 2.00 GiB / 8.00 GiB",
            "Disk: 100.00 GiB / 500.00 GiB",
            "Local IP (wlp166s0): 192.168.1.10",
            "Resolution: 1920x1200",
            "Packages: 2 (dpkg)",
            "Manufacturer: Framework",
            "Model: Laptop (12th Gen Intel Core)",
            "Battery: 80% [Discharging]",
        ]
    );
}

#[test]
fn test_missing_resolution_is_omitted() {
    let mut laptop = Laptop::new();
    laptop.commands = laptop.commands.with_failure("xrandr", &[]);

    let facts = collect_facts(&laptop.ctx(Platform::Linux));
    assert!(texts(&facts).iter().all(|line| !line.starts_with("Resolution:")));
    assert!(texts(&facts).iter().any(|line| line.starts_with("Packages:")));
}

#[test]
fn test_every_value_is_trimmed_and_non_empty() {
    let laptop = Laptop::new();
    for platform in [
        Platform::Android,
        Platform::Linux,
        Platform::MacOs,
        Platform::Windows,
        Platform::Other,
    ] {
        for fact in collect_facts(&laptop.ctx(platform)) {
            assert!(!fact.value.is_empty(), "{:?} on {:?}", fact, platform);
            assert_eq!(fact.value.trim(), fact.value, "{:?} on {:?}", fact, platform);
        }
    }
}

#[test]
fn test_windows_laptop_drops_linux_only_facts() {
    let laptop = Laptop::new();
    let facts = texts(&collect_facts(&laptop.ctx(Platform::Windows)));

    assert!(facts.contains(&"Kernel: NT".to_string()));
    assert!(facts.contains(&"OS: Linux 24.04 Ubuntu".to_string()));
    assert!(facts.contains(&"Disk: Unknown".to_string()));
    assert!(!facts.iter().any(|line| line.starts_with("Manufacturer:")));
    assert!(!facts.iter().any(|line| line.starts_with("Battery:")));
}
