use aperfetch::core::host::SysinfoHost;
use aperfetch::core::interfaces::SysinfoNetwork;
use aperfetch::core::{collect_facts, ProbeContext};
use aperfetch::platform::{Platform, SystemCommandRunner, SystemEnvironment, SystemFileReader};

#[test]
fn test_real_host_facts_never_fail() {
    let env = SystemEnvironment;
    let commands = SystemCommandRunner;
    let files = SystemFileReader;
    let host = SysinfoHost::new();
    let network = SysinfoNetwork::new();

    let ctx = ProbeContext {
        platform: Platform::detect(&env),
        commands: &commands,
        files: &files,
        env: &env,
        host: &host,
        network: &network,
    };

    let facts = collect_facts(&ctx);

    // identity, separator and the eight mandatory entries
    assert!(facts.len() >= 10);
    for fact in &facts {
        assert!(!fact.value.is_empty());
        assert_eq!(fact.value.trim(), fact.value);
    }
}
