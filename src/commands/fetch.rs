use crate::core::host::SysinfoHost;
use crate::core::interfaces::SysinfoNetwork;
use crate::core::{collect_facts, ProbeContext};
use crate::platform::{Platform, SystemCommandRunner, SystemEnvironment, SystemFileReader};
use crate::ui::{render, RenderStyle, LOGO};
use anyhow::{Context, Result};
use log::debug;
use std::io::{self, Write};

/// Gather every fact from the real host and print the screen.
pub fn execute() -> Result<()> {
    let env = SystemEnvironment;
    let commands = SystemCommandRunner;
    let files = SystemFileReader;
    let host = SysinfoHost::new();
    let network = SysinfoNetwork::new();

    let platform = Platform::detect(&env);
    debug!("Detected platform: {}", platform.name());

    let ctx = ProbeContext {
        platform,
        commands: &commands,
        files: &files,
        env: &env,
        host: &host,
        network: &network,
    };

    print_screen(&screen(&ctx, RenderStyle::Color))
}

/// The full output for a host: logo plus collected facts
pub fn screen(ctx: &ProbeContext, style: RenderStyle) -> String {
    render(LOGO, &collect_facts(ctx), style)
}

fn print_screen(screen: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match stdout.write_all(screen.as_bytes()).and_then(|_| stdout.flush()) {
        // Piped into `head` and friends
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result.context("Failed to write to stdout"),
    }
}
