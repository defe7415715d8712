use aperfetch::commands::fetch::screen;
use aperfetch::core::ProbeContext;
use aperfetch::platform::fake::{FakeCommands, FakeEnv, FakeFiles, FakeHost, FakeNetwork};
use aperfetch::platform::Platform;
use aperfetch::ui::renderer::{logo_lines, logo_width};
use aperfetch::ui::{RenderStyle, LOGO};

#[test]
fn test_bare_host_screen() {
    let commands = FakeCommands::new();
    let files = FakeFiles::new();
    let env = FakeEnv::new().with_home("/home/linus").with_hostname("kernel");
    let host = FakeHost::new();
    let network = FakeNetwork::failing();

    let ctx = ProbeContext {
        platform: Platform::Linux,
        commands: &commands,
        files: &files,
        env: &env,
        host: &host,
        network: &network,
    };

    let out = screen(&ctx, RenderStyle::Plain);
    let lines: Vec<&str> = out.lines().collect();
    let logo = logo_lines(LOGO);
    let width = logo_width(&logo);

    // 10 mandatory facts beside an 8 line logo, plus the blank brackets
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "");
    assert_eq!(lines[11], "");
    assert_eq!(lines[1], format!("  {:<w$}   linus@kernel", logo[0], w = width));
    assert_eq!(lines[3], format!("  {:<w$}   OS: Unknown", logo[2], w = width));
    assert_eq!(lines[10], format!("  {}   Disk: Unknown", " ".repeat(width)));
}
