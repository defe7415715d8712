use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use aperfetch::commands;

fn main() -> Result<()> {
    aperfetch::init_logging();

    let matches = Command::new("aperfetch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Show host information next to an ASCII logo")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("version") {
        return commands::version();
    }

    commands::fetch()
}
