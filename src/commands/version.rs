use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("aperfetch version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
