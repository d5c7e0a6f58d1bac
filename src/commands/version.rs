use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("ndm version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
