use anyhow::Result;
use databinding_sample::{logging, ui};

fn main() -> Result<()> {
    logging::init_tracing();
    ui::run()?;
    Ok(())
}
