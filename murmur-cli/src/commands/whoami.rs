use anyhow::Result;
use clap::Args;

use crate::config::MurmurConfig;

#[derive(Args)]
pub struct WhoamiArgs {}

pub fn run(_args: WhoamiArgs, config: &MurmurConfig) -> Result<()> {
    println!("{}", super::author(config, None));
    Ok(())
}
