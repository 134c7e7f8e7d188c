use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::config::MurmurConfig;

#[derive(Args)]
pub struct UninstallArgs {}

pub fn run(_args: UninstallArgs, config: &MurmurConfig) -> Result<()> {
    let installer = super::installer(config)?;
    let report = installer.uninstall()?;
    info!(removed = report.removed.len(), "Uninstall finished");

    for path in &report.removed {
        println!("Removed {}", path.display());
    }
    if report.settings_skipped {
        println!(
            "Left {} untouched: it is not valid JSON",
            installer.settings_path().display()
        );
    } else if report.settings_updated {
        println!(
            "Unregistered hooks from {}",
            installer.settings_path().display()
        );
    }
    if report.removed.is_empty() && !report.settings_updated {
        println!("Nothing to uninstall");
    }
    Ok(())
}
