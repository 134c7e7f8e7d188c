use anyhow::{Result, anyhow};
use clap::Args;
use murmur_core::{HookError, InstallOptions, InstallReport};
use tracing::info;

use crate::config::MurmurConfig;

#[derive(Args)]
pub struct InstallArgs {
    /// Overwrite hook scripts that were edited by hand (a backup is kept)
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InstallArgs, config: &MurmurConfig) -> Result<()> {
    let installer = super::installer(config)?;
    let options = InstallOptions { force: args.force };

    let report = match installer.install(&options) {
        Ok(report) => report,
        Err(HookError::ScriptsModified { names }) => {
            return Err(anyhow!(
                "hook scripts were modified: {}\nRe-run with `murmur install --force` to overwrite them (a backup is kept)",
                names.join(", ")
            ));
        }
        Err(e) => return Err(e.into()),
    };

    info!(scripts = report.written.len(), "Install finished");
    print_report(&report, &installer.settings_path().display().to_string());
    Ok(())
}

fn print_report(report: &InstallReport, settings_path: &str) {
    for path in &report.written {
        println!("Installed {}", path.display());
    }
    if !report.repaired.is_empty() {
        println!("Repaired {}", report.repaired.join(", "));
    }
    for backup in &report.script_backups {
        println!("Saved modified script to {}", backup.display());
    }
    if let Some(backup) = &report.settings_backup {
        println!(
            "settings.json was not valid JSON; saved it to {} and started fresh",
            backup.display()
        );
    }
    if report.settings_updated {
        println!("Registered hooks in {settings_path}");
    } else {
        println!("Hooks already registered in {settings_path}");
    }
    if !report.unregistered.is_empty() {
        eprintln!(
            "Could not register {}: their entries in {settings_path} are not arrays. Fix them by hand and re-run `murmur install`",
            report.unregistered.join(", ")
        );
    }
}
