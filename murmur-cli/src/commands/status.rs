use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use murmur_core::{HookStatus, InstallState, ScriptStatus};

use crate::config::MurmurConfig;

#[derive(Args)]
pub struct StatusArgs {
    /// Print machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: StatusArgs, config: &MurmurConfig) -> Result<()> {
    let installer = super::installer(config)?;
    let status = installer.status()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("Hooks: {}", status.state);
    println!();
    println!("{}", render_table(&status));

    match status.state {
        InstallState::NotInstalled => println!("\nRun `murmur install` to set up hooks."),
        InstallState::PartiallyInstalled => {
            println!("\nRun `murmur install` to restore missing scripts.")
        }
        InstallState::Modified => {
            println!("\nRun `murmur install --force` to restore modified scripts.")
        }
        InstallState::Installed => {}
    }
    Ok(())
}

fn render_table(status: &HookStatus) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Script").fg(Color::Cyan),
            Cell::new("Status").fg(Color::Cyan),
            Cell::new("Registered").fg(Color::Cyan),
            Cell::new("Path").fg(Color::Cyan),
        ]);

    for (name, info) in &status.scripts {
        let event = murmur_core::hooks::scripts::find(name).map(|s| s.event.as_str());
        let registered = event
            .and_then(|event| status.settings.get(event))
            .copied()
            .unwrap_or(false);
        let status_cell = match info.status {
            ScriptStatus::Ok => Cell::new("ok").fg(Color::Green),
            ScriptStatus::Missing => Cell::new("missing").fg(Color::Yellow),
            ScriptStatus::Modified => Cell::new("modified").fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(name),
            status_cell,
            Cell::new(format!(
                "{} ({})",
                if registered { "yes" } else { "no" },
                event.unwrap_or("?")
            )),
            Cell::new(info.path.display()),
        ]);
    }
    table
}
