use anyhow::{Result, bail};
use clap::Args;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use murmur_core::doctor::{self, Severity};

use crate::config::MurmurConfig;

#[derive(Args)]
pub struct DoctorArgs {}

pub fn run(_args: DoctorArgs, config: &MurmurConfig) -> Result<()> {
    let installer = super::installer(config)?;
    let checks = doctor::run_checks(&installer, &super::feed(config));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Check").fg(Color::Cyan),
            Cell::new("Result").fg(Color::Cyan),
            Cell::new("Detail").fg(Color::Cyan),
        ]);
    for check in &checks {
        let color = match check.severity {
            Severity::Ok => Color::Green,
            Severity::Warn => Color::Yellow,
            Severity::Fail => Color::Red,
        };
        table.add_row(vec![
            Cell::new(&check.name),
            Cell::new(check.severity).fg(color),
            Cell::new(&check.detail),
        ]);
    }
    println!("{table}");

    let failed = checks
        .iter()
        .filter(|c| c.severity == Severity::Fail)
        .count();
    if failed > 0 {
        bail!("{failed} check(s) failed");
    }
    Ok(())
}
