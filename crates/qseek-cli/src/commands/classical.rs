//! Classical linear-scan command implementation.

use anyhow::Result;
use console::style;

use qseek_search::classical_search;

use super::common::{ConfigArgs, DatabaseArgs, OutputFormat, parse_format};

/// Execute the classical command.
pub fn execute(target: &str, db: &DatabaseArgs, cfg: &ConfigArgs, format: &str) -> Result<()> {
    let format = parse_format(format)?;
    let config = cfg.resolve()?;
    let database = db.load()?;

    let outcome = classical_search(&database, target, &config)?;

    match format {
        OutputFormat::Table => {
            println!(
                "{} Linear scan for {} over {} items",
                style("→").cyan().bold(),
                style(target).green(),
                database.len()
            );
            println!(
                "\n{} Found: {} (index {})",
                style("✓").green().bold(),
                style(&outcome.found).green().bold(),
                outcome.found_index
            );
            println!("  Queries: {}", style(outcome.queries).yellow());
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }
    Ok(())
}
