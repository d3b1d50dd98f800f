//! Search command implementation.

use anyhow::Result;
use console::style;
use serde::Serialize;

use qseek_search::{Database, QuantumSearchOutcome, search};

use super::common::{ConfigArgs, DatabaseArgs, OutputFormat, parse_format, print_histogram};

#[derive(Serialize)]
struct SearchReport<'a> {
    target: &'a str,
    database_size: usize,
    outcome: &'a QuantumSearchOutcome,
    distribution: std::collections::BTreeMap<String, u64>,
}

/// Execute the search command.
pub fn execute(target: &str, db: &DatabaseArgs, cfg: &ConfigArgs, format: &str) -> Result<()> {
    let format = parse_format(format)?;
    let config = cfg.resolve()?;
    let database = db.load()?;

    if format == OutputFormat::Table {
        println!(
            "{} Grover search for {} over {} items ({} shots)",
            style("→").cyan().bold(),
            style(target).green(),
            database.len(),
            config.shots
        );
    }

    let outcome = search(&database, target, &config)?;

    match format {
        OutputFormat::Table => print_outcome(&database, &outcome),
        OutputFormat::Json => {
            let report = SearchReport {
                target,
                database_size: database.len(),
                distribution: outcome.counts.to_bitstrings(outcome.num_qubits),
                outcome: &outcome,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn print_outcome(database: &Database, outcome: &QuantumSearchOutcome) {
    println!(
        "  Register: {} qubits ({} states, {} padding), {} iterations",
        outcome.num_qubits,
        outcome.padded_size,
        outcome.padded_size - database.len(),
        outcome.iterations
    );
    println!(
        "  Marked state probability before measurement: {:.4}",
        outcome.target_probability
    );

    print_histogram(database, outcome);

    let marker = if outcome.hit_target() {
        style("✓").green().bold()
    } else {
        style("✗").red().bold()
    };
    println!(
        "\n{} Found: {} (index {}, {:.2}% of shots)",
        marker,
        style(&outcome.found).green().bold(),
        outcome.found_index,
        outcome.found_frequency() * 100.0
    );
    println!(
        "  Execution time: {} ms",
        style(outcome.elapsed.as_millis()).yellow()
    );
}
