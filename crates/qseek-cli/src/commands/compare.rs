//! Compare command implementation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::warn;

use qseek_search::{
    Comparator, ComparisonRecord, TargetPosition, TheoreticalPoint, theoretical_curve,
};

use super::common::{ConfigArgs, OutputFormat, parse_format};

#[derive(Serialize)]
struct CompareReport {
    records: Vec<ComparisonRecord>,
    theoretical: Vec<TheoreticalPoint>,
}

/// Execute the compare command.
pub fn execute(sizes: &[usize], target: &str, cfg: &ConfigArgs, format: &str) -> Result<()> {
    let format = parse_format(format)?;
    let config = cfg.resolve()?;
    let position = TargetPosition::from_name(target).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown target position: '{target}'. Available: first, middle, last, random, <index>"
        )
    })?;

    if sizes.is_empty() {
        anyhow::bail!("No database sizes given");
    }

    let comparator = Comparator::new(config).with_target_position(position);

    let progress = ProgressBar::new(sizes.len() as u64);
    if format == OutputFormat::Table {
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        progress.set_message("comparing...");
    } else {
        progress.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }

    // Ctrl-C stops the batch after the size-runs already in flight.
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed)) {
        warn!("Ctrl-C will not cancel the comparison: {e}");
    }

    let records = run_with_progress(&comparator, sizes, &cancel, &progress);
    progress.finish_and_clear();
    let records = records?;

    match format {
        OutputFormat::Table => print_table(&records),
        OutputFormat::Json => {
            let report = CompareReport {
                theoretical: theoretical_curve(sizes),
                records,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn run_with_progress(
    comparator: &Comparator,
    sizes: &[usize],
    cancel: &AtomicBool,
    progress: &ProgressBar,
) -> Result<Vec<ComparisonRecord>> {
    let records = comparator.compare_with_cancel(sizes, cancel, |record| {
        progress.set_message(format!("N = {}", record.size));
        progress.inc(1);
    })?;
    Ok(records)
}

fn print_table(records: &[ComparisonRecord]) {
    println!(
        "\n{} Classical vs. Grover ({} sizes):",
        style("✓").green().bold(),
        records.len()
    );
    println!(
        "  {:>8} {:>8} {:>6} {:>10} {:>10} {:>8} {:>8}",
        "size", "padded", "qubits", "classical", "grover", "speedup", "P(hit)"
    );
    for r in records {
        let agreed = if r.agreed {
            style("✓").green()
        } else {
            style("✗").red()
        };
        println!(
            "  {:>8} {:>8} {:>6} {:>10} {:>10} {:>7.2}x {:>8.4} {}",
            r.size,
            r.padded_size,
            r.num_qubits,
            r.classical_queries,
            r.quantum_iterations,
            r.speedup,
            r.target_probability,
            agreed
        );
    }
}
