//! Shared helpers for CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use qseek_search::{Counts, Database, MatchRule, QuantumSearchOutcome, SearchConfig};

use crate::store::LocalStore;

/// Search settings shared by `search`, `classical` and `compare`.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// YAML file with search settings (flags override it)
    #[arg(long)]
    pub config: Option<String>,

    /// Number of measurement shots
    #[arg(short, long, env = "QSEEK_SHOTS")]
    pub shots: Option<u32>,

    /// Use the textbook iteration count for every size
    #[arg(long)]
    pub no_auto_tune: bool,

    /// Maximum register width in qubits
    #[arg(long, env = "QSEEK_MAX_QUBITS")]
    pub max_qubits: Option<u32>,

    /// Matching rule (exact, contains, exact-then-contains)
    #[arg(long)]
    pub rule: Option<String>,

    /// Seed for measurement sampling
    #[arg(long)]
    pub seed: Option<u64>,
}

impl ConfigArgs {
    /// Build the effective configuration: defaults, then file, then flags.
    pub fn resolve(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SearchConfig::default(),
        };
        if let Some(shots) = self.shots {
            config.shots = shots;
        }
        if self.no_auto_tune {
            config.auto_tune = false;
        }
        if let Some(max_qubits) = self.max_qubits {
            config.max_qubits = max_qubits;
        }
        if let Some(rule) = &self.rule {
            config.match_rule = MatchRule::from_name(rule).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown matching rule: '{rule}'. Available: exact, contains, exact-then-contains"
                )
            })?;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Where the items to search come from.
#[derive(Args, Debug, Clone, Default)]
pub struct DatabaseArgs {
    /// Local store file (defaults to ~/.qseek/database.json)
    #[arg(long, env = "QSEEK_DB")]
    pub db: Option<String>,

    /// Search these items instead of the store (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub items: Vec<String>,

    /// Keep only items containing this keyword before searching
    #[arg(long)]
    pub prefilter: Option<String>,
}

impl DatabaseArgs {
    /// Resolve to a database, applying the keyword pre-filter if given.
    pub fn load(&self) -> Result<Database> {
        let database = if self.items.is_empty() {
            let path = match &self.db {
                Some(p) => PathBuf::from(p),
                None => default_store_path()?,
            };
            LocalStore::open(path).database()
        } else {
            Database::new(self.items.iter().cloned())
        };

        let database = match &self.prefilter {
            Some(keyword) => database.filter(keyword),
            None => database,
        };
        if database.is_empty() {
            anyhow::bail!("No items to search. Add some with `qseek store add` or pass --items");
        }
        Ok(database)
    }
}

/// Load a [`SearchConfig`] from YAML; missing keys keep their defaults.
pub fn load_config(path: &str) -> Result<SearchConfig> {
    let path_obj = Path::new(path);
    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;
    serde_yaml_ng::from_str(&source).with_context(|| format!("Invalid config file: {path}"))
}

/// Return the default qseek state directory (~/.qseek/).
pub fn default_state_dir() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
    Ok(home.join(".qseek"))
}

/// Default local store location.
pub fn default_store_path() -> Result<PathBuf> {
    Ok(default_state_dir()?.join("database.json"))
}

/// Print a measurement histogram (most frequent outcomes first).
pub fn print_histogram(database: &Database, outcome: &QuantumSearchOutcome) {
    println!(
        "\n{} Results ({} shots):",
        style("✓").green().bold(),
        outcome.shots
    );

    let sorted = outcome.counts.sorted();
    let total = outcome.counts.total() as f64;

    for (index, count) in sorted.iter().take(16) {
        let prob = *count as f64 / total * 100.0;
        let bar_len = (prob / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);
        let item = database.get(*index).unwrap_or("<padding>");

        println!(
            "  {}: {:>6} ({:>5.2}%) {} {}",
            style(qseek_sim::index_to_bitstring(*index, outcome.num_qubits)).cyan(),
            count,
            prob,
            style(bar).green(),
            style(item).dim()
        );
    }

    if sorted.len() > 16 {
        println!("  ... and {} more outcomes", sorted.len() - 16);
    }

    let padding_shots = padding_shots(database, &outcome.counts);
    if padding_shots > 0 {
        println!(
            "  {} shots landed on padding states",
            style(padding_shots).yellow()
        );
    }
}

/// Shots measured outside the database, on the padding states.
pub fn padding_shots(database: &Database, counts: &Counts) -> u64 {
    counts
        .iter()
        .filter(|&(index, _)| index >= database.len())
        .map(|(_, count)| count)
        .sum()
}

/// Parse an output format flag.
pub fn parse_format(format: &str) -> Result<OutputFormat> {
    match format.to_lowercase().as_str() {
        "table" | "text" => Ok(OutputFormat::Table),
        "json" => Ok(OutputFormat::Json),
        other => anyhow::bail!("Unknown format: '{other}'. Available: table, json"),
    }
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}
