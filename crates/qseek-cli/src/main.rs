//! qseek command-line interface
//!
//! Runs a simulated Grover search over a local item store, the classical
//! linear scan over the same items, or a side-by-side comparison across
//! database sizes.
//!
//! ```text
//! qseek store add --title "Grover's algorithm" --url https://arxiv.org/abs/quant-ph/9605043
//! qseek search grover --shots 2048 -v
//! qseek compare --sizes 16,256,4096 --target-position middle
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;
mod store;

use commands::common::{ConfigArgs, DatabaseArgs};
use commands::{classical, compare, search, store as store_cmd, version};

/// qseek - simulated Grover search with a classical baseline
#[derive(Parser)]
#[command(name = "qseek")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find an item with the simulated Grover search
    Search {
        /// Item to look for
        target: String,

        #[command(flatten)]
        database: DatabaseArgs,

        #[command(flatten)]
        config: ConfigArgs,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Find an item with a classical linear scan
    Classical {
        /// Item to look for
        target: String,

        #[command(flatten)]
        database: DatabaseArgs,

        #[command(flatten)]
        config: ConfigArgs,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Compare both searches over synthetic databases
    Compare {
        /// Database sizes (comma separated)
        #[arg(long, value_delimiter = ',', default_value = "16,64,256,1024,4096")]
        sizes: Vec<usize>,

        /// Where the target sits (first, middle, last, random, or an index)
        #[arg(short, long, default_value = "last")]
        target_position: String,

        #[command(flatten)]
        config: ConfigArgs,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Manage the local item store
    Store {
        /// Store file (defaults to ~/.qseek/database.json)
        #[arg(long, env = "QSEEK_DB", global = true)]
        db: Option<String>,

        #[command(subcommand)]
        action: StoreAction,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum StoreAction {
    /// Add one record
    Add {
        /// Record title (the searchable key)
        #[arg(long)]
        title: String,

        /// Link to the source
        #[arg(long, default_value = "")]
        url: String,

        /// Short description
        #[arg(long, default_value = "")]
        summary: String,
    },

    /// Import records from a JSON array file
    Import {
        /// Input file
        input: String,
    },

    /// List stored records
    List,

    /// Show records whose title or summary contains a keyword
    Query {
        /// Keyword to look for
        keyword: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Search {
            target,
            database,
            config,
            format,
        } => search::execute(&target, &database, &config, &format),

        Commands::Classical {
            target,
            database,
            config,
            format,
        } => classical::execute(&target, &database, &config, &format),

        Commands::Compare {
            sizes,
            target_position,
            config,
            format,
        } => compare::execute(&sizes, &target_position, &config, &format),

        Commands::Store { db, action } => match action {
            StoreAction::Add {
                title,
                url,
                summary,
            } => store_cmd::execute_add(db.as_deref(), &title, &url, &summary),
            StoreAction::Import { input } => store_cmd::execute_import(db.as_deref(), &input),
            StoreAction::List => store_cmd::execute_list(db.as_deref()),
            StoreAction::Query { keyword } => store_cmd::execute_query(db.as_deref(), &keyword),
        },

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
