//! Local store command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::store::{LocalStore, Record};

use super::common::default_store_path;

fn open(db: Option<&str>) -> Result<LocalStore> {
    let path = match db {
        Some(p) => PathBuf::from(p),
        None => default_store_path()?,
    };
    Ok(LocalStore::open(path))
}

/// Add one record.
pub fn execute_add(db: Option<&str>, title: &str, url: &str, summary: &str) -> Result<()> {
    let mut store = open(db)?;
    let record = Record {
        title: title.to_string(),
        url: url.to_string(),
        summary: summary.to_string(),
    };
    let added = store.add_items([record])?;
    if added == 0 {
        println!(
            "{} Already stored: {}",
            style("•").yellow().bold(),
            style(title).dim()
        );
    } else {
        println!(
            "{} Added {} ({} records in {})",
            style("✓").green().bold(),
            style(title).green(),
            store.all().len(),
            store.path().display()
        );
    }
    Ok(())
}

/// Import a JSON array of records.
pub fn execute_import(db: Option<&str>, input: &str) -> Result<()> {
    let source =
        fs::read_to_string(input).with_context(|| format!("Failed to read file: {input}"))?;
    let records: Vec<Record> =
        serde_json::from_str(&source).with_context(|| format!("Invalid record file: {input}"))?;
    let offered = records.len();

    let mut store = open(db)?;
    let added = store.add_items(records)?;
    println!(
        "{} Imported {} of {} records ({} duplicates skipped)",
        style("✓").green().bold(),
        added,
        offered,
        offered - added
    );
    Ok(())
}

/// List every record.
pub fn execute_list(db: Option<&str>) -> Result<()> {
    let store = open(db)?;
    print_records(store.all().iter());
    println!("\n  {} records in {}", store.all().len(), store.path().display());
    Ok(())
}

/// List records whose title or summary contains `keyword`.
pub fn execute_query(db: Option<&str>, keyword: &str) -> Result<()> {
    let store = open(db)?;
    let hits = store.query(keyword);
    if hits.is_empty() {
        println!(
            "{} Nothing contains {}",
            style("•").yellow().bold(),
            style(keyword).green()
        );
        return Ok(());
    }
    print_records(hits.iter().copied());
    Ok(())
}

fn print_records<'a>(records: impl Iterator<Item = &'a Record>) {
    for (i, record) in records.enumerate() {
        println!("  {:>4}. {}", i + 1, style(&record.title).cyan());
        if !record.url.is_empty() {
            println!("        {}", style(&record.url).underlined());
        }
        if !record.summary.is_empty() {
            println!("        {}", style(&record.summary).dim());
        }
    }
}
