//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - simulated Grover search with a classical baseline",
        style("qseek").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qseek-sim      Statevector, oracle, diffusion, measurement");
    println!("  qseek-search   Search engine, linear scan, comparator");
    println!("  qseek-cli      Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
