// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: prints the metrics of each integer given.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tree_metrics::EngineBuilder;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let mut engine = EngineBuilder::new().config(cli.engine_config()).build();

    for value in &cli.values {
        let record = engine.compute_all_metrics(value.as_str())?;
        if cli.json {
            let line = serde_json::to_string(&record)
                .with_context(|| format!("serializing metrics of {}", record.n))?;
            println!("{}", line);
        } else {
            println!("{}", record);
        }
    }

    if cli.stats {
        eprintln!("{}", engine.statistics());
        eprintln!(
            "{:<26} {} primes through {} ({} extensions)",
            "sieve",
            engine.sieve().primes().len(),
            engine.sieve().checked_through(),
            engine.sieve().extensions()
        );
    }

    Ok(())
}
