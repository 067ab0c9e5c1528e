// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use clap::Parser;
use tree_metrics::engine::config::DEFAULT_WARMUP_MARGIN;
use tree_metrics::primes::sieve::INITIAL_WATERMARK;
use tree_metrics::EngineConfig;

#[derive(Debug, Parser)]
#[command(name = "tree-metrics")]
#[command(author, version, about = "Metrics of the rooted tree encoded by a positive integer")]
pub struct Cli {
    /// Positive integers to evaluate
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Print one JSON object per value instead of a table
    #[arg(long)]
    pub json: bool,

    /// Print memo statistics after the records
    #[arg(long)]
    pub stats: bool,

    /// Integers sieved above the square root of each value before evaluation
    #[arg(long, env = "TREE_METRICS_WARMUP_MARGIN", default_value_t = DEFAULT_WARMUP_MARGIN)]
    pub warmup_margin: u64,

    /// Sieve limit established at startup
    #[arg(long, env = "TREE_METRICS_INITIAL_SIEVE_LIMIT", default_value_t = INITIAL_WATERMARK)]
    pub initial_sieve_limit: u64,
}

impl Cli {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            warmup_margin: self.warmup_margin,
            initial_sieve_limit: self.initial_sieve_limit,
        }
    }
}
