// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `triples`: print the triples for a bound (100 by default) on stdout.
//!
//! Logs go to stderr so stdout carries only the result.

use clap::Parser;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, Registry};

use triple_search::config::DEFAULT_BOUND;
use triple_search::{run, Config, Formulation, TripleList};

#[derive(Parser, Debug)]
#[command(name = "triples", version, about = "Enumerate a < b < c <= BOUND with a*a + b*b == c")]
struct Cli {
    /// Inclusive upper bound for a, b and c.
    #[arg(default_value_t = DEFAULT_BOUND, allow_negative_numbers = true)]
    bound: i64,

    /// Formulation used to compute the result (nested, comprehension, backtracking).
    #[arg(short, long, default_value = "nested")]
    formulation: Formulation,

    /// Run every formulation and fail if they disagree.
    #[arg(long)]
    verify: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            bound: cli.bound,
            formulation: cli.formulation,
            verify: cli.verify,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = Registry::default()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr));
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let triples = run(&Config::from(&cli))?;
    println!("{}", TripleList(&triples));
    Ok(())
}
