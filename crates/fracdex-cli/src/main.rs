#![doc = include_str!("../README.md")]

mod config;
mod telemetry;

use anyhow::Context;
use clap::Parser;
use config::{CliArgs, CliConfig};
use fracdex::{KeyGenerator, RandomBit, RngBits, ThreadRandom};
use rand::{SeedableRng, rngs::StdRng};
use std::io::{self, BufWriter, Write};
use telemetry::init_tracing;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    init_tracing()?;
    let config = CliConfig::try_from(args)?;
    tracing::debug!(?config, "resolved configuration");

    let keys = match config.seed {
        Some(seed) => generate(
            KeyGenerator::from_config(&config.generator, RngBits(StdRng::seed_from_u64(seed)))?,
            &config,
        )?,
        None => generate(
            KeyGenerator::from_config(&config.generator, ThreadRandom)?,
            &config,
        )?,
    };
    tracing::info!(count = keys.len(), "generated keys");

    let mut out = BufWriter::new(io::stdout().lock());
    write_keys(&mut out, &keys, config.json)?;
    out.flush()?;
    Ok(())
}

fn generate<R>(mut generator: KeyGenerator<R>, config: &CliConfig) -> anyhow::Result<Vec<String>>
where
    R: RandomBit,
{
    generator
        .generate_n_keys_between(config.low.as_deref(), config.high.as_deref(), config.count)
        .with_context(|| {
            format!(
                "failed to generate {} key(s) between {:?} and {:?}",
                config.count, config.low, config.high
            )
        })
}

fn write_keys(out: &mut impl Write, keys: &[String], json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, keys)?;
        writeln!(out)?;
    } else {
        for key in keys {
            writeln!(out, "{key}")?;
        }
    }
    Ok(())
}
