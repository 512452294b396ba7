use anyhow::{Context, bail};
use clap::Parser;
use fracdex::{BASE_62_DIGITS, DEFAULT_JITTER_BITS, Digits, GeneratorConfig};

/// Upper limit on keys per invocation.
pub const MAX_COUNT: usize = 1_000_000;

/// Command-line arguments for the `fracdex` binary.
///
/// Every option can also be supplied through its environment variable, and a
/// `.env` file in the working directory is loaded before parsing.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "fracdex",
    version,
    about = "Generate fractional-indexing order keys between two bounds"
)]
pub struct CliArgs {
    /// Exclusive lower bound. Omit (or leave empty) for no lower bound.
    ///
    /// Environment variable: `FRACDEX_LOW`
    #[arg(long, env = "FRACDEX_LOW")]
    pub low: Option<String>,

    /// Exclusive upper bound. Omit (or leave empty) for no upper bound.
    ///
    /// Environment variable: `FRACDEX_HIGH`
    #[arg(long, env = "FRACDEX_HIGH")]
    pub high: Option<String>,

    /// Number of keys to generate.
    ///
    /// Environment variable: `FRACDEX_COUNT`
    #[arg(short = 'n', long = "count", env = "FRACDEX_COUNT", default_value_t = 1)]
    pub count: usize,

    /// Rounds of random narrowing per key. `0` produces deterministic keys.
    ///
    /// Environment variable: `FRACDEX_JITTER_BITS`
    #[arg(long, env = "FRACDEX_JITTER_BITS", default_value_t = DEFAULT_JITTER_BITS)]
    pub jitter_bits: u32,

    /// Digit alphabet, strictly ascending ASCII.
    ///
    /// Environment variable: `FRACDEX_DIGITS`
    #[arg(long, env = "FRACDEX_DIGITS", default_value_t = String::from(BASE_62_DIGITS))]
    pub digits: String,

    /// Seed for a deterministic RNG. Without it the thread-local RNG is used.
    ///
    /// Environment variable: `FRACDEX_SEED`
    #[arg(long, env = "FRACDEX_SEED")]
    pub seed: Option<u64>,

    /// Print the keys as a JSON array instead of one per line.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Validated configuration derived from [`CliArgs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub low: Option<String>,
    pub high: Option<String>,
    pub count: usize,
    pub generator: GeneratorConfig,
    pub seed: Option<u64>,
    pub json: bool,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.count > MAX_COUNT {
            bail!(
                "FRACDEX_COUNT ({}) exceeds the per-invocation limit (max = {})",
                args.count,
                MAX_COUNT
            );
        }

        Digits::new(args.digits.clone())
            .with_context(|| format!("FRACDEX_DIGITS {:?} is not a valid alphabet", args.digits))?;

        Ok(Self {
            low: args.low.filter(|s| !s.is_empty()),
            high: args.high.filter(|s| !s.is_empty()),
            count: args.count,
            generator: GeneratorConfig {
                digits: args.digits,
                jitter_bits: args.jitter_bits,
            },
            seed: args.seed,
            json: args.json,
        })
    }
}
