mod args;
mod value_enum;

pub use args::Args;
pub use value_enum::OutputFormat;

use clap::Parser;
use count_words_core::config::CountConfig;
use count_words_core::error::{CountWordsError, Result};

use crate::config::Config;

/// Parse CLI arguments and build the application configuration.
pub fn load_config() -> Result<Config> {
    build_config(Args::parse())
}

/// Build a validated `Config` from parsed arguments.
pub fn build_config(args: Args) -> Result<Config> {
    validate_numeric_args(args.min_count, args.top)?;
    Ok(Config {
        format: args.format,
        min_count: args.min_count,
        top: args.top,
        total_row: args.total_row,
        output: args.output,
        count: CountConfig::new(&args.punctuation, args.case_sensitive),
        input: args.input,
    })
}

fn validate_numeric_args(min_count: usize, top: Option<usize>) -> Result<()> {
    validate_at_least_one("--min-count", Some(min_count))?;
    validate_at_least_one("--top", top)?;
    Ok(())
}

fn validate_at_least_one(flag: &str, value: Option<usize>) -> Result<()> {
    if value == Some(0) {
        return Err(CountWordsError::InvalidValue {
            flag: flag.to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}
