use anyhow::{Context, Result};
use count_words_core::counter::count_text;

use crate::{cli, files, output};

pub fn run() -> Result<()> {
    let config = cli::load_config()?;

    let text = files::read_text(&config.input)?;
    let table = count_text(&text, &config.count);

    output::emit(&table, &config).context("failed to emit output")?;
    Ok(())
}
