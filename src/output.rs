// src/output.rs
use std::io::Write;

use count_words_core::stats::{FrequencyTable, WordCount};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::types::{JsonOutput, JsonSummary, JsonWord};

/// Emit results to the configured output format.
pub fn emit(table: &FrequencyTable, config: &Config) -> anyhow::Result<()> {
    let mut writer = OutputWriter::create(config)?;
    let shown = selected(table, config);
    match config.format {
        OutputFormat::Plain => output_plain(&shown, config, &mut writer)?,
        OutputFormat::Csv => output_delimited(&shown, config, ',', &mut writer)?,
        OutputFormat::Tsv => output_delimited(&shown, config, '\t', &mut writer)?,
        OutputFormat::Json => output_json(table, &shown, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

struct OutputWriter(Box<dyn Write>);
impl OutputWriter {
    fn create(config: &Config) -> anyhow::Result<Self> {
        let writer: Box<dyn Write> = if let Some(path) = &config.output {
            Box::new(std::io::BufWriter::new(std::fs::File::create(path)?))
        } else {
            Box::new(std::io::BufWriter::new(std::io::stdout()))
        };
        Ok(Self(writer))
    }
}
impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }
    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}

/// Apply the min-count filter, then the top-N limit.
fn selected<'a>(table: &'a FrequencyTable, config: &Config) -> Vec<&'a WordCount> {
    let qualifying = table
        .entries()
        .iter()
        .filter(|e| e.count >= config.min_count);
    match config.top {
        Some(n) => qualifying.take(n).collect(),
        None => qualifying.collect(),
    }
}

fn shown_total(shown: &[&WordCount]) -> usize {
    shown.iter().map(|e| e.count).sum()
}

fn output_plain(
    shown: &[&WordCount],
    config: &Config,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for e in shown {
        writeln!(out, "{}: {}", e.word, e.count)?;
    }
    if config.total_row {
        writeln!(out, "TOTAL: {} ({} unique)", shown_total(shown), shown.len())?;
    }
    Ok(())
}

fn output_delimited(
    shown: &[&WordCount],
    config: &Config,
    sep: char,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(out, "word{sep}count")?;
    for e in shown {
        writeln!(out, "{}{sep}{}", escape_field(&e.word, sep), e.count)?;
    }
    if config.total_row {
        writeln!(out, "{}{sep}{}", escape_field("TOTAL", sep), shown_total(shown))?;
    }
    Ok(())
}

fn escape_field(s: &str, sep: char) -> String {
    if sep == ',' {
        let escaped = s.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        s.to_string()
    }
}

fn output_json(
    table: &FrequencyTable,
    shown: &[&WordCount],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let summary = table.summary();
    let output = JsonOutput {
        version: crate::VERSION,
        words: shown
            .iter()
            .map(|e| JsonWord {
                word: e.word.clone(),
                count: e.count,
            })
            .collect(),
        summary: JsonSummary {
            tokens: summary.tokens,
            unique: summary.unique,
            shown: shown.len(),
        },
    };
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}
