// src/cli/args.rs
use clap::{Parser, ValueHint};
use std::path::PathBuf;

use count_words_core::config::DEFAULT_IGNORE_CHARS;

use super::value_enum::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "count_words",
    version = crate::VERSION,
    about = "テキスト中の単語出現頻度の集計ツール"
)]
pub struct Args {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "plain", help_heading = "出力")]
    pub format: OutputFormat,

    /// 区切りとして扱う記号文字（空文字列で無効化）
    #[arg(short = 'p', long, default_value = DEFAULT_IGNORE_CHARS, help_heading = "字句")]
    pub punctuation: String,

    /// 大文字小文字を区別する
    #[arg(short = 'c', long, help_heading = "字句")]
    pub case_sensitive: bool,

    /// 表示する最小出現回数
    #[arg(short = 'm', long, default_value_t = 1, help_heading = "フィルタ")]
    pub min_count: usize,

    /// 上位N件のみ表示
    #[arg(long, help_heading = "フィルタ")]
    pub top: Option<usize>,

    /// 末尾に TOTAL 行を出力
    #[arg(long, help_heading = "出力")]
    pub total_row: bool,

    /// 出力先ファイル（未指定は標準出力）
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// 入力ファイル
    #[arg(value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub input: PathBuf,
}
