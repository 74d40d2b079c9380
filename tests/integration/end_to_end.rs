// tests/integration/end_to_end.rs
use std::fs;

use assert_cmd::Command;
use clap::Parser;
use count_words::cli::{self, Args};
use count_words::{files, output};
use count_words_core::counter::count_text;

#[path = "../common/mod.rs"]
mod common;
use common::TempDir;

fn run_pipeline(argv: &[&str]) {
    let args = Args::try_parse_from(argv).expect("args parse");
    let config = cli::build_config(args).expect("config builds");
    let text = files::read_text(&config.input).expect("input reads");
    let table = count_text(&text, &config.count);
    output::emit(&table, &config).expect("emit succeeds");
}

#[test]
fn end_to_end_generates_expected_plain_output() {
    let temp = TempDir::new();
    let input = temp.write_file("input.txt", "the cat sat on the mat. the cat ran.");
    let out_path = temp.path().join("result.txt");

    run_pipeline(&[
        "count_words",
        "--min-count",
        "2",
        "--output",
        out_path.to_str().unwrap(),
        input.to_str().unwrap(),
    ]);

    assert_eq!(fs::read_to_string(&out_path).unwrap(), "the: 3\ncat: 2\n");
}

#[test]
fn end_to_end_through_the_binary() {
    let temp = TempDir::new();
    let input = temp.write_file("input.txt", "the cat sat on the mat. the cat ran.");

    Command::new(env!("CARGO_BIN_EXE_count_words"))
        .args(["--min-count", "2"])
        .arg(&input)
        .assert()
        .success()
        .stdout("the: 3\ncat: 2\n");
}

#[test]
fn case_sensitive_flag_keeps_variants() {
    let temp = TempDir::new();
    let input = temp.write_file("input.txt", "Cat cat CAT");
    let out_path = temp.path().join("result.txt");

    run_pipeline(&[
        "count_words",
        "--case-sensitive",
        "--output",
        out_path.to_str().unwrap(),
        input.to_str().unwrap(),
    ]);

    assert_eq!(
        fs::read_to_string(&out_path).unwrap(),
        "Cat: 1\ncat: 1\nCAT: 1\n"
    );
}

#[test]
fn custom_punctuation_set_is_honored() {
    let temp = TempDir::new();
    let input = temp.write_file("input.txt", "one;two;one. two");
    let out_path = temp.path().join("result.txt");

    run_pipeline(&[
        "count_words",
        "-p",
        ";",
        "--output",
        out_path.to_str().unwrap(),
        input.to_str().unwrap(),
    ]);

    // '.' is no longer stripped, so "one." stays a distinct word.
    assert_eq!(
        fs::read_to_string(&out_path).unwrap(),
        "two: 2\none: 1\none.: 1\n"
    );
}

#[test]
fn top_limits_the_word_list() {
    let temp = TempDir::new();
    let input = temp.write_file("input.txt", "a a a b b c");
    let out_path = temp.path().join("result.txt");

    run_pipeline(&[
        "count_words",
        "--top",
        "2",
        "--output",
        out_path.to_str().unwrap(),
        input.to_str().unwrap(),
    ]);

    assert_eq!(fs::read_to_string(&out_path).unwrap(), "a: 3\nb: 2\n");
}

#[test]
fn empty_input_produces_empty_table_and_output() {
    let temp = TempDir::new();
    let input = temp.write_file("empty.txt", "");
    let out_path = temp.path().join("result.txt");

    run_pipeline(&[
        "count_words",
        "--output",
        out_path.to_str().unwrap(),
        input.to_str().unwrap(),
    ]);

    assert_eq!(fs::read_to_string(&out_path).unwrap(), "");
}

#[test]
fn total_row_sums_printed_counts() {
    let temp = TempDir::new();
    let input = temp.write_file("input.txt", "a a b c");
    let out_path = temp.path().join("result.txt");

    run_pipeline(&[
        "count_words",
        "--min-count",
        "2",
        "--total-row",
        "--output",
        out_path.to_str().unwrap(),
        input.to_str().unwrap(),
    ]);

    assert_eq!(
        fs::read_to_string(&out_path).unwrap(),
        "a: 2\nTOTAL: 2 (1 unique)\n"
    );
}
