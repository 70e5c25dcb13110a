//! Build script: embeds the Wordle candidate list
//!
//! `data/wordle.txt` is validated (ASCII letters only, one length), upper-cased
//! and deduplicated in first-seen order, then written to `OUT_DIR/wordle.rs`.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const WORDLE_SOURCE: &str = "data/wordle.txt";

fn main() {
    println!("cargo:rerun-if-changed={WORDLE_SOURCE}");

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR");
    let words = read_words(WORDLE_SOURCE);
    let source = render_list("WORDLE_WORDS", "Wordle candidate words", &words);

    let target = Path::new(&out_dir).join("wordle.rs");
    fs::write(&target, source).unwrap_or_else(|e| panic!("writing {}: {e}", target.display()));
}

fn read_words(path: &str) -> Vec<String> {
    let content = fs::read_to_string(path).unwrap_or_else(|e| panic!("reading {path}: {e}"));

    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        assert!(
            word.bytes().all(|b| b.is_ascii_alphabetic()),
            "{path}:{}: {word:?} is not a plain ASCII word",
            line_no + 1
        );
        let word = word.to_ascii_uppercase();
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    assert!(!words.is_empty(), "{path} holds no words");
    let length = words[0].len();
    if let Some(odd) = words.iter().find(|w| w.len() != length) {
        panic!("{path}: {odd} is not {length} letters long");
    }
    words
}

fn render_list(const_name: &str, doc: &str, words: &[String]) -> String {
    let count = words.len();
    let mut out = String::new();

    let _ = writeln!(out, "// Generated by build.rs from {WORDLE_SOURCE}; do not edit.\n");
    let _ = writeln!(out, "/// {doc} ({count} words)");
    let _ = writeln!(out, "pub const {const_name}: &[&str] = &[");
    for word in words {
        let _ = writeln!(out, "    \"{word}\",");
    }
    let _ = writeln!(out, "];\n");
    let _ = writeln!(out, "/// Number of words in `{const_name}`");
    let _ = writeln!(out, "pub const {const_name}_COUNT: usize = {count};");
    out
}
