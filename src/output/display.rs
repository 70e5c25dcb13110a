//! Display functions for command results

use super::formatters::{board_row, proportion_bar, word_preview};
use crate::commands::{BenchmarkResult, SuggestResult};
use crate::engine::Phase;
use crate::feed::FeedUpdate;
use colored::{ColoredString, Colorize};

/// How many failed targets a benchmark report lists
const FAILURES_SHOWN: usize = 20;

fn colored_phase(phase: Phase) -> ColoredString {
    let name = phase.to_string();
    match phase {
        Phase::Empty => name.bright_black(),
        Phase::Observing => name.bright_cyan(),
        Phase::Solved => name.bright_green().bold(),
        Phase::Exhausted => name.red().bold(),
    }
}

fn suggestion_line(suggestion: Option<&str>) -> ColoredString {
    suggestion.map_or_else(|| "none".red(), |word| word.bright_yellow().bold())
}

/// Print the result of a one-shot suggestion
pub fn print_suggest_result(result: &SuggestResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Phase:       {}", colored_phase(result.phase));
    println!("Candidates:  {}", result.remaining);
    println!("Suggestion:  {}", suggestion_line(result.suggestion.as_deref()));
    println!("{}", "─".repeat(60).cyan());

    if result.top.len() > 1 {
        println!("\n📊 {}", "Top candidates:".bright_cyan().bold());
        for (i, (word, score)) in result.top.iter().enumerate() {
            println!("   {:2}. {} {}", i + 1, word.bright_white(), format!("({score})").bright_black());
        }
    }
    if result.phase == Phase::Exhausted {
        println!(
            "\n{}",
            "❌ No candidate fits these observations; one of them may be wrong.".red()
        );
    }
}

/// Print the mirrored board and session state of a watched game
pub fn print_watch_update(update: &FeedUpdate) {
    let snapshot = &update.snapshot;
    println!();
    for row in &update.board.rows {
        println!("  {}  {}", board_row(row), row.guess.bright_black());
    }
    println!(
        "[{}] {} candidates, suggest {}",
        colored_phase(snapshot.phase),
        snapshot.remaining,
        suggestion_line(snapshot.suggestion.as_deref())
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses).bright_yellow().bold()
    );
    println!("   Best case:        {}", result.min_guesses.to_string().green());
    println!("   Worst case:       {}", result.max_guesses.to_string().yellow());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> = result.distribution.iter().map(|(&k, &v)| (k, v)).collect();
    counts.sort_unstable();
    for (guesses, count) in counts {
        let pct = count as f64 / result.total_words as f64 * 100.0;
        let (filled, rest) = proportion_bar(count, result.total_words, 40);
        println!(
            "   {guesses}: {}{} {count:4} ({pct:5.1}%)",
            filled.green(),
            rest.bright_black()
        );
    }

    if !result.failures.is_empty() {
        println!(
            "\n❌ {} {}",
            format!("{} failed:", result.failures.len()).red().bold(),
            word_preview(&result.failures, FAILURES_SHOWN)
        );
    }
}
