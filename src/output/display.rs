//! Display functions for command results

use super::formatters::{frequency_bar, group_symbols, preview, table_header, table_rule};
use crate::commands::{AnalysisResult, BenchmarkResult, CrackOutcome, Mode, TransformResult};
use crate::crack::{ColumnScore, KeyLengthSearch};
use colored::Colorize;

const PREVIEW_CHARS: usize = 240;
const FREQUENCY_COLUMNS: [usize; 3] = [6, 6, 9];

fn banner(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print an encrypted or decrypted text
pub fn print_transform_result(result: &TransformResult) {
    let title = match result.mode {
        Mode::Encrypt => "ENCRYPTED",
        Mode::Decrypt => "DECRYPTED",
    };
    banner(title);

    println!("   Key:      {}", result.key.bright_yellow().bold());
    println!(
        "   Input:    {} characters, {} kept",
        result.input_chars, result.symbols
    );
    println!();
    match result.mode {
        Mode::Encrypt => println!("{}", group_symbols(&result.output, 5)),
        Mode::Decrypt => println!("{}", result.output),
    }
}

/// Print the frequency table of an analyzed text
pub fn print_analysis_result(result: &AnalysisResult) {
    banner("FREQUENCY ANALYSIS");

    let map = &result.map;
    println!("\n📊 Source: {}", result.source.bright_yellow());
    println!("   Letters counted: {}", map.total());

    let rows = map.sorted_descending();
    let max_pct = rows
        .first()
        .map_or(0.0, |&(_, count)| map.percentage(count));

    let rule = table_rule(&FREQUENCY_COLUMNS);
    println!("\n   {rule}");
    println!(
        "   {}",
        table_header(&["LETTER", "COUNTS", "FREQUENCY"], &FREQUENCY_COLUMNS)
    );
    println!("   {rule}");
    for (symbol, count) in rows {
        let pct = map.percentage(count);
        println!(
            "   | {} | {:>6} | {:>8.2}% | {}",
            format!("{symbol:^6}").bright_white().bold(),
            count,
            pct,
            frequency_bar(pct, max_pct, 25).green()
        );
    }
    println!("   {rule}");

    println!(
        "\n   χ² vs {}: {}",
        result.reference,
        format!("{:.4}", result.fit).bright_yellow()
    );
}

fn print_columns(columns: &[ColumnScore]) {
    println!("\n🔑 {}", "Columns:".bright_cyan().bold());
    println!(
        "   {:>3} | {:>6} | {:>5} | {:>10} | {:>8}",
        "POS", "LEN", "SHIFT", "χ²", "MARGIN"
    );
    for column in columns {
        println!(
            "   {:>3} | {:>6} | {:>5} | {:>10.4} | {:>8.4}",
            column.column,
            column.symbols,
            column.shift,
            column.statistic,
            column.margin()
        );
    }
}

/// Print the ranking of a key-length search
pub fn print_length_search(search: &KeyLengthSearch) {
    println!("\n📏 {}", "Key lengths:".bright_cyan().bold());
    for (rank, candidate) in search.candidates().enumerate() {
        let line = format!(
            "   {:>2}. L={:<3} mean χ² {:>9.4}  key {}",
            rank + 1,
            candidate.key_length,
            candidate.mean_score,
            candidate.result.key
        );
        if rank == 0 {
            println!("{}", line.green().bold());
        } else {
            println!("{line}");
        }
    }

    if !search.skipped().is_empty() {
        let skipped: Vec<String> = search.skipped().iter().map(ToString::to_string).collect();
        println!(
            "   {}",
            format!("skipped (too little text): {}", skipped.join(", ")).bright_black()
        );
    }
}

/// Print the result of a crack
pub fn print_crack_outcome(outcome: &CrackOutcome, verbose: bool) {
    banner("CRACK RESULT");

    let result = &outcome.result;
    println!("   Ciphertext:  {} letters", outcome.ciphertext_len);
    println!("   Key length:  {}", result.key_length);
    println!(
        "   Key:         {}",
        result.key.to_string().bright_yellow().bold()
    );
    println!(
        "   Score:       {:.4} (mean {:.4})",
        result.score,
        result.mean_score()
    );

    if let Some(search) = &outcome.search {
        print_length_search(search);
    }

    if verbose {
        print_columns(&result.columns);
    }

    println!("\n📜 {}", "Plaintext:".bright_cyan().bold());
    println!("{}", preview(&result.plaintext.to_string(), PREVIEW_CHARS));
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    banner("BENCHMARK RESULTS");

    let trials = result.trials.len();
    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Trials:           {trials}");
    println!(
        "   Exact keys:       {}",
        format!("{} ({:.1}%)", result.key_hits, result.accuracy() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Correct lengths:  {}", result.length_hits);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Cracks/second:    {:.1}", result.cracks_per_second);

    println!("\n📈 {}", "By key length:".bright_cyan().bold());
    for (length, &(count, hits)) in &result.by_length {
        let pct = (hits as f64 / count as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {length:>2}: {bar} {hits:3}/{count:<3} ({pct:5.1}%)");
    }

    let misses: Vec<_> = result.trials.iter().filter(|t| !t.key_found).collect();
    if !misses.is_empty() {
        println!("\n❌ {}", "Missed keys:".bright_red().bold());
        for trial in misses.iter().take(10) {
            println!("   {} → {}", trial.key, trial.recovered.red());
        }
    }
}
