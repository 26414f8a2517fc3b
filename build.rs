//! Build script to generate embedded reference tables
//!
//! Reads letter frequency files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("reference_tables.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated reference tables").unwrap();
    writeln!(output).unwrap();

    generate_table(
        &mut output,
        "data/english_text.txt",
        "ENGLISH_TEXT",
        "Relative letter frequency in English running text",
    );
    generate_table(
        &mut output,
        "data/english_dictionary.txt",
        "ENGLISH_DICTIONARY",
        "Relative letter frequency across English dictionary headwords",
    );

    // Rebuild if tables change
    println!("cargo:rerun-if-changed=data/english_text.txt");
    println!("cargo:rerun-if-changed=data/english_dictionary.txt");
    println!("cargo:rerun-if-changed=data/sample_english.txt");
}

fn generate_table(output: &mut fs::File, input_path: &str, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut entries: Vec<(char, f64)> = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(symbol), Some(probability), None) = (fields.next(), fields.next(), fields.next())
        else {
            panic!("{input_path}:{}: expected '<symbol> <probability>'", line_no + 1);
        };

        let mut chars = symbol.chars();
        let (Some(symbol), None) = (chars.next(), chars.next()) else {
            panic!("{input_path}:{}: symbol must be one character", line_no + 1);
        };

        let probability: f64 = probability
            .parse()
            .unwrap_or_else(|e| panic!("{input_path}:{}: {e}", line_no + 1));
        assert!(
            probability > 0.0 && probability < 1.0,
            "{input_path}:{}: probability must be in (0, 1)",
            line_no + 1
        );
        assert!(
            entries.iter().all(|&(seen, _)| seen != symbol),
            "{input_path}: duplicate symbol '{symbol}'"
        );

        entries.push((symbol, probability));
    }

    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(char, f64)] = &[").unwrap();
    for (symbol, probability) in &entries {
        writeln!(output, "    ({symbol:?}, {probability:?}),").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
