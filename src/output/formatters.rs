//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || !value.is_finite() {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a letter frequency, scaled so `max_percentage` fills the width
#[must_use]
pub fn frequency_bar(percentage: f64, max_percentage: f64, width: usize) -> String {
    create_progress_bar(percentage, max_percentage, width)
}

/// Split text into space-separated blocks, the classic ciphertext layout
#[must_use]
pub fn group_symbols(text: &str, block: usize) -> String {
    if block == 0 {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(block)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// First `max_chars` characters of `text`, with an ellipsis if cut
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

/// Horizontal border of a table with the given column widths
#[must_use]
pub fn table_rule(widths: &[usize]) -> String {
    widths.iter().fold(String::from("+"), |mut rule, &width| {
        rule.push_str(&"-".repeat(width + 2));
        rule.push('+');
        rule
    })
}

/// Centered header cells between `|` borders
#[must_use]
pub fn table_header(titles: &[&str], widths: &[usize]) -> String {
    titles
        .iter()
        .zip(widths)
        .fold(String::from("|"), |mut header, (title, &width)| {
            header.push_str(&format!(" {title:^width$} |"));
            header
        })
}
