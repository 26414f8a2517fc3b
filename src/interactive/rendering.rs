//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::crack::KeyLengthSearch;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Row, Table, Wrap},
};

/// Runner-up gap above which a column's shift counts as settled
const CLEAR_MARGIN: f64 = 0.5;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Key
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_key(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[2]);

    render_analysis_panel(f, app, main_chunks[0]);
    render_text_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🔐 VIGENÈRE CRACKER - {} ({} letters)",
        app.source,
        app.ciphertext.len()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_key(f: &mut Frame, app: &App, area: Rect) {
    let alphabet = app.cracker.alphabet();
    let mut spans = vec![Span::raw("Key: ")];
    for (index, &shift) in app.shifts.iter().enumerate() {
        let symbol = alphabet.symbol_at(shift).unwrap_or('?');
        let mut style = if app.is_overridden(index) {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::Yellow)
        };
        if index == app.selected {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        spans.push(Span::styled(symbol.to_string(), style));
    }

    let score_line = app.result.as_ref().map_or_else(
        || Line::from("No result for this length"),
        |result| {
            Line::from(format!(
                "Length {} | χ² total {:.3} | mean {:.3}",
                result.key_length,
                result.score,
                result.mean_score()
            ))
        },
    );

    let paragraph = Paragraph::new(vec![Line::from(spans), score_line]).block(
        Block::default()
            .title(" Key ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    );
    f.render_widget(paragraph, area);
}

fn render_analysis_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55), // Columns
            Constraint::Length(3),      // Confidence gauge
            Constraint::Min(4),         // Key lengths
        ])
        .split(area);

    render_columns(f, app, chunks[0]);
    render_confidence(f, app, chunks[1]);
    render_lengths(f, app, chunks[2]);
}

fn render_columns(f: &mut Frame, app: &App, area: Rect) {
    let alphabet = app.cracker.alphabet();
    let rows: Vec<Row> = app
        .result
        .iter()
        .flat_map(|result| result.columns.iter())
        .map(|column| {
            let shift = app.shifts.get(column.column).copied().unwrap_or(column.shift);
            let statistic = column.scores.get(shift).copied().unwrap_or(f64::NAN);
            let style = if column.column == app.selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else if app.is_overridden(column.column) {
                Style::default().fg(Color::Magenta)
            } else {
                Style::default()
            };
            Row::new(vec![
                format!("{}", column.column),
                alphabet.symbol_at(shift).unwrap_or('?').to_string(),
                format!("{}", column.symbols),
                format!("{statistic:.4}"),
                format!("{:.4}", column.margin()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["POS", "KEY", "LEN", "χ²", "MARGIN"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().title(" Columns ").borders(Borders::ALL));

    f.render_widget(table, area);
}

/// Whole percent of `confident` out of `total`, 0 when there is nothing yet
fn confidence_percent(confident: usize, total: usize) -> u16 {
    (confident * 100).checked_div(total).unwrap_or(0) as u16
}

fn render_confidence(f: &mut Frame, app: &App, area: Rect) {
    // Share of columns whose best shift beats the runner-up by a clear margin
    let (confident, total) = app.result.as_ref().map_or((0, 0), |result| {
        let confident = result
            .columns
            .iter()
            .filter(|column| column.margin() > CLEAR_MARGIN)
            .count();
        (confident, result.columns.len())
    });
    let percent = confidence_percent(confident, total);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Confidence ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{confident}/{total} columns clear"));

    f.render_widget(gauge, area);
}

fn render_lengths(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .search
        .iter()
        .flat_map(KeyLengthSearch::candidates)
        .take(8)
        .map(|candidate| {
            let style = if candidate.key_length == app.key_length {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(format!(
                "L={:<3} {:>9.4}  {}",
                candidate.key_length, candidate.mean_score, candidate.result.key
            ))
            .style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Key Lengths (mean χ²) ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_text_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let plaintext = Paragraph::new(app.plaintext.as_str())
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(" Plaintext ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(plaintext, chunks[0]);

    render_messages(f, app, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let length = Paragraph::new(format!(
        "Length: {}/{}",
        app.key_length, app.max_key_length
    ))
    .alignment(Alignment::Center);
    f.render_widget(length, chunks[0]);

    let reference = Paragraph::new(format!("Reference: {}", app.cracker.reference().name()))
        .alignment(Alignment::Center);
    f.render_widget(reference, chunks[1]);

    let help = Paragraph::new("q: Quit | ↑↓: Length | ←→: Column | +/-: Shift | r: Reset | s: Search")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_without_columns_is_zero() {
        assert_eq!(confidence_percent(0, 0), 0);
    }

    #[test]
    fn confidence_rounds_down() {
        assert_eq!(confidence_percent(4, 4), 100);
        assert_eq!(confidence_percent(2, 3), 66);
        assert_eq!(confidence_percent(0, 5), 0);
    }
}
