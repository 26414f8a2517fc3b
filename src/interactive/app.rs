//! TUI application state and logic

use crate::cipher::decrypt_sequence;
use crate::core::{Ciphertext, Key};
use crate::crack::{CrackResult, Cracker, KeyLengthSearch};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub cracker: Cracker<'a>,
    pub ciphertext: Ciphertext,
    pub source: String,
    pub max_key_length: usize,
    pub key_length: usize,
    /// Column under the cursor
    pub selected: usize,
    pub result: Option<CrackResult>,
    /// Shift per column; starts at the cracked shift, editable by hand
    pub shifts: Vec<usize>,
    pub plaintext: String,
    pub search: Option<KeyLengthSearch>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        cracker: Cracker<'a>,
        ciphertext: Ciphertext,
        source: impl Into<String>,
        max_key_length: usize,
    ) -> Self {
        Self {
            cracker,
            ciphertext,
            source: source.into(),
            max_key_length: max_key_length.max(1),
            key_length: 1,
            selected: 0,
            result: None,
            shifts: Vec::new(),
            plaintext: String::new(),
            search: None,
            messages: vec![Message {
                text: "↑/↓ key length, ←/→ column, +/- shift, s search, r reset".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Crack the ciphertext for the current key length
    pub fn recrack(&mut self) {
        match self
            .cracker
            .crack_for_length(&self.ciphertext, self.key_length)
        {
            Ok(result) => {
                self.shifts = result.columns.iter().map(|c| c.shift).collect();
                self.selected = self.selected.min(self.key_length - 1);
                self.result = Some(result);
                self.redecrypt();
            }
            Err(err) => {
                self.result = None;
                self.shifts.clear();
                self.plaintext.clear();
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Decrypt with the current (possibly hand-edited) shifts
    pub fn redecrypt(&mut self) {
        let alphabet = self.cracker.alphabet();
        let decrypted = Key::from_ordinals(&self.shifts, alphabet)
            .and_then(|key| decrypt_sequence(&self.ciphertext, &key, alphabet));

        match decrypted {
            Ok(plain) => self.plaintext = plain.to_string(),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Key spelled from the current shifts
    #[must_use]
    pub fn current_key(&self) -> String {
        let alphabet = self.cracker.alphabet();
        self.shifts
            .iter()
            .filter_map(|&shift| alphabet.symbol_at(shift).ok())
            .collect()
    }

    /// Whether column `index` differs from the statistically best shift
    #[must_use]
    pub fn is_overridden(&self, index: usize) -> bool {
        self.result
            .as_ref()
            .and_then(|r| r.columns.get(index))
            .zip(self.shifts.get(index))
            .is_some_and(|(column, &shift)| column.shift != shift)
    }

    pub fn set_key_length(&mut self, key_length: usize) {
        if key_length == 0 || key_length > self.max_key_length {
            return;
        }
        self.key_length = key_length;
        self.recrack();
    }

    pub fn select_next(&mut self) {
        if !self.shifts.is_empty() {
            self.selected = (self.selected + 1) % self.shifts.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.shifts.is_empty() {
            self.selected = (self.selected + self.shifts.len() - 1) % self.shifts.len();
        }
    }

    /// Rotate the selected column's shift by `delta`
    pub fn adjust_shift(&mut self, delta: i64) {
        let alphabet = self.cracker.alphabet();
        if let Some(shift) = self.shifts.get_mut(self.selected) {
            *shift = alphabet.modulo(*shift as i64 + delta);
            self.redecrypt();
        }
    }

    /// Drop hand edits and go back to the cracked key
    pub fn reset_shifts(&mut self) {
        if let Some(result) = &self.result {
            self.shifts = result.columns.iter().map(|c| c.shift).collect();
            self.redecrypt();
            self.add_message("Reset to cracked key", MessageStyle::Info);
        }
    }

    /// Search every length up to the maximum and jump to the winner
    pub fn auto_search(&mut self) {
        match self
            .cracker
            .search_key_lengths(&self.ciphertext, self.max_key_length)
        {
            Ok(search) => {
                let best = search.best();
                let text = format!(
                    "Best length {} (mean χ² {:.3}), key {}",
                    best.key_length, best.mean_score, best.result.key
                );
                self.key_length = best.key_length;
                self.search = Some(search);
                self.recrack();
                self.add_message(&text, MessageStyle::Success);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.auto_search();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                KeyCode::Up => app.set_key_length(app.key_length + 1),
                KeyCode::Down => app.set_key_length(app.key_length.saturating_sub(1)),
                KeyCode::Right | KeyCode::Tab => app.select_next(),
                KeyCode::Left | KeyCode::BackTab => app.select_previous(),
                KeyCode::Char('+' | '=') => app.adjust_shift(1),
                KeyCode::Char('-' | '_') => app.adjust_shift(-1),
                KeyCode::Char('r') => app.reset_shifts(),
                KeyCode::Char('s') => app.auto_search(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ENGLISH_TEXT;
    use crate::cipher::encrypt_text;
    use crate::core::Alphabet;
    use crate::sources::SAMPLE_TEXT;

    fn lock_app(alphabet: &Alphabet) -> App<'_> {
        let cracker = Cracker::new(alphabet, &ENGLISH_TEXT).unwrap();
        let cipher = encrypt_text(SAMPLE_TEXT, "LOCK", alphabet).unwrap();
        App::new(cracker, Ciphertext::from_text(&cipher, alphabet), "test", 8)
    }

    #[test]
    fn auto_search_lands_on_key() {
        let alphabet = Alphabet::latin();
        let mut app = lock_app(&alphabet);

        app.auto_search();
        assert_eq!(app.key_length, 4);
        assert_eq!(app.current_key(), "LOCK");
        assert!(app.plaintext.starts_with("THELIGHTHOUSEKEEPER"));
        assert!(app.search.is_some());
    }

    #[test]
    fn manual_shift_and_reset() {
        let alphabet = Alphabet::latin();
        let mut app = lock_app(&alphabet);
        app.set_key_length(4);

        app.select_next();
        app.adjust_shift(1);
        assert_eq!(app.current_key(), "LPCK");
        assert!(app.is_overridden(1));
        assert!(!app.plaintext.starts_with("THELIGHTHOUSE"));

        app.adjust_shift(-2);
        assert_eq!(app.current_key(), "LNCK");

        app.reset_shifts();
        assert_eq!(app.current_key(), "LOCK");
        assert!(!app.is_overridden(1));
    }

    #[test]
    fn selection_wraps() {
        let alphabet = Alphabet::latin();
        let mut app = lock_app(&alphabet);
        app.set_key_length(3);

        app.select_previous();
        assert_eq!(app.selected, 2);
        app.select_next();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn key_length_stays_in_range() {
        let alphabet = Alphabet::latin();
        let mut app = lock_app(&alphabet);
        app.set_key_length(8);
        assert_eq!(app.key_length, 8);
        app.set_key_length(9);
        assert_eq!(app.key_length, 8);
        app.set_key_length(0);
        assert_eq!(app.key_length, 8);
    }

    #[test]
    fn wraparound_shift() {
        let alphabet = Alphabet::latin();
        let mut app = lock_app(&alphabet);
        app.set_key_length(4);

        // column 0 is 'L' (11); 15 steps forward wraps to 'A'
        app.adjust_shift(15);
        assert_eq!(app.current_key(), "AOCK");
    }

    #[test]
    fn messages_are_capped() {
        let alphabet = Alphabet::latin();
        let mut app = lock_app(&alphabet);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
