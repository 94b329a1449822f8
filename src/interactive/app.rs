//! TUI application state and logic

use crate::core::{GameSession, GuessError, Outcome, Statistics, start_new_round};
use crate::wordlists::{ResolveError, WordResolver};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, warn};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    resolver: WordResolver,
    rng: StdRng,
    pub session: Option<GameSession>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Letters are guesses
    Guessing,
    /// Round won or lost; waiting for new game or quit
    RoundOver,
    /// No word could be loaded; guessing is disabled
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

impl App {
    #[must_use]
    pub fn new(resolver: WordResolver, rng: StdRng) -> Self {
        Self {
            resolver,
            rng,
            session: None,
            messages: vec![Message {
                text: "Welcome! Type letters to guess the word.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        match &self.session {
            None => InputMode::Unavailable,
            Some(s) if s.is_over() => InputMode::RoundOver,
            Some(_) => InputMode::Guessing,
        }
    }

    /// Resolve a fresh word and replace the current session
    ///
    /// An unfinished round is abandoned without counting towards statistics.
    pub fn new_game(&mut self) {
        match self.resolver.resolve(&mut self.rng) {
            Ok(resolution) => {
                if let Some(reason) = &resolution.fallback {
                    self.add_message(
                        &format!("{reason}. Using the local word file."),
                        MessageStyle::Warning,
                    );
                }
                self.session = Some(start_new_round(resolution.word));
                self.add_message(
                    &format!("New game! Word from the {}.", resolution.origin),
                    MessageStyle::Info,
                );
            }
            Err(e) => {
                warn!("cannot start round: {e}");
                self.session = None;
                self.add_message(&resolve_error_text(&e), MessageStyle::Error);
                self.add_message("Press 'n' to retry or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    pub fn handle_guess(&mut self, input: &str) {
        let Some(session) = self.session.as_mut() else {
            self.add_message("No word loaded. Press 'n' to retry.", MessageStyle::Error);
            return;
        };

        match session.submit_guess(input) {
            Ok(result) => {
                let secret = session.secret().text().to_string();
                if result.hit {
                    self.add_message(
                        &format!("'{}' is in the word!", result.letter),
                        MessageStyle::Success,
                    );
                } else {
                    self.add_message(
                        &format!("No '{}'. {} tries left.", result.letter, result.tries_remaining),
                        MessageStyle::Warning,
                    );
                }

                match result.outcome {
                    Outcome::Won => {
                        self.stats.record(Outcome::Won);
                        self.add_message(
                            &format!("🎉 You guessed the word: {secret}"),
                            MessageStyle::Success,
                        );
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    Outcome::Lost => {
                        self.stats.record(Outcome::Lost);
                        self.add_message(
                            &format!("💀 You lost! The word was: {secret}"),
                            MessageStyle::Error,
                        );
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    Outcome::InProgress => {}
                }
            }
            Err(e) => {
                debug!("guess rejected: {e}");
                let text = match e {
                    GuessError::InvalidGuess(_) => "Please enter a single letter.".to_string(),
                    GuessError::DuplicateGuess(letter) => {
                        format!("You have already guessed '{letter}'.")
                    }
                    GuessError::SessionTerminated(_) => {
                        "The round is over. Press 'n' for a new game.".to_string()
                    }
                };
                self.add_message(&text, MessageStyle::Error);
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let KeyCode::Char(c) = key.code else {
            if key.code == KeyCode::Esc {
                self.should_quit = true;
            }
            return;
        };

        match (c.to_ascii_lowercase(), self.input_mode()) {
            ('c', _) if ctrl => self.should_quit = true,
            ('n', _) if ctrl => self.new_game(),
            ('n', InputMode::RoundOver | InputMode::Unavailable) => self.new_game(),
            ('q', InputMode::RoundOver | InputMode::Unavailable) => self.should_quit = true,
            (_, InputMode::Guessing) => self.handle_guess(c.encode_utf8(&mut [0; 4])),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }
}

fn resolve_error_text(err: &ResolveError) -> String {
    match err {
        ResolveError::SourceNotFound(_) => format!("Word file not found! {err}"),
        ResolveError::SourceEmpty(_) => format!("Word file is empty! {err}"),
        ResolveError::SourceUnreadable { .. } | ResolveError::RemoteUnavailable(_) => {
            format!("Could not load a word! {err}")
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
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
    use crate::wordlists::WordSourceConfig;
    use rand::SeedableRng;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn app_with_words(words: &str) -> (App, NamedTempFile) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(words.as_bytes()).unwrap();
        let resolver = WordResolver::new(WordSourceConfig::local(file.path()));
        let mut app = App::new(resolver, StdRng::seed_from_u64(5));
        app.new_game();
        (app, file)
    }

    fn press(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    fn last_message(app: &App) -> &str {
        &app.messages.last().unwrap().text
    }

    #[test]
    fn new_game_starts_guessing() {
        let (app, _file) = app_with_words("cat\n");
        assert_eq!(app.input_mode(), InputMode::Guessing);
        assert_eq!(app.session.as_ref().unwrap().pattern().to_string(), "___");
    }

    #[test]
    fn letter_keys_are_guesses() {
        let (mut app, _file) = app_with_words("cat\n");
        press(&mut app, 'c');
        press(&mut app, 'z');
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.pattern().to_string(), "C__");
        assert_eq!(session.guessed_letters(), vec!['C', 'Z']);
        assert_eq!(session.tries_remaining(), 5);
    }

    #[test]
    fn q_and_n_are_letters_while_guessing() {
        let (mut app, _file) = app_with_words("queen\n");
        press(&mut app, 'q');
        press(&mut app, 'n');
        assert!(!app.should_quit);
        assert_eq!(
            app.session.as_ref().unwrap().pattern().to_string(),
            "Q___N"
        );
    }

    #[test]
    fn duplicate_and_invalid_keys_report_errors() {
        let (mut app, _file) = app_with_words("cat\n");
        press(&mut app, 'c');
        press(&mut app, 'c');
        assert_eq!(last_message(&app), "You have already guessed 'C'.");
        press(&mut app, '7');
        assert_eq!(last_message(&app), "Please enter a single letter.");
        assert_eq!(app.session.as_ref().unwrap().tries_remaining(), 6);
    }

    #[test]
    fn win_then_new_game() {
        let (mut app, _file) = app_with_words("cat\n");
        for c in ['c', 'a', 't'] {
            press(&mut app, c);
        }
        assert_eq!(app.input_mode(), InputMode::RoundOver);
        assert_eq!(app.stats.rounds_won, 1);

        press(&mut app, 'n');
        assert_eq!(app.input_mode(), InputMode::Guessing);
        assert_eq!(app.stats.rounds_played, 1);
    }

    #[test]
    fn loss_reveals_word_and_q_quits() {
        let (mut app, _file) = app_with_words("dog\n");
        for c in ['x', 'q', 'z', 'w', 'v', 'u'] {
            press(&mut app, c);
        }
        assert_eq!(app.input_mode(), InputMode::RoundOver);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("The word was: DOG"))
        );
        press(&mut app, 'q');
        assert!(app.should_quit);
    }

    #[test]
    fn uppercase_commands_after_round() {
        let (mut app, _file) = app_with_words("a\n");
        press(&mut app, 'a');
        assert_eq!(app.input_mode(), InputMode::RoundOver);

        press(&mut app, 'N');
        assert_eq!(app.input_mode(), InputMode::Guessing);
        assert_eq!(app.stats.rounds_played, 1);

        press(&mut app, 'A');
        press(&mut app, 'Q');
        assert!(app.should_quit);
    }

    #[test]
    fn uppercase_letter_keys_are_guesses() {
        let (mut app, _file) = app_with_words("queen\n");
        press(&mut app, 'Q');
        press(&mut app, 'N');
        assert!(!app.should_quit);
        assert_eq!(
            app.session.as_ref().unwrap().pattern().to_string(),
            "Q___N"
        );
    }

    #[test]
    fn missing_file_disables_input() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = WordResolver::new(WordSourceConfig::local(dir.path().join("gone.txt")));
        let mut app = App::new(resolver, StdRng::seed_from_u64(0));
        app.new_game();

        assert_eq!(app.input_mode(), InputMode::Unavailable);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.starts_with("Word file not found!"))
        );

        press(&mut app, 'a');
        assert!(app.session.is_none());
    }

    #[test]
    fn ctrl_c_quits_anytime() {
        let (mut app, _file) = app_with_words("cat\n");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.session.as_ref().unwrap().guessed_letters(), Vec::<char>::new());
    }

    #[test]
    fn messages_are_capped() {
        let (mut app, _file) = app_with_words("cat\n");
        for _ in 0..20 {
            app.add_message("hello", MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 6);
    }
}
