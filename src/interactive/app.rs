//! TUI application state and logic

use crate::game::{GameSession, SubmitAction};
use crate::solver::{HttpSolver, Solve, SolverError};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread;
use std::time::{Duration, Instant};

/// How long the board sits untouched before the tap hint appears
const IDLE_HINT_DELAY: Duration = Duration::from_secs(6);

/// Event poll tick, so worker replies and the idle hint stay responsive
const TICK_RATE: Duration = Duration::from_millis(100);

/// Completion of a background solver call
#[derive(Debug)]
pub enum WorkerReply {
    FirstGuess {
        epoch: u64,
        outcome: Result<String, SolverError>,
    },
    NextGuess {
        epoch: u64,
        outcome: Result<String, SolverError>,
    },
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
    Warning,
    Error,
}

/// Application state
pub struct App {
    pub session: GameSession,
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub show_help: bool,
    pub should_quit: bool,
    client: HttpSolver,
    reply_tx: Sender<WorkerReply>,
    reply_rx: Receiver<WorkerReply>,
    /// Diagnostics for unclassified solver errors; not rendered
    diagnostics: Vec<String>,
    hint_clock: Instant,
}

impl App {
    #[must_use]
    pub fn new(client: HttpSolver) -> Self {
        let (reply_tx, reply_rx) = channel();

        Self {
            session: GameSession::new(),
            cursor: 0,
            messages: vec![Message {
                text: "Welcome! Tap the letters to match your Wordle board.".to_string(),
                style: MessageStyle::Info,
            }],
            show_help: false,
            should_quit: false,
            client,
            reply_tx,
            reply_rx,
            diagnostics: Vec::new(),
            hint_clock: Instant::now(),
        }
    }

    /// Start (or restart) a game: reset the session and fetch the first guess
    pub fn new_game(&mut self) {
        let epoch = self.session.new_game();
        self.cursor = 0;
        self.hint_clock = Instant::now();
        self.add_message("Loading initial guess...", MessageStyle::Info);

        let client = self.client.clone();
        let tx = self.reply_tx.clone();
        thread::spawn(move || {
            let outcome = client.solve(&[]).map(|response| response.guess);
            // Receiver gone means the app already exited
            let _ = tx.send(WorkerReply::FirstGuess { epoch, outcome });
        });
    }

    /// Cycle the status of the cell under the cursor
    pub fn tap_cursor_cell(&mut self) {
        self.tap_cell(self.cursor);
    }

    /// Cycle the status of one cell; locked or blocked taps are silent no-ops
    pub fn tap_cell(&mut self, position: usize) {
        self.session.tap_cell(position);
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(crate::core::WORD_LENGTH - 1);
    }

    /// Submit the open round's status row
    pub fn submit(&mut self) {
        match self.session.submit() {
            SubmitAction::Won => {
                self.add_message("🎉 Well done! We won the game!", MessageStyle::Success);
                self.add_message("Press 'n' to play again.", MessageStyle::Info);
            }
            SubmitAction::Lost => {
                self.add_message(
                    "We lost the game 😭 Better luck next time!",
                    MessageStyle::Warning,
                );
                self.add_message("Press 'n' to play again.", MessageStyle::Info);
            }
            SubmitAction::Call { payload, epoch } => {
                self.add_message("Submitting status...", MessageStyle::Info);
                let client = self.client.clone();
                let tx = self.reply_tx.clone();
                thread::spawn(move || {
                    let outcome = client.solve(&payload).map(|response| response.guess);
                    let _ = tx.send(WorkerReply::NextGuess { epoch, outcome });
                });
            }
            SubmitAction::Rejected => {}
        }
    }

    /// Drain completed solver calls from the worker channel
    pub fn drain_replies(&mut self) {
        loop {
            match self.reply_rx.try_recv() {
                Ok(reply) => self.apply_reply(reply),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
    }

    fn apply_reply(&mut self, reply: WorkerReply) {
        let result = match reply {
            WorkerReply::FirstGuess { epoch, outcome } => {
                self.session.resolve_first_guess(epoch, outcome)
            }
            WorkerReply::NextGuess { epoch, outcome } => {
                self.session.resolve_submit(epoch, outcome)
            }
        };

        match result {
            Ok(_) => {}
            Err(error) => {
                if let Some(detail) = error.detail() {
                    self.diagnostics.push(detail.to_string());
                }
                self.add_message(&error.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Whether the tap hint should be shown under the open round
    #[must_use]
    pub fn show_idle_hint(&self) -> bool {
        !self.session.user_interacted()
            && !self.session.busy()
            && self.session.history().open_round().is_some()
            && self.hint_clock.elapsed() >= IDLE_HINT_DELAY
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

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            // Any key dismisses the help overlay
            self.show_help = false;
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('?') | KeyCode::Char('h') => self.show_help = true,
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Down => self.tap_cursor_cell(),
            KeyCode::Char(c @ '1'..='5') => {
                // Digit keys select and cycle in one press
                let position = (c as usize) - ('1' as usize);
                self.cursor = position;
                self.tap_cell(position);
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    #[cfg(test)]
    fn inject_reply(&self, reply: WorkerReply) {
        self.reply_tx.send(reply).unwrap();
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

    // Run app
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
    // Kick off the first game
    app.new_game();

    loop {
        app.drain_replies();

        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.handle_key(key);
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
    use crate::core::LetterStatus;
    use crate::game::GameStatus;
    use crate::solver::DEFAULT_TIMEOUT_SECS;

    fn test_app() -> App {
        let client = HttpSolver::new(
            "http://localhost:1/guess",
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        );
        App::new(client)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn first_guess_reply_installs_round() {
        let mut app = test_app();
        let epoch = app.session.new_game();

        app.inject_reply(WorkerReply::FirstGuess {
            epoch,
            outcome: Ok("crane".to_string()),
        });
        app.drain_replies();

        assert_eq!(app.session.rounds().len(), 1);
        assert!(!app.session.busy());
    }

    #[test]
    fn stale_reply_is_ignored_without_a_message() {
        let mut app = test_app();
        let stale = app.session.new_game();
        let fresh = app.session.new_game();

        app.inject_reply(WorkerReply::FirstGuess {
            epoch: stale,
            outcome: Ok("crane".to_string()),
        });
        app.drain_replies();
        assert!(app.session.rounds().is_empty());

        app.inject_reply(WorkerReply::FirstGuess {
            epoch: fresh,
            outcome: Ok("slate".to_string()),
        });
        app.drain_replies();
        assert_eq!(app.session.rounds()[0].guess().text(), "slate");
    }

    #[test]
    fn error_reply_becomes_a_message() {
        let mut app = test_app();
        let epoch = app.session.new_game();

        app.inject_reply(WorkerReply::FirstGuess {
            epoch,
            outcome: Err(SolverError::TransportFailure),
        });
        app.drain_replies();

        assert!(
            app.messages
                .iter()
                .any(|m| matches!(m.style, MessageStyle::Error))
        );
    }

    #[test]
    fn unclassified_error_is_recorded_for_diagnostics() {
        let mut app = test_app();
        let epoch = app.session.new_game();

        app.inject_reply(WorkerReply::FirstGuess {
            epoch,
            outcome: Err(SolverError::Unclassified("disk on fire".to_string())),
        });
        app.drain_replies();

        assert_eq!(app.diagnostics, vec!["disk on fire".to_string()]);
    }

    #[test]
    fn cursor_moves_stay_in_range() {
        let mut app = test_app();

        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, 0);

        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.cursor, 4);
    }

    #[test]
    fn digit_key_selects_and_cycles() {
        let mut app = test_app();
        let epoch = app.session.new_game();
        app.inject_reply(WorkerReply::FirstGuess {
            epoch,
            outcome: Ok("crane".to_string()),
        });
        app.drain_replies();

        press(&mut app, KeyCode::Char('3'));

        assert_eq!(app.cursor, 2);
        assert_eq!(
            app.session.rounds()[0].status_at(2),
            LetterStatus::Present
        );
    }

    #[test]
    fn enter_submits_a_winning_row() {
        let mut app = test_app();
        let epoch = app.session.new_game();
        app.inject_reply(WorkerReply::FirstGuess {
            epoch,
            outcome: Ok("crane".to_string()),
        });
        app.drain_replies();

        for position in 0..5 {
            app.session.mark_cell(position, LetterStatus::Correct);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.status(), GameStatus::Won);
        assert!(
            app.messages
                .iter()
                .any(|m| matches!(m.style, MessageStyle::Success))
        );
    }

    #[test]
    fn help_overlay_swallows_the_next_key() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn messages_are_capped_at_five() {
        let mut app = test_app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}
