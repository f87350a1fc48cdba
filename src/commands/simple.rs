//! Simple interactive CLI mode
//!
//! Line-based assistant without TUI: prints each suggested guess, reads a
//! 5-character status row, and submits it to the solver for the next one.

use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::{GameSession, MAX_ROUNDS, SubmitAction};
use crate::output::formatters::{feedback_to_emoji, round_line};
use crate::solver::{Solve, SolverError};
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// very first guess cannot be fetched from the solver.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(client: &impl Solve) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Assistant - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll fetch a guess from the solver; play it in your Wordle, then");
    println!("tell me the colors the puzzle showed you:\n");
    println!("  - Use g for green (correct position)");
    println!("  - Use y for yellow (wrong position)");
    println!("  - Use x for gray (not in word)\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut session = GameSession::new();
    fetch_first_guess(&mut session, client)?;

    loop {
        if session.status().is_terminal() {
            if !prompt_play_again()? {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            fetch_first_guess(&mut session, client)?;
            continue;
        }

        print_board(&session);

        let locked = session.locked_positions();
        if !locked.is_empty() {
            let mut positions: Vec<usize> = locked.iter().map(|p| p + 1).collect();
            positions.sort_unstable();
            println!(
                "🔒 Confirmed letters (kept from earlier rounds): {positions:?}\n"
            );
        }

        let input = get_user_input("Enter status (e.g. gxxyx, 'new', 'quit')")?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                println!("\n🔄 New game started!\n");
                fetch_first_guess(&mut session, client)?;
                continue;
            }
            row => {
                if !apply_status_row(&mut session, row) {
                    println!("❌ Invalid status! Use exactly 5 of g/y/x (e.g. gxxyx)\n");
                    continue;
                }
            }
        }

        match session.submit() {
            SubmitAction::Won => {
                print_win_banner(&session);
            }
            SubmitAction::Lost => {
                print_loss_banner(&session);
            }
            SubmitAction::Call { payload, epoch } => {
                println!("⏳ Asking the solver for the next guess...");
                let outcome = client.solve(&payload).map(|response| response.guess);
                match session.resolve_submit(epoch, outcome) {
                    Ok(_) => {}
                    Err(error) => {
                        print_solver_error(&error);
                    }
                }
            }
            SubmitAction::Rejected => {
                // Unreachable in this synchronous loop; keep the session honest
                println!("❌ Nothing to submit right now.\n");
            }
        }
    }
}

/// Fetch and install the first guess for a fresh game
fn fetch_first_guess(session: &mut GameSession, client: &impl Solve) -> Result<(), String> {
    println!("⏳ Fetching the first guess...\n");
    let epoch = session.new_game();
    let outcome = client.solve(&[]).map(|response| response.guess);

    session
        .resolve_first_guess(epoch, outcome)
        .map(|_| ())
        .map_err(|error| format!("Failed to fetch the initial guess: {error}"))
}

/// Apply a typed 5-character status row to the open round
///
/// Returns `false` (leaving the round untouched) for anything that is not
/// exactly 5 of `g`/`y`/`x`. Locked positions are skipped silently.
fn apply_status_row(session: &mut GameSession, row: &str) -> bool {
    let statuses: Vec<LetterStatus> = row
        .chars()
        .filter_map(|c| match c {
            'g' => Some(LetterStatus::Correct),
            'y' => Some(LetterStatus::Present),
            'x' => Some(LetterStatus::Absent),
            _ => None,
        })
        .collect();

    if statuses.len() != WORD_LENGTH || row.chars().count() != WORD_LENGTH {
        return false;
    }

    for (position, status) in statuses.into_iter().enumerate() {
        session.mark_cell(position, status);
    }
    true
}

fn print_board(session: &GameSession) {
    println!("────────────────────────────────────────────────────────────");
    println!(
        "Round {}/{MAX_ROUNDS}",
        session.history().open_index().map_or(MAX_ROUNDS, |i| i + 1)
    );
    println!("────────────────────────────────────────────────────────────\n");

    for round in session.rounds() {
        println!("  {}", round_line(round));
    }
    println!();
}

fn print_win_banner(session: &GameSession) {
    use colored::Colorize;

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 Well done! We won the game! 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let guesses = session.rounds().len();
    println!(
        "\n  Solved in {} {}",
        guesses.to_string().bright_cyan().bold(),
        if guesses == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, round) in session.rounds().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            round.guess().text().to_uppercase().bright_white().bold(),
            feedback_to_emoji(round.feedback())
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

fn print_loss_banner(session: &GameSession) {
    use colored::Colorize;

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    We lost the game 😭 Better luck next time!    "
            .bright_red()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    println!("\n  Guess history:");
    for (i, round) in session.rounds().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            round.guess().text().to_uppercase().bright_white().bold(),
            feedback_to_emoji(round.feedback())
        );
    }
    println!();
}

fn print_solver_error(error: &SolverError) {
    println!("\n❌ {error}");
    if let Some(detail) = error.detail() {
        println!("   ({detail})");
    }
    println!("   Adjust the statuses and submit again, or type 'new'.\n");
}

fn prompt_play_again() -> Result<bool, String> {
    Ok(matches!(
        get_user_input("Play again? (yes/no)")?.to_lowercase().as_str(),
        "yes" | "y"
    ))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::solver::{GuessClue, SolverResponse};

    struct ScriptedSolver {
        guesses: std::cell::RefCell<Vec<&'static str>>,
    }

    impl ScriptedSolver {
        fn new(guesses: &[&'static str]) -> Self {
            let mut reversed: Vec<&'static str> = guesses.to_vec();
            reversed.reverse();
            Self {
                guesses: std::cell::RefCell::new(reversed),
            }
        }
    }

    impl Solve for ScriptedSolver {
        fn solve(&self, _payload: &[GuessClue]) -> Result<SolverResponse, SolverError> {
            self.guesses
                .borrow_mut()
                .pop()
                .map(|guess| SolverResponse {
                    guess: guess.to_string(),
                })
                .ok_or(SolverError::DictionaryExhausted)
        }
    }

    fn started_session(first: &str) -> GameSession {
        let mut session = GameSession::new();
        let epoch = session.new_game();
        session
            .resolve_first_guess(epoch, Ok(first.to_string()))
            .unwrap();
        session
    }

    #[test]
    fn fetch_first_guess_installs_round() {
        let client = ScriptedSolver::new(&["crane"]);
        let mut session = GameSession::new();

        fetch_first_guess(&mut session, &client).unwrap();

        assert_eq!(session.rounds().len(), 1);
        assert_eq!(session.rounds()[0].guess(), &Word::new("crane").unwrap());
    }

    #[test]
    fn fetch_first_guess_reports_solver_failure() {
        let client = ScriptedSolver::new(&[]);
        let mut session = GameSession::new();

        let error = fetch_first_guess(&mut session, &client).unwrap_err();
        assert!(error.contains("Failed to fetch the initial guess"));
        assert!(session.rounds().is_empty());
    }

    #[test]
    fn apply_status_row_marks_all_cells() {
        let mut session = started_session("crane");

        assert!(apply_status_row(&mut session, "gyxxy"));
        assert_eq!(session.rounds()[0].clue(), "gyxxy");
    }

    #[test]
    fn apply_status_row_rejects_bad_input() {
        let mut session = started_session("crane");

        assert!(!apply_status_row(&mut session, "gyx"));
        assert!(!apply_status_row(&mut session, "gyxxz"));
        assert!(!apply_status_row(&mut session, "gyxxyg"));
        assert_eq!(session.rounds()[0].clue(), "xxxxx");
    }

    #[test]
    fn apply_status_row_skips_locked_positions() {
        let mut session = started_session("crane");
        apply_status_row(&mut session, "gxxxx");
        let SubmitAction::Call { payload, epoch } = session.submit() else {
            panic!("expected solver call");
        };
        assert_eq!(payload.len(), 1);
        session
            .resolve_submit(epoch, Ok("crone".to_string()))
            .unwrap();

        // Position 0 is locked; an 'x' typed there is ignored
        assert!(apply_status_row(&mut session, "xyxxx"));
        assert_eq!(session.rounds()[1].clue(), "gyxxx");
    }
}
