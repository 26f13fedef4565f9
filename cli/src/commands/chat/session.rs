//! # Interactive Session Loop
//!
//! File: cli/src/commands/chat/session.rs
//!
//! ## Overview
//!
//! Drives one conversation over any line reader and writer. Per line:
//!
//! - `exit` / `quit` (any case) prints the farewell, logs it and ends the session.
//! - An empty line prints a re-prompt; nothing is selected or logged.
//! - Anything else goes through the selector, is printed and logged.
//!
//! End of input ends the session without a farewell. Transcript failures are
//! reported through `tracing::warn!` and never interrupt the conversation.
//!
use super::logger::ConversationLogger;
use crate::core::error::Result;
use crate::engine::selector::ResponseSelector;
use crate::engine::sentiment::SentimentPort;
use anyhow::Context;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

pub const FAREWELL: &str = "Goodbye! Have a great day!";
pub const EMPTY_INPUT_REPLY: &str = "I didn't hear anything. Could you say that again?";
const USER_PROMPT: &str = "User: ";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `exit` or `quit`.
    Farewell,
    /// Input reached end-of-file.
    EndOfInput,
}

/// True for `exit` / `quit` in any letter case.
pub fn is_exit_command(input: &str) -> bool {
    input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit")
}

/// The banner printed before the first prompt.
pub fn banner(time_greeting: &str) -> String {
    format!(
        "{} I'm your AI assistant. Type 'exit' or 'quit' to end our conversation.",
        time_greeting
    )
}

/// Runs the read-select-print-log loop until `exit`/`quit` or end of input.
///
/// # Errors
///
/// Only failures to read input or write output are returned. Transcript
/// failures are logged as warnings.
pub fn run_session<R: BufRead, W: Write>(
    selector: &ResponseSelector,
    sentiment: &dyn SentimentPort,
    logger: &mut ConversationLogger,
    time_greeting: &str,
    mut input: R,
    mut output: W,
) -> Result<SessionEnd> {
    writeln!(output, "{}", banner(time_greeting)).context("Failed to write to output")?;

    let mut line = String::new();
    loop {
        write!(output, "{}", USER_PROMPT).context("Failed to write to output")?;
        output.flush().context("Failed to flush output")?;

        line.clear();
        let read = input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            debug!("End of input reached");
            writeln!(output).context("Failed to write to output")?;
            return Ok(SessionEnd::EndOfInput);
        }
        let user_input = line.trim();

        if is_exit_command(user_input) {
            writeln!(output, "Bot: {}", FAREWELL).context("Failed to write to output")?;
            log_or_warn(logger, user_input, FAREWELL);
            return Ok(SessionEnd::Farewell);
        }

        if user_input.is_empty() {
            writeln!(output, "Bot: {}", EMPTY_INPUT_REPLY).context("Failed to write to output")?;
            continue;
        }

        let response = selector.select_response(user_input, sentiment);
        writeln!(output, "Bot: {}", response).context("Failed to write to output")?;
        log_or_warn(logger, user_input, &response);
    }
}

fn log_or_warn(logger: &mut ConversationLogger, user_input: &str, response: &str) {
    if let Err(e) = logger.log_exchange(user_input, response) {
        warn!("Could not write conversation log: {:#}", e);
    }
}
