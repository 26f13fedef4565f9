//! # Time-of-day Greeting
//!
//! File: cli/src/engine/greeting.rs

use chrono::{Local, Timelike};

/// Greeting for an hour of the day (0-23).
///
/// `[5, 12)` is morning, `[12, 17)` is afternoon, everything else is evening.
pub fn time_greeting(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning!",
        12..=16 => "Good afternoon!",
        _ => "Good evening!",
    }
}

/// Greeting for the current local hour.
pub fn current_greeting() -> &'static str {
    time_greeting(Local::now().hour())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(time_greeting(4), "Good evening!");
        assert_eq!(time_greeting(5), "Good morning!");
        assert_eq!(time_greeting(11), "Good morning!");
        assert_eq!(time_greeting(12), "Good afternoon!");
        assert_eq!(time_greeting(16), "Good afternoon!");
        assert_eq!(time_greeting(17), "Good evening!");
        assert_eq!(time_greeting(0), "Good evening!");
        assert_eq!(time_greeting(23), "Good evening!");
    }
}
