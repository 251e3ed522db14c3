//! Terminal output for the chat loop.
//!
//! Provides the ANSI color constants, the per-character typewriter
//! reveal, the static banner, and screen clearing. Output deliberately
//! blocks the single thread of control; there is nothing to overlap
//! with while text is being revealed.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// ANSI escape code for cyan text (user prompt, info lines).
pub const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for magenta text (persona speech).
pub const ANSI_MAGENTA: &str = "\x1b[35m";

/// ANSI escape code for yellow text (section headers).
pub const ANSI_YELLOW: &str = "\x1b[33m";

/// ANSI escape code for green text (confirmations).
pub const ANSI_GREEN: &str = "\x1b[32m";

/// ANSI escape code for red text (failure reports).
pub const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape code to reset all styling.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Per-character delay for chat responses.
pub const CHAT_DELAY: Duration = Duration::from_millis(30);

/// Per-character delay for startup welcome lines.
pub const WELCOME_DELAY: Duration = Duration::from_millis(20);

/// Per-character delay for auxiliary lines like the date stamp.
pub const FAST_DELAY: Duration = Duration::from_millis(10);

/// Reveals `text` one character at a time, then resets styling and
/// terminates the line.
pub fn typewriter(text: &str, delay: Duration, color: &str) {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "{color}");
    for ch in text.chars() {
        let _ = write!(stdout, "{ch}");
        let _ = stdout.flush();
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    let _ = writeln!(stdout, "{ANSI_RESET}");
}

/// Clears the terminal and homes the cursor.
pub fn clear_screen() {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\x1b[2J\x1b[1;1H");
    let _ = stdout.flush();
}

/// Prints the static ASCII-art banner.
pub fn print_banner() {
    let sparkle = "★゜・。。・゜゜・。。・゜☆゜・。。・゜゜・。。・゜★゜・。。・゜゜・。。・゜☆";
    println!("{ANSI_MAGENTA}{sparkle}{ANSI_RESET}");
    println!("{ANSI_CYAN}     _    _   _ ___ __  __ ___     _    ___ {ANSI_RESET}");
    println!("{ANSI_CYAN}    / \\  | \\ | |_ _|  \\/  | __|   / \\  |_ _|{ANSI_RESET}");
    println!("{ANSI_CYAN}   / _ \\ |  \\| || || |\\/| | _|   / _ \\  | | {ANSI_RESET}");
    println!("{ANSI_MAGENTA}  / ___ \\| |\\  || || |  | | |__ / ___ \\ | | {ANSI_RESET}");
    println!("{ANSI_MAGENTA} /_/   \\_\\_| \\_|___|_|  |_|____/_/   \\_\\___|{ANSI_RESET}");
    println!();
    println!("{ANSI_MAGENTA}{sparkle}{ANSI_RESET}");
    println!();
}
