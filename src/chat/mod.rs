//! Interactive chat surface.
//!
//! This module provides the REPL-facing pieces of the program:
//!
//! - [`commands`]: slash command parsing
//! - [`language`]: display-language selection and localized UI strings
//! - [`render`]: ANSI styling, the typewriter reveal effect, and the banner
//! - [`shell`]: the line-dispatch state machine behind the loop
//! - [`wizard`]: interactive language and persona configuration prompts
//!
//! The REPL loop itself lives in the `anime-chat` binary, which drives
//! [`Shell`] with lines read from rustyline.

mod commands;
mod language;
mod render;
mod shell;
mod wizard;

pub use commands::{ChatCommand, parse_command};
pub use language::Language;
pub use shell::{Shell, ShellStep};
pub use render::{
    ANSI_CYAN, ANSI_GREEN, ANSI_MAGENTA, ANSI_RED, ANSI_RESET, ANSI_YELLOW, CHAT_DELAY,
    FAST_DELAY, WELCOME_DELAY, clear_screen, print_banner, typewriter,
};
pub use wizard::{confirm_custom_persona, persona_wizard, select_language};
