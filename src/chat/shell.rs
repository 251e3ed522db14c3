//! Line dispatch for the interactive loop.
//!
//! [`Shell`] is the state machine behind the REPL: it turns raw input
//! lines into [`ShellStep`]s and tracks termination. The binary owns the
//! I/O (rustyline, rendering, the chat client) and drives this type one
//! line at a time.

use super::commands::{ChatCommand, parse_command};

/// What the driver should do with one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellStep {
    /// A recognized slash command.
    Command(ChatCommand),

    /// Free text to forward to the chat client as a question.
    Question(String),
}

/// Dispatch state for the interactive loop.
///
/// Once terminated, the shell stays terminated: [`Shell::feed`] returns
/// `None` for every later line, so no input submitted after the exit
/// command is ever processed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shell {
    terminated: bool,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the exit command or an end-of-input signal has
    /// been seen.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Marks the shell terminated without an exit command (Ctrl+D).
    pub fn terminate(&mut self) {
        self.terminated = true;
    }

    /// Feeds one raw input line and returns the step to perform.
    ///
    /// Blank lines yield `None`, as does any line fed after termination.
    /// The exit command terminates the shell and is still returned so
    /// the driver can render the farewell.
    pub fn feed(&mut self, line: &str) -> Option<ShellStep> {
        if self.terminated {
            return None;
        }
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        match parse_command(line) {
            Some(command) => {
                if command == ChatCommand::Quit {
                    self.terminated = true;
                }
                Some(ShellStep::Command(command))
            }
            None => Some(ShellStep::Question(line.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_command_terminates_the_shell() {
        let mut shell = Shell::new();
        assert!(!shell.is_terminated());
        assert_eq!(
            shell.feed("/exit"),
            Some(ShellStep::Command(ChatCommand::Quit))
        );
        assert!(shell.is_terminated());
    }

    #[test]
    fn nothing_is_processed_after_exit() {
        let mut shell = Shell::new();
        let script = ["halo", "/keluar", "/help", "masih di sana?"];
        let mut steps = Vec::new();
        for line in script {
            if let Some(step) = shell.feed(line) {
                steps.push(step);
            }
        }
        // Only the lines before and including the exit command count.
        assert_eq!(
            steps,
            vec![
                ShellStep::Question("halo".to_string()),
                ShellStep::Command(ChatCommand::Quit),
            ]
        );
        assert!(shell.is_terminated());
    }

    #[test]
    fn end_of_input_terminates_without_a_command() {
        let mut shell = Shell::new();
        shell.terminate();
        assert!(shell.is_terminated());
        assert_eq!(shell.feed("/help"), None);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut shell = Shell::new();
        assert_eq!(shell.feed(""), None);
        assert_eq!(shell.feed("   "), None);
        assert!(!shell.is_terminated());
    }

    #[test]
    fn free_text_becomes_a_question() {
        let mut shell = Shell::new();
        assert_eq!(
            shell.feed("  siapa kamu?  "),
            Some(ShellStep::Question("siapa kamu?".to_string()))
        );
        assert!(!shell.is_terminated());
    }

    #[test]
    fn non_exit_commands_keep_the_shell_running() {
        let mut shell = Shell::new();
        for line in ["/save", "/config", "/clear", "/bantuan"] {
            assert!(matches!(shell.feed(line), Some(ShellStep::Command(_))));
            assert!(!shell.is_terminated());
        }
    }
}
