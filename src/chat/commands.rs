//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and control the session locally; anything
//! else, including unrecognized slash input, is forwarded to the remote
//! API as a question. Both display languages' literals are accepted at
//! all times; the selected language only changes the displayed text.

/// A parsed chat command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatCommand {
    /// Exit the program.
    Quit,

    /// Flush the conversation history to the export file.
    Save,

    /// Re-run the persona configuration wizard.
    Configure,

    /// Clear the screen and redraw the banner.
    Clear,

    /// Display the localized help text.
    Help,
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` when the input matches a known literal in
/// either language, or `None` when it should be sent as a question.
/// Matching is case-insensitive.
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    match input.trim().to_lowercase().as_str() {
        "/keluar" | "/exit" => Some(ChatCommand::Quit),
        "/simpan" | "/save" => Some(ChatCommand::Save),
        "/config" => Some(ChatCommand::Configure),
        "/bersihkan" | "/clear" => Some(ChatCommand::Clear),
        "/bantuan" | "/help" => Some(ChatCommand::Help),
        _ => None,
    }
}
