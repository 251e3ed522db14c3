//! Interactive anime-persona chat client.
//!
//! This binary provides a REPL for chatting with an anime-styled
//! persona backed by a remote text-generation API.
//!
//! # Usage
//!
//! ```bash
//! anime-chat
//! ```
//!
//! Startup asks for a display language and optionally runs a persona
//! customization wizard. While chatting, slash commands control the
//! session:
//! - `/help` (`/bantuan`) - Show available commands
//! - `/save` (`/simpan`) - Save the conversation history
//! - `/config` - Re-run the persona wizard
//! - `/clear` (`/bersihkan`) - Clear the screen and redraw the banner
//! - `/exit` (`/keluar`) - Exit the program

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use animechat::chat::{
    ANSI_CYAN, ANSI_GREEN, ANSI_MAGENTA, ANSI_RED, ANSI_RESET, CHAT_DELAY, ChatCommand,
    FAST_DELAY, Language, Shell, ShellStep, WELCOME_DELAY, clear_screen, confirm_custom_persona,
    persona_wizard, print_banner, select_language, typewriter,
};
use animechat::{
    ChatClient, ConfigStore, DEFAULT_TRANSCRIPT_PATH, DEFAULT_USER_NAME, PersonaOverrides, Session,
};

use time::OffsetDateTime;
use time::macros::format_description;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut rl = DefaultEditor::new()?;

    clear_screen();
    let language = select_language(&mut rl);
    print_banner();
    print_welcome(language);

    let store = ConfigStore::new();
    let mut client = if confirm_custom_persona(&mut rl, language) {
        let overrides = persona_wizard(&mut rl, language);
        let session = Session::with_user_name(
            overrides
                .user_name
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
        );
        let config = store.load(&overrides);
        let client = ChatClient::new(config, session)?;
        typewriter(
            &format!("\n{}", language.ready_custom(&client.config().name)),
            WELCOME_DELAY,
            ANSI_MAGENTA,
        );
        client
    } else {
        let config = store.load(&PersonaOverrides::default());
        let mut client = ChatClient::new(config, Session::new())?;
        let emoji = client.random_emoji();
        let ready = language.ready_default(&client.config().name, &emoji);
        typewriter(&format!("\n{ready}"), WELCOME_DELAY, ANSI_MAGENTA);
        client
    };

    let mut shell = Shell::new();
    while !shell.is_terminated() {
        let prompt = format!("{ANSI_CYAN}{}: {ANSI_RESET}", client.session().user_name);
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D behaves as the exit command.
                shell.terminate();
                typewriter(
                    &language.farewell(&client.session().user_name),
                    CHAT_DELAY,
                    ANSI_MAGENTA,
                );
                continue;
            }
            Err(err) => {
                eprintln!("Input error: {err}");
                break;
            }
        };

        let Some(step) = shell.feed(&line) else {
            continue;
        };
        let _ = rl.add_history_entry(line.trim());

        match step {
            ShellStep::Command(ChatCommand::Quit) => {
                typewriter(
                    &language.farewell(&client.session().user_name),
                    CHAT_DELAY,
                    ANSI_MAGENTA,
                );
            }
            ShellStep::Command(ChatCommand::Save) => {
                match client.save_conversation(DEFAULT_TRANSCRIPT_PATH) {
                    Ok(()) => typewriter(language.history_saved(), CHAT_DELAY, ANSI_GREEN),
                    Err(err) => {
                        log::warn!("transcript export failed: {err}");
                        typewriter(language.history_save_failed(), CHAT_DELAY, ANSI_RED);
                    }
                }
            }
            ShellStep::Command(ChatCommand::Configure) => {
                let overrides = persona_wizard(&mut rl, language);
                client.update_config(&overrides, &store);
                let emoji = client.random_emoji();
                typewriter(&language.config_updated(&emoji), CHAT_DELAY, ANSI_GREEN);
            }
            ShellStep::Command(ChatCommand::Clear) => {
                clear_screen();
                print_banner();
            }
            ShellStep::Command(ChatCommand::Help) => {
                println!("{}", language.help_text());
            }
            ShellStep::Question(question) => {
                // One fully-awaited request per turn; nothing overlaps it.
                let answer = client.ask(&question).await;
                let reply = format!("{}: {answer}", client.config().name);
                typewriter(&reply, CHAT_DELAY, ANSI_MAGENTA);
            }
        }
    }

    Ok(())
}

fn print_welcome(language: Language) {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    if let Ok(stamp) = now.format(format) {
        typewriter(&format!("Tanggal: {stamp}"), FAST_DELAY, ANSI_GREEN);
    }
    let [headline, tagline] = language.welcome_lines();
    typewriter(headline, WELCOME_DELAY, ANSI_MAGENTA);
    typewriter(tagline, WELCOME_DELAY, ANSI_CYAN);
    println!();
}
