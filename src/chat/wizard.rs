//! Interactive configuration prompts.
//!
//! The language-selection prompt runs once at startup, before a display
//! language exists, so its text is bilingual. The persona wizard runs at
//! startup (optionally) and again on the reconfigure command; only
//! non-empty answers make it into the returned overrides.

use rustyline::DefaultEditor;

use crate::chat::language::Language;
use crate::chat::render::{ANSI_CYAN, ANSI_RESET, ANSI_YELLOW};
use crate::persona::PersonaOverrides;

/// Prompts for the display language. Defaults to Indonesian on an empty
/// answer or any read error.
pub fn select_language(rl: &mut DefaultEditor) -> Language {
    println!("{ANSI_YELLOW}\n=== Pilih Bahasa / Select Language ==={ANSI_RESET}");
    println!("{ANSI_CYAN}1. Bahasa Indonesia{ANSI_RESET}");
    println!("{ANSI_CYAN}2. English{ANSI_RESET}");
    let answer = rl.readline("Masukkan pilihan / Enter your choice (default: 1): ");
    match answer {
        Ok(choice) if choice.trim() == "2" => Language::English,
        _ => Language::Indonesian,
    }
}

/// Asks whether to run the persona wizard. Anything other than `y`
/// (case-insensitive) declines.
pub fn confirm_custom_persona(rl: &mut DefaultEditor, language: Language) -> bool {
    let prompt = format!("{ANSI_YELLOW}{}{ANSI_RESET}", language.custom_persona_prompt());
    match rl.readline(&prompt) {
        Ok(answer) => answer.trim().eq_ignore_ascii_case("y"),
        Err(_) => false,
    }
}

/// Runs the persona customization wizard.
///
/// Collects the character name, personality, knowledge domains, and the
/// user's nickname. Empty answers keep the current values.
pub fn persona_wizard(rl: &mut DefaultEditor, language: Language) -> PersonaOverrides {
    println!("{ANSI_YELLOW}\n{}{ANSI_RESET}", language.wizard_title());

    PersonaOverrides {
        name: prompt(rl, language.prompt_name()),
        personality: prompt(rl, language.prompt_personality()),
        knowledge: prompt(rl, language.prompt_knowledge()),
        user_name: prompt(rl, language.prompt_user_name()),
        ..PersonaOverrides::default()
    }
}

fn prompt(rl: &mut DefaultEditor, text: &str) -> Option<String> {
    let styled = format!("{ANSI_CYAN}{text}{ANSI_RESET}");
    match rl.readline(&styled) {
        Ok(answer) => {
            let answer = answer.trim();
            if answer.is_empty() {
                None
            } else {
                Some(answer.to_string())
            }
        }
        Err(_) => None,
    }
}
