//! Display-language selection and localized UI strings.
//!
//! Two display languages are supported. The selection only affects what
//! the program prints; questions and slash-command dispatch are
//! language-independent.

use std::fmt;

/// The selected display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Bahasa Indonesia (the default).
    #[default]
    Indonesian,
    /// English.
    English,
}

impl Language {
    /// Lines typed out after the banner at startup.
    pub fn welcome_lines(&self) -> [&'static str; 2] {
        match self {
            Language::Indonesian => [
                "Selamat datang di Anime AI Assistant! (◕‿◕)",
                "Program ini akan memberi kamu asisten AI dengan gaya anime yang imut dan ekspresif!",
            ],
            Language::English => [
                "Welcome to Anime AI Assistant! (◕‿◕)",
                "This program will provide you with an AI assistant in a cute and expressive anime style!",
            ],
        }
    }

    /// Yes/no prompt asking whether to run the persona wizard.
    pub fn custom_persona_prompt(&self) -> &'static str {
        match self {
            Language::Indonesian => {
                "Apakah kamu ingin mengatur karakter anime kustommu? (y/n, default: n): "
            }
            Language::English => {
                "Do you want to set up your custom anime character? (y/n, default: n): "
            }
        }
    }

    /// Title line shown above the persona wizard.
    pub fn wizard_title(&self) -> &'static str {
        match self {
            Language::Indonesian => "=== Konfigurasi Karakter Anime AI ===",
            Language::English => "=== Anime AI Character Configuration ===",
        }
    }

    /// Wizard prompt for the character name.
    pub fn prompt_name(&self) -> &'static str {
        match self {
            Language::Indonesian => "Nama karakter anime (default: Sakura-chan): ",
            Language::English => "Anime character name (default: Sakura-chan): ",
        }
    }

    /// Wizard prompt for the personality.
    pub fn prompt_personality(&self) -> &'static str {
        match self {
            Language::Indonesian => {
                "Kepribadian (contoh: tsundere, yandere, kuudere, dandere) (default: tsundere dan imut): "
            }
            Language::English => {
                "Personality (e.g., tsundere, yandere, kuudere, dandere) (default: tsundere and cute): "
            }
        }
    }

    /// Wizard prompt for the knowledge domains.
    pub fn prompt_knowledge(&self) -> &'static str {
        match self {
            Language::Indonesian => {
                "Pengetahuan tentang (default: anime, manga, dan budaya Jepang): "
            }
            Language::English => "Knowledge about (default: anime, manga, and Japanese culture): ",
        }
    }

    /// Wizard prompt for the user's nickname.
    pub fn prompt_user_name(&self) -> &'static str {
        match self {
            Language::Indonesian => "Nama panggilan untuk kamu (default: codewithwan): ",
            Language::English => "Your nickname (default: codewithwan): ",
        }
    }

    /// Ready line after the wizard produced a custom persona.
    pub fn ready_custom(&self, persona_name: &str) -> String {
        match self {
            Language::Indonesian => {
                format!("AI Anime '{persona_name}' sudah siap menemanimu! (≧◡≦)")
            }
            Language::English => {
                format!("Anime AI '{persona_name}' is ready to accompany you! (≧◡≦)")
            }
        }
    }

    /// Ready line when running with the default or stored persona.
    pub fn ready_default(&self, persona_name: &str, emoji: &str) -> String {
        match self {
            Language::Indonesian => {
                format!("AI Anime '{persona_name}' siap dengan konfigurasi default! {emoji}")
            }
            Language::English => {
                format!("Anime AI '{persona_name}' is ready with the default configuration! {emoji}")
            }
        }
    }

    /// Farewell printed on the exit command.
    pub fn farewell(&self, user_name: &str) -> String {
        match self {
            Language::Indonesian => format!("Sampai jumpa, {user_name}-kun! (｡♥‿♥｡)"),
            Language::English => format!("Goodbye, {user_name}-kun! (｡♥‿♥｡)"),
        }
    }

    /// Confirmation after the history export succeeded.
    pub fn history_saved(&self) -> &'static str {
        match self {
            Language::Indonesian => "Riwayat percakapan telah disimpan! (≧◡≦)",
            Language::English => "Conversation history has been saved! (≧◡≦)",
        }
    }

    /// Report after the history export failed.
    pub fn history_save_failed(&self) -> &'static str {
        match self {
            Language::Indonesian => "Gagal menyimpan riwayat percakapan!",
            Language::English => "Failed to save the conversation history!",
        }
    }

    /// Confirmation after a configuration update.
    pub fn config_updated(&self, emoji: &str) -> String {
        match self {
            Language::Indonesian => format!("Konfigurasi telah diperbarui! {emoji}"),
            Language::English => format!("Configuration has been updated! {emoji}"),
        }
    }

    /// The full localized help text, listing this language's command
    /// literals and usage tips.
    pub fn help_text(&self) -> &'static str {
        match self {
            Language::Indonesian => {
                r#"=== Perintah yang Tersedia ===

/keluar      - Keluar dari program
/simpan      - Menyimpan riwayat percakapan
/config      - Mengubah konfigurasi karakter anime
/bersihkan   - Membersihkan layar konsol
/bantuan     - Menampilkan menu bantuan ini

=== Tips Penggunaan ===
- Kamu bisa berbicara dengan karakter anime AI dengan mengetik pesan biasa
- Karakter AI akan merespon dengan gaya bicara khas anime
- Coba tanyakan tentang anime, manga, atau topik lainnya!"#
            }
            Language::English => {
                r#"=== Available Commands ===

/exit        - Exit the program
/save        - Save the conversation history
/config      - Change the anime character configuration
/clear       - Clear the console screen
/help        - Display this help menu

=== Usage Tips ===
- You can talk to the anime AI character by typing regular messages
- The AI character will respond in a typical anime style
- Try asking about anime, manga, or other topics!"#
            }
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Indonesian => write!(f, "Bahasa Indonesia"),
            Language::English => write!(f, "English"),
        }
    }
}
