//! In-memory conversation history and its plain-text export.
//!
//! The log is append-only for the lifetime of the session and can be
//! flushed to a human-readable text file on demand. Flushing overwrites
//! the target file; it never appends.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::{Error, Result};
use crate::persona::PersonaConfig;
use crate::session::Session;

/// Default name of the conversation export file.
pub const DEFAULT_TRANSCRIPT_PATH: &str = "anime_conversation.txt";

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// One question/answer exchange, immutable once appended.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationEntry {
    /// Local time the answer was received, second precision.
    pub timestamp: OffsetDateTime,
    /// The user's question, verbatim.
    pub question: String,
    /// The raw answer text, before decoration.
    pub answer: String,
}

impl ConversationEntry {
    /// Renders the timestamp as `YYYY-MM-DD HH:MM:SS`.
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).unwrap_or_default()
    }
}

/// Append-only ordered sequence of conversation entries.
#[derive(Debug, Default)]
pub struct ConversationLog {
    entries: Vec<ConversationEntry>,
}

impl ConversationLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an exchange, stamped with the current local time.
    ///
    /// Falls back to UTC when the local offset cannot be determined.
    pub fn append(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        let timestamp =
            OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        self.entries.push(ConversationEntry {
            timestamp,
            question: question.into(),
            answer: answer.into(),
        });
    }

    /// Returns the entries in insertion order.
    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    /// Returns the number of logged exchanges.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been logged yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overwrites `path` with the full history in human-readable form.
    ///
    /// The file carries a header naming the persona and session, a dump
    /// of the configuration (minus the expression/emoji tables), then
    /// each entry with its timestamp, separated by divider lines.
    pub fn flush_to_file(
        &self,
        path: impl AsRef<Path>,
        session: &Session,
        config: &PersonaConfig,
    ) -> Result<()> {
        let file = File::create(path.as_ref())
            .map_err(|err| Error::io("failed to create transcript file", err))?;
        let mut writer = BufWriter::new(file);
        let divider = "=".repeat(50);

        writeln!(
            writer,
            "Riwayat Percakapan dengan {} (Session ID: {})",
            config.name,
            session.session_id()
        )?;
        writeln!(writer, "{divider}\n")?;

        writeln!(writer, "Konfigurasi AI:")?;
        writeln!(writer, "- base_url: {}", config.base_url)?;
        writeln!(writer, "- name: {}", config.name)?;
        writeln!(writer, "- role: {}", config.role)?;
        writeln!(writer, "- personality: {}", config.personality)?;
        writeln!(writer, "- knowledge: {}", config.knowledge)?;
        writeln!(writer, "- limitations: {}", config.limitations)?;
        writeln!(writer, "- language: {}", config.language)?;
        writeln!(writer, "- tone: {}", config.tone)?;
        writeln!(writer, "- format_response: {}", config.format_response)?;
        writeln!(writer, "\n{divider}\n")?;

        for entry in &self.entries {
            writeln!(writer, "[{}]", entry.formatted_timestamp())?;
            writeln!(writer, "{}: {}", session.user_name, entry.question)?;
            writeln!(writer, "{}: {}\n", config.name, entry.answer)?;
            writeln!(writer, "{}\n", "-".repeat(50))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "animechat-history-{tag}-{}.txt",
            uuid::Uuid::new_v4().simple()
        ))
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut log = ConversationLog::new();
        assert!(log.is_empty());
        log.append("first?", "first!");
        log.append("second?", "second!");
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].question, "first?");
        assert_eq!(log.entries()[1].answer, "second!");
    }

    #[test]
    fn timestamp_formats_to_second_precision() {
        let mut log = ConversationLog::new();
        log.append("q", "a");
        let formatted = log.entries()[0].formatted_timestamp();
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(formatted.len(), 19);
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[10..11], " ");
    }

    #[test]
    fn flush_reproduces_entries_verbatim_in_order() {
        let mut log = ConversationLog::new();
        log.append("apa itu anime?", "Anime adalah animasi Jepang!");
        log.append("siapa kamu?", "Aku Sakura-chan desu~");

        let path = temp_path("flush");
        let session = Session::with_user_name("wan");
        let config = PersonaConfig::default();
        log.flush_to_file(&path, &session, &config).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains(&format!(
            "Riwayat Percakapan dengan Sakura-chan (Session ID: {})",
            session.session_id()
        )));
        assert!(contents.contains("- tone: kawaii dan ekspresif"));
        // Expression/emoji tables are excluded from the dump.
        assert!(!contents.contains("b-baka!"));
        assert!(contents.contains("wan: apa itu anime?"));
        assert!(contents.contains("Sakura-chan: Anime adalah animasi Jepang!"));
        let first = contents.find("apa itu anime?").unwrap();
        let second = contents.find("siapa kamu?").unwrap();
        assert!(first < second);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn flush_overwrites_previous_export() {
        let mut log = ConversationLog::new();
        log.append("q1", "a1");

        let path = temp_path("overwrite");
        let session = Session::new();
        let config = PersonaConfig::default();
        log.flush_to_file(&path, &session, &config).unwrap();
        log.flush_to_file(&path, &session, &config).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("q1").count(), 1);
        let _ = std::fs::remove_file(&path);
    }
}
