// Public modules
pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod history;
pub mod instruction;
pub mod persona;
pub mod session;

// Re-exports
pub use client::ChatClient;
pub use config::{ConfigStore, DEFAULT_CONFIG_PATH};
pub use error::{Error, Result};
pub use history::{ConversationEntry, ConversationLog, DEFAULT_TRANSCRIPT_PATH};
pub use instruction::build_instruction;
pub use persona::{PersonaConfig, PersonaOverrides};
pub use session::{DEFAULT_USER_NAME, Session};
