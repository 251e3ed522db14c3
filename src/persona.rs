//! Persona configuration for the chat assistant.
//!
//! A [`PersonaConfig`] describes the character presented to the user:
//! its name, personality traits, and the expression/emoji tables used to
//! decorate responses. [`PersonaOverrides`] is the partial form collected
//! from the configuration wizard or read from a partially-populated
//! config file; applying it performs a shallow key-by-key overwrite.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fixed endpoint of the remote text-generation API.
pub const DEFAULT_BASE_URL: &str = "https://fastrestapis.fasturl.cloud/aillm/superqwen";

/// Full persona description, persisted as a flat JSON object.
///
/// Invariant: `expressions` and `emojis` are never empty. The built-in
/// defaults satisfy this and [`PersonaOverrides::apply`] refuses to
/// overwrite either table with an empty one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaConfig {
    /// Base URL of the remote text-generation endpoint.
    pub base_url: String,
    /// The character's name.
    pub name: String,
    /// The character's role description.
    pub role: String,
    /// Personality traits.
    pub personality: String,
    /// Knowledge domains the character claims.
    pub knowledge: String,
    /// Behavioral limitations.
    pub limitations: String,
    /// Language the character responds in.
    pub language: String,
    /// Tone of voice.
    pub tone: String,
    /// Response formatting style.
    pub format_response: String,
    /// Expression templates containing a `{user}` placeholder.
    pub expressions: Vec<String>,
    /// Kaomoji appended to undecorated answers.
    pub emojis: Vec<String>,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            name: "Sakura-chan".to_string(),
            role: "asisten anime".to_string(),
            personality: "tsundere dan imut".to_string(),
            knowledge: "anime, manga, dan budaya Jepang".to_string(),
            limitations: "tidak mengujar kebencian".to_string(),
            language: "Bahasa Indonesia dengan kata-kata Jepang".to_string(),
            tone: "kawaii dan ekspresif".to_string(),
            format_response: "jawaban dengan gaya anime yang ekspresif".to_string(),
            expressions: vec![
                "b-baka! {user}-kun~".to_string(),
                "kyaa~ {user}-kun no ecchi!".to_string(),
                "yamete kudasai, {user}-kun~".to_string(),
                "h-hmph! {user}-kun baka desu!".to_string(),
                "s-sugoi ne, {user}-kun!".to_string(),
                "nani?! {user}-kun...".to_string(),
                "{user}-kun wa hontou ni kawaii desu~".to_string(),
                "mou~ {user}-kun...".to_string(),
                "etto... {user}-kun...".to_string(),
                "uwaaa~ {user}-sama!".to_string(),
                "{user}-kun no baka!".to_string(),
                "{user}-senpai, notice me~!".to_string(),
            ],
            emojis: vec![
                "(◕‿◕)".to_string(),
                "(｡♥‿♥｡)".to_string(),
                "(≧◡≦)".to_string(),
                "(っ˘ω˘ς)".to_string(),
                "(⁄ ⁄•⁄ω⁄•⁄ ⁄)".to_string(),
                "(´｡• ᵕ •｡`)".to_string(),
                "(*/ω＼*)".to_string(),
                "(≧▽≦)".to_string(),
                "(✿◠‿◠)".to_string(),
            ],
        }
    }
}

/// Partial persona record collected from the wizard or a stored file.
///
/// `user_name` rides along here because the wizard collects it together
/// with the persona fields; it applies to the [`crate::Session`], not to
/// the persisted config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonaOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limitations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expressions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emojis: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl PersonaOverrides {
    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self == &PersonaOverrides::default()
    }

    /// Merges these overrides into `config`, shallow key-by-key.
    ///
    /// An override that would leave `expressions` or `emojis` empty is
    /// skipped and logged; the tables must stay non-empty for decoration
    /// to work. `user_name` is not part of the persona record and is
    /// ignored here (see [`crate::Session`]).
    pub fn apply(&self, config: &mut PersonaConfig) {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        if let Some(role) = &self.role {
            config.role = role.clone();
        }
        if let Some(personality) = &self.personality {
            config.personality = personality.clone();
        }
        if let Some(knowledge) = &self.knowledge {
            config.knowledge = knowledge.clone();
        }
        if let Some(limitations) = &self.limitations {
            config.limitations = limitations.clone();
        }
        if let Some(language) = &self.language {
            config.language = language.clone();
        }
        if let Some(tone) = &self.tone {
            config.tone = tone.clone();
        }
        if let Some(format_response) = &self.format_response {
            config.format_response = format_response.clone();
        }
        if let Some(expressions) = &self.expressions {
            match validate_table("expressions", expressions) {
                Ok(()) => config.expressions = expressions.clone(),
                Err(err) => log::warn!("ignoring override: {err}"),
            }
        }
        if let Some(emojis) = &self.emojis {
            match validate_table("emojis", emojis) {
                Ok(()) => config.emojis = emojis.clone(),
                Err(err) => log::warn!("ignoring override: {err}"),
            }
        }
    }
}

/// The decoration tables must stay non-empty; random picks index into
/// them unconditionally.
fn validate_table(field: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(Error::validation(
            "must not be empty",
            Some(field.to_string()),
        ));
    }
    Ok(())
}
