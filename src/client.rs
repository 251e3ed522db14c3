//! Chat client for the remote text-generation API.
//!
//! [`ChatClient`] owns the session identity, the active persona
//! configuration, the cached system instruction, and the conversation
//! log. One call to [`ChatClient::ask`] performs exactly one GET request
//! and is awaited to completion before the next user line is read; there
//! is no overlap between turns and no retry or timeout policy.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use reqwest::header::{self, HeaderValue};
use reqwest::{Client as ReqwestClient, Response, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::config::ConfigStore;
use crate::error::{Error, Result};
use crate::history::ConversationLog;
use crate::instruction::build_instruction;
use crate::persona::{PersonaConfig, PersonaOverrides};
use crate::session::Session;

/// Fixed model identifier sent with every request.
const MODEL_ID: &str = "qwen-max-latest";

/// Fixed generation mode sent with every request.
const MODE_ID: &str = "t2t";

/// Answers shorter than this may receive an expression flourish.
const SHORT_ANSWER_LIMIT: usize = 100;

/// Probability of appending an expression to a short answer.
const EXPRESSION_PROBABILITY: f64 = 0.4;

/// Fallback answer when the success envelope carries no `result`.
const NO_ANSWER: &str = "Tidak ada jawaban";

/// JSON envelope returned by the remote API.
///
/// Every field is optional so that unexpected shapes degrade to the
/// default substitutions instead of failing the turn.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(default)]
    status: Option<i64>,
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

/// Client for one chat session against the remote endpoint.
pub struct ChatClient {
    http: ReqwestClient,
    session: Session,
    config: PersonaConfig,
    /// Derived from `config` and the user name; rebuilt on every config
    /// change.
    instruction: String,
    log: ConversationLog,
    rng: StdRng,
}

impl ChatClient {
    /// Creates a client with an OS-seeded random source.
    pub fn new(config: PersonaConfig, session: Session) -> Result<Self> {
        Self::with_rng(config, session, StdRng::from_os_rng())
    }

    /// Creates a client with an explicit random source.
    ///
    /// Seeding the source makes decoration deterministic, which the
    /// tests rely on.
    pub fn with_rng(config: PersonaConfig, session: Session, rng: StdRng) -> Result<Self> {
        let http = ReqwestClient::builder().build().map_err(|e| {
            Error::http_client(format!("Failed to build HTTP client: {e}"), Some(Box::new(e)))
        })?;
        let instruction = build_instruction(&config, &session.user_name);
        Ok(Self {
            http,
            session,
            config,
            instruction,
            log: ConversationLog::new(),
            rng,
        })
    }

    /// Returns the active persona configuration.
    pub fn config(&self) -> &PersonaConfig {
        &self.config
    }

    /// Returns the session identity.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the conversation log.
    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    /// Returns the current system instruction.
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Applies overrides to the persona, re-derives the instruction, and
    /// persists the result through `store`.
    ///
    /// A failed write is reported and dropped; the in-memory update
    /// always takes effect.
    pub fn update_config(&mut self, overrides: &PersonaOverrides, store: &ConfigStore) {
        if let Some(user_name) = &overrides.user_name {
            self.session.user_name = user_name.clone();
        }
        if let Err(err) = store.update(&mut self.config, overrides) {
            log::warn!(
                "failed to persist config to {}: {err}",
                store.path().display()
            );
        }
        self.instruction = build_instruction(&self.config, &self.session.user_name);
    }

    /// Sends one question and returns the decorated answer.
    ///
    /// Never fails: transport errors, non-200 HTTP statuses, and error
    /// envelopes all come back as user-visible strings. Only a
    /// successful envelope is appended to the conversation log.
    pub async fn ask(&mut self, question: &str) -> String {
        match self.exchange(question).await {
            Ok(answer) => {
                self.log.append(question, &answer);
                self.decorate(answer)
            }
            Err(err) => format!("{} {}", Self::failure_text(&err), self.random_emoji()),
        }
    }

    /// Performs one request/response exchange and returns the raw
    /// answer, with every failure class surfaced as a typed [`Error`].
    async fn exchange(&mut self, question: &str) -> Result<String> {
        let response = self.send_request(question).await?;

        let status = response.status();
        if status != StatusCode::OK {
            // An empty message marks a bare HTTP status failure.
            return Err(Error::api(status.as_u16(), ""));
        }

        let envelope: ApiEnvelope = response.json().await.map_err(|e| {
            Error::serialization(format!("Failed to parse response: {e}"), Some(Box::new(e)))
        })?;

        if envelope.status == Some(200) {
            Ok(envelope.result.unwrap_or_else(|| NO_ANSWER.to_string()))
        } else {
            let code = envelope
                .status
                .and_then(|code| u16::try_from(code).ok())
                .unwrap_or_default();
            let content = envelope
                .content
                .unwrap_or_else(|| "Unknown error".to_string());
            Err(Error::api(code, content))
        }
    }

    /// Renders a failed exchange as the inline reply text, before the
    /// emoji suffix.
    fn failure_text(err: &Error) -> String {
        match err {
            Error::Api {
                status_code,
                message,
            } if message.is_empty() => format!("HTTP Error: {status_code}"),
            Error::Api { message, .. } => format!("Error: {message}"),
            _ => format!("Error: {err}"),
        }
    }

    /// Flushes the conversation log to `path`.
    pub fn save_conversation(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        self.log.flush_to_file(path, &self.session, &self.config)
    }

    /// Appends persona flourishes to a raw answer.
    ///
    /// Short answers get an expression with probability 0.4; an emoji is
    /// appended unless the answer already contains a configured one.
    pub fn decorate(&mut self, answer: String) -> String {
        let mut answer = answer;
        if answer.chars().count() < SHORT_ANSWER_LIMIT
            && self.rng.random::<f64>() < EXPRESSION_PROBABILITY
        {
            let expression = self.random_expression();
            answer = format!("{answer} {expression}");
        }
        if !self
            .config
            .emojis
            .iter()
            .any(|emoji| answer.contains(emoji.as_str()))
        {
            let emoji = self.random_emoji();
            answer = format!("{answer} {emoji}");
        }
        answer
    }

    /// Picks a uniformly random expression template and substitutes the
    /// user name for every `{user}` placeholder.
    pub fn random_expression(&mut self) -> String {
        let index = self.rng.random_range(0..self.config.expressions.len());
        self.config.expressions[index].replace("{user}", &self.session.user_name)
    }

    /// Picks a uniformly random emoji.
    pub fn random_emoji(&mut self) -> String {
        let index = self.rng.random_range(0..self.config.emojis.len());
        self.config.emojis[index].clone()
    }

    fn request_url(&self, question: &str) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_url)?;
        url.query_pairs_mut()
            .append_pair("ask", question)
            .append_pair("style", &self.instruction)
            .append_pair("sessionId", self.session.session_id())
            .append_pair("model", MODEL_ID)
            .append_pair("mode", MODE_ID);
        Ok(url)
    }

    async fn send_request(&self, question: &str) -> Result<Response> {
        let url = self.request_url(question)?;
        log::debug!("GET {url}");
        self.http
            .get(url)
            .header(header::ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    let message = e.to_string();
                    Error::connection(message, Some(Box::new(e)))
                } else {
                    let message = format!("Request failed: {e}");
                    Error::http_client(message, Some(Box::new(e)))
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    /// Serves one canned HTTP response on a fresh local port and returns
    /// the base URL to point the client at.
    async fn spawn_mock(status_line: &str, body: &str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\n\
             content-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        tokio::spawn(async move {
            if let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = [0u8; 8192];
                let _ = stream.read(&mut buf).await;
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });
        format!("http://{addr}")
    }

    fn seeded_client(base_url: &str, seed: u64) -> ChatClient {
        let mut config = PersonaConfig::default();
        config.base_url = base_url.to_string();
        ChatClient::with_rng(
            config,
            Session::with_user_name("wan"),
            StdRng::seed_from_u64(seed),
        )
        .unwrap()
    }

    fn contains_configured_emoji(client: &ChatClient, text: &str) -> bool {
        client
            .config()
            .emojis
            .iter()
            .any(|emoji| text.contains(emoji.as_str()))
    }

    #[tokio::test]
    async fn ask_success_decorates_and_logs() {
        let base = spawn_mock("200 OK", r#"{"status": 200, "result": "Hello"}"#).await;
        let mut client = seeded_client(&base, 7);

        let answer = client.ask("hi").await;
        assert!(answer.starts_with("Hello"));
        assert!(contains_configured_emoji(&client, &answer));
        assert_eq!(client.log().len(), 1);
        assert_eq!(client.log().entries()[0].question, "hi");
        assert_eq!(client.log().entries()[0].answer, "Hello");
    }

    #[tokio::test]
    async fn ask_http_error_reports_status_and_skips_log() {
        let base = spawn_mock("500 Internal Server Error", "oops").await;
        let mut client = seeded_client(&base, 7);

        let answer = client.ask("hi").await;
        assert!(answer.contains("500"));
        assert!(answer.starts_with("HTTP Error:"));
        assert!(client.log().is_empty());
    }

    #[tokio::test]
    async fn ask_envelope_error_uses_content_field() {
        let base = spawn_mock("200 OK", r#"{"status": 403, "content": "Forbidden"}"#).await;
        let mut client = seeded_client(&base, 7);

        let answer = client.ask("hi").await;
        assert!(answer.starts_with("Error:"));
        assert!(answer.contains("Forbidden"));
        assert!(client.log().is_empty());
    }

    #[tokio::test]
    async fn ask_envelope_error_defaults_message() {
        let base = spawn_mock("200 OK", r#"{"status": 418}"#).await;
        let mut client = seeded_client(&base, 7);

        let answer = client.ask("hi").await;
        assert!(answer.contains("Unknown error"));
    }

    #[tokio::test]
    async fn ask_missing_result_uses_no_answer_literal() {
        let base = spawn_mock("200 OK", r#"{"status": 200}"#).await;
        let mut client = seeded_client(&base, 7);

        let answer = client.ask("hi").await;
        assert!(answer.starts_with(NO_ANSWER));
        assert_eq!(client.log().entries()[0].answer, NO_ANSWER);
    }

    /// Binds and immediately drops a listener so the port is known to
    /// refuse connections.
    fn refused_base_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        base
    }

    #[tokio::test]
    async fn ask_transport_failure_becomes_inline_error() {
        let mut client = seeded_client(&refused_base_url(), 7);

        let answer = client.ask("hi").await;
        assert!(answer.starts_with("Error:"));
        assert!(client.log().is_empty());
    }

    #[tokio::test]
    async fn exchange_types_http_status_failures() {
        let base = spawn_mock("500 Internal Server Error", "oops").await;
        let mut client = seeded_client(&base, 7);

        let err = client.exchange("hi").await.unwrap_err();
        assert!(err.is_api());
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(ChatClient::failure_text(&err), "HTTP Error: 500");
    }

    #[tokio::test]
    async fn exchange_types_envelope_failures() {
        let base = spawn_mock("200 OK", r#"{"status": 403, "content": "Forbidden"}"#).await;
        let mut client = seeded_client(&base, 7);

        let err = client.exchange("hi").await.unwrap_err();
        assert!(err.is_api());
        assert_eq!(err.status_code(), Some(403));
        assert_eq!(ChatClient::failure_text(&err), "Error: Forbidden");
    }

    #[tokio::test]
    async fn exchange_types_connection_failures() {
        let mut client = seeded_client(&refused_base_url(), 7);

        let err = client.exchange("hi").await.unwrap_err();
        assert!(err.is_connection());
        assert!(!err.is_api());
        assert_eq!(err.status_code(), None);
    }

    #[tokio::test]
    async fn exchange_types_malformed_bodies() {
        let base = spawn_mock("200 OK", "definitely not json").await;
        let mut client = seeded_client(&base, 7);

        let err = client.exchange("hi").await.unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn random_picks_stay_in_domain() {
        let mut client = seeded_client("http://localhost", 42);
        for _ in 0..500 {
            let emoji = client.random_emoji();
            assert!(client.config().emojis.contains(&emoji));

            let expression = client.random_expression();
            assert!(!expression.contains("{user}"));
            let template_pool: Vec<String> = client
                .config()
                .expressions
                .iter()
                .map(|t| t.replace("{user}", "wan"))
                .collect();
            assert!(template_pool.contains(&expression));
        }
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let mut a = seeded_client("http://localhost", 99);
        let mut b = seeded_client("http://localhost", 99);
        for _ in 0..50 {
            assert_eq!(a.random_expression(), b.random_expression());
            assert_eq!(a.random_emoji(), b.random_emoji());
        }
    }

    #[test]
    fn long_answers_never_get_expressions() {
        let mut client = seeded_client("http://localhost", 3);
        let long = "a".repeat(150);
        for _ in 0..200 {
            let decorated = client.decorate(long.clone());
            let suffix = decorated[long.len()..].trim_start();
            // Only an emoji may follow a long answer.
            assert!(client.config().emojis.contains(&suffix.to_string()));
        }
    }

    #[test]
    fn short_answers_get_expressions_about_forty_percent() {
        let mut client = seeded_client("http://localhost", 11);
        let trials = 5000;
        let mut with_expression = 0;
        for _ in 0..trials {
            let decorated = client.decorate("halo".to_string());
            // Every expression template mentions the user name.
            if decorated.contains("wan") {
                with_expression += 1;
            }
        }
        let rate = with_expression as f64 / trials as f64;
        assert!((0.36..=0.44).contains(&rate), "rate was {rate}");
    }

    #[test]
    fn existing_emoji_suppresses_append() {
        let mut client = seeded_client("http://localhost", 5);
        let emoji = client.config().emojis[0].clone();
        let answer = format!("{} {emoji}", "a".repeat(150));
        let decorated = client.decorate(answer.clone());
        assert_eq!(decorated, answer);
    }

    #[test]
    fn decorated_answer_has_exactly_one_emoji_appended() {
        let mut client = seeded_client("http://localhost", 5);
        let answer = "a".repeat(150);
        let decorated = client.decorate(answer.clone());
        let suffix = decorated[answer.len()..].trim_start();
        assert!(client.config().emojis.contains(&suffix.to_string()));
    }

    #[test]
    fn request_url_carries_fixed_parameters() {
        let client = seeded_client("http://localhost/api", 1);
        let url = client.request_url("halo dunia").unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("ask=halo+dunia") || query.contains("ask=halo%20dunia"));
        assert!(query.contains("model=qwen-max-latest"));
        assert!(query.contains("mode=t2t"));
        assert!(query.contains(&format!("sessionId={}", client.session().session_id())));
        assert!(query.contains("style="));
    }

    #[test]
    fn update_config_rebuilds_instruction_and_user_name() {
        let store = ConfigStore::at_path(std::env::temp_dir().join(format!(
            "animechat-client-{}.json",
            uuid::Uuid::new_v4().simple()
        )));
        let mut client = seeded_client("http://localhost", 1);
        let before = client.instruction().to_string();

        let overrides = PersonaOverrides {
            name: Some("Rei".to_string()),
            user_name: Some("shinji".to_string()),
            ..PersonaOverrides::default()
        };
        client.update_config(&overrides, &store);

        assert_ne!(client.instruction(), before);
        assert!(client.instruction().contains("Rei"));
        assert!(client.instruction().contains("shinji-kun"));
        assert_eq!(client.session().user_name, "shinji");

        let _ = std::fs::remove_file(store.path());
    }
}
