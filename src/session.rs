//! Per-process session identity.

use uuid::Uuid;

/// Default nickname used when the user does not pick one.
pub const DEFAULT_USER_NAME: &str = "codewithwan";

/// One process run's identity: a unique session token plus the user's
/// chosen nickname.
///
/// The session id is generated once at construction and never changes.
/// `user_name` is the only mutable field; it can be replaced through the
/// configuration wizard.
#[derive(Debug, Clone)]
pub struct Session {
    session_id: String,
    /// Nickname the persona addresses the user by.
    pub user_name: String,
}

impl Session {
    /// Creates a session with a fresh unique id and the default nickname.
    pub fn new() -> Self {
        Self::with_user_name(DEFAULT_USER_NAME)
    }

    /// Creates a session with a fresh unique id and the given nickname.
    pub fn with_user_name(user_name: impl Into<String>) -> Self {
        let token = Uuid::new_v4().simple().to_string();
        Self {
            session_id: format!("session-{}", &token[..8]),
            user_name: user_name.into(),
        }
    }

    /// Returns the opaque session token.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_format() {
        let session = Session::new();
        assert!(session.session_id().starts_with("session-"));
        assert_eq!(session.session_id().len(), "session-".len() + 8);
        assert_eq!(session.user_name, DEFAULT_USER_NAME);
    }

    #[test]
    fn session_ids_are_unique() {
        let a = Session::new();
        let b = Session::new();
        assert_ne!(a.session_id(), b.session_id());
    }

    #[test]
    fn custom_user_name() {
        let session = Session::with_user_name("wan");
        assert_eq!(session.user_name, "wan");
    }
}
