//! Demo login gate and admin session flag.
//!
//! The credential check is a hard-coded constant pair behind a single
//! function so a real backend could replace it without touching callers.
//! This is a demonstration placeholder, not production authentication.
//!
//! The session is an explicit object handed to the components that need it,
//! not ambient global state. The only thing that persists is one boolean
//! ("an admin session is active"), stored as JSON under the user config
//! directory; read at startup, written on login and logout. In test builds
//! persistence is a no-op so tests never touch the real session file.

use serde::{Deserialize, Serialize};
#[cfg(not(test))]
use std::fs;
#[cfg(not(test))]
use std::path::PathBuf;

/// Demo admin credentials. Placeholder only.
pub const DEMO_USERNAME: &str = "gggg";
pub const DEMO_PASSWORD: &str = "123456789";

/// Check a credential pair against the demo constants.
pub fn authenticate(username: &str, password: &str) -> bool {
    username == DEMO_USERNAME && password == DEMO_PASSWORD
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct SessionFile {
    logged_in: bool,
}

#[cfg(not(test))]
fn session_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tripdeck").join("session.json"))
}

/// The admin session flag.
#[derive(Debug, Default)]
pub struct Session {
    logged_in: bool,
}

impl Session {
    /// Start a session from the persisted flag.
    ///
    /// In test builds, always starts logged out to avoid reading the user's
    /// real session file.
    pub fn load() -> Self {
        #[cfg(test)]
        {
            return Session::default();
        }

        #[cfg(not(test))]
        {
            let logged_in = session_file_path()
                .filter(|p| p.exists())
                .and_then(|p| fs::read_to_string(p).ok())
                .and_then(|content| serde_json::from_str::<SessionFile>(&content).ok())
                .map(|file| file.logged_in)
                .unwrap_or(false);
            Session { logged_in }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Attempt a login. On success the flag is set and persisted; on
    /// failure nothing changes and the caller shows an advisory message.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if authenticate(username, password) {
            self.logged_in = true;
            self.persist();
            true
        } else {
            false
        }
    }

    /// Clear the flag and persist the logged-out state.
    pub fn logout(&mut self) {
        self.logged_in = false;
        self.persist();
    }

    fn persist(&self) {
        #[cfg(test)]
        {
            // No-op: tests never write the real session file.
        }

        #[cfg(not(test))]
        {
            let Some(path) = session_file_path() else {
                return;
            };
            if let Some(parent) = path.parent() {
                if fs::create_dir_all(parent).is_err() {
                    return;
                }
            }
            let file = SessionFile {
                logged_in: self.logged_in,
            };
            if let Ok(content) = serde_json::to_string_pretty(&file) {
                let _ = fs::write(&path, content);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_accepts_demo_pair() {
        assert!(authenticate(DEMO_USERNAME, DEMO_PASSWORD));
    }

    #[test]
    fn test_authenticate_rejects_everything_else() {
        assert!(!authenticate("admin", "admin"));
        assert!(!authenticate(DEMO_USERNAME, "wrong"));
        assert!(!authenticate("wrong", DEMO_PASSWORD));
        assert!(!authenticate("", ""));
    }

    #[test]
    fn test_session_starts_logged_out() {
        let session = Session::load();
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_login_success_sets_flag() {
        let mut session = Session::default();
        assert!(session.login(DEMO_USERNAME, DEMO_PASSWORD));
        assert!(session.is_logged_in());
    }

    #[test]
    fn test_login_failure_leaves_flag_clear() {
        let mut session = Session::default();
        assert!(!session.login("nope", "nope"));
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_logout_clears_flag() {
        let mut session = Session::default();
        session.login(DEMO_USERNAME, DEMO_PASSWORD);
        session.logout();
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_session_file_roundtrip() {
        let file = SessionFile { logged_in: true };
        let json = serde_json::to_string(&file).unwrap();
        let back: SessionFile = serde_json::from_str(&json).unwrap();
        assert!(back.logged_in);
    }
}
