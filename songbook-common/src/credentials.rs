//! Static username/password mapping

use std::collections::HashMap;

/// In-memory credential mapping
///
/// Passwords are stored and compared in plain text. The store answers only
/// "match" or "no match"; callers cannot tell an unknown user from a wrong
/// password.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    users: HashMap<String, String>,
}

impl CredentialStore {
    pub fn new(users: HashMap<String, String>) -> Self {
        Self { users }
    }

    /// Exact match of both username and password
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|expected| expected == password)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CredentialStore {
        let mut users = HashMap::new();
        users.insert("fan_ado".to_string(), "12345".to_string());
        CredentialStore::new(users)
    }

    #[test]
    fn test_verify_exact_match() {
        assert!(store().verify("fan_ado", "12345"));
    }

    #[test]
    fn test_verify_rejects_wrong_password_and_unknown_user() {
        let store = store();
        assert!(!store.verify("fan_ado", "123456"));
        assert!(!store.verify("fan_ado", ""));
        assert!(!store.verify("FAN_ADO", "12345"));
        assert!(!store.verify("someone", "12345"));
    }
}
