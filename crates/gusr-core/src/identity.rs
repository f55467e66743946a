use serde::{Deserialize, Serialize};

/// One stored Git author profile. An empty `gpg_key` means the user signs
/// nothing; the field is still serialized so the stored shape stays stable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GitUser {
    pub name: String,
    pub email: String,
    #[serde(rename = "gpgKey", default)]
    pub gpg_key: String,
}

impl GitUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            gpg_key: String::new(),
        }
    }

    pub fn with_gpg_key(mut self, key: impl Into<String>) -> Self {
        self.gpg_key = key.into();
        self
    }

    pub fn has_gpg_key(&self) -> bool {
        !self.gpg_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_with_camel_case_key_field() {
        let user = GitUser::new("Alice", "alice@example.com");
        let json = serde_json::to_string(&user).expect("serialize");
        assert_eq!(
            json,
            r#"{"name":"Alice","email":"alice@example.com","gpgKey":""}"#
        );
    }

    #[test]
    fn deserializes_without_key_field() {
        let user: GitUser =
            serde_json::from_str(r#"{"name":"Bob","email":"bob@example.com"}"#).expect("parse");
        assert_eq!(user.name, "Bob");
        assert!(!user.has_gpg_key());
    }

    #[test]
    fn round_trip_preserves_order_and_fields() {
        let users = vec![
            GitUser::new("Alice", "alice@example.com").with_gpg_key("ABCD1234"),
            GitUser::new("Bob", "bob@example.com"),
            GitUser::new("Alice", "alice@work.example"),
        ];
        let json = serde_json::to_string(&users).expect("serialize");
        let parsed: Vec<GitUser> = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed, users);
    }
}
