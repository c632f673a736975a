//! User - Authenticated User Record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record as returned by the backend auth collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Backend record ID
    pub id: String,
    /// Email address used for sign-in
    pub email: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Whether the email address is verified
    #[serde(default)]
    pub verified: bool,
    /// Record creation timestamp
    #[serde(default = "Utc::now")]
    pub created_time: DateTime<Utc>,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: String::new(),
            email: String::new(),
            name: String::new(),
            verified: false,
            created_time: Utc::now(),
        }
    }
}

impl User {
    /// Name to show in the UI, falling back to the email local part
    pub fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            return &self.name;
        }
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_email_local_part() {
        let user = User {
            email: "ada@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "ada");

        let named = User {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(named.display_name(), "Ada");
    }
}
