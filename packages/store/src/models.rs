//! Domain model for user records.
//!
//! [`UserRecord`] is the flat entity exchanged with the remote API and
//! cached locally. The demo API decorates users with nested
//! address/phone/company data; deserialization ignores everything beyond
//! the four fields we own.

use serde::{Deserialize, Serialize};

/// A user as exchanged with the remote API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Assigned by the API on creation; never invented client-side. Omitted
    /// from create payloads while unassigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub username: String,
    pub email: String,
}

impl UserRecord {
    /// Whether the record may be submitted: all three fields filled and the
    /// email syntactically valid.
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.username.trim().is_empty()
            && is_valid_email(&self.email)
    }
}

/// Syntactic email check mirroring the browser's `type="email"` constraint:
/// exactly one `@`, non-empty local part, non-empty dot-separated domain
/// labels, no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("x@x.com"));
        assert!(is_valid_email("john.doe+tag@example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("x@"));
        assert!(!is_valid_email("x y@z.com"));
        assert!(!is_valid_email("x@z..com"));
        assert!(!is_valid_email("x@@z.com"));
    }

    #[test]
    fn submittable_requires_every_field() {
        let full = UserRecord {
            id: None,
            name: "Ada".into(),
            username: "ada".into(),
            email: "ada@example.com".into(),
        };
        assert!(full.is_submittable());

        assert!(!UserRecord { name: "  ".into(), ..full.clone() }.is_submittable());
        assert!(!UserRecord { username: String::new(), ..full.clone() }.is_submittable());
        assert!(!UserRecord { email: "nope".into(), ..full }.is_submittable());
    }
}
