//! Account domain model.

use serde::{Deserialize, Serialize};

/// Role attached to an account, controlling access to admin-only views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Portal sign-in account.
///
/// The password is stored in plaintext: this is demo data living in a local
/// slot store, and the hosting application surfaces it for admin reset flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub first_name: String,
    pub last_name: String,
    /// Unique key, matched case-sensitively.
    pub email: String,
    pub password: String,
    pub role: Role,
    /// Sign-in is refused until the email has been verified.
    #[serde(default)]
    pub verified: bool,
}

impl Account {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::{Account, Role};

    #[test]
    fn account_serializes_with_camel_case_keys_and_lowercase_role() {
        let account = Account {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
            role: Role::Admin,
            verified: true,
        };

        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["role"], "admin");
        assert_eq!(json["verified"], true);
    }

    #[test]
    fn verified_defaults_to_false_when_absent() {
        let account: Account = serde_json::from_str(
            r#"{"firstName":"A","lastName":"B","email":"a@x.com","password":"p","role":"user"}"#,
        )
        .unwrap();
        assert!(!account.verified);
        assert_eq!(account.role, Role::User);
    }
}
