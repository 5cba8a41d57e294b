use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Papel do usuário na plataforma
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Viewer,
    Partner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Viewer => "viewer",
            Role::Partner => "partner",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Documento da collection `users`
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,  // bcrypt hash, nunca texto puro
    pub name: String,
    pub role: Role,
    // Credenciais de APIs externas: gravadas como null na criação
    pub openai_api_key: Option<String>,
    pub pincode_api_url: Option<String>,
    pub pincode_api_key: Option<String>,
    pub created_at: String,  // ISO-8601 UTC, microseconds
}

impl User {
    /// New record with a fresh id, `created_at` set to now and no API credentials.
    pub fn new(email: &str, name: &str, role: Role, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            password: password_hash,
            name: name.to_string(),
            role,
            openai_api_key: None,
            pincode_api_url: None,
            pincode_api_key: None,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use mongodb::bson::{self, Bson};

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("admin@test.com", "Admin User", Role::Admin, "$2b$hash".to_string());

        assert_eq!(user.email, "admin@test.com");
        assert_eq!(user.role, Role::Admin);
        assert!(Uuid::parse_str(&user.id).is_ok());
        assert!(user.openai_api_key.is_none());
        assert!(user.pincode_api_url.is_none());
        assert!(user.pincode_api_key.is_none());

        let created = DateTime::parse_from_rfc3339(&user.created_at).unwrap();
        assert_eq!(created.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_created_at_has_microsecond_precision() {
        let user = User::new("viewer@test.com", "Viewer User", Role::Viewer, String::new());

        assert!(user.created_at.ends_with("+00:00"), "{}", user.created_at);
        let (_, fraction) = user.created_at.split_once('.').unwrap();
        let digits = fraction.trim_end_matches("+00:00");
        assert_eq!(digits.len(), 6, "{}", user.created_at);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = User::new("a@test.com", "A", Role::Viewer, String::new());
        let b = User::new("a@test.com", "A", Role::Viewer, String::new());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_document_shape() {
        let user = User::new("partner@test.com", "Partner User", Role::Partner, "$2b$hash".to_string());
        let doc = bson::to_document(&user).unwrap();

        assert_eq!(doc.get_str("role").unwrap(), "partner");
        assert_eq!(doc.get_str("email").unwrap(), "partner@test.com");
        assert_eq!(doc.get("openai_api_key"), Some(&Bson::Null));
        assert_eq!(doc.get("pincode_api_url"), Some(&Bson::Null));
        assert_eq!(doc.get("pincode_api_key"), Some(&Bson::Null));
        assert!(doc.get_str("created_at").is_ok());
    }

    #[test]
    fn test_deserialize_ignores_mongo_id() {
        let mut doc = bson::to_document(&User::new("viewer@test.com", "Viewer User", Role::Viewer, "h".into())).unwrap();
        doc.insert("_id", bson::oid::ObjectId::new());

        let user: User = bson::from_document(doc).unwrap();
        assert_eq!(user.role, Role::Viewer);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Viewer.to_string(), "viewer");
        assert_eq!(Role::Partner.to_string(), "partner");
    }
}
