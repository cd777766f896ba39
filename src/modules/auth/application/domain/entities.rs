use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered account. The password exists only as a salted one-way hash;
/// the plaintext is never persisted anywhere.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub contact: Option<String>,
    pub created_at: DateTime<Utc>,
}
