use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

/// A single feed entry. This is also the record shape stored inside the
/// snapshot blob, one JSON array of these per snapshot key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub is_vip: bool,
    pub likes: u64,
    pub comments: Vec<String>,
    pub attachments: Vec<String>,
}

/// The role flag a logged-in client holds. VIP posts are hidden from
/// normal users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Normal,
    Vip,
    Admin,
}

/// Payload for creating a post; id, timestamp and counters are assigned
/// by the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub is_vip: bool,
    #[serde(default)]
    pub attachments: Vec<String>,
}
