//! # Response Shaping
//!
//! Typed success bodies. `Poem` is the public record shape: the store's
//! internal `_id` key becomes `id` here and nowhere else.

use axum::http::StatusCode;
use serde::Serialize;

use crate::constants;
use crate::store::StoredPoem;

/// Public poem record
#[derive(Debug, Clone, Serialize)]
pub struct Poem {
    pub id: i64,
    pub author: String,
    pub title: String,
    pub poem: Vec<String>,
}

impl From<StoredPoem> for Poem {
    fn from(record: StoredPoem) -> Self {
        Self {
            id: record.id,
            author: record.author,
            title: record.title,
            poem: record.poem,
        }
    }
}

/// Paginated list body
///
/// `next_page` serializes as a number or as an explicit `null`; the key is
/// always present.
#[derive(Debug, Clone, Serialize)]
pub struct PoemList {
    pub poems: Vec<Poem>,
    pub next_page: Option<i64>,
}

/// Success envelope for update and delete
#[derive(Debug, Clone, Serialize)]
pub struct StatusMessage {
    pub msg: &'static str,
    pub status: u16,
}

impl StatusMessage {
    /// Body for a successful update
    pub fn updated() -> Self {
        Self {
            msg: constants::POEM_UPDATED,
            status: StatusCode::OK.as_u16(),
        }
    }

    /// Body for a successful delete
    pub fn deleted() -> Self {
        Self {
            msg: constants::POEM_DELETED,
            status: StatusCode::OK.as_u16(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poem_exposes_public_key() {
        let record = StoredPoem::new(2, "Gabriela Mistral", "Piececitos", vec!["Piececitos de niño,".to_string()]);

        let json = serde_json::to_value(Poem::from(record)).unwrap();
        assert_eq!(json["id"], 2);
        assert!(json.get("_id").is_none());
        assert_eq!(json["title"], "Piececitos");
    }

    #[test]
    fn test_list_serializes_null_next_page() {
        let list = PoemList {
            poems: vec![],
            next_page: None,
        };

        let json = serde_json::to_value(&list).unwrap();
        assert!(json["next_page"].is_null());
        assert_eq!(json["poems"], serde_json::json!([]));
    }

    #[test]
    fn test_list_serializes_numeric_next_page() {
        let list = PoemList {
            poems: vec![],
            next_page: Some(2),
        };

        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["next_page"], 2);
    }

    #[test]
    fn test_status_message_bodies() {
        let updated = serde_json::to_value(StatusMessage::updated()).unwrap();
        assert_eq!(updated["msg"], constants::POEM_UPDATED);
        assert_eq!(updated["status"], 200);

        let deleted = serde_json::to_value(StatusMessage::deleted()).unwrap();
        assert_eq!(deleted["msg"], constants::POEM_DELETED);
        assert_eq!(deleted["status"], 200);
    }
}
