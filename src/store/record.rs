//! Poem record type
//!
//! The collection keeps the primary key under the internal name `_id`. Only
//! the response-shaping layer renames it to the public `id`, and it does so
//! exactly once.

use serde::{Deserialize, Serialize};

/// A stored poem record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPoem {
    /// Primary key, assigned by the store at creation
    #[serde(rename = "_id")]
    pub id: i64,

    /// Author name
    pub author: String,

    /// Poem title
    pub title: String,

    /// Poem body, one string per line
    pub poem: Vec<String>,
}

impl StoredPoem {
    /// Create a new record
    pub fn new(
        id: i64,
        author: impl Into<String>,
        title: impl Into<String>,
        poem: Vec<String>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            title: title.into(),
            poem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_key_as_underscore_id() {
        let record = StoredPoem::new(3, "Alfonsina Storni", "Dolor", vec!["Quisiera esta tarde divina de octubre".to_string()]);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["_id"], 3);
        assert!(value.get("id").is_none());
        assert_eq!(value["author"], "Alfonsina Storni");
    }

    #[test]
    fn test_round_trip() {
        let record = StoredPoem::new(
            1,
            "Rubén Darío",
            "Lo fatal",
            vec![
                "Dichoso el árbol, que es apenas sensitivo,".to_string(),
                "y más la piedra dura porque esa ya no siente,".to_string(),
            ],
        );

        let json = serde_json::to_string(&record).unwrap();
        let back: StoredPoem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
