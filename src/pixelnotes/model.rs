use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One saved note.
///
/// `updated` travels on the wire as integer milliseconds since the
/// epoch, so blobs written by other frontends of the same store stay
/// readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated: DateTime<Utc>,
}

impl Note {
    pub fn new(title: String, body: String, updated: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            body,
            updated,
        }
    }

    /// Title as shown in listings; blank titles get a placeholder.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(untitled)"
        } else {
            &self.title
        }
    }
}
