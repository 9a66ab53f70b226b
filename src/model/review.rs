//! Wire-shaped review types decoded from the backing JSON document.
//!
//! The backing source produces a document shaped as
//! `{ "items": [Review, ...], "count": n }` where `count` is the total
//! number of reviews available across all pages, independent of how many
//! have been fetched so far. These types are immutable once decoded and
//! are discarded after row construction.

use serde::{Deserialize, Serialize};

/// One raw review as it appears on the wire.
///
/// Immutable once decoded. `created` is an opaque display string - the
/// engine never interprets it as a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Star rating, expected in 1..=5. Out-of-range values are clamped
    /// at row construction, not rejected at decode time.
    pub rating: u8,
    /// Author first name.
    pub first_name: String,
    /// Author last name.
    pub last_name: String,
    /// Review body text. May be empty.
    pub text: String,
    /// Creation timestamp, display-only.
    pub created: String,
    /// Optional avatar resource locator.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Optional ordered list of photo resource locators.
    #[serde(default, rename = "photo_url")]
    pub photo_urls: Option<Vec<String>>,
}

/// One fetched batch of reviews plus the overall total count.
///
/// # Invariants
///
/// - `count` is stable across batches from the same source.
/// - `items.len()` per batch is at most [`crate::provider::PAGE_SIZE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewBatch {
    /// Reviews in this batch, in source order.
    pub items: Vec<Review>,
    /// Total number of reviews available across all batches.
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_review() {
        let json = r#"{
            "rating": 4,
            "first_name": "Mara",
            "last_name": "Ellison",
            "text": "Great service",
            "created": "12 May 2024",
            "avatar_url": "https://example.com/a.png",
            "photo_url": ["https://example.com/p1.png", "https://example.com/p2.png"]
        }"#;

        let review: Review = serde_json::from_str(json).expect("valid review");
        assert_eq!(review.rating, 4);
        assert_eq!(review.first_name, "Mara");
        assert_eq!(review.last_name, "Ellison");
        assert_eq!(review.text, "Great service");
        assert_eq!(review.created, "12 May 2024");
        assert_eq!(review.avatar_url.as_deref(), Some("https://example.com/a.png"));
        assert_eq!(review.photo_urls.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let json = r#"{
            "rating": 5,
            "first_name": "Jo",
            "last_name": "Park",
            "text": "",
            "created": "today"
        }"#;

        let review: Review = serde_json::from_str(json).expect("valid review");
        assert_eq!(review.avatar_url, None);
        assert_eq!(review.photo_urls, None);
    }

    #[test]
    fn decodes_batch_with_count() {
        let json = r#"{
            "items": [
                {"rating": 3, "first_name": "A", "last_name": "B", "text": "ok", "created": "now"}
            ],
            "count": 45
        }"#;

        let batch: ReviewBatch = serde_json::from_str(json).expect("valid batch");
        assert_eq!(batch.items.len(), 1);
        assert_eq!(batch.count, 45);
    }

    #[test]
    fn rejects_document_missing_count() {
        let json = r#"{"items": []}"#;
        let result: Result<ReviewBatch, _> = serde_json::from_str(json);
        assert!(result.is_err(), "count is required");
    }

    #[test]
    fn batch_roundtrips_through_json() {
        let batch = ReviewBatch {
            items: vec![Review {
                rating: 2,
                first_name: "Sam".to_string(),
                last_name: "Oduya".to_string(),
                text: "meh".to_string(),
                created: "1 Jan 2024".to_string(),
                avatar_url: None,
                photo_urls: None,
            }],
            count: 1,
        };

        let encoded = serde_json::to_string(&batch).expect("encodes");
        let decoded: ReviewBatch = serde_json::from_str(&encoded).expect("decodes");
        assert_eq!(decoded, batch);
    }
}
