use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Category;

/// Post entity - one published article.
///
/// Created by the ingestion pipeline and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Markdown body.
    pub content: String,
    pub author: String,
    /// ISO 8601 calendar date, kept as authored.
    pub date: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image_url: String,
    /// Frontmatter keys with no dedicated field, passed through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Post {
    /// Publication date, if `date` holds `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub fn published_on(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Deterministic placeholder image keyed by `seed`.
pub fn placeholder_image_url(seed: &str) -> String {
    format!("https://picsum.photos/seed/{}/800/600", seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_dated(date: &str) -> Post {
        Post {
            id: "p".to_string(),
            slug: "p".to_string(),
            title: "P".to_string(),
            excerpt: String::new(),
            content: String::new(),
            author: String::new(),
            date: date.to_string(),
            category: Category::Beats,
            tags: vec![],
            image_url: placeholder_image_url("p.md"),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn test_published_on_accepts_date_and_timestamp() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 15);
        assert_eq!(post_dated("2024-06-15").published_on(), expected);
        assert_eq!(post_dated("2024-06-15T10:00:00Z").published_on(), expected);
        assert_eq!(post_dated("last tuesday").published_on(), None);
        assert_eq!(post_dated("").published_on(), None);
    }

    #[test]
    fn test_extra_fields_round_trip_flattened() {
        let json = r#"{
            "id": "drake",
            "slug": "drake",
            "title": "Drake",
            "excerpt": "",
            "content": "",
            "author": "MC",
            "date": "2024-01-01",
            "category": "RAPPERS",
            "tags": ["toronto"],
            "imageUrl": "https://example.com/d.png",
            "featured": true
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.image_url, "https://example.com/d.png");
        assert_eq!(post.extra.get("featured"), Some(&serde_json::Value::Bool(true)));

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["featured"], serde_json::Value::Bool(true));
        assert_eq!(value["imageUrl"], "https://example.com/d.png");
    }

    #[test]
    fn test_placeholder_is_stable() {
        assert_eq!(
            placeholder_image_url("intro.md"),
            "https://picsum.photos/seed/intro.md/800/600"
        );
        assert_eq!(placeholder_image_url("a.md"), placeholder_image_url("a.md"));
    }
}
