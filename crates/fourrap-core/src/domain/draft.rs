use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Category, placeholder_image_url};
use crate::slug::simple_slug;

/// Author recorded on machine-written drafts.
pub const AI_AUTHOR: &str = "AI GEN";

/// Input for the draft generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorParams {
    pub topic: String,
    pub category: Category,
    pub tone: String,
}

/// Structured payload returned by the generation model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub tags: Vec<String>,
    pub suggested_image_query: String,
}

/// A generated post with the fields the site derives on top of the model output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub tags: Vec<String>,
    pub suggested_image_query: String,
    pub date: String,
    pub author: String,
    pub category: Category,
    pub slug: String,
    pub image_url: String,
}

impl PostDraft {
    /// Derive the draft for `generated`, dated `today`.
    pub fn from_generated(generated: GeneratedPost, category: Category, today: NaiveDate) -> Self {
        let slug = simple_slug(&generated.title);
        let seed: String = generated
            .suggested_image_query
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        Self {
            date: today.format("%Y-%m-%d").to_string(),
            author: AI_AUTHOR.to_string(),
            category,
            slug,
            image_url: placeholder_image_url(&seed),
            title: generated.title,
            excerpt: generated.excerpt,
            content: generated.content,
            tags: generated.tags,
            suggested_image_query: generated.suggested_image_query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated() -> GeneratedPost {
        GeneratedPost {
            title: "KENDRICK VS DRAKE: Kdo Vyhrál?".to_string(),
            excerpt: "Beef roku.".to_string(),
            content: "## Úvod\nText".to_string(),
            tags: vec!["beef".into(), "kendrick".into(), "drake".into(), "diss".into(), "2024".into()],
            suggested_image_query: "rap battle stage lights".to_string(),
        }
    }

    #[test]
    fn test_draft_derives_site_fields() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let draft = PostDraft::from_generated(generated(), Category::Rappers, today);

        assert_eq!(draft.date, "2026-03-07");
        assert_eq!(draft.author, AI_AUTHOR);
        assert_eq!(draft.category, Category::Rappers);
        assert_eq!(draft.slug, "kendrick-vs-drake-kdo-vyhrl");
        assert_eq!(
            draft.image_url,
            "https://picsum.photos/seed/rapbattlestagelights/800/600"
        );
        assert_eq!(draft.tags.len(), 5);
    }

    #[test]
    fn test_generated_post_uses_camel_case_schema() {
        let json = r#"{
            "title": "T",
            "excerpt": "E",
            "content": "C",
            "tags": ["a"],
            "suggestedImageQuery": "mic"
        }"#;
        let parsed: GeneratedPost = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.suggested_image_query, "mic");
    }
}
