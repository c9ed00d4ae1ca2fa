//! Data Transfer Objects - request/response types for the API.

use fourrap_core::domain::{Category, Post, PostDraft};
use fourrap_core::markdown::Block;
use serde::{Deserialize, Serialize};

/// Card-sized view of a post, used in listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub date: String,
    pub category: Category,
    pub category_label: String,
    pub tags: Vec<String>,
    pub image_url: String,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            author: post.author.clone(),
            date: post.date.clone(),
            category: post.category,
            category_label: post.category.label().to_string(),
            tags: post.tags.clone(),
            image_url: post.image_url.clone(),
        }
    }
}

/// Query string for the home view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeQuery {
    pub category: Option<String>,
}

/// Home view: the newest post of the selection plus the full list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    pub category: String,
    pub hero: Option<PostSummary>,
    pub posts: Vec<PostSummary>,
}

/// Query string for the database view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseResponse {
    pub query: String,
    pub category: String,
    pub count: usize,
    pub results: Vec<PostSummary>,
}

/// Post detail view with rendered body and related posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPageResponse {
    #[serde(flatten)]
    pub summary: PostSummary,
    pub content: String,
    pub blocks: Vec<Block>,
    pub html: String,
    pub related: Vec<PostSummary>,
}

/// Request to draft a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateDraftRequest {
    pub topic: String,
    pub category: String,
    pub tone: String,
}

/// A generated draft, ready to be saved into the content directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub draft: PostDraft,
    pub file_name: String,
    pub markdown: String,
}
