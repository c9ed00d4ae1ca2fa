//! The immutable post dataset loaded once at startup.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::domain::{CategoryFilter, Post};
use crate::error::DomainError;
use crate::query;

/// Read-only, cheaply cloneable collection of posts in snapshot order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    posts: Arc<[Post]>,
    by_slug: Arc<HashMap<String, usize>>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    ///
    /// When two posts share a slug the first one wins lookups.
    pub fn new(posts: Vec<Post>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(posts.len());
        for post in &posts {
            if !seen.insert(post.id.as_str()) {
                return Err(DomainError::Duplicate(format!("post id {}", post.id)));
            }
        }

        let mut by_slug = HashMap::with_capacity(posts.len());
        for (idx, post) in posts.iter().enumerate() {
            by_slug.entry(post.slug.clone()).or_insert(idx);
        }

        Ok(Self {
            posts: posts.into(),
            by_slug: Arc::new(by_slug),
        })
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Post> {
        self.by_slug.get(slug).map(|idx| &self.posts[*idx])
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Post> {
        query::filter_by_category(&self.posts, filter)
    }

    pub fn search(&self, filter: CategoryFilter, text: &str) -> Vec<&Post> {
        query::search(&self.posts, filter, text)
    }

    pub fn related(&self, reference: &Post) -> Vec<&Post> {
        query::related_posts(&self.posts, reference)
    }
}
