//! In-memory query engine over post collections.
//!
//! Every function here is pure: inputs are borrowed, results borrow from the
//! input slice and keep its order unless stated otherwise.

use crate::domain::{CategoryFilter, Post};

/// Maximum number of related posts returned for one reference post.
pub const RELATED_LIMIT: usize = 3;

const SAME_CATEGORY_SCORE: u32 = 2;

/// Posts whose category matches `filter`. `All` returns every post.
pub fn filter_by_category(posts: &[Post], filter: CategoryFilter) -> Vec<&Post> {
    posts.iter().filter(|p| filter.matches(p.category)).collect()
}

/// Category filter combined with a case-insensitive substring match on
/// title, excerpt, tags and author. An empty query matches everything.
pub fn search<'a>(posts: &'a [Post], filter: CategoryFilter, query: &str) -> Vec<&'a Post> {
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|p| filter.matches(p.category) && matches_text(p, &needle))
        .collect()
}

fn matches_text(post: &Post, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let hit = |field: &str| field.to_lowercase().contains(needle);

    hit(&post.title)
        || hit(&post.excerpt)
        || post.tags.iter().any(|t| hit(t))
        || hit(&post.author)
}

/// Relevance of `candidate` to `reference`: 2 for a shared category plus 1
/// for every candidate tag the reference also carries.
pub fn relatedness_score(reference: &Post, candidate: &Post) -> u32 {
    let category = if candidate.category == reference.category {
        SAME_CATEGORY_SCORE
    } else {
        0
    };
    let shared_tags = candidate.tags.iter().filter(|t| reference.has_tag(t)).count() as u32;

    category + shared_tags
}

/// Up to [`RELATED_LIMIT`] posts most related to `reference`.
///
/// The reference itself and zero-score candidates are excluded. Equal scores
/// keep collection order.
pub fn related_posts<'a>(posts: &'a [Post], reference: &Post) -> Vec<&'a Post> {
    let mut scored: Vec<(u32, &Post)> = posts
        .iter()
        .filter(|p| p.id != reference.id)
        .map(|p| (relatedness_score(reference, p), p))
        .filter(|(score, _)| *score > 0)
        .collect();

    // stable: ties stay in collection order
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(RELATED_LIMIT)
        .map(|(_, p)| p)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::{Category, placeholder_image_url};

    fn post(id: &str, category: Category, tags: &[&str]) -> Post {
        Post {
            id: id.to_string(),
            slug: id.to_string(),
            title: format!("Title {id}"),
            excerpt: format!("Excerpt {id}"),
            content: String::new(),
            author: "Redakce".to_string(),
            date: "2024-01-01".to_string(),
            category,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image_url: placeholder_image_url(id),
            extra: BTreeMap::new(),
        }
    }

    fn ids(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.id.clone()).collect()
    }

    fn sample() -> Vec<Post> {
        let mut drake = post("drake", Category::Rappers, &["toronto", "ovo"]);
        drake.title = "Drake vydal nové album".to_string();
        let mut fl = post("fl-studio", Category::Tutorials, &["daw", "mixing"]);
        fl.author = "Beatmaker Pepa".to_string();
        let mut boom = post("boom-bap", Category::Beats, &["Drumkit", "90s"]);
        boom.excerpt = "Klasický zvuk".to_string();
        let kendrick = post("kendrick", Category::Rappers, &["compton"]);
        vec![drake, fl, boom, kendrick]
    }

    #[test]
    fn test_filter_all_is_identity() {
        let posts = sample();
        let all = filter_by_category(&posts, CategoryFilter::All);
        assert_eq!(all.len(), posts.len());
        assert!(all.iter().zip(posts.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filter_only_returns_category() {
        let posts = sample();
        let rappers = filter_by_category(&posts, Category::Rappers.into());
        assert_eq!(ids(&rappers), vec!["drake", "kendrick"]);
        assert!(rappers.iter().all(|p| p.category == Category::Rappers));
    }

    #[test]
    fn test_empty_search_equals_filter() {
        let posts = sample();
        for filter in [
            CategoryFilter::All,
            CategoryFilter::Only(Category::Rappers),
            CategoryFilter::Only(Category::Beats),
        ] {
            assert_eq!(search(&posts, filter, ""), filter_by_category(&posts, filter));
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let posts = sample();
        let upper = search(&posts, CategoryFilter::All, "DRAKE");
        let lower = search(&posts, CategoryFilter::All, "drake");
        assert_eq!(upper, lower);
        assert_eq!(ids(&upper), vec!["drake"]);
    }

    #[test]
    fn test_search_covers_excerpt_tags_and_author() {
        let posts = sample();
        assert_eq!(ids(&search(&posts, CategoryFilter::All, "klasick")), vec!["boom-bap"]);
        assert_eq!(ids(&search(&posts, CategoryFilter::All, "drumkit")), vec!["boom-bap"]);
        assert_eq!(ids(&search(&posts, CategoryFilter::All, "pepa")), vec!["fl-studio"]);
        assert!(search(&posts, CategoryFilter::All, "content-only").is_empty());
    }

    #[test]
    fn test_search_respects_category() {
        let posts = sample();
        let hits = search(&posts, Category::Beats.into(), "title");
        assert_eq!(ids(&hits), vec!["boom-bap"]);
    }

    #[test]
    fn test_relatedness_scores() {
        let reference = post("ref", Category::Rappers, &["a", "b", "c"]);
        assert_eq!(relatedness_score(&reference, &post("x", Category::Rappers, &[])), 2);
        assert_eq!(relatedness_score(&reference, &post("x", Category::Rappers, &["a", "c"])), 4);
        assert_eq!(relatedness_score(&reference, &post("x", Category::Beats, &["b", "z"])), 1);
        assert_eq!(relatedness_score(&reference, &post("x", Category::Beats, &["z"])), 0);
    }

    #[test]
    fn test_related_excludes_reference_and_zero_scores() {
        let reference = post("ref", Category::Rappers, &["a"]);
        let posts = vec![
            reference.clone(),
            post("beats", Category::Beats, &["z"]),
            post("same", Category::Rappers, &[]),
        ];
        let related = related_posts(&posts, &reference);
        assert_eq!(ids(&related), vec!["same"]);
    }

    #[test]
    fn test_related_ranks_and_limits() {
        let reference = post("ref", Category::Rappers, &["a", "b"]);
        let posts = vec![
            post("one", Category::Beats, &["a"]),
            post("two", Category::Rappers, &[]),
            post("four", Category::Rappers, &["a", "b"]),
            reference.clone(),
            post("three", Category::Rappers, &["b"]),
            post("two-later", Category::Rappers, &[]),
        ];
        let related = related_posts(&posts, &reference);
        assert_eq!(related.len(), RELATED_LIMIT);
        assert_eq!(ids(&related), vec!["four", "three", "two"]);
    }

    #[test]
    fn test_related_ties_keep_collection_order() {
        let reference = post("ref", Category::Tutorials, &[]);
        let posts = vec![
            post("first", Category::Tutorials, &[]),
            post("second", Category::Tutorials, &[]),
            post("third", Category::Tutorials, &[]),
            post("fourth", Category::Tutorials, &[]),
        ];
        assert_eq!(
            ids(&related_posts(&posts, &reference)),
            vec!["first", "second", "third"]
        );
    }
}
