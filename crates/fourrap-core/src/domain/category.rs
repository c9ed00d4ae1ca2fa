use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Content category. The set is closed; nothing else is a valid category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Rappers,
    Tutorials,
    Beats,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Rappers, Category::Tutorials, Category::Beats];

    /// Wire name as stored in frontmatter and the snapshot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Rappers => "RAPPERS",
            Category::Tutorials => "TUTORIALS",
            Category::Beats => "BEATS",
        }
    }

    /// Display label shown to readers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Rappers => "RAPEŘI",
            Category::Tutorials => "NÁVODY",
            Category::Beats => "BEATY",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RAPPERS" => Ok(Category::Rappers),
            "TUTORIALS" => Ok(Category::Tutorials),
            "BEATS" => Ok(Category::Beats),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Category selector used by the filter and search queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a selector. `"ALL"`, an empty string and anything unrecognized
    /// select every category.
    pub fn parse_lenient(selector: &str) -> Self {
        selector
            .parse::<Category>()
            .map(CategoryFilter::Only)
            .unwrap_or(CategoryFilter::All)
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl From<Option<Category>> for CategoryFilter {
    fn from(category: Option<Category>) -> Self {
        category.map_or(CategoryFilter::All, CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("ALL"),
            CategoryFilter::Only(category) => category.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_case_insensitive() {
        assert_eq!("beats".parse::<Category>(), Ok(Category::Beats));
        assert_eq!(" Rappers ".parse::<Category>(), Ok(Category::Rappers));
        assert!("NEWS".parse::<Category>().is_err());
    }

    #[test]
    fn test_filter_parse_is_permissive() {
        assert_eq!(CategoryFilter::parse_lenient("ALL"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse_lenient(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse_lenient("GOSSIP"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse_lenient("TUTORIALS"),
            CategoryFilter::Only(Category::Tutorials)
        );
    }

    #[test]
    fn test_category_serializes_uppercase() {
        let json = serde_json::to_string(&Category::Tutorials).unwrap();
        assert_eq!(json, "\"TUTORIALS\"");
        let back: Category = serde_json::from_str("\"BEATS\"").unwrap();
        assert_eq!(back, Category::Beats);
    }
}
