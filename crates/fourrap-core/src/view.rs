//! Reader-facing view state: which page is shown and with what filters.
//!
//! State changes only through [`reduce`]; [`ViewState::project`] turns a state
//! into the page content drawn from a [`Catalog`].

use crate::catalog::Catalog;
use crate::domain::{CategoryFilter, Post};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Database,
    Post {
        slug: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub view: View,
    pub home_filter: CategoryFilter,
    pub database_search: String,
    pub database_category: CategoryFilter,
    pub filter_panel_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    GoHome,
    OpenDatabase,
    OpenPost(String),
    SetHomeFilter(CategoryFilter),
    SetSearch(String),
    SetDatabaseCategory(CategoryFilter),
    SetFilterPanel(bool),
}

pub fn reduce(state: ViewState, action: Action) -> ViewState {
    match action {
        Action::GoHome => ViewState {
            view: View::Home,
            filter_panel_open: false,
            ..state
        },
        Action::OpenDatabase => ViewState {
            view: View::Database,
            ..state
        },
        Action::OpenPost(slug) => ViewState {
            view: View::Post { slug },
            filter_panel_open: false,
            ..state
        },
        Action::SetHomeFilter(home_filter) => ViewState {
            home_filter,
            ..state
        },
        Action::SetSearch(database_search) => ViewState {
            database_search,
            ..state
        },
        Action::SetDatabaseCategory(database_category) => ViewState {
            database_category,
            ..state
        },
        Action::SetFilterPanel(filter_panel_open) => ViewState {
            filter_panel_open,
            ..state
        },
    }
}

/// Page content for one view.
#[derive(Debug, PartialEq)]
pub enum Page<'a> {
    Home {
        /// Newest post of the current selection.
        hero: Option<&'a Post>,
        posts: Vec<&'a Post>,
    },
    Database {
        results: Vec<&'a Post>,
    },
    Post {
        post: &'a Post,
        related: Vec<&'a Post>,
    },
    NotFound {
        slug: String,
    },
}

impl ViewState {
    pub fn project<'a>(&self, catalog: &'a Catalog) -> Page<'a> {
        match &self.view {
            View::Home => {
                let posts = catalog.filter(self.home_filter);
                Page::Home {
                    hero: posts.first().copied(),
                    posts,
                }
            }
            View::Database => Page::Database {
                results: catalog.search(self.database_category, &self.database_search),
            },
            View::Post { slug } => match catalog.find_by_slug(slug) {
                Some(post) => Page::Post {
                    post,
                    related: catalog.related(post),
                },
                None => Page::NotFound { slug: slug.clone() },
            },
        }
    }
}
