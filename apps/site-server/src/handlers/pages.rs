//! Reader-facing pages: home, database and post detail.

use actix_web::{HttpResponse, web};

use fourrap_core::domain::{CategoryFilter, Post};
use fourrap_core::markdown;
use fourrap_core::view::{Action, Page, ViewState, reduce};
use fourrap_shared::dto::{
    DatabaseQuery, DatabaseResponse, HomeQuery, HomeResponse, PostPageResponse, PostSummary,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn summaries(posts: &[&Post]) -> Vec<PostSummary> {
    posts.iter().map(|post| PostSummary::from(*post)).collect()
}

fn selector(raw: Option<&str>) -> CategoryFilter {
    CategoryFilter::parse_lenient(raw.unwrap_or_default())
}

/// GET /api/home?category=
pub async fn home(
    state: web::Data<AppState>,
    query: web::Query<HomeQuery>,
) -> AppResult<HttpResponse> {
    let filter = selector(query.category.as_deref());
    let view = [Action::GoHome, Action::SetHomeFilter(filter)]
        .into_iter()
        .fold(ViewState::default(), reduce);

    match view.project(&state.catalog) {
        Page::Home { hero, posts } => Ok(HttpResponse::Ok().json(HomeResponse {
            category: filter.to_string(),
            hero: hero.map(PostSummary::from),
            posts: summaries(&posts),
        })),
        _ => Err(AppError::Internal("home view projected another page".into())),
    }
}

/// GET /api/database?q=&category=
pub async fn database(
    state: web::Data<AppState>,
    query: web::Query<DatabaseQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let filter = selector(query.category.as_deref());
    let text = query.q.unwrap_or_default();

    let view = [
        Action::OpenDatabase,
        Action::SetSearch(text.clone()),
        Action::SetDatabaseCategory(filter),
    ]
    .into_iter()
    .fold(ViewState::default(), reduce);

    match view.project(&state.catalog) {
        Page::Database { results } => {
            tracing::debug!(query = %text, category = %filter, hits = results.len(), "Database search");
            Ok(HttpResponse::Ok().json(DatabaseResponse {
                query: text,
                category: filter.to_string(),
                count: results.len(),
                results: summaries(&results),
            }))
        }
        _ => Err(AppError::Internal("database view projected another page".into())),
    }
}

/// GET /api/posts/{slug}
pub async fn post(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let view = reduce(ViewState::default(), Action::OpenPost(path.into_inner()));

    match view.project(&state.catalog) {
        Page::Post { post, related } => {
            let blocks = markdown::render(&post.content);
            let html = markdown::to_html(&blocks);
            Ok(HttpResponse::Ok().json(PostPageResponse {
                summary: PostSummary::from(post),
                content: post.content.clone(),
                blocks,
                html,
                related: summaries(&related),
            }))
        }
        Page::NotFound { slug } => Err(AppError::NotFound(format!("post {} not found", slug))),
        _ => Err(AppError::Internal("post view projected another page".into())),
    }
}
