//! Like counter route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::db::LikeRepository;
use crate::error::Result;
use crate::state::AppState;

/// Like counter fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/like_counter.html")]
pub struct LikeCounterTemplate {
    pub like_count: i64,
}

/// Increment the persisted like counter and return the updated fragment.
#[instrument(skip(state))]
pub async fn like_counter(State(state): State<AppState>) -> Result<LikeCounterTemplate> {
    let like_count = LikeRepository::new(state.pool()).increment().await?;
    Ok(LikeCounterTemplate { like_count })
}
