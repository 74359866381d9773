use axum::{
    extract::{Query, State},
    response::Html,
};
use minijinja::context;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IndexParams {
    /// One-shot confirmation banner, carried through the redirect after a
    /// successful submission.
    pub notice: Option<String>,
}

#[tracing::instrument(name = "GET /", skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<Html<String>, ApiError> {
    let html = state
        .templates
        .get_template("index.html")?
        .render(context! { notice => params.notice })?;
    Ok(Html(html))
}
