use axum::{
    Router,
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use minijinja::context;

use crate::dates;
use crate::db;
use crate::error::ApiError;
use crate::forms::{self, FieldErrors, ItemSubmission};
use crate::state::AppState;

const SAVED_NOTICE: &str = "item saved to database";

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(show_form).post(submit_item))
}

#[tracing::instrument(name = "GET /additem", skip(state))]
async fn show_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render_form(&state, &ItemSubmission::default(), &FieldErrors::default())
}

#[tracing::instrument(name = "POST /additem", skip(state, submission))]
async fn submit_item(
    State(state): State<AppState>,
    Form(submission): Form<ItemSubmission>,
) -> Result<Response, ApiError> {
    let item = match forms::validate_item(&submission) {
        Ok(item) => item,
        Err(errors) => {
            tracing::debug!(?errors, "item submission rejected");
            return Ok(render_form(&state, &submission, &errors)?.into_response());
        }
    };

    let date = dates::normalize(&item.date);
    let record = db::insert_purchase(&state.db, &item, date).await?;
    tracing::info!(id = record.id, product = %item.product, "purchase saved");

    if !state.insert_delay.is_zero() {
        tokio::time::sleep(state.insert_delay).await;
    }

    let location = format!("/?notice={}", urlencoding::encode(SAVED_NOTICE));
    Ok(Redirect::to(&location).into_response())
}

fn render_form(
    state: &AppState,
    values: &ItemSubmission,
    errors: &FieldErrors,
) -> Result<Html<String>, ApiError> {
    let html = state
        .templates
        .get_template("additem.html")?
        .render(context! {
            values => values,
            errors => errors,
            stores => forms::STORE_CHOICES,
            units => forms::UNIT_CHOICES,
        })?;
    Ok(Html(html))
}
