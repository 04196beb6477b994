use crate::dto::{DigRequest, DigResponse, SlashCommandForm};
use crate::state::AppState;
use axum::extract::{Form, State};
use axum::Json;
use tracing::instrument;

#[instrument(skip_all, name = "api_dig")]
pub async fn dig(State(state): State<AppState>, Json(req): Json<DigRequest>) -> Json<DigResponse> {
    Json(state.dig.execute(req.into()).await)
}

#[instrument(skip_all, name = "api_slash_dig")]
pub async fn slash_dig(
    State(state): State<AppState>,
    Form(form): Form<SlashCommandForm>,
) -> Json<DigResponse> {
    Json(state.dig.execute(form.into()).await)
}
