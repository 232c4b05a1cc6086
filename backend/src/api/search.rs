use axum::{
    extract::{Form, State},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::api::server::AppState;
use crate::api::views::SearchMode;
use crate::db::repo;
use crate::error::AppResult;

#[derive(Debug, Deserialize)]
pub struct SearchPayload {
    // A missing field searches for the empty string, which matches everyone.
    #[serde(default)]
    pub search_query: String,
}

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let users = repo::list_users(&state.db).await?;
    Ok(state.views.index(&users)?)
}

pub async fn vulnerable_form(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    Ok(state.views.search_form(SearchMode::Vulnerable)?)
}

/// Runs the concatenated query. Injectable on purpose.
pub async fn search_users_vulnerable(
    State(state): State<Arc<AppState>>,
    Form(payload): Form<SearchPayload>,
) -> AppResult<Html<String>> {
    debug!(search_query = %payload.search_query, "vulnerable search");
    let users = repo::search_users_vulnerable(&state.db, &payload.search_query).await?;
    debug!(found = users.len(), "vulnerable search done");

    Ok(state
        .views
        .search_results(SearchMode::Vulnerable, &payload.search_query, &users)?)
}

pub async fn protected_form(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    Ok(state.views.search_form(SearchMode::Protected)?)
}

pub async fn search_users_protected(
    State(state): State<Arc<AppState>>,
    Form(payload): Form<SearchPayload>,
) -> AppResult<Html<String>> {
    debug!(search_query = %payload.search_query, "protected search");
    let users = repo::search_users_protected(&state.db, &payload.search_query).await?;
    debug!(found = users.len(), "protected search done");

    Ok(state
        .views
        .search_results(SearchMode::Protected, &payload.search_query, &users)?)
}
