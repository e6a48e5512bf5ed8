use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::shell::{Result, Shell, ShellError, View, ViewQuery, render_view};

pub fn create_router(shell: Arc<Shell>, assets_dir: &Path) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/vcub", get(bike_share))
        .route("/reseau", get(network))
        .route("/health", get(health))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(shell)
}

impl IntoResponse for ShellError {
    fn into_response(self) -> Response {
        tracing::error!("{self}");
        (StatusCode::INTERNAL_SERVER_ERROR, "La page n'a pas pu être affichée.").into_response()
    }
}

async fn render(shell: Arc<Shell>, view: View, query: ViewQuery) -> Result<Html<String>> {
    let page = tokio::task::spawn_blocking(move || render_view(view, &query, &*shell)).await?;
    Ok(Html(page.into_html()))
}

async fn home(State(shell): State<Arc<Shell>>) -> Result<Html<String>> {
    render(shell, View::Home, ViewQuery::default()).await
}

async fn bike_share(
    State(shell): State<Arc<Shell>>,
    Query(query): Query<ViewQuery>,
) -> Result<Html<String>> {
    render(shell, View::BikeShare, query).await
}

async fn network(State(shell): State<Arc<Shell>>) -> Result<Html<String>> {
    render(shell, View::Network, ViewQuery::default()).await
}

async fn health() -> &'static str {
    "OK"
}
