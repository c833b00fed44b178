//! Page requests: everything that is not part of the API.
//!
//! The address-bar location goes through the history strategy, then the
//! route table. Unmatched locations get the not-found page with a 404.

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::http::error::AppError;
use crate::http::request::RequestIdExt;
use crate::http::server::AppState;
use crate::observability::metrics;

pub async fn page(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, AppError> {
    if method != Method::GET && method != Method::HEAD {
        return Err(AppError::MethodNotAllowed);
    }

    let request_id = headers.request_id();
    let location = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let resolved = state
        .router
        .history()
        .path_from(location)
        .and_then(|path| state.router.resolve(&path));

    match resolved {
        Some(matched) => {
            tracing::debug!(
                request_id = %request_id,
                route = %matched.name,
                path = %matched.path,
                "Rendering page"
            );
            metrics::record_page_view(&matched.name);
            let html = state.views.render(&state.router, &matched, &state.book)?;
            Ok(Html(html).into_response())
        }
        None => {
            tracing::warn!(request_id = %request_id, location = %location, "No route matched");
            metrics::record_not_found();
            let html = state.views.render_not_found(&state.router, uri.path())?;
            Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
        }
    }
}
