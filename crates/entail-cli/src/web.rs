//! Embedded static files for the web UI.

use axum::{
    body::Body,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/assets/"]
pub struct Assets;

/// Serve embedded static files, with fallback to index.html.
pub async fn static_handler(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');

    // Try to serve the exact file
    if let Some(content) = Assets::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return asset_response(StatusCode::OK, mime.as_ref(), content.data.into_owned());
    }

    if let Some(content) = Assets::get("index.html") {
        return asset_response(StatusCode::OK, "text/html", content.data.into_owned());
    }

    asset_response(StatusCode::NOT_FOUND, "text/plain", b"Not Found".to_vec())
}

fn asset_response(status: StatusCode, content_type: &str, body: Vec<u8>) -> Response {
    (status, [(header::CONTENT_TYPE, content_type.to_string())], Body::from(body)).into_response()
}
