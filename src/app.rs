use axum::{response::Html, routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::{contact::rest::contact_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  // Any web client may call this API, credentials included. A literal `*` origin
  // cannot be combined with `Access-Control-Allow-Credentials: true`, so the
  // layer mirrors whatever the request sends instead.
  let cors = CorsLayer::new()
    .allow_origin(AllowOrigin::mirror_request())
    .allow_methods(AllowMethods::mirror_request())
    .allow_headers(AllowHeaders::mirror_request())
    .allow_credentials(true);

  Router::new()
    .route("/", get(index_handler))
    .nest("/api", contact_routes())
    .layer(cors)
    .with_state(state)
}

pub async fn index_handler() -> Html<String> {
  Html("<h1>Portfolio Contact API</h1>".to_string())
}
