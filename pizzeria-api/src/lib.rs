use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use handlers::{ApiDoc, AppState, pizzas_router, restaurant_pizzas_router, restaurants_router};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .merge(restaurants_router())
        .merge(pizzas_router())
        .merge(restaurant_pizzas_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
