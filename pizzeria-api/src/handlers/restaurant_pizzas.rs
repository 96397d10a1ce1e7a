use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
    routing::post,
};
use pizzeria_store::{models::NewRestaurantPizza, store};
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::models::*;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/restaurant_pizzas", post(create_restaurant_pizza))
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Pizza listed at the restaurant", body = RestaurantPizzaResponse),
        (status = 400, description = "Invalid price, malformed body or unknown restaurant/pizza", body = ValidationErrorResponse),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument(skip(state))]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    payload: Result<Json<CreateRestaurantPizzaRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaResponse>), ApiError> {
    let Json(payload) = payload.map_err(|e| {
        debug!(error = %e, "rejected restaurant pizza payload");
        ApiError::Validation
    })?;

    let new_restaurant_pizza =
        NewRestaurantPizza::new(payload.price, payload.restaurant_id, payload.pizza_id)?;

    let created = state
        .run(move |conn| store::insert_restaurant_pizza(conn, &new_restaurant_pizza))
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}
