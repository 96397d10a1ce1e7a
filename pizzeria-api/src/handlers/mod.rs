pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;

pub use pizzas::router as pizzas_router;
pub use restaurant_pizzas::router as restaurant_pizzas_router;
pub use restaurants::router as restaurants_router;

use axum::response::Html;
use pizzeria_store::{DbPool, SqliteConnection, StoreError};
use utoipa::OpenApi;

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Runs a blocking store operation on a pooled connection off the async
    /// runtime.
    pub async fn run<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T, StoreError> + Send + 'static,
    {
        let pool = self.pool.clone();
        let result = tokio::task::spawn_blocking(move || -> Result<T, StoreError> {
            let mut conn = pool.get()?;
            f(&mut *conn)
        })
        .await
        .map_err(|e| ApiError::InternalError(format!("Storage task failed: {e}")))?;

        Ok(result?)
    }
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting page", content_type = "text/html", body = String),
    ),
    tag = "root"
)]
pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

#[derive(OpenApi)]
#[openapi(
    paths(
        index,
        restaurants::list_restaurants,
        restaurants::get_restaurant,
        restaurants::delete_restaurant,
        pizzas::list_pizzas,
        restaurant_pizzas::create_restaurant_pizza,
    ),
    components(
        schemas(
            crate::models::RestaurantSummary,
            crate::models::RestaurantDetail,
            crate::models::RestaurantPizzaDetail,
            crate::models::PizzaSummary,
            crate::models::CreateRestaurantPizzaRequest,
            crate::models::RestaurantPizzaResponse,
            crate::models::ApiErrorResponse,
            crate::models::ValidationErrorResponse
        )
    ),
    tags(
        (name = "root", description = "Landing page"),
        (name = "restaurants", description = "Restaurant endpoints"),
        (name = "pizzas", description = "Pizza endpoints"),
        (name = "restaurant_pizzas", description = "Pizza listings with prices")
    ),
    info(
        title = "Pizzeria API",
        description = "Restaurants, pizzas and the prices restaurants list them at",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
