use pizzeria_store::models::{
    CreatedRestaurantPizza, Pizza, Restaurant, RestaurantPizza, RestaurantWithPizzas,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantSummary {
    /// Unique identifier for the restaurant
    pub id: i32,
    /// Name of the restaurant
    pub name: String,
    /// Address of the restaurant
    pub address: String,
}

impl From<Restaurant> for RestaurantSummary {
    fn from(r: Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            address: r.address,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PizzaSummary {
    /// Unique identifier for the pizza
    pub id: i32,
    /// Name of the pizza
    pub name: String,
    /// Comma separated list of ingredients
    pub ingredients: String,
}

impl From<Pizza> for PizzaSummary {
    fn from(p: Pizza) -> Self {
        Self {
            id: p.id,
            name: p.name,
            ingredients: p.ingredients,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaDetail {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaSummary,
}

impl From<(RestaurantPizza, Pizza)> for RestaurantPizzaDetail {
    fn from((rp, pizza): (RestaurantPizza, Pizza)) -> Self {
        Self {
            id: rp.id,
            price: rp.price,
            pizza_id: rp.pizza_id,
            restaurant_id: rp.restaurant_id,
            pizza: pizza.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantDetail {
    pub id: i32,
    pub name: String,
    pub address: String,
    /// Pizzas listed at this restaurant along with their prices
    pub restaurant_pizzas: Vec<RestaurantPizzaDetail>,
}

impl From<RestaurantWithPizzas> for RestaurantDetail {
    fn from(r: RestaurantWithPizzas) -> Self {
        Self {
            id: r.restaurant.id,
            name: r.restaurant.name,
            address: r.restaurant.address,
            restaurant_pizzas: r
                .restaurant_pizzas
                .into_iter()
                .map(RestaurantPizzaDetail::from)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    /// Price of the pizza at the restaurant, between 1 and 30
    pub price: i64,
    /// Identifier of an existing pizza
    pub pizza_id: i32,
    /// Identifier of an existing restaurant
    pub restaurant_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaResponse {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaSummary,
    pub restaurant: RestaurantSummary,
}

impl From<CreatedRestaurantPizza> for RestaurantPizzaResponse {
    fn from(c: CreatedRestaurantPizza) -> Self {
        Self {
            id: c.restaurant_pizza.id,
            price: c.restaurant_pizza.price,
            pizza_id: c.restaurant_pizza.pizza_id,
            restaurant_id: c.restaurant_pizza.restaurant_id,
            pizza: c.pizza.into(),
            restaurant: c.restaurant.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Validation error messages
    pub errors: Vec<String>,
}
