use diesel::prelude::*;
use tracing::info;

use crate::models::{NewPizza, NewRestaurant, NewRestaurantPizza};
use crate::store::{clear_all, insert_pizza, insert_restaurant, insert_restaurant_pizza};
use crate::StoreError;

const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (price, restaurant index, pizza index)
const LISTINGS: [(i64, usize, usize); 3] = [(1, 0, 0), (4, 1, 1), (5, 2, 2)];

/// Replaces everything in the database with a small sample data set.
pub fn seed(conn: &mut SqliteConnection) -> Result<(), StoreError> {
    conn.transaction::<_, StoreError, _>(|conn| {
        clear_all(conn)?;

        let restaurants = RESTAURANTS
            .iter()
            .map(|(name, address)| {
                insert_restaurant(
                    conn,
                    &NewRestaurant {
                        name: name.to_string(),
                        address: address.to_string(),
                    },
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let pizzas = PIZZAS
            .iter()
            .map(|(name, ingredients)| {
                insert_pizza(
                    conn,
                    &NewPizza {
                        name: name.to_string(),
                        ingredients: ingredients.to_string(),
                    },
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (price, restaurant, pizza) in LISTINGS {
            let listing =
                NewRestaurantPizza::new(price, restaurants[restaurant].id, pizzas[pizza].id)?;
            insert_restaurant_pizza(conn, &listing)?;
        }

        info!(
            restaurants = restaurants.len(),
            pizzas = pizzas.len(),
            restaurant_pizzas = LISTINGS.len(),
            "seeded database"
        );
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{get_all_pizzas, get_all_restaurants, get_restaurant_by_id};
    use crate::test_pool;

    #[test]
    fn test_seed_replaces_existing_rows() {
        let pool = test_pool();
        let conn = &mut pool.get().unwrap();

        seed(conn).unwrap();
        seed(conn).unwrap();

        let restaurants = get_all_restaurants(conn).unwrap();
        assert_eq!(restaurants.len(), RESTAURANTS.len());
        assert_eq!(get_all_pizzas(conn).unwrap().len(), PIZZAS.len());

        let shack = get_restaurant_by_id(conn, restaurants[0].id).unwrap();
        assert_eq!(shack.restaurant.name, "Karen's Pizza Shack");
        assert_eq!(shack.restaurant_pizzas.len(), 1);
        assert_eq!(shack.restaurant_pizzas[0].0.price, 1);
        assert_eq!(shack.restaurant_pizzas[0].1.name, "Emma");
    }
}
