use diesel::prelude::*;
use tracing::debug;

use crate::models::{
    CreatedRestaurantPizza, NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant,
    RestaurantPizza, RestaurantWithPizzas,
};
use crate::schema::{pizzas, restaurant_pizzas, restaurants};
use crate::StoreError;

pub fn get_all_restaurants(conn: &mut SqliteConnection) -> Result<Vec<Restaurant>, StoreError> {
    let results = restaurants::table
        .order(restaurants::id.asc())
        .select(Restaurant::as_select())
        .load(conn)?;
    Ok(results)
}

pub fn get_restaurant_by_id(
    conn: &mut SqliteConnection,
    restaurant_id: i32,
) -> Result<RestaurantWithPizzas, StoreError> {
    conn.transaction::<_, StoreError, _>(|conn| {
        let restaurant = restaurants::table
            .find(restaurant_id)
            .select(Restaurant::as_select())
            .first(conn)?;

        let restaurant_pizzas = RestaurantPizza::belonging_to(&restaurant)
            .inner_join(pizzas::table)
            .order(restaurant_pizzas::id.asc())
            .select((RestaurantPizza::as_select(), Pizza::as_select()))
            .load::<(RestaurantPizza, Pizza)>(conn)?;

        Ok(RestaurantWithPizzas {
            restaurant,
            restaurant_pizzas,
        })
    })
}

/// Listings go with the restaurant through `ON DELETE CASCADE`, within the
/// same statement.
pub fn delete_restaurant_by_id(
    conn: &mut SqliteConnection,
    restaurant_id: i32,
) -> Result<(), StoreError> {
    conn.transaction::<_, StoreError, _>(|conn| {
        let deleted = diesel::delete(restaurants::table.find(restaurant_id)).execute(conn)?;
        if deleted == 0 {
            return Err(StoreError::NotFound);
        }
        debug!(restaurant_id, "deleted restaurant");
        Ok(())
    })
}

pub fn get_all_pizzas(conn: &mut SqliteConnection) -> Result<Vec<Pizza>, StoreError> {
    let results = pizzas::table
        .order(pizzas::id.asc())
        .select(Pizza::as_select())
        .load(conn)?;
    Ok(results)
}

pub fn insert_restaurant_pizza(
    conn: &mut SqliteConnection,
    new_restaurant_pizza: &NewRestaurantPizza,
) -> Result<CreatedRestaurantPizza, StoreError> {
    conn.transaction::<_, StoreError, _>(|conn| {
        let restaurant_pizza = diesel::insert_into(restaurant_pizzas::table)
            .values(new_restaurant_pizza)
            .returning(RestaurantPizza::as_returning())
            .get_result(conn)?;

        let restaurant = restaurants::table
            .find(restaurant_pizza.restaurant_id)
            .select(Restaurant::as_select())
            .first(conn)?;
        let pizza = pizzas::table
            .find(restaurant_pizza.pizza_id)
            .select(Pizza::as_select())
            .first(conn)?;

        debug!(
            id = restaurant_pizza.id,
            restaurant_id = restaurant.id,
            pizza_id = pizza.id,
            "inserted restaurant pizza"
        );

        Ok(CreatedRestaurantPizza {
            restaurant_pizza,
            restaurant,
            pizza,
        })
    })
}

/// Pizzas listed at a restaurant, once per listing.
pub fn pizzas_for_restaurant(
    conn: &mut SqliteConnection,
    restaurant_id: i32,
) -> Result<Vec<Pizza>, StoreError> {
    let results = pizzas::table
        .inner_join(restaurant_pizzas::table)
        .filter(restaurant_pizzas::restaurant_id.eq(restaurant_id))
        .order(restaurant_pizzas::id.asc())
        .select(Pizza::as_select())
        .load(conn)?;
    Ok(results)
}

/// Restaurants listing a pizza, once per listing.
pub fn restaurants_for_pizza(
    conn: &mut SqliteConnection,
    pizza_id: i32,
) -> Result<Vec<Restaurant>, StoreError> {
    let results = restaurants::table
        .inner_join(restaurant_pizzas::table)
        .filter(restaurant_pizzas::pizza_id.eq(pizza_id))
        .order(restaurant_pizzas::id.asc())
        .select(Restaurant::as_select())
        .load(conn)?;
    Ok(results)
}

pub fn insert_restaurant(
    conn: &mut SqliteConnection,
    new_restaurant: &NewRestaurant,
) -> Result<Restaurant, StoreError> {
    let restaurant = diesel::insert_into(restaurants::table)
        .values(new_restaurant)
        .returning(Restaurant::as_returning())
        .get_result(conn)?;
    debug!(id = restaurant.id, "inserted restaurant");
    Ok(restaurant)
}

pub fn insert_pizza(conn: &mut SqliteConnection, new_pizza: &NewPizza) -> Result<Pizza, StoreError> {
    let pizza = diesel::insert_into(pizzas::table)
        .values(new_pizza)
        .returning(Pizza::as_returning())
        .get_result(conn)?;
    debug!(id = pizza.id, "inserted pizza");
    Ok(pizza)
}

pub fn clear_all(conn: &mut SqliteConnection) -> Result<(), StoreError> {
    conn.transaction::<_, StoreError, _>(|conn| {
        diesel::delete(restaurant_pizzas::table).execute(conn)?;
        diesel::delete(restaurants::table).execute(conn)?;
        diesel::delete(pizzas::table).execute(conn)?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_pool;

    fn restaurant(conn: &mut SqliteConnection, name: &str) -> Restaurant {
        insert_restaurant(
            conn,
            &NewRestaurant {
                name: name.to_string(),
                address: format!("{name} Street"),
            },
        )
        .unwrap()
    }

    fn pizza(conn: &mut SqliteConnection, name: &str) -> Pizza {
        insert_pizza(
            conn,
            &NewPizza {
                name: name.to_string(),
                ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
            },
        )
        .unwrap()
    }

    fn listing(
        conn: &mut SqliteConnection,
        price: i64,
        restaurant: &Restaurant,
        pizza: &Pizza,
    ) -> CreatedRestaurantPizza {
        let new = NewRestaurantPizza::new(price, restaurant.id, pizza.id).unwrap();
        insert_restaurant_pizza(conn, &new).unwrap()
    }

    #[test]
    fn test_get_all_restaurants() {
        let pool = test_pool();
        let conn = &mut pool.get().unwrap();
        assert!(get_all_restaurants(conn).unwrap().is_empty());

        let first = restaurant(conn, "Karen's Pizza Shack");
        let second = restaurant(conn, "Sanjay's Pizza");

        assert_eq!(get_all_restaurants(conn).unwrap(), vec![first, second]);
    }

    #[test]
    fn test_get_all_pizzas() {
        let pool = test_pool();
        let conn = &mut pool.get().unwrap();
        let emma = pizza(conn, "Emma");
        let geri = pizza(conn, "Geri");

        assert_eq!(get_all_pizzas(conn).unwrap(), vec![emma, geri]);
    }

    #[test]
    fn test_get_restaurant_by_id() {
        let pool = test_pool();
        let conn = &mut pool.get().unwrap();
        let shack = restaurant(conn, "Karen's Pizza Shack");
        let other = restaurant(conn, "Kiki's Pizza");
        let emma = pizza(conn, "Emma");
        let geri = pizza(conn, "Geri");
        let first = listing(conn, 1, &shack, &emma);
        let second = listing(conn, 30, &shack, &geri);
        listing(conn, 10, &other, &emma);

        let result = get_restaurant_by_id(conn, shack.id).unwrap();

        assert_eq!(result.restaurant, shack);
        assert_eq!(
            result.restaurant_pizzas,
            vec![
                (first.restaurant_pizza, emma),
                (second.restaurant_pizza, geri)
            ]
        );
    }

    #[test]
    fn test_get_restaurant_by_id_not_found() {
        let pool = test_pool();
        let conn = &mut pool.get().unwrap();

        assert!(matches!(
            get_restaurant_by_id(conn, 42),
            Err(StoreError::NotFound)
        ));
    }

    #[test]
    fn test_insert_restaurant_pizza() {
        let pool = test_pool();
        let conn = &mut pool.get().unwrap();
        let shack = restaurant(conn, "Karen's Pizza Shack");
        let emma = pizza(conn, "Emma");

        let created = listing(conn, 10, &shack, &emma);

        assert!(created.restaurant_pizza.id > 0);
        assert_eq!(created.restaurant_pizza.price, 10);
        assert_eq!(created.restaurant_pizza.restaurant_id, shack.id);
        assert_eq!(created.restaurant_pizza.pizza_id, emma.id);
        assert_eq!(created.restaurant, shack);
        assert_eq!(created.pizza, emma);
    }

    #[test]
    fn test_insert_restaurant_pizza_unknown_references() {
        let pool = test_pool();
        let conn = &mut pool.get().unwrap();
        let shack = restaurant(conn, "Karen's Pizza Shack");
        let emma = pizza(conn, "Emma");

        let unknown_pizza = NewRestaurantPizza::new(10, shack.id, emma.id + 100).unwrap();
        assert!(matches!(
            insert_restaurant_pizza(conn, &unknown_pizza),
            Err(StoreError::Reference(_))
        ));

        let unknown_restaurant = NewRestaurantPizza::new(10, shack.id + 100, emma.id).unwrap();
        assert!(matches!(
            insert_restaurant_pizza(conn, &unknown_restaurant),
            Err(StoreError::Reference(_))
        ));

        assert!(get_restaurant_by_id(conn, shack.id)
            .unwrap()
            .restaurant_pizzas
            .is_empty());
    }

    #[test]
    fn test_delete_restaurant_cascades_to_restaurant_pizzas() {
        let pool = test_pool();
        let conn = &mut pool.get().unwrap();
        let shack = restaurant(conn, "Karen's Pizza Shack");
        let kiki = restaurant(conn, "Kiki's Pizza");
        let emma = pizza(conn, "Emma");
        listing(conn, 5, &shack, &emma);
        listing(conn, 7, &kiki, &emma);

        delete_restaurant_by_id(conn, shack.id).unwrap();

        assert!(matches!(
            get_restaurant_by_id(conn, shack.id),
            Err(StoreError::NotFound)
        ));
        assert!(pizzas_for_restaurant(conn, shack.id).unwrap().is_empty());
        let remaining = restaurant_pizzas::table
            .select(RestaurantPizza::as_select())
            .load::<RestaurantPizza>(conn)
            .unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].restaurant_id, kiki.id);
        // Pizzas are never removed along with a restaurant.
        assert_eq!(get_all_pizzas(conn).unwrap(), vec![emma]);
    }

    #[test]
    fn test_delete_restaurant_not_found() {
        let pool = test_pool();
        let conn = &mut pool.get().unwrap();

        assert!(matches!(
            delete_restaurant_by_id(conn, 7),
            Err(StoreError::NotFound)
        ));
    }

    #[test]
    fn test_association_lookups() {
        let pool = test_pool();
        let conn = &mut pool.get().unwrap();
        let shack = restaurant(conn, "Karen's Pizza Shack");
        let kiki = restaurant(conn, "Kiki's Pizza");
        let emma = pizza(conn, "Emma");
        let geri = pizza(conn, "Geri");
        listing(conn, 5, &shack, &emma);
        listing(conn, 6, &shack, &geri);
        listing(conn, 7, &kiki, &emma);

        assert_eq!(
            pizzas_for_restaurant(conn, shack.id).unwrap(),
            vec![emma.clone(), geri.clone()]
        );
        assert_eq!(
            restaurants_for_pizza(conn, emma.id).unwrap(),
            vec![shack.clone(), kiki]
        );
        assert_eq!(restaurants_for_pizza(conn, geri.id).unwrap(), vec![shack]);
    }

    #[test]
    fn test_price_check_constraint() {
        let pool = test_pool();
        let conn = &mut pool.get().unwrap();
        let shack = restaurant(conn, "Karen's Pizza Shack");
        let emma = pizza(conn, "Emma");

        let result = diesel::insert_into(restaurant_pizzas::table)
            .values((
                restaurant_pizzas::price.eq(31),
                restaurant_pizzas::restaurant_id.eq(shack.id),
                restaurant_pizzas::pizza_id.eq(emma.id),
            ))
            .execute(conn)
            .map_err(StoreError::from);

        assert!(matches!(result, Err(StoreError::Constraint(_))));
    }

    #[test]
    fn test_clear_all() {
        let pool = test_pool();
        let conn = &mut pool.get().unwrap();
        let shack = restaurant(conn, "Karen's Pizza Shack");
        let emma = pizza(conn, "Emma");
        listing(conn, 5, &shack, &emma);

        clear_all(conn).unwrap();

        assert!(get_all_restaurants(conn).unwrap().is_empty());
        assert!(get_all_pizzas(conn).unwrap().is_empty());
    }
}
