//! Repository round-trips against the created schema.

mod common;

use dvdrental_db::models::actor::CreateActor;
use dvdrental_db::models::category::CreateCategory;
use dvdrental_db::models::country::{CreateCountry, UpdateCountry};
use dvdrental_db::models::customer::UpdateCustomer;
use dvdrental_db::models::film::UpdateFilm;
use dvdrental_db::models::film_actor::CreateFilmActor;
use dvdrental_db::models::film_category::CreateFilmCategory;
use dvdrental_db::models::inventory::CreateInventory;
use dvdrental_db::models::payment::CreatePayment;
use dvdrental_db::models::rental::CreateRental;
use dvdrental_db::models::staff::CreateStaff;
use dvdrental_db::repositories::{
    ActorRepo, AddressRepo, CategoryRepo, CityRepo, CountryRepo, CustomerRepo, FilmActorRepo,
    FilmCategoryRepo, FilmRepo, InventoryRepo, PaymentRepo, RentalRepo, StaffRepo, StoreRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Store and staff
// ---------------------------------------------------------------------------

/// Country -> city -> address -> store -> staff, then close the manager link.
#[sqlx::test(migrations = false)]
async fn test_store_with_manager_end_to_end(pool: PgPool) {
    common::init(&pool).await;
    let (country, city, address) = common::seed_geography(&pool).await;
    let store = common::seed_store(&pool, Some(address.address_id)).await;
    assert_eq!(store.manager_staff_id, None);

    let manager = StaffRepo::create(
        &pool,
        &CreateStaff {
            address_id: Some(address.address_id),
            ..common::new_staff("Mike", "Hillyer", Some(store.store_id))
        },
    )
    .await
    .unwrap();
    assert_eq!(manager.active, Some(true));

    let store = StoreRepo::set_manager(&pool, store.store_id, Some(manager.staff_id))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(store.manager_staff_id, Some(manager.staff_id));
    assert_eq!(manager.store_id, Some(store.store_id));
    assert_eq!(store.address_id, Some(address.address_id));

    let address = AddressRepo::find_by_id(&pool, address.address_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(address.city_id, Some(city.city_id));
    let city = CityRepo::find_by_id(&pool, city.city_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(city.country_id, Some(country.country_id));
    assert_eq!(city.city, "Toronto");

    let country = CountryRepo::find_by_id(&pool, country.country_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(country.country, "Canada");
    let manager = StaffRepo::find_by_id(&pool, manager.staff_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(manager.store_id, Some(store.store_id));
    assert_eq!(manager.address_id, Some(address.address_id));
}

#[sqlx::test(migrations = false)]
async fn test_set_manager_on_missing_store_returns_none(pool: PgPool) {
    common::init(&pool).await;
    let result = StoreRepo::set_manager(&pool, 999_999, None).await.unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_film_defaults_apply_when_omitted(pool: PgPool) {
    common::init(&pool).await;

    let film = FilmRepo::create(&pool, &common::new_film("Inception", None))
        .await
        .unwrap();
    assert_eq!(film.rental_duration, 0);
    assert_eq!(film.rental_rate, 0);
    assert_eq!(film.replacement_cost, 0.0);
    assert_eq!(film.length, 148);
    assert_eq!(film.last_update, None);
}

#[sqlx::test(migrations = false)]
async fn test_film_explicit_values_override_defaults(pool: PgPool) {
    common::init(&pool).await;

    let mut input = common::new_film("Heat", None);
    input.rental_duration = Some(3);
    input.rental_rate = Some(4);
    input.replacement_cost = Some(19.99);
    let film = FilmRepo::create(&pool, &input).await.unwrap();

    assert_eq!(film.rental_duration, 3);
    assert_eq!(film.rental_rate, 4);
    assert_eq!(film.replacement_cost, 19.99);
}

/// Server-side defaults hold for inserts that bypass the repositories.
#[sqlx::test(migrations = false)]
async fn test_film_defaults_are_server_side(pool: PgPool) {
    common::init(&pool).await;

    let (rental_duration, rental_rate, replacement_cost): (i32, i32, f64) = sqlx::query_as(
        "INSERT INTO film (title, description, release_year, length, rating,
                           special_features, fulltext)
         VALUES ('Alien', 'In space', LOCALTIMESTAMP, 117, 16, 'Trailers', 'alien')
         RETURNING rental_duration, rental_rate, replacement_cost",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!((rental_duration, rental_rate), (0, 0));
    assert_eq!(replacement_cost, 0.0);
}

#[sqlx::test(migrations = false)]
async fn test_customer_is_active_by_default(pool: PgPool) {
    common::init(&pool).await;

    let customer = CustomerRepo::create(&pool, &common::new_customer("Mary", None))
        .await
        .unwrap();
    assert!(customer.is_active);
    assert_eq!(customer.rental_id, None);

    let mut input = common::new_customer("Patricia", None);
    input.is_active = Some(false);
    let inactive = CustomerRepo::create(&pool, &input).await.unwrap();
    assert!(!inactive.is_active);
}

// ---------------------------------------------------------------------------
// Last-update stamping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_update_stamps_last_update(pool: PgPool) {
    common::init(&pool).await;

    let country = CountryRepo::create(
        &pool,
        &CreateCountry {
            country: "Canda".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(country.last_update, None);

    let updated = CountryRepo::update(
        &pool,
        country.country_id,
        &UpdateCountry {
            country: Some("Canada".to_string()),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.country, "Canada");
    assert!(updated.last_update.is_some());
}

#[sqlx::test(migrations = false)]
async fn test_update_stamps_customer_lastupdate(pool: PgPool) {
    common::init(&pool).await;

    let customer = CustomerRepo::create(&pool, &common::new_customer("Mary", None))
        .await
        .unwrap();
    assert_eq!(customer.lastupdate, None);

    let updated = CustomerRepo::update(
        &pool,
        customer.customer_id,
        &UpdateCustomer {
            email: Some("mary@example.org".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.email, "mary@example.org");
    assert_eq!(updated.first_name, "Mary");
    assert!(updated.lastupdate.is_some());
}

// ---------------------------------------------------------------------------
// Update / list / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_customer_update_changes_create_date(pool: PgPool) {
    common::init(&pool).await;
    let customer = CustomerRepo::create(&pool, &common::new_customer("Mary", None))
        .await
        .unwrap();

    let updated = CustomerRepo::update(
        &pool,
        customer.customer_id,
        &UpdateCustomer {
            create_date: Some(common::ts(2007, 1, 1)),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.create_date, common::ts(2007, 1, 1));
    assert_eq!(updated.email, customer.email);
    assert!(updated.is_active);
}

#[sqlx::test(migrations = false)]
async fn test_partial_update_keeps_other_fields(pool: PgPool) {
    common::init(&pool).await;
    let film = FilmRepo::create(&pool, &common::new_film("Inception", None))
        .await
        .unwrap();

    let updated = FilmRepo::update(
        &pool,
        film.id,
        &UpdateFilm {
            rating: Some(18),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.rating, 18);
    assert_eq!(updated.title, film.title);
    assert_eq!(updated.release_year, film.release_year);
    assert_eq!(updated.length, film.length);
}

#[sqlx::test(migrations = false)]
async fn test_update_missing_row_returns_none(pool: PgPool) {
    common::init(&pool).await;
    let result = FilmRepo::update(&pool, 999_999, &UpdateFilm::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = false)]
async fn test_list_orders_by_id_and_delete_removes(pool: PgPool) {
    common::init(&pool).await;
    let first = CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Action".to_string(),
        },
    )
    .await
    .unwrap();
    let second = CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Drama".to_string(),
        },
    )
    .await
    .unwrap();

    let ids: Vec<_> = CategoryRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);

    assert!(CategoryRepo::delete(&pool, first.id).await.unwrap());
    assert!(!CategoryRepo::delete(&pool, first.id).await.unwrap());
    assert!(CategoryRepo::find_by_id(&pool, first.id)
        .await
        .unwrap()
        .is_none());
    assert_eq!(CategoryRepo::list(&pool).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Film links
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_list_links_for_film(pool: PgPool) {
    common::init(&pool).await;
    let film = FilmRepo::create(&pool, &common::new_film("Inception", None))
        .await
        .unwrap();
    let other = FilmRepo::create(&pool, &common::new_film("Heat", None))
        .await
        .unwrap();
    let category = CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Sci-Fi".to_string(),
        },
    )
    .await
    .unwrap();

    for film_id in [film.id, other.id] {
        FilmCategoryRepo::create(
            &pool,
            &CreateFilmCategory {
                film_id: Some(film_id),
                category_id: Some(category.id),
            },
        )
        .await
        .unwrap();
    }

    let mut cast = Vec::new();
    for (first, last) in [("Leonardo", "DiCaprio"), ("Elliot", "Page")] {
        let actor = ActorRepo::create(
            &pool,
            &CreateActor {
                first_name: first.to_string(),
                last_name: last.to_string(),
            },
        )
        .await
        .unwrap();
        FilmActorRepo::create(
            &pool,
            &CreateFilmActor {
                actor_id: Some(actor.actor_id),
                film_id: Some(film.id),
            },
        )
        .await
        .unwrap();
        cast.push(actor.actor_id);
    }

    let categories = FilmCategoryRepo::list_for_film(&pool, film.id).await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].category_id, Some(category.id));

    let actors: Vec<_> = FilmActorRepo::list_for_film(&pool, film.id)
        .await
        .unwrap()
        .into_iter()
        .map(|link| link.actor_id)
        .collect();
    assert_eq!(actors, cast.into_iter().map(Some).collect::<Vec<_>>());
    assert!(FilmActorRepo::list_for_film(&pool, other.id)
        .await
        .unwrap()
        .is_empty());
}

// ---------------------------------------------------------------------------
// Rentals
// ---------------------------------------------------------------------------

/// Inventory -> rental -> payment, with the customer pointing at the rental.
#[sqlx::test(migrations = false)]
async fn test_rental_and_payment_chain(pool: PgPool) {
    common::init(&pool).await;
    let store = common::seed_store(&pool, None).await;
    let clerk = StaffRepo::create(&pool, &common::new_staff("Jon", "Stephens", Some(store.store_id)))
        .await
        .unwrap();
    let film = FilmRepo::create(&pool, &common::new_film("Inception", None))
        .await
        .unwrap();
    let inventory = InventoryRepo::create(
        &pool,
        &CreateInventory {
            film_id: Some(film.id),
            store_id: Some(store.store_id),
        },
    )
    .await
    .unwrap();
    let customer = CustomerRepo::create(&pool, &common::new_customer("Mary", Some(store.store_id)))
        .await
        .unwrap();

    let rental = RentalRepo::create(
        &pool,
        &CreateRental {
            rental_date: common::ts(2024, 5, 1),
            inventory_id: Some(inventory.inventory_id),
            customer_id: Some(customer.customer_id),
            return_date: common::ts(2024, 5, 4),
            stuff_id: Some(clerk.staff_id),
        },
    )
    .await
    .unwrap();

    let customer = CustomerRepo::set_rental(&pool, customer.customer_id, Some(rental.rental_id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(customer.rental_id, Some(rental.rental_id));

    let payment = PaymentRepo::create(
        &pool,
        &CreatePayment {
            customer_id: Some(customer.customer_id),
            stuff_id: Some(clerk.staff_id),
            rental_id: Some(rental.rental_id),
            amount: 4.99,
            payment_date: common::ts(2024, 5, 4),
        },
    )
    .await
    .unwrap();
    assert_eq!(payment.amount, 4.99);
    assert_eq!(payment.rental_id, Some(rental.rental_id));

    let rental = RentalRepo::find_by_id(&pool, rental.rental_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rental.customer_id, Some(customer.customer_id));
    assert_eq!(rental.stuff_id, Some(clerk.staff_id));
    assert_eq!(rental.return_date, common::ts(2024, 5, 4));

    // Clearing the back-edge leaves the rental in place.
    let customer = CustomerRepo::set_rental(&pool, customer.customer_id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(customer.rental_id, None);
    assert!(RentalRepo::find_by_id(&pool, rental.rental_id)
        .await
        .unwrap()
        .is_some());
}
