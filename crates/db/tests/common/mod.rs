//! Seed helpers shared by the database integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use dvdrental_core::types::{DbId, Timestamp};
use dvdrental_db::models::address::{Address, CreateAddress};
use dvdrental_db::models::city::{City, CreateCity};
use dvdrental_db::models::country::{Country, CreateCountry};
use dvdrental_db::models::customer::CreateCustomer;
use dvdrental_db::models::film::CreateFilm;
use dvdrental_db::models::language::{CreateLanguage, Language};
use dvdrental_db::models::staff::CreateStaff;
use dvdrental_db::models::store::{CreateStore, Store};
use dvdrental_db::repositories::{AddressRepo, CityRepo, CountryRepo, LanguageRepo, StoreRepo};
use sqlx::PgPool;

pub fn ts(year: i32, month: u32, day: u32) -> Timestamp {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Pool with the full schema in place.
pub async fn init(pool: &PgPool) {
    dvdrental_db::initialize_schema(pool).await.unwrap();
}

pub fn new_address(city_id: Option<DbId>, street: &str) -> CreateAddress {
    CreateAddress {
        address: street.to_string(),
        address2: String::new(),
        district: "Ontario".to_string(),
        city_id,
        postal_code: "M5V 2T6".to_string(),
        phone: "416-555-0100".to_string(),
    }
}

pub fn new_film(title: &str, language_id: Option<DbId>) -> CreateFilm {
    CreateFilm {
        title: title.to_string(),
        description: format!("{title} description"),
        release_year: ts(2010, 7, 16),
        language_id,
        rental_duration: None,
        rental_rate: None,
        length: 148,
        replacement_cost: None,
        rating: 13,
        special_features: "Trailers".to_string(),
        fulltext: title.to_lowercase(),
    }
}

pub fn new_staff(first: &str, last: &str, store_id: Option<DbId>) -> CreateStaff {
    CreateStaff {
        first_name: first.to_string(),
        last_name: last.to_string(),
        address_id: None,
        store_id,
        active: None,
        username: first.to_lowercase(),
        password: "hunter2".to_string(),
        picture: format!("/pictures/{}.png", first.to_lowercase()),
    }
}

pub fn new_customer(first: &str, store_id: Option<DbId>) -> CreateCustomer {
    CreateCustomer {
        store_id,
        first_name: first.to_string(),
        last_name: "Smith".to_string(),
        email: format!("{}.smith@example.com", first.to_lowercase()),
        address_id: None,
        is_active: None,
        create_date: ts(2006, 2, 14),
    }
}

/// Canada -> Toronto -> one street address.
pub async fn seed_geography(pool: &PgPool) -> (Country, City, Address) {
    let country = CountryRepo::create(
        pool,
        &CreateCountry {
            country: "Canada".to_string(),
        },
    )
    .await
    .unwrap();
    let city = CityRepo::create(
        pool,
        &CreateCity {
            city: "Toronto".to_string(),
            country_id: Some(country.country_id),
        },
    )
    .await
    .unwrap();
    let address = AddressRepo::create(pool, &new_address(Some(city.city_id), "47 MySakila Drive"))
        .await
        .unwrap();
    (country, city, address)
}

pub async fn seed_store(pool: &PgPool, address_id: Option<DbId>) -> Store {
    StoreRepo::create(
        pool,
        &CreateStore {
            manager_staff_id: None,
            address_id,
        },
    )
    .await
    .unwrap()
}

pub async fn seed_language(pool: &PgPool, name: &str) -> Language {
    LanguageRepo::create(
        pool,
        &CreateLanguage {
            name: name.to_string(),
        },
    )
    .await
    .unwrap()
}
