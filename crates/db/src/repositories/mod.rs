//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod actor_repo;
pub mod address_repo;
pub mod category_repo;
pub mod city_repo;
pub mod country_repo;
pub mod customer_repo;
pub mod film_actor_repo;
pub mod film_category_repo;
pub mod film_repo;
pub mod inventory_repo;
pub mod language_repo;
pub mod payment_repo;
pub mod rental_repo;
pub mod staff_repo;
pub mod store_repo;

pub use actor_repo::ActorRepo;
pub use address_repo::AddressRepo;
pub use category_repo::CategoryRepo;
pub use city_repo::CityRepo;
pub use country_repo::CountryRepo;
pub use customer_repo::CustomerRepo;
pub use film_actor_repo::FilmActorRepo;
pub use film_category_repo::FilmCategoryRepo;
pub use film_repo::FilmRepo;
pub use inventory_repo::InventoryRepo;
pub use language_repo::LanguageRepo;
pub use payment_repo::PaymentRepo;
pub use rental_repo::RentalRepo;
pub use staff_repo::StaffRepo;
pub use store_repo::StoreRepo;
