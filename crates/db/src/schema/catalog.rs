//! The full set of declared tables and the order they are created in.

use crate::error::SchemaError;
use crate::models::{
    actor, address, category, city, country, customer, film, film_actor, film_category,
    inventory, language, payment, rental, staff, store,
};
use crate::schema::table::TableDef;

/// Every table of the rental schema, in declaration order.
pub const TABLES: &[&TableDef] = &[
    &country::TABLE,
    &city::TABLE,
    &address::TABLE,
    &language::TABLE,
    &category::TABLE,
    &film::TABLE,
    &film_category::TABLE,
    &actor::TABLE,
    &film_actor::TABLE,
    &store::TABLE,
    &staff::TABLE,
    &customer::TABLE,
    &inventory::TABLE,
    &rental::TABLE,
    &payment::TABLE,
];

pub fn find(name: &str) -> Option<&'static TableDef> {
    TABLES.iter().copied().find(|t| t.name == name)
}

/// Order `tables` so every table follows the tables its inline foreign keys
/// reference. Deferred keys are ignored; they are added once all tables exist.
///
/// Ties keep declaration order. References to tables outside `tables` and
/// self-references do not constrain the order.
pub fn creation_order(tables: &[&'static TableDef]) -> Result<Vec<&'static TableDef>, SchemaError> {
    let mut ordered: Vec<&'static TableDef> = Vec::with_capacity(tables.len());
    let mut pending: Vec<&'static TableDef> = tables.to_vec();

    while !pending.is_empty() {
        let ready = pending.iter().position(|table| {
            table.inline_foreign_keys().all(|fk| {
                fk.references_table == table.name
                    || !tables.iter().any(|t| t.name == fk.references_table)
                    || ordered.iter().any(|t| t.name == fk.references_table)
            })
        });

        match ready {
            Some(idx) => ordered.push(pending.remove(idx)),
            None => {
                let names = pending.iter().map(|t| t.name.to_string()).collect();
                return Err(SchemaError::DependencyCycle(names));
            }
        }
    }

    Ok(ordered)
}
