//! Service layer providing business-oriented operations on top of models.
//! - Repositories (one trait per entity, SeaORM-backed) own the SQL.
//! - Services own the rules: duplicate names, not-found reporting.
//! - Errors are reported through `errors::ServiceError`.

pub mod errors;
#[cfg(test)]
pub mod test_support;
pub mod image;
pub mod skill;
pub mod project;
