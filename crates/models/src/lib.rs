//! SeaORM entities for the portfolio schema plus the field rules shared
//! by every layer above: name normalization and required-field checks.

pub mod errors;
pub mod db;
pub mod blob;
pub mod image;
pub mod skill;
pub mod project;
pub mod project_skill;

#[cfg(test)]
mod tests;
