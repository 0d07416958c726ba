//! Pieces shared by the server crate and the binary: logging setup,
//! startup environment checks and small wire types.

pub mod types;
pub mod env;

pub mod utils {
    pub mod logging;
}
