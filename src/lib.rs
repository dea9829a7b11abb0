//! igcop - typed asset models for the IGC metadata catalog REST API
//!
//! The [`schema`] module declares every asset type and classifies its
//! properties; [`model`] holds the serde records and the [`model::AssetRecord`]
//! dispatch enum; [`query`] derives request parameters from the schema.

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod query;
pub mod schema;

pub use error::{Error, Result};
pub use model::{Asset, AssetRecord};
