//! Domain logic for the club recruitment backend.
//!
//! Holds the application model, field validation, the submission pipeline
//! and the dashboard presentation helpers. Storage is only reached through
//! the traits in [`store`], so everything here runs without a database.

pub mod application;
pub mod dashboard;
pub mod error;
pub mod store;
pub mod submission;
pub mod types;
pub mod validation;
