//! Row structs and the conversions into domain records.

pub mod application;
