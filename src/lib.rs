//! Core of the Achariya internal portal: in-memory mock records for
//! digital requests, admissions leads, and IT assets, the pure
//! derivation functions that turn them into table and chart data, and
//! the role-based navigation gate. Rendering, routing mechanics, and
//! the login form live outside this crate and consume these APIs.

pub mod export;
pub mod generate;
pub mod models;
pub mod nav;
pub mod query;
pub mod report;
pub mod store;
pub mod views;
