pub mod api;
pub mod config;
pub mod docs;
pub mod model;
pub mod query;
pub mod routes;
pub mod store;
pub mod validation;
pub mod view;
