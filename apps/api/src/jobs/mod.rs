//! Job records: persistence, validation and the `/jobs` routes.

pub mod handlers;
#[cfg(test)]
pub mod memory;
pub mod service;
pub mod store;
