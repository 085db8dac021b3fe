//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod cliente_service;
pub mod errors;
pub mod region_service;
#[cfg(test)]
pub mod test_support;
