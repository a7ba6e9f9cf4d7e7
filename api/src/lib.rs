//! HTTP boundary of the RushCrew backend.
//!
//! Failure translation ([`error::AppError`]), request extractors, and route
//! wiring live here; the shared taxonomy and envelope types are in
//! `rushcrew-core`.

pub mod audit;
pub mod error;
pub mod extract;
pub mod routes;
