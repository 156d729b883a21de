//! Products catalog domain module.
//!
//! This crate contains the product document shape and the rules that turn
//! client-submitted form data into a storable product, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod form;
pub mod product;

pub use form::{ProductFormData, parse_categories};
pub use product::{Product, ProductFields, ProductFilter};
