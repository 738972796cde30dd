//! RocketCart Domain Concerns

pub mod cart;
pub mod catalog;
