//! Shopping-cart state for the RocketShoes storefront.
//!
//! The [`CartStore`](domain::cart::CartStore) keeps an ordered cart, checks
//! every change against the catalog's stock, persists a snapshot after each
//! successful change and publishes the new cart to subscribers.

pub mod config;
pub mod context;
pub mod domain;
pub mod ids;
pub mod notifications;
pub mod observability;
pub mod storage;

#[cfg(test)]
mod test;
