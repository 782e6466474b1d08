//! # Order Sample
//!
//! A runnable wiring of [`order_placement`] over in-memory collaborators.
//!
//! - **[clients]**: In-memory implementations of every port.
//! - **[config]**: Environment configuration and seed data.
//! - **[lifecycle]**: The [`OrderSystem`](lifecycle::OrderSystem) container and tracing setup.

pub mod clients;
pub mod config;
pub mod lifecycle;
