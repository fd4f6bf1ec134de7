//! Database models backing the repositories.

pub mod config;
pub mod customer;
