//! Domain entities exposed by the service layer.

pub mod customer;
