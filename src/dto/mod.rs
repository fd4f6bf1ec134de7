//! DTO modules that bridge services with templates and the API.

pub mod customer;
