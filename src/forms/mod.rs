//! Input payloads and their validation rules.

pub mod customer;
