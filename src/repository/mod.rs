use crate::{
    domain::customer::{Customer, NewCustomer, UpdateCustomer},
    repository::errors::RepositoryResult,
};

pub mod customer;
pub mod errors;
pub mod memory;
pub mod query;

pub use query::SortField;

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    /// 1-based page number.
    pub page: usize,
    pub per_page: usize,
}

/// Filter/sort/page parameters for customer listings.
///
/// `pagination: None` returns the full match set; a page of zero or a
/// per-page of zero yields an empty page rather than an error.
#[derive(Debug, Clone, Default)]
pub struct CustomerListQuery {
    pub search: Option<String>,
    pub sort_by: SortField,
    pub descending: bool,
    pub pagination: Option<Pagination>,
}

impl CustomerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the listing to records whose name or VAT number contains
    /// the term. Blank terms are ignored.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into().trim().to_string();
        if !term.is_empty() {
            self.search = Some(term);
        }
        self
    }

    pub fn sort_by(mut self, field: SortField) -> Self {
        self.sort_by = field;
        self
    }

    pub fn descending(mut self, descending: bool) -> Self {
        self.descending = descending;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait CustomerReader {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
    fn get_by_email(&self, email: &str) -> RepositoryResult<Option<Customer>>;
    fn get_by_vat_number(&self, vat_number: &str) -> RepositoryResult<Option<Customer>>;
    fn count(&self) -> RepositoryResult<usize>;
    fn exists(&self, id: i32) -> RepositoryResult<bool>;
    /// Returns the total match count alongside the requested page.
    fn list(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)>;
}

pub trait CustomerWriter {
    fn create(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    fn update(&self, customer_id: i32, updates: &UpdateCustomer) -> RepositoryResult<Customer>;
    fn delete(&self, customer_id: i32) -> RepositoryResult<()>;
}
