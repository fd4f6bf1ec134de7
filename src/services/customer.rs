use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::dto::customer::PagedResult;
use crate::repository::{CustomerListQuery, CustomerReader, CustomerWriter, SortField};
use crate::services::{ServiceError, ServiceResult};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Parameters accepted by [`list_customers`].
#[derive(Debug, Default)]
pub struct CustomerListParams {
    /// Optional substring applied to name and VAT number.
    pub search: Option<String>,
    /// 1-based page number, defaults to the first page.
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    /// Raw sort key; unrecognised values sort by creation time.
    pub sort_by: Option<String>,
    pub descending: bool,
}

/// Persists a new customer and returns the stored record.
///
/// Email and VAT uniqueness are deliberately not checked here even though the
/// repository exposes the lookups; see DESIGN.md.
pub fn create_customer<R>(repo: &R, new_customer: &NewCustomer) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    repo.create(new_customer).map_err(ServiceError::from)
}

/// Fetches a customer by its identifier; `Ok(None)` for a missing id.
pub fn get_customer_by_id<R>(repo: &R, customer_id: i32) -> ServiceResult<Option<Customer>>
where
    R: CustomerReader + ?Sized,
{
    repo.get_by_id(customer_id).map_err(ServiceError::from)
}

/// Overwrites every mutable field of an existing customer and stamps
/// `updated_at`. A missing id is a [`ServiceError::NotFound`], unlike
/// [`delete_customer`] which reports it as `Ok(false)`.
pub fn update_customer<R>(
    repo: &R,
    customer_id: i32,
    updates: &UpdateCustomer,
) -> ServiceResult<Customer>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    if repo.get_by_id(customer_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }
    repo.update(customer_id, updates).map_err(ServiceError::from)
}

/// Removes a customer. Returns `Ok(false)` when the id does not exist; callers
/// branch on the boolean rather than an error.
pub fn delete_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<bool>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    if repo.get_by_id(customer_id)?.is_none() {
        return Ok(false);
    }
    repo.delete(customer_id)?;
    Ok(true)
}

/// Returns the filtered, sorted page of customers wrapped in a paging
/// envelope.
pub fn list_customers<R>(repo: &R, params: CustomerListParams) -> ServiceResult<PagedResult<Customer>>
where
    R: CustomerReader + ?Sized,
{
    let page = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

    let mut query = CustomerListQuery::new()
        .descending(params.descending)
        .paginate(page, page_size);

    if let Some(raw) = params.sort_by.as_deref() {
        query = query.sort_by(SortField::parse(raw));
    }
    if let Some(term) = params.search {
        query = query.search(term);
    }

    let (total, items) = repo.list(query)?;

    Ok(PagedResult::new(items, total, page, page_size))
}
