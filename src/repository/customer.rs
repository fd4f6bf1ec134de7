use chrono::Utc;
use diesel::prelude::*;

use crate::{
    db::DbPool,
    domain::customer::{Customer, NewCustomer, UpdateCustomer},
    repository::{CustomerListQuery, CustomerReader, CustomerWriter, SortField, errors::RepositoryResult},
};

/// Diesel implementation of [`CustomerReader`] and [`CustomerWriter`].
pub struct DieselCustomerRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselCustomerRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl CustomerReader for DieselCustomerRepository<'_> {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::schema::customers;

        let mut conn = self.pool.get()?;
        let customer = customers::table
            .find(id)
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        Ok(customer.map(Into::into))
    }

    fn get_by_email(&self, email: &str) -> RepositoryResult<Option<Customer>> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::schema::customers;

        let mut conn = self.pool.get()?;
        let customer = customers::table
            .filter(customers::contact_person_email.eq(email))
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        Ok(customer.map(Into::into))
    }

    fn get_by_vat_number(&self, vat_number: &str) -> RepositoryResult<Option<Customer>> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::schema::customers;

        let mut conn = self.pool.get()?;
        let customer = customers::table
            .filter(customers::vat_number.eq(vat_number))
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        Ok(customer.map(Into::into))
    }

    fn count(&self) -> RepositoryResult<usize> {
        use crate::schema::customers;

        let mut conn = self.pool.get()?;
        let total: i64 = customers::table.count().get_result(&mut conn)?;

        Ok(total as usize)
    }

    fn exists(&self, id: i32) -> RepositoryResult<bool> {
        use crate::schema::customers;

        let mut conn = self.pool.get()?;
        let total: i64 = customers::table
            .find(id)
            .count()
            .get_result(&mut conn)?;

        Ok(total > 0)
    }

    fn list(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::schema::customers;

        let mut conn = self.pool.get()?;

        let pattern = query.search.as_ref().map(|term| format!("%{term}%"));

        let mut total_query = customers::table.into_boxed();
        if let Some(pattern) = &pattern {
            total_query = total_query.filter(
                customers::name
                    .like(pattern)
                    .or(customers::vat_number.like(pattern)),
            );
        }
        let total: i64 = total_query.count().get_result(&mut conn)?;

        if let Some(p) = &query.pagination {
            if p.page == 0 || p.per_page == 0 {
                return Ok((total as usize, vec![]));
            }
        }

        let mut items_query = customers::table.into_boxed();
        if let Some(pattern) = &pattern {
            items_query = items_query.filter(
                customers::name
                    .like(pattern)
                    .or(customers::vat_number.like(pattern)),
            );
        }

        items_query = match (query.sort_by, query.descending) {
            (SortField::Name, false) => items_query.order(customers::name.asc()),
            (SortField::Name, true) => items_query.order(customers::name.desc()),
            (SortField::Address, false) => items_query.order(customers::address.asc()),
            (SortField::Address, true) => items_query.order(customers::address.desc()),
            (SortField::VatNumber, false) => items_query.order(customers::vat_number.asc()),
            (SortField::VatNumber, true) => items_query.order(customers::vat_number.desc()),
            (SortField::CreatedAt, false) => items_query.order(customers::created_at.asc()),
            (SortField::CreatedAt, true) => items_query.order(customers::created_at.desc()),
        };
        // Deterministic tie-break, matching the stable in-memory engine.
        items_query = items_query.then_order_by(customers::id.asc());

        if let Some(p) = &query.pagination {
            // Saturate before the i64 cast so absurd page numbers land past
            // the end instead of wrapping.
            let offset = (p.page - 1)
                .saturating_mul(p.per_page)
                .min(i64::MAX as usize);
            items_query = items_query
                .limit(p.per_page.min(i64::MAX as usize) as i64)
                .offset(offset as i64);
        }

        let items = items_query
            .load::<DbCustomer>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Customer>>();

        Ok((total as usize, items))
    }
}

impl CustomerWriter for DieselCustomerRepository<'_> {
    fn create(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer> {
        use crate::models::customer::{Customer as DbCustomer, NewCustomer as DbNewCustomer};
        use crate::schema::customers;

        let mut conn = self.pool.get()?;
        let insertable = DbNewCustomer::new(new_customer, Utc::now().naive_utc());

        let created = diesel::insert_into(customers::table)
            .values(&insertable)
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(created.into())
    }

    fn update(&self, customer_id: i32, updates: &UpdateCustomer) -> RepositoryResult<Customer> {
        use crate::models::customer::{Customer as DbCustomer, UpdateCustomer as DbUpdateCustomer};
        use crate::schema::customers;

        let mut conn = self.pool.get()?;
        let changeset = DbUpdateCustomer::new(updates, Utc::now().naive_utc());

        let updated = diesel::update(customers::table.find(customer_id))
            .set(&changeset)
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete(&self, customer_id: i32) -> RepositoryResult<()> {
        use crate::schema::customers;

        let mut conn = self.pool.get()?;
        diesel::delete(customers::table.find(customer_id)).execute(&mut conn)?;

        Ok(())
    }
}
