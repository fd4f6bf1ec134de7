//! In-memory repository used to isolate the service layer in tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::Utc;

use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CustomerListQuery, CustomerReader, CustomerWriter, query};

#[derive(Default)]
struct State {
    next_id: i32,
    customers: BTreeMap<i32, Customer>,
}

/// Map-backed implementation of the repository traits. Identifiers count up
/// and are never reused, matching the SQLite AUTOINCREMENT behaviour.
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    state: Mutex<State>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> RepositoryResult<std::sync::MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|e| RepositoryError::Unexpected(format!("poisoned lock: {e}")))
    }
}

impl CustomerReader for InMemoryCustomerRepository {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>> {
        Ok(self.lock()?.customers.get(&id).cloned())
    }

    fn get_by_email(&self, email: &str) -> RepositoryResult<Option<Customer>> {
        Ok(self
            .lock()?
            .customers
            .values()
            .find(|c| c.contact_person_email.as_deref() == Some(email))
            .cloned())
    }

    fn get_by_vat_number(&self, vat_number: &str) -> RepositoryResult<Option<Customer>> {
        Ok(self
            .lock()?
            .customers
            .values()
            .find(|c| c.vat_number.as_deref() == Some(vat_number))
            .cloned())
    }

    fn count(&self) -> RepositoryResult<usize> {
        Ok(self.lock()?.customers.len())
    }

    fn exists(&self, id: i32) -> RepositoryResult<bool> {
        Ok(self.lock()?.customers.contains_key(&id))
    }

    fn list(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)> {
        let records: Vec<Customer> = self.lock()?.customers.values().cloned().collect();
        Ok(query::run(records, &query))
    }
}

impl CustomerWriter for InMemoryCustomerRepository {
    fn create(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer> {
        let mut state = self.lock()?;
        state.next_id += 1;
        let customer = Customer {
            id: state.next_id,
            name: new_customer.name.clone(),
            address: new_customer.address.clone(),
            telephone_number: new_customer.telephone_number.clone(),
            contact_person_name: new_customer.contact_person_name.clone(),
            contact_person_email: new_customer.contact_person_email.clone(),
            vat_number: new_customer.vat_number.clone(),
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        };
        state.customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    fn update(&self, customer_id: i32, updates: &UpdateCustomer) -> RepositoryResult<Customer> {
        let mut state = self.lock()?;
        let customer = state
            .customers
            .get_mut(&customer_id)
            .ok_or(RepositoryError::NotFound)?;
        customer.name = updates.name.clone();
        customer.address = updates.address.clone();
        customer.telephone_number = updates.telephone_number.clone();
        customer.contact_person_name = updates.contact_person_name.clone();
        customer.contact_person_email = updates.contact_person_email.clone();
        customer.vat_number = updates.vat_number.clone();
        customer.updated_at = Some(Utc::now().naive_utc());
        Ok(customer.clone())
    }

    fn delete(&self, customer_id: i32) -> RepositoryResult<()> {
        self.lock()?.customers.remove(&customer_id);
        Ok(())
    }
}
