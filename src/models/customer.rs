use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::{
    Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::customers)]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub telephone_number: Option<String>,
    pub contact_person_name: Option<String>,
    pub contact_person_email: Option<String>,
    pub vat_number: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`].
pub struct NewCustomer<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub telephone_number: Option<&'a str>,
    pub contact_person_name: Option<&'a str>,
    pub contact_person_email: Option<&'a str>,
    pub vat_number: Option<&'a str>,
    pub created_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Customer`] record. `treat_none_as_null`
/// because an update overwrites every mutable field, including clearing
/// optionals that are absent from the input.
pub struct UpdateCustomer<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub telephone_number: Option<&'a str>,
    pub contact_person_name: Option<&'a str>,
    pub contact_person_email: Option<&'a str>,
    pub vat_number: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Customer> for DomainCustomer {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            address: customer.address,
            telephone_number: customer.telephone_number,
            contact_person_name: customer.contact_person_name,
            contact_person_email: customer.contact_person_email,
            vat_number: customer.vat_number,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}

impl<'a> NewCustomer<'a> {
    pub fn new(customer: &'a DomainNewCustomer, created_at: NaiveDateTime) -> Self {
        Self {
            name: customer.name.as_str(),
            address: customer.address.as_str(),
            telephone_number: customer.telephone_number.as_deref(),
            contact_person_name: customer.contact_person_name.as_deref(),
            contact_person_email: customer.contact_person_email.as_deref(),
            vat_number: customer.vat_number.as_deref(),
            created_at,
        }
    }
}

impl<'a> UpdateCustomer<'a> {
    pub fn new(updates: &'a DomainUpdateCustomer, updated_at: NaiveDateTime) -> Self {
        Self {
            name: updates.name.as_str(),
            address: updates.address.as_str(),
            telephone_number: updates.telephone_number.as_deref(),
            contact_person_name: updates.contact_person_name.as_deref(),
            contact_person_email: updates.contact_person_email.as_deref(),
            vat_number: updates.vat_number.as_deref(),
            updated_at,
        }
    }
}
