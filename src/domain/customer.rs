use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A customer record as stored by the repository.
///
/// `created_at` is assigned once on insert and never changes; `updated_at`
/// stays `None` until the first update and is stamped on every update after
/// that. `vat_number` is always canonical upper-case on read.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
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

/// Input for creating a customer. Construct through [`NewCustomer::new`] so
/// the fields are normalized before they reach the repository.
#[derive(Clone, Debug, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub address: String,
    pub telephone_number: Option<String>,
    pub contact_person_name: Option<String>,
    pub contact_person_email: Option<String>,
    pub vat_number: Option<String>,
}

impl NewCustomer {
    #[must_use]
    pub fn new(
        name: String,
        address: String,
        telephone_number: Option<String>,
        contact_person_name: Option<String>,
        contact_person_email: Option<String>,
        vat_number: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            address: address.trim().to_string(),
            telephone_number: normalize_optional(telephone_number),
            contact_person_name: normalize_optional(contact_person_name),
            contact_person_email: normalize_optional(contact_person_email),
            vat_number: normalize_vat(vat_number),
        }
    }
}

/// Input for updating a customer. Every mutable field is overwritten, so an
/// absent optional clears the stored value.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCustomer {
    pub name: String,
    pub address: String,
    pub telephone_number: Option<String>,
    pub contact_person_name: Option<String>,
    pub contact_person_email: Option<String>,
    pub vat_number: Option<String>,
}

impl UpdateCustomer {
    #[must_use]
    pub fn new(
        name: String,
        address: String,
        telephone_number: Option<String>,
        contact_person_name: Option<String>,
        contact_person_email: Option<String>,
        vat_number: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            address: address.trim().to_string(),
            telephone_number: normalize_optional(telephone_number),
            contact_person_name: normalize_optional(contact_person_name),
            contact_person_email: normalize_optional(contact_person_email),
            vat_number: normalize_vat(vat_number),
        }
    }
}

/// Trims the value and drops it entirely when nothing remains.
fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// VAT numbers are stored canonical upper-case regardless of input case.
fn normalize_vat(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
}
