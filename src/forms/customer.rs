//! Customer input payloads shared by the API and the HTML forms.
//!
//! Validation runs on the raw input; normalization (trimming, VAT
//! upper-casing) happens afterwards in the domain constructors. The VAT
//! character check is therefore case-insensitive: lower-case letters pass
//! here and are canonicalized to upper-case before persistence.

use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::domain::customer::{NewCustomer, UpdateCustomer};

/// Rejects values that are empty or whitespace-only.
fn validate_required_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message("Value is required".into()));
    }
    Ok(())
}

/// Telephone numbers may only contain digits, spaces, `-`, `+`, `(` and `)`.
fn validate_telephone(value: &str) -> Result<(), ValidationError> {
    let valid = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'));
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("telephone")
            .with_message("Please enter a valid phone number".into()))
    }
}

/// VAT numbers may only contain letters and digits, in any case.
fn validate_vat_number(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(ValidationError::new("vat_number")
            .with_message("VAT Number should contain only letters and numbers".into()))
    }
}

/// Blank-tolerant email syntax check; presence rules live elsewhere.
fn validate_contact_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    if value.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email")
            .with_message("Please enter a valid email address".into()))
    }
}

/// JSON payload for the create and update API endpoints. The same rule set
/// applies to both operations.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    #[validate(
        custom(function = validate_required_text, message = "Name is required"),
        length(max = 200, message = "Name cannot exceed 200 characters")
    )]
    pub name: String,

    #[validate(
        custom(function = validate_required_text, message = "Address is required"),
        length(max = 500, message = "Address cannot exceed 500 characters")
    )]
    pub address: String,

    #[validate(
        length(max = 20, message = "Telephone number cannot exceed 20 characters"),
        custom(function = validate_telephone)
    )]
    pub telephone_number: Option<String>,

    #[validate(length(max = 100, message = "Contact person name cannot exceed 100 characters"))]
    pub contact_person_name: Option<String>,

    #[validate(
        custom(function = validate_contact_email),
        length(max = 255, message = "Email cannot exceed 255 characters")
    )]
    pub contact_person_email: Option<String>,

    #[validate(
        length(max = 50, message = "VAT Number cannot exceed 50 characters"),
        custom(function = validate_vat_number)
    )]
    pub vat_number: Option<String>,
}

impl From<CustomerPayload> for NewCustomer {
    fn from(payload: CustomerPayload) -> Self {
        NewCustomer::new(
            payload.name,
            payload.address,
            payload.telephone_number,
            payload.contact_person_name,
            payload.contact_person_email,
            payload.vat_number,
        )
    }
}

impl From<CustomerPayload> for UpdateCustomer {
    fn from(payload: CustomerPayload) -> Self {
        UpdateCustomer::new(
            payload.name,
            payload.address,
            payload.telephone_number,
            payload.contact_person_name,
            payload.contact_person_email,
            payload.vat_number,
        )
    }
}

/// Form data for creating a customer from the UI. HTML forms always submit
/// every input, so the optional fields arrive as (possibly empty) strings and
/// normalization drops the blanks.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCustomerForm {
    #[validate(
        custom(function = validate_required_text, message = "Name is required"),
        length(max = 200, message = "Name cannot exceed 200 characters")
    )]
    pub name: String,
    #[validate(
        custom(function = validate_required_text, message = "Address is required"),
        length(max = 500, message = "Address cannot exceed 500 characters")
    )]
    pub address: String,
    #[validate(
        length(max = 20, message = "Telephone number cannot exceed 20 characters"),
        custom(function = validate_telephone)
    )]
    pub telephone_number: String,
    #[validate(length(max = 100, message = "Contact person name cannot exceed 100 characters"))]
    pub contact_person_name: String,
    #[validate(
        custom(function = validate_contact_email),
        length(max = 255, message = "Email cannot exceed 255 characters")
    )]
    pub contact_person_email: String,
    #[validate(
        length(max = 50, message = "VAT Number cannot exceed 50 characters"),
        custom(function = validate_vat_number)
    )]
    pub vat_number: String,
}

impl From<AddCustomerForm> for NewCustomer {
    fn from(form: AddCustomerForm) -> Self {
        NewCustomer::new(
            form.name,
            form.address,
            Some(form.telephone_number),
            Some(form.contact_person_name),
            Some(form.contact_person_email),
            Some(form.vat_number),
        )
    }
}

/// Form data for updating an existing customer from the UI.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveCustomerForm {
    pub id: i32,
    #[validate(
        custom(function = validate_required_text, message = "Name is required"),
        length(max = 200, message = "Name cannot exceed 200 characters")
    )]
    pub name: String,
    #[validate(
        custom(function = validate_required_text, message = "Address is required"),
        length(max = 500, message = "Address cannot exceed 500 characters")
    )]
    pub address: String,
    #[validate(
        length(max = 20, message = "Telephone number cannot exceed 20 characters"),
        custom(function = validate_telephone)
    )]
    pub telephone_number: String,
    #[validate(length(max = 100, message = "Contact person name cannot exceed 100 characters"))]
    pub contact_person_name: String,
    #[validate(
        custom(function = validate_contact_email),
        length(max = 255, message = "Email cannot exceed 255 characters")
    )]
    pub contact_person_email: String,
    #[validate(
        length(max = 50, message = "VAT Number cannot exceed 50 characters"),
        custom(function = validate_vat_number)
    )]
    pub vat_number: String,
}

impl From<&SaveCustomerForm> for UpdateCustomer {
    fn from(form: &SaveCustomerForm) -> Self {
        UpdateCustomer::new(
            form.name.clone(),
            form.address.clone(),
            Some(form.telephone_number.clone()),
            Some(form.contact_person_name.clone()),
            Some(form.contact_person_email.clone()),
            Some(form.vat_number.clone()),
        )
    }
}

/// Form data for deleting a customer from the UI.
#[derive(Debug, Deserialize)]
pub struct DeleteCustomerForm {
    pub id: i32,
}
