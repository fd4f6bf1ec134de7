//! JSON API under `/api/v1/customers`.
//!
//! Validation failures answer 400 with the per-field violations, missing ids
//! answer 404, and anything the repository reports is logged and collapsed
//! into a plain 500.

use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use log::error;
use serde::Deserialize;
use validator::Validate;

use crate::db::DbPool;
use crate::domain::customer::{NewCustomer, UpdateCustomer};
use crate::dto::customer::CustomerDto;
use crate::forms::customer::CustomerPayload;
use crate::repository::customer::DieselCustomerRepository;
use crate::services::customer::{
    CustomerListParams, create_customer, delete_customer, get_customer_by_id, list_customers,
    update_customer,
};
use crate::services::ServiceError;

#[derive(Debug, Deserialize)]
pub struct ListQueryParams {
    search: Option<String>,
    page: Option<usize>,
    page_size: Option<usize>,
    sort_by: Option<String>,
    #[serde(default)]
    desc: bool,
}

#[get("/v1/customers")]
pub async fn api_list_customers(
    params: web::Query<ListQueryParams>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let params = params.into_inner();
    let repo = DieselCustomerRepository::new(&pool);

    let list_params = CustomerListParams {
        search: params.search,
        page: params.page,
        page_size: params.page_size,
        sort_by: params.sort_by,
        descending: params.desc,
    };

    match list_customers(&repo, list_params) {
        Ok(page) => HttpResponse::Ok().json(page.map(CustomerDto::from)),
        Err(e) => {
            error!("Failed to list customers: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/customers/{id}")]
pub async fn api_get_customer(id: web::Path<i32>, pool: web::Data<DbPool>) -> impl Responder {
    let id = id.into_inner();
    let repo = DieselCustomerRepository::new(&pool);

    match get_customer_by_id(&repo, id) {
        Ok(Some(customer)) => HttpResponse::Ok().json(CustomerDto::from(customer)),
        Ok(None) => HttpResponse::NotFound().body(format!("Customer with ID {id} not found")),
        Err(e) => {
            error!("Failed to get customer {id}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/v1/customers")]
pub async fn api_create_customer(
    payload: web::Json<CustomerPayload>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let payload = payload.into_inner();
    if let Err(errors) = payload.validate() {
        return HttpResponse::BadRequest().json(errors);
    }

    let repo = DieselCustomerRepository::new(&pool);
    let new_customer: NewCustomer = payload.into();

    match create_customer(&repo, &new_customer) {
        Ok(customer) => HttpResponse::Created().json(CustomerDto::from(customer)),
        Err(e) => {
            error!("Failed to create customer: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[put("/v1/customers/{id}")]
pub async fn api_update_customer(
    id: web::Path<i32>,
    payload: web::Json<CustomerPayload>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let id = id.into_inner();
    let payload = payload.into_inner();
    if let Err(errors) = payload.validate() {
        return HttpResponse::BadRequest().json(errors);
    }

    let repo = DieselCustomerRepository::new(&pool);
    let updates: UpdateCustomer = payload.into();

    match update_customer(&repo, id, &updates) {
        Ok(customer) => HttpResponse::Ok().json(CustomerDto::from(customer)),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().body(format!("Customer with ID {id} not found"))
        }
        Err(e) => {
            error!("Failed to update customer {id}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[delete("/v1/customers/{id}")]
pub async fn api_delete_customer(id: web::Path<i32>, pool: web::Data<DbPool>) -> impl Responder {
    let id = id.into_inner();
    let repo = DieselCustomerRepository::new(&pool);

    match delete_customer(&repo, id) {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().body(format!("Customer with ID {id} not found")),
        Err(e) => {
            error!("Failed to delete customer {id}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
