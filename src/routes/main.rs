use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use serde::Deserialize;
use tera::Tera;
use validator::Validate;

use crate::db::DbPool;
use crate::domain::customer::NewCustomer;
use crate::forms::customer::AddCustomerForm;
use crate::repository::customer::DieselCustomerRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::customer::{
    CustomerListParams, DEFAULT_PAGE_SIZE, create_customer, list_customers,
};

#[derive(Deserialize)]
struct IndexQueryParams {
    q: Option<String>,
    page: Option<usize>,
    sort: Option<String>,
    #[serde(default)]
    desc: bool,
}

#[get("/")]
pub async fn show_index(
    params: web::Query<IndexQueryParams>,
    pool: web::Data<DbPool>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = params.into_inner();
    let repo = DieselCustomerRepository::new(&pool);

    let list_params = CustomerListParams {
        search: params.q.clone(),
        page: params.page,
        page_size: Some(DEFAULT_PAGE_SIZE),
        sort_by: params.sort.clone(),
        descending: params.desc,
    };

    let customers = match list_customers(&repo, list_params) {
        Ok(page) => page,
        Err(e) => {
            error!("Failed to list customers: {e}");
            return actix_web::HttpResponse::InternalServerError().finish();
        }
    };

    let search_query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .unwrap_or("");

    let mut context = base_context(&flash_messages);
    context.insert("customers", &customers);
    context.insert("search_query", search_query);
    context.insert("sort_by", params.sort.as_deref().unwrap_or(""));
    context.insert("sort_desc", &params.desc);

    render_template(&tera, "main/index.html", &context)
}

#[post("/customer/add")]
pub async fn add_customer(
    pool: web::Data<DbPool>,
    web::Form(form): web::Form<AddCustomerForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        error!("Failed to validate form: {e}");
        FlashMessage::error("Please correct the highlighted fields.").send();
        return redirect("/");
    }

    let new_customer: NewCustomer = form.into();

    let repo = DieselCustomerRepository::new(&pool);
    match create_customer(&repo, &new_customer) {
        Ok(customer) => {
            FlashMessage::success(format!("Customer \"{}\" added.", customer.name)).send();
        }
        Err(e) => {
            error!("Failed to add a customer: {e}");
            FlashMessage::error("Failed to add the customer.").send();
        }
    }

    redirect("/")
}
