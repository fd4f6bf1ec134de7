use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::Tera;
use validator::Validate;

use crate::db::DbPool;
use crate::domain::customer::UpdateCustomer;
use crate::forms::customer::{DeleteCustomerForm, SaveCustomerForm};
use crate::repository::customer::DieselCustomerRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::customer::{delete_customer, get_customer_by_id, update_customer};

#[get("/customer/{customer_id}")]
pub async fn show_customer(
    customer_id: web::Path<i32>,
    pool: web::Data<DbPool>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let customer_id = customer_id.into_inner();
    let repo = DieselCustomerRepository::new(&pool);

    let customer = match get_customer_by_id(&repo, customer_id) {
        Ok(Some(customer)) => customer,
        Ok(None) => {
            FlashMessage::error("Customer not found.").send();
            return redirect("/");
        }
        Err(e) => {
            error!("Failed to get customer: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages);
    context.insert("customer", &customer);

    render_template(&tera, "customer/index.html", &context)
}

#[post("/customer/save")]
pub async fn save_customer(
    pool: web::Data<DbPool>,
    web::Form(form): web::Form<SaveCustomerForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        error!("Failed to validate form: {e}");
        FlashMessage::error("Please correct the highlighted fields.").send();
        return redirect(&format!("/customer/{}", form.id));
    }

    let repo = DieselCustomerRepository::new(&pool);
    let updates: UpdateCustomer = (&form).into();

    match update_customer(&repo, form.id, &updates) {
        Ok(_) => {
            FlashMessage::success("Customer updated.").send();
            redirect(&format!("/customer/{}", form.id))
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Customer not found.").send();
            redirect("/")
        }
        Err(e) => {
            error!("Failed to update customer: {e}");
            FlashMessage::error("Failed to update the customer.").send();
            redirect(&format!("/customer/{}", form.id))
        }
    }
}

#[post("/customer/delete")]
pub async fn remove_customer(
    pool: web::Data<DbPool>,
    web::Form(form): web::Form<DeleteCustomerForm>,
) -> impl Responder {
    let repo = DieselCustomerRepository::new(&pool);

    match delete_customer(&repo, form.id) {
        Ok(true) => {
            FlashMessage::success("Customer deleted.").send();
        }
        Ok(false) => {
            FlashMessage::error("Customer not found.").send();
        }
        Err(e) => {
            error!("Failed to delete customer: {e}");
            FlashMessage::error("Failed to delete the customer.").send();
        }
    }

    redirect("/")
}
