use actix_cors::Cors;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::db::establish_connection_pool;
use crate::middleware::RequireApiKey;
use crate::models::config::ServerConfig;
use crate::routes::api::{
    api_create_customer, api_delete_customer, api_get_customer, api_list_customers,
    api_update_customer,
};
use crate::routes::customer::{remove_customer, save_customer, show_customer};
use crate::routes::main::{add_customer, show_index};

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    // Key and store for flash messages shown by the server-rendered UI.
    let secret_key = Key::from(server_config.secret.as_bytes());
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    let api_key = server_config.api_key.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(
                web::scope("/api")
                    .wrap(RequireApiKey::new(api_key.clone()))
                    .wrap(Cors::permissive())
                    .service(api_list_customers)
                    .service(api_get_customer)
                    .service(api_create_customer)
                    .service(api_update_customer)
                    .service(api_delete_customer),
            )
            .service(show_index)
            .service(add_customer)
            .service(show_customer)
            .service(save_customer)
            .service(remove_customer)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
