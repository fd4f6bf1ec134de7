//! Seeds the database with a handful of sample customers when it is empty.

use config::{Config, Environment, File};
use log::info;

use customer_management::db::establish_connection_pool;
use customer_management::domain::customer::NewCustomer;
use customer_management::models::config::ServerConfig;
use customer_management::repository::customer::DieselCustomerRepository;
use customer_management::repository::{CustomerReader, CustomerWriter};

fn sample_customers() -> Vec<NewCustomer> {
    vec![
        NewCustomer::new(
            "ABC Manufacturing Ltd".to_string(),
            "123 Industrial Park, Cape Town, 8001".to_string(),
            Some("+27-21-555-0123".to_string()),
            Some("John Smith".to_string()),
            Some("john.smith@abcmanufacturing.co.za".to_string()),
            Some("ZA123456789".to_string()),
        ),
        NewCustomer::new(
            "Tech Solutions (Pty) Ltd".to_string(),
            "456 Business Centre, Johannesburg, 2000".to_string(),
            Some("+27-11-555-0456".to_string()),
            Some("Sarah Johnson".to_string()),
            Some("sarah.johnson@techsolutions.co.za".to_string()),
            Some("ZA987654321".to_string()),
        ),
        NewCustomer::new(
            "Green Energy Co".to_string(),
            "789 Eco Park, Durban, 4000".to_string(),
            Some("+27-31-555-0789".to_string()),
            Some("Mike Wilson".to_string()),
            Some("mike.wilson@greenenergy.co.za".to_string()),
            Some("ZA456789123".to_string()),
        ),
        NewCustomer::new(
            "Retail Masters".to_string(),
            "321 Shopping Complex, Pretoria, 0001".to_string(),
            Some("+27-12-555-0321".to_string()),
            Some("Lisa Brown".to_string()),
            Some("lisa.brown@retailmasters.co.za".to_string()),
            Some("ZA654321987".to_string()),
        ),
        NewCustomer::new(
            "Construction Plus".to_string(),
            "654 Building Site, Port Elizabeth, 6000".to_string(),
            Some("+27-41-555-0654".to_string()),
            Some("David Miller".to_string()),
            Some("david.miller@constructionplus.co.za".to_string()),
            Some("ZA789123456".to_string()),
        ),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::builder()
        .add_source(File::with_name("config"))
        .add_source(Environment::default())
        .build()?;
    let server_config: ServerConfig = config.try_deserialize()?;

    let pool = establish_connection_pool(&server_config.database_url)?;
    let repo = DieselCustomerRepository::new(&pool);

    if repo.count()? > 0 {
        info!("Database already contains customers, skipping seed");
        return Ok(());
    }

    for new_customer in sample_customers() {
        let customer = repo.create(&new_customer)?;
        info!("Seeded customer {} ({})", customer.name, customer.id);
    }

    Ok(())
}
