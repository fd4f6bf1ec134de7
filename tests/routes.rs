use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web_flash_messages::Level;
use tera::{Context, Tera};

use customer_management::domain::customer::Customer;
use customer_management::dto::customer::PagedResult;
use customer_management::routes::{alert_level_to_str, redirect};

#[test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[test]
fn test_redirect_is_see_other_with_location() {
    let resp = redirect("/customer/5");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/customer/5"
    );
}

#[test]
fn test_index_links_keep_search_and_sort_params() {
    let tera = Tera::new("templates/**/*.html").unwrap();

    let items = vec![
        Customer {
            id: 3,
            name: "Alpha Solutions".to_string(),
            address: "3 Main St".to_string(),
            ..Customer::default()
        },
        Customer {
            id: 4,
            name: "Alpha Company".to_string(),
            address: "4 Main St".to_string(),
            ..Customer::default()
        },
    ];
    let customers = PagedResult::new(items, 5, 2, 2);

    let mut context = Context::new();
    context.insert("alerts", &Vec::<(String, String)>::new());
    context.insert("customers", &customers);
    context.insert("search_query", "Alpha");
    context.insert("sort_by", "name");
    context.insert("sort_desc", &true);

    let html = tera.render("main/index.html", &context).unwrap();

    // Page navigation keeps the active filter and sort.
    assert!(html.contains("/?page=1&q=Alpha&sort=name&desc=true"));
    assert!(html.contains("/?page=3&q=Alpha&sort=name&desc=true"));
    // Column sort links keep the active filter.
    assert!(html.contains("/?sort=address&q=Alpha"));
}
