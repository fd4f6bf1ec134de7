use customer_management::domain::customer::{NewCustomer, UpdateCustomer};
use customer_management::repository::customer::DieselCustomerRepository;
use customer_management::repository::{
    CustomerListQuery, CustomerReader, CustomerWriter, SortField,
};

mod common;

fn new_customer(name: &str, vat: Option<&str>) -> NewCustomer {
    NewCustomer::new(
        name.to_string(),
        format!("{name} address"),
        None,
        None,
        None,
        vat.map(str::to_string),
    )
}

#[test]
fn test_customer_repository_crud() {
    let test_db = common::TestDb::new("test_customer_repository_crud.db");
    let repo = DieselCustomerRepository::new(test_db.pool());

    let created = repo
        .create(&NewCustomer::new(
            "ABC Ltd".to_string(),
            "1 Main St".to_string(),
            Some("+27 21 555 0123".to_string()),
            Some("John Smith".to_string()),
            Some("john@abc.example".to_string()),
            Some("za123abc".to_string()),
        ))
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, "ABC Ltd");
    // VAT is canonical upper-case on read regardless of input case.
    assert_eq!(created.vat_number.as_deref(), Some("ZA123ABC"));
    assert_eq!(created.updated_at, None);

    let fetched = repo.get_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);

    assert!(repo.exists(created.id).unwrap());
    assert_eq!(repo.count().unwrap(), 1);

    let by_email = repo.get_by_email("john@abc.example").unwrap().unwrap();
    assert_eq!(by_email.id, created.id);
    let by_vat = repo.get_by_vat_number("ZA123ABC").unwrap().unwrap();
    assert_eq!(by_vat.id, created.id);
    assert!(repo.get_by_email("nobody@abc.example").unwrap().is_none());

    let updated = repo
        .update(
            created.id,
            &UpdateCustomer::new(
                "ABC Ltd 2".to_string(),
                "2 Main St".to_string(),
                None,
                None,
                None,
                None,
            ),
        )
        .unwrap();
    assert_eq!(updated.name, "ABC Ltd 2");
    // Optionals absent from the update clear the stored values.
    assert_eq!(updated.telephone_number, None);
    assert_eq!(updated.vat_number, None);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at.is_some());

    repo.delete(created.id).unwrap();
    assert!(repo.get_by_id(created.id).unwrap().is_none());
    assert_eq!(repo.count().unwrap(), 0);
}

#[test]
fn test_paged_listing() {
    let test_db = common::TestDb::new("test_paged_listing.db");
    let repo = DieselCustomerRepository::new(test_db.pool());

    for i in 1..=5 {
        repo.create(&new_customer(&format!("Customer {i}"), None))
            .unwrap();
    }

    let (total, page2) = repo
        .list(CustomerListQuery::new().paginate(2, 2))
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(page2.len(), 2);

    let (total, page3) = repo
        .list(CustomerListQuery::new().paginate(3, 2))
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(page3.len(), 1);

    let (total, empty) = repo
        .list(CustomerListQuery::new().paginate(0, 2))
        .unwrap();
    assert_eq!(total, 5);
    assert!(empty.is_empty());

    let (total, empty) = repo
        .list(CustomerListQuery::new().paginate(1, 0))
        .unwrap();
    assert_eq!(total, 5);
    assert!(empty.is_empty());

    // An absurd page number lands past the end rather than overflowing.
    let (total, empty) = repo
        .list(CustomerListQuery::new().paginate(usize::MAX, 2))
        .unwrap();
    assert_eq!(total, 5);
    assert!(empty.is_empty());
}

#[test]
fn test_search_by_name_and_vat() {
    let test_db = common::TestDb::new("test_search_by_name_and_vat.db");
    let repo = DieselCustomerRepository::new(test_db.pool());

    repo.create(&new_customer("Alpha Company", None)).unwrap();
    repo.create(&new_customer("Beta Industries", Some("ZA111")))
        .unwrap();
    repo.create(&new_customer("Alpha Solutions", None)).unwrap();
    repo.create(&new_customer("Gamma Corp", None)).unwrap();

    let (total, items) = repo
        .list(CustomerListQuery::new().search("Alpha"))
        .unwrap();
    assert_eq!(total, 2);
    assert!(items.iter().all(|c| c.name.contains("Alpha")));

    let (total, items) = repo.list(CustomerListQuery::new().search("ZA1")).unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name, "Beta Industries");

    let (total, _) = repo.list(CustomerListQuery::new().search("   ")).unwrap();
    assert_eq!(total, 4);
}

#[test]
fn test_sorting() {
    let test_db = common::TestDb::new("test_sorting.db");
    let repo = DieselCustomerRepository::new(test_db.pool());

    for name in ["Zebra Company", "Alpha Company", "Beta Company"] {
        repo.create(&new_customer(name, None)).unwrap();
    }

    let (_, ascending) = repo
        .list(CustomerListQuery::new().sort_by(SortField::Name))
        .unwrap();
    let names: Vec<&str> = ascending.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Alpha Company", "Beta Company", "Zebra Company"]);

    let (_, descending) = repo
        .list(
            CustomerListQuery::new()
                .sort_by(SortField::Name)
                .descending(true),
        )
        .unwrap();
    let names: Vec<&str> = descending.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Zebra Company", "Beta Company", "Alpha Company"]);

    // Default sort key is creation time, insertion order here.
    let (_, by_created) = repo.list(CustomerListQuery::new()).unwrap();
    let names: Vec<&str> = by_created.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Zebra Company", "Alpha Company", "Beta Company"]);
}
