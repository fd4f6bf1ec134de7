//! Pure filter/sort/page engine over in-memory customer sets.
//!
//! The Diesel repository pushes the same semantics down to SQL; this module
//! is the reference implementation used by the in-memory backend and by
//! tests. It never performs I/O.

use std::cmp::Ordering;

use crate::domain::customer::Customer;
use crate::repository::CustomerListQuery;

/// Recognised sort keys. Anything unrecognised falls back to `CreatedAt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Name,
    Address,
    VatNumber,
    #[default]
    CreatedAt,
}

impl SortField {
    /// Matches the raw identifier case-insensitively; unknown values sort by
    /// creation time.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "name" => SortField::Name,
            "address" => SortField::Address,
            "vatnumber" => SortField::VatNumber,
            _ => SortField::CreatedAt,
        }
    }

    fn compare(self, a: &Customer, b: &Customer) -> Ordering {
        match self {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Address => a.address.cmp(&b.address),
            SortField::VatNumber => a.vat_number.cmp(&b.vat_number),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}

fn matches(customer: &Customer, term: &str) -> bool {
    customer.name.contains(term)
        || customer
            .vat_number
            .as_deref()
            .is_some_and(|vat| vat.contains(term))
}

/// Applies filter, sort and pagination, returning the total match count and
/// the requested slice.
pub fn run(records: Vec<Customer>, query: &CustomerListQuery) -> (usize, Vec<Customer>) {
    let mut matched: Vec<Customer> = match &query.search {
        Some(term) => records.into_iter().filter(|c| matches(c, term)).collect(),
        None => records,
    };

    let total = matched.len();

    // Stable sort keeps ties in input order run-to-run.
    matched.sort_by(|a, b| {
        let ordering = query.sort_by.compare(a, b);
        if query.descending {
            ordering.reverse()
        } else {
            ordering
        }
    });

    let items = match query.pagination {
        Some(p) => {
            if p.page == 0 || p.per_page == 0 {
                vec![]
            } else {
                // Saturate so an absurd page number is just an empty page.
                matched
                    .into_iter()
                    .skip((p.page - 1).saturating_mul(p.per_page))
                    .take(p.per_page)
                    .collect()
            }
        }
        None => matched,
    };

    (total, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn customer(id: i32, name: &str, vat: Option<&str>) -> Customer {
        Customer {
            id,
            name: name.to_string(),
            address: format!("Address {id}"),
            vat_number: vat.map(str::to_string),
            created_at: NaiveDate::from_ymd_opt(2025, 1, id as u32)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            ..Customer::default()
        }
    }

    fn five_records() -> Vec<Customer> {
        (1..=5)
            .map(|id| customer(id, &format!("Customer {id}"), None))
            .collect()
    }

    #[test]
    fn paginates_with_total_match_count() {
        let (total, page2) =
            run(five_records(), &CustomerListQuery::new().paginate(2, 2));
        assert_eq!(total, 5);
        assert_eq!(page2.len(), 2);
        assert_eq!(page2[0].id, 3);

        let (total, page3) =
            run(five_records(), &CustomerListQuery::new().paginate(3, 2));
        assert_eq!(total, 5);
        assert_eq!(page3.len(), 1);
        assert_eq!(page3[0].id, 5);
    }

    #[test]
    fn zero_page_or_page_size_yields_empty_page() {
        let (total, items) =
            run(five_records(), &CustomerListQuery::new().paginate(0, 2));
        assert_eq!(total, 5);
        assert!(items.is_empty());

        let (total, items) =
            run(five_records(), &CustomerListQuery::new().paginate(1, 0));
        assert_eq!(total, 5);
        assert!(items.is_empty());
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let (total, items) =
            run(five_records(), &CustomerListQuery::new().paginate(4, 2));
        assert_eq!(total, 5);
        assert!(items.is_empty());
    }

    #[test]
    fn extreme_page_number_is_empty_not_a_panic() {
        let (total, items) =
            run(five_records(), &CustomerListQuery::new().paginate(usize::MAX, 2));
        assert_eq!(total, 5);
        assert!(items.is_empty());

        let (total, items) = run(
            five_records(),
            &CustomerListQuery::new().paginate(2, usize::MAX),
        );
        assert_eq!(total, 5);
        assert!(items.is_empty());
    }

    #[test]
    fn search_matches_name_or_vat_substring() {
        let records = vec![
            customer(1, "Alpha Company", None),
            customer(2, "Beta Industries", Some("ZA111")),
            customer(3, "Alpha Solutions", None),
            customer(4, "Gamma Corp", None),
        ];
        let (total, items) = run(records.clone(), &CustomerListQuery::new().search("Alpha"));
        assert_eq!(total, 2);
        assert!(items.iter().all(|c| c.name.contains("Alpha")));

        let (total, items) = run(records, &CustomerListQuery::new().search("ZA1"));
        assert_eq!(total, 1);
        assert_eq!(items[0].name, "Beta Industries");
    }

    #[test]
    fn blank_search_is_ignored() {
        let query = CustomerListQuery::new().search("   ");
        assert!(query.search.is_none());
        let (total, items) = run(five_records(), &query);
        assert_eq!(total, 5);
        assert_eq!(items.len(), 5);
    }

    #[test]
    fn sorts_by_name_both_directions() {
        let records = vec![
            customer(1, "Zebra Company", None),
            customer(2, "Alpha Company", None),
            customer(3, "Beta Company", None),
        ];

        let (_, ascending) = run(
            records.clone(),
            &CustomerListQuery::new().sort_by(SortField::Name),
        );
        let names: Vec<&str> = ascending.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Alpha Company", "Beta Company", "Zebra Company"]);

        let (_, descending) = run(
            records,
            &CustomerListQuery::new()
                .sort_by(SortField::Name)
                .descending(true),
        );
        let names: Vec<&str> = descending.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Zebra Company", "Beta Company", "Alpha Company"]);
    }

    #[test]
    fn unknown_sort_key_falls_back_to_created_at() {
        assert_eq!(SortField::parse("NAME"), SortField::Name);
        assert_eq!(SortField::parse("VatNumber"), SortField::VatNumber);
        assert_eq!(SortField::parse("CreatedAt"), SortField::CreatedAt);
        assert_eq!(SortField::parse("telephone"), SortField::CreatedAt);
        assert_eq!(SortField::parse(""), SortField::CreatedAt);
    }
}
