//! Integration tests for rolodex-store
//!
//! These tests verify the full mutation surface of the in-memory network:
//! uniqueness, referential checks, type validation, and the append-only
//! contact log.

use rolodex_domain::{ContactType, Network};
use rolodex_store::{MemoryNetwork, StoreError};

fn seeded_network() -> MemoryNetwork {
    let mut network = MemoryNetwork::new();
    network.add_partner("Alice").unwrap();
    network.add_company("Acme").unwrap();
    network.add_employee("Bob", "Acme").unwrap();
    network
}

#[test]
fn test_add_partner() {
    let mut network = MemoryNetwork::new();
    assert!(network.add_partner("Alice").is_ok());
    assert_eq!(network.partner_count(), 1);
}

#[test]
fn test_duplicate_partner_rejected() {
    let mut network = MemoryNetwork::new();
    network.add_partner("Alice").unwrap();

    let result = network.add_partner("Alice");
    assert_eq!(
        result,
        Err(StoreError::DuplicateEntity {
            kind: "partner",
            name: "Alice".to_string(),
        })
    );
    assert_eq!(network.partner_count(), 1);
}

#[test]
fn test_duplicate_company_rejected() {
    let mut network = MemoryNetwork::new();
    network.add_company("Acme").unwrap();

    assert!(matches!(
        network.add_company("Acme"),
        Err(StoreError::DuplicateEntity { kind: "company", .. })
    ));
    assert_eq!(network.company_count(), 1);
}

#[test]
fn test_duplicate_employee_rejected() {
    let mut network = seeded_network();

    assert!(matches!(
        network.add_employee("Bob", "Acme"),
        Err(StoreError::DuplicateEntity { kind: "employee", .. })
    ));
    assert_eq!(network.employee_count(), 1);
}

#[test]
fn test_employee_requires_existing_company() {
    let mut network = MemoryNetwork::new();

    let result = network.add_employee("Bob", "Acme");
    assert_eq!(
        result,
        Err(StoreError::UnknownReference {
            kind: "company",
            name: "Acme".to_string(),
        })
    );
    assert_eq!(network.employee_count(), 0);
}

#[test]
fn test_names_are_unique_per_kind_not_globally() {
    // The same name may exist as a partner and as a company.
    let mut network = MemoryNetwork::new();
    network.add_partner("Apex").unwrap();
    assert!(network.add_company("Apex").is_ok());
}

#[test]
fn test_add_contact() {
    let mut network = seeded_network();
    network.add_contact("Bob", "Alice", "email").unwrap();

    let contacts = network.contacts();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].employee, "Bob");
    assert_eq!(contacts[0].partner, "Alice");
    assert_eq!(contacts[0].contact_type, ContactType::Email);
}

#[test]
fn test_contact_unknown_employee_rejected() {
    let mut network = seeded_network();

    let result = network.add_contact("Carol", "Alice", "email");
    assert_eq!(
        result,
        Err(StoreError::UnknownReference {
            kind: "employee",
            name: "Carol".to_string(),
        })
    );
    // A rejected contact must not change the log.
    assert!(network.contacts().is_empty());
}

#[test]
fn test_contact_unknown_partner_rejected() {
    let mut network = seeded_network();

    assert!(matches!(
        network.add_contact("Bob", "Mallory", "call"),
        Err(StoreError::UnknownReference { kind: "partner", .. })
    ));
    assert!(network.contacts().is_empty());
}

#[test]
fn test_contact_invalid_type_rejected() {
    let mut network = seeded_network();

    let result = network.add_contact("Bob", "Alice", "fax");
    assert_eq!(result, Err(StoreError::InvalidValue("fax".to_string())));
    assert!(network.contacts().is_empty());
}

#[test]
fn test_duplicate_contacts_are_additive() {
    // Repeated identical events are intentional; each one counts.
    let mut network = seeded_network();
    network.add_contact("Bob", "Alice", "email").unwrap();
    network.add_contact("Bob", "Alice", "email").unwrap();
    network.add_contact("Bob", "Alice", "email").unwrap();

    assert_eq!(network.contacts().len(), 3);
}

#[test]
fn test_contacts_preserve_insertion_order() {
    let mut network = seeded_network();
    network.add_partner("Zara").unwrap();
    network.add_contact("Bob", "Zara", "coffee").unwrap();
    network.add_contact("Bob", "Alice", "call").unwrap();

    let partners: Vec<&str> = network
        .contacts()
        .iter()
        .map(|c| c.partner.as_str())
        .collect();
    assert_eq!(partners, vec!["Zara", "Alice"]);
}

#[test]
fn test_employee_company_lookup() {
    let network = seeded_network();
    assert_eq!(network.employee_company("Bob"), Some("Acme"));
    assert_eq!(network.employee_company("Carol"), None);
}
