//! Rolodex Storage Layer
//!
//! Implements the Network trait with an in-memory catalog. The store owns
//! every entity; all mutation goes through explicit add operations, and the
//! contact log is append-only for the store's lifetime.
//!
//! # Architecture
//!
//! - Name-keyed maps for partners, companies, and employees
//! - A growable, insertion-ordered log of contact events
//! - Validation runs before any write, so a rejected call leaves the
//!   network untouched
//!
//! # Examples
//!
//! ```
//! use rolodex_domain::Network;
//! use rolodex_store::MemoryNetwork;
//!
//! let mut network = MemoryNetwork::new();
//! network.add_partner("Alice").unwrap();
//! network.add_company("Acme").unwrap();
//! network.add_employee("Bob", "Acme").unwrap();
//! network.add_contact("Bob", "Alice", "email").unwrap();
//! assert_eq!(network.contacts().len(), 1);
//! ```

#![warn(missing_docs)]

use rolodex_domain::{Company, Contact, ContactType, Employee, Network, Partner};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during store mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The name already exists in its namespace
    #[error("Duplicate {kind}: {name}")]
    DuplicateEntity {
        /// Entity kind ("partner", "company", "employee")
        kind: &'static str,
        /// The name that was already taken
        name: String,
    },

    /// A referenced entity does not exist
    #[error("Unknown {kind}: {name}")]
    UnknownReference {
        /// Entity kind that was looked up
        kind: &'static str,
        /// The name that could not be resolved
        name: String,
    },

    /// A contact type outside the known set
    #[error("Invalid contact type: {0}")]
    InvalidValue(String),
}

/// In-memory implementation of the Network trait
///
/// This store holds the full entity catalog and contact log for one program
/// run. It is created empty and discarded at exit; nothing persists.
///
/// # Thread Safety
///
/// The store is single-writer by design. Mutations are not idempotent
/// (duplicate detection depends on application order), so any concurrent
/// ingestion must serialize them.
#[derive(Debug, Default)]
pub struct MemoryNetwork {
    partners: HashMap<String, Partner>,
    companies: HashMap<String, Company>,
    employees: HashMap<String, Employee>,
    contacts: Vec<Contact>,
}

impl MemoryNetwork {
    /// Create an empty network
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of partners in the catalog
    pub fn partner_count(&self) -> usize {
        self.partners.len()
    }

    /// Number of companies in the catalog
    pub fn company_count(&self) -> usize {
        self.companies.len()
    }

    /// Number of employees in the catalog
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }
}

impl Network for MemoryNetwork {
    type Error = StoreError;

    fn add_partner(&mut self, name: &str) -> Result<(), Self::Error> {
        if self.partners.contains_key(name) {
            return Err(StoreError::DuplicateEntity {
                kind: "partner",
                name: name.to_string(),
            });
        }

        debug!(partner = name, "adding partner");
        self.partners
            .insert(name.to_string(), Partner::new(name.to_string()));
        Ok(())
    }

    fn add_company(&mut self, name: &str) -> Result<(), Self::Error> {
        if self.companies.contains_key(name) {
            return Err(StoreError::DuplicateEntity {
                kind: "company",
                name: name.to_string(),
            });
        }

        debug!(company = name, "adding company");
        self.companies
            .insert(name.to_string(), Company::new(name.to_string()));
        Ok(())
    }

    fn add_employee(&mut self, name: &str, company: &str) -> Result<(), Self::Error> {
        if self.employees.contains_key(name) {
            return Err(StoreError::DuplicateEntity {
                kind: "employee",
                name: name.to_string(),
            });
        }
        if !self.companies.contains_key(company) {
            return Err(StoreError::UnknownReference {
                kind: "company",
                name: company.to_string(),
            });
        }

        debug!(employee = name, company, "adding employee");
        self.employees.insert(
            name.to_string(),
            Employee::new(name.to_string(), company.to_string()),
        );
        Ok(())
    }

    fn add_contact(
        &mut self,
        employee: &str,
        partner: &str,
        contact_type: &str,
    ) -> Result<(), Self::Error> {
        // All three checks before the append, so failures leave the log
        // length unchanged.
        if !self.employees.contains_key(employee) {
            return Err(StoreError::UnknownReference {
                kind: "employee",
                name: employee.to_string(),
            });
        }
        if !self.partners.contains_key(partner) {
            return Err(StoreError::UnknownReference {
                kind: "partner",
                name: partner.to_string(),
            });
        }
        let contact_type = ContactType::parse(contact_type)
            .ok_or_else(|| StoreError::InvalidValue(contact_type.to_string()))?;

        debug!(employee, partner, %contact_type, "recording contact");
        self.contacts.push(Contact::new(
            employee.to_string(),
            partner.to_string(),
            contact_type,
        ));
        Ok(())
    }

    fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    fn company_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.companies.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    fn employee_company(&self, name: &str) -> Option<&str> {
        self.employees.get(name).map(|e| e.company.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_network() {
        let network = MemoryNetwork::new();
        assert_eq!(network.partner_count(), 0);
        assert_eq!(network.company_count(), 0);
        assert_eq!(network.employee_count(), 0);
        assert!(network.contacts().is_empty());
        assert!(network.company_names().is_empty());
    }

    #[test]
    fn test_contact_type_normalized_on_storage() {
        let mut network = MemoryNetwork::new();
        network.add_partner("Alice").unwrap();
        network.add_company("Acme").unwrap();
        network.add_employee("Bob", "Acme").unwrap();
        network.add_contact("Bob", "Alice", "EMAIL").unwrap();

        assert_eq!(network.contacts()[0].contact_type.as_str(), "email");
    }

    #[test]
    fn test_company_names_sorted() {
        let mut network = MemoryNetwork::new();
        network.add_company("Zeta").unwrap();
        network.add_company("Acme").unwrap();
        network.add_company("Mega").unwrap();

        assert_eq!(network.company_names(), vec!["Acme", "Mega", "Zeta"]);
    }
}
