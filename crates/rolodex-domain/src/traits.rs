//! Trait definitions for the storage seam
//!
//! The trait defines the boundary between the domain model and the store
//! implementation. The in-memory implementation lives in `rolodex-store`;
//! the analysis in `rolodex-report` consumes it read-only through the same
//! trait.

use crate::Contact;

/// Trait for the authoritative relationship network
///
/// Mutations validate before writing: a failed call leaves the network
/// exactly as it was. The contact log is append-only and insertion-ordered.
pub trait Network {
    /// Error type for mutation operations
    type Error;

    /// Add a partner; fails if the name is already taken
    fn add_partner(&mut self, name: &str) -> Result<(), Self::Error>;

    /// Add a company; fails if the name is already taken
    fn add_company(&mut self, name: &str) -> Result<(), Self::Error>;

    /// Add an employee bound to an existing company
    fn add_employee(&mut self, name: &str, company: &str) -> Result<(), Self::Error>;

    /// Record one contact event between an existing employee and partner
    ///
    /// The contact type is matched case-insensitively against the closed
    /// [`crate::ContactType`] set. Repeated identical events are allowed
    /// and each one counts.
    fn add_contact(
        &mut self,
        employee: &str,
        partner: &str,
        contact_type: &str,
    ) -> Result<(), Self::Error>;

    /// All recorded contact events, in insertion order
    fn contacts(&self) -> &[Contact];

    /// All company names, sorted ascending
    fn company_names(&self) -> Vec<String>;

    /// Resolve an employee name to its company name
    fn employee_company(&self, name: &str) -> Option<&str>;
}
