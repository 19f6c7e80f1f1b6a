//! Contact module - typed interaction events between employees and partners

use std::fmt;

/// Type of a contact event
///
/// The set is closed: input is matched case-insensitively and stored in its
/// lower-case canonical form. Anything outside the set is rejected at the
/// store boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactType {
    /// An email exchange
    Email,

    /// A phone call
    Call,

    /// An in-person coffee meeting
    Coffee,
}

impl ContactType {
    /// Get the canonical lower-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactType::Email => "email",
            ContactType::Call => "call",
            ContactType::Coffee => "coffee",
        }
    }

    /// Parse a contact type from a string, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "email" => Some(ContactType::Email),
            "call" => Some(ContactType::Call),
            "coffee" => Some(ContactType::Coffee),
            _ => None,
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContactType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid contact type: {}", s))
    }
}

/// One contact event between an employee and a partner
///
/// Contacts are plain counters: the same (employee, partner, type) triple
/// may be recorded any number of times, and each occurrence is a separate
/// event. The log they live in is append-only for the lifetime of a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Name of the employee who made the contact
    pub employee: String,

    /// Name of the partner who was contacted
    pub partner: String,

    /// How the contact happened
    pub contact_type: ContactType,
}

impl Contact {
    /// Create a new contact event
    pub fn new(employee: String, partner: String, contact_type: ContactType) -> Self {
        Self {
            employee,
            partner,
            contact_type,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: parsing is insensitive to ASCII case
        #[test]
        fn test_parse_case_insensitive(s in "[a-zA-Z]{0,12}") {
            prop_assert_eq!(
                ContactType::parse(&s),
                ContactType::parse(&s.to_lowercase())
            );
        }

        /// Property: canonical names round-trip through parse
        #[test]
        fn test_canonical_roundtrip(t in prop_oneof![
            Just(ContactType::Email),
            Just(ContactType::Call),
            Just(ContactType::Coffee),
        ]) {
            prop_assert_eq!(ContactType::parse(t.as_str()), Some(t));
        }

        /// Property: anything that parses is one of the three known names
        #[test]
        fn test_closed_set(s in "\\PC{0,12}") {
            if let Some(t) = ContactType::parse(&s) {
                prop_assert_eq!(s.to_lowercase(), t.as_str());
            }
        }
    }
}
