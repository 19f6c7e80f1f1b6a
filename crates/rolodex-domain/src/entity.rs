//! Entity module - the catalog records tracked by a network
//!
//! Every entity is identified by its name, which is unique within its own
//! kind and immutable after creation. There are no surrogate identifiers.

/// An external relationship counterpart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partner {
    /// Partner name (unique among partners)
    pub name: String,
}

impl Partner {
    /// Create a new partner
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

/// A portfolio or prospect company
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    /// Company name (unique among companies)
    pub name: String,
}

impl Company {
    /// Create a new company
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

/// An employee at a company
///
/// The company binding is set once at creation and must reference a company
/// that already exists in the same network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Employee name (unique among employees)
    pub name: String,

    /// Name of the company this employee belongs to
    pub company: String,
}

impl Employee {
    /// Create a new employee bound to a company
    pub fn new(name: String, company: String) -> Self {
        Self { name, company }
    }
}
