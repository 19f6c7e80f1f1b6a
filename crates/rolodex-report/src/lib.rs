//! Rolodex Report
//!
//! Computes the strongest partner relationship per company from a populated
//! network.
//!
//! The analysis reads the network through the [`Network`] trait and never
//! mutates it: running it twice on the same network yields identical
//! output. Given a well-formed network (every contact references an
//! existing employee and partner, which the store guarantees) it has no
//! failure modes.
//!
//! # Examples
//!
//! ```
//! use rolodex_domain::Network;
//! use rolodex_report::analyze;
//! use rolodex_store::MemoryNetwork;
//!
//! let mut network = MemoryNetwork::new();
//! network.add_partner("Alice").unwrap();
//! network.add_company("Acme").unwrap();
//! network.add_employee("Bob", "Acme").unwrap();
//! network.add_contact("Bob", "Alice", "email").unwrap();
//!
//! assert_eq!(analyze(&network, false), "Acme: Alice (1)");
//! ```

#![warn(missing_docs)]

mod analyzer;

pub use analyzer::analyze;
