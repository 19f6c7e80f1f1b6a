//! Line-oriented command interpreter.
//!
//! One command per line, fields separated by runs of whitespace, blank
//! lines skipped. The interpreter is strict: the first malformed line or
//! store rejection aborts the run with its line number, and no report is
//! produced.

use crate::error::{CliError, Result};
use rolodex_domain::Network;
use rolodex_store::{MemoryNetwork, StoreError};
use tracing::info;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `Partner <Name>`
    Partner {
        /// Partner name
        name: String,
    },

    /// `Company <Name>`
    Company {
        /// Company name
        name: String,
    },

    /// `Employee <Name> <CompanyName>`
    Employee {
        /// Employee name
        name: String,
        /// Company the employee belongs to
        company: String,
    },

    /// `Contact <EmployeeName> <PartnerName> <ContactType>`
    Contact {
        /// Employee who made the contact
        employee: String,
        /// Partner who was contacted
        partner: String,
        /// Raw contact type, validated by the store
        contact_type: String,
    },
}

impl Command {
    /// Parse one input line. Blank (or whitespace-only) lines yield `None`.
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, String> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let Some((&keyword, args)) = fields.split_first() else {
            return Ok(None);
        };

        let command = match (keyword, args) {
            ("Partner", [name]) => Command::Partner {
                name: name.to_string(),
            },
            ("Company", [name]) => Command::Company {
                name: name.to_string(),
            },
            ("Employee", [name, company]) => Command::Employee {
                name: name.to_string(),
                company: company.to_string(),
            },
            ("Contact", [employee, partner, contact_type]) => Command::Contact {
                employee: employee.to_string(),
                partner: partner.to_string(),
                contact_type: contact_type.to_string(),
            },
            ("Partner" | "Company" | "Employee" | "Contact", args) => {
                return Err(format!(
                    "wrong number of fields for {} ({} given)",
                    keyword,
                    args.len()
                ));
            }
            _ => return Err(format!("unknown command: {}", keyword)),
        };

        Ok(Some(command))
    }

    /// Apply this command to the network.
    pub fn apply(&self, network: &mut MemoryNetwork) -> std::result::Result<(), StoreError> {
        match self {
            Command::Partner { name } => network.add_partner(name),
            Command::Company { name } => network.add_company(name),
            Command::Employee { name, company } => network.add_employee(name, company),
            Command::Contact {
                employee,
                partner,
                contact_type,
            } => network.add_contact(employee, partner, contact_type),
        }
    }
}

/// Feed input lines to the network, in order.
///
/// Stops at the first failing line and reports its 1-based number.
pub fn ingest<'a, I>(network: &mut MemoryNetwork, lines: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    for (index, line) in lines.into_iter().enumerate() {
        let number = index + 1;
        let parsed = Command::parse(line).map_err(|message| CliError::InvalidInput {
            line: number,
            message,
        })?;
        let Some(command) = parsed else {
            continue;
        };
        command
            .apply(network)
            .map_err(|source| CliError::Store {
                line: number,
                source,
            })?;
    }

    info!(
        partners = network.partner_count(),
        companies = network.company_count(),
        employees = network.employee_count(),
        contacts = network.contacts().len(),
        "ingest complete"
    );
    Ok(())
}
