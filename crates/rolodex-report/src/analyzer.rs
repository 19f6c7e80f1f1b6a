//! Relationship strength analysis

use rolodex_domain::Network;
use std::collections::{BTreeMap, HashMap};

/// Analyze partner-company relationships and return the formatted report.
///
/// For each company known to the network, in ascending lexicographic order,
/// the report carries one line:
///
/// - `<company>: <partner> (<count>)` for the partner with the most contact
///   events from that company's employees, ties broken by the
///   lexicographically smallest partner name;
/// - `<company>: No current relationship` when no employee of the company
///   has any recorded contact.
///
/// With `verbose` set, each winning line is followed by one indented line
/// per contributing employee (lexicographic order), listing that employee's
/// contact types toward the winning partner with per-type counts.
///
/// Lines are joined by a single line break with no trailing break; a
/// network without companies produces the empty string.
pub fn analyze<N: Network>(network: &N, verbose: bool) -> String {
    // Count contacts for each (company, partner) pair.
    let mut company_partner_counts: HashMap<String, HashMap<String, u64>> = HashMap::new();
    for contact in network.contacts() {
        let Some(company) = network.employee_company(&contact.employee) else {
            // Unreachable against a store that enforces its invariants.
            continue;
        };
        *company_partner_counts
            .entry(company.to_string())
            .or_default()
            .entry(contact.partner.clone())
            .or_insert(0) += 1;
    }

    let mut lines = Vec::new();
    for company in network.company_names() {
        match company_partner_counts.get(&company) {
            Some(partner_counts) => {
                let (partner, count) = strongest(partner_counts);
                lines.push(format!("{}: {} ({})", company, partner, count));
                if verbose {
                    lines.extend(breakdown(network, &company, partner));
                }
            }
            None => lines.push(format!("{}: No current relationship", company)),
        }
    }

    lines.join("\n")
}

/// Pick the partner with the maximum count, smallest name on ties.
///
/// Explicit sort of the tied candidates keeps the result independent of
/// hash-map iteration order. Callers only pass non-empty maps.
fn strongest(partner_counts: &HashMap<String, u64>) -> (&str, u64) {
    let max_count = partner_counts.values().copied().max().unwrap_or(0);

    let mut best: Vec<&str> = partner_counts
        .iter()
        .filter(|(_, &count)| count == max_count)
        .map(|(partner, _)| partner.as_str())
        .collect();
    best.sort_unstable();

    (best.first().copied().unwrap_or(""), max_count)
}

/// Per-employee contact-type sub-lines for the winning (company, partner)
/// pair, one line per contributing employee.
fn breakdown<N: Network>(network: &N, company: &str, winner: &str) -> Vec<String> {
    // BTreeMaps give the lexicographic ordering directly, for employees and
    // for the type names within each employee.
    let mut per_employee: BTreeMap<&str, BTreeMap<&'static str, u64>> = BTreeMap::new();
    for contact in network.contacts() {
        if contact.partner != winner {
            continue;
        }
        if network.employee_company(&contact.employee) != Some(company) {
            continue;
        }
        *per_employee
            .entry(contact.employee.as_str())
            .or_default()
            .entry(contact.contact_type.as_str())
            .or_insert(0) += 1;
    }

    per_employee
        .iter()
        .map(|(employee, type_counts)| {
            let types: Vec<String> = type_counts
                .iter()
                .map(|(contact_type, count)| format!("{} ({})", contact_type, count))
                .collect();
            format!("  - {}: {}", employee, types.join(", "))
        })
        .collect()
}
