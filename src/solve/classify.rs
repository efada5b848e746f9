use std::collections::HashSet;

use itertools::iproduct;

use crate::solve::Status;
use crate::table::{Element, MulTable};

/// Checks the determined products of a table against the group axioms.
/// Checks run in order and stop at the first violation.
pub fn classify(table: &MulTable) -> Status {
    if table.has_empty_entry() {
        trace!("table has a product with no candidates");
        return Status::Invalid;
    }
    let identities = table.identity_candidates();
    if identities.is_empty() {
        trace!("no element can be the identity");
        return Status::Invalid;
    }
    // with several identity candidates there is no single identity to check inverses against
    if let &[e] = identities.as_slice() {
        if !inverses_possible(table, e) {
            return Status::Invalid;
        }
    }
    if !associative(table) || !latin(table) {
        return Status::Invalid;
    }
    if table.is_complete() {
        Status::Valid
    } else {
        Status::Incomplete
    }
}

/// Every element must still have a possible inverse, and a known inverse must be two-sided
fn inverses_possible(table: &MulTable, e: Element) -> bool {
    let order = table.order();
    for a in 0..order {
        let mut has_inverse = false;
        for b in 0..order {
            if table.product(a, b) == Some(e) && !table.is_candidate(b, a, e) {
                trace!("{}∘{} is the identity but {}∘{} cannot be", a, b, b, a);
                return false;
            }
            if table.is_candidate(a, b, e) {
                has_inverse = true;
            }
        }
        if !has_inverse {
            trace!("{} has no possible inverse", a);
            return false;
        }
    }
    true
}

/// `(a∘b)∘c = a∘(b∘c)` wherever both sides are determined
fn associative(table: &MulTable) -> bool {
    let order = table.order();
    for (a, b, c) in iproduct!(0..order, 0..order, 0..order) {
        let (ab, bc) = match (table.product(a, b), table.product(b, c)) {
            (Some(ab), Some(bc)) => (ab, bc),
            _ => continue,
        };
        if let (Some(left), Some(right)) = (table.product(ab, c), table.product(a, bc)) {
            if left != right {
                trace!("({}∘{})∘{} = {} but {}∘({}∘{}) = {}", a, b, c, left, a, b, c, right);
                return false;
            }
        }
    }
    true
}

/// No element is determined twice in a row or in a column
fn latin(table: &MulTable) -> bool {
    let order = table.order();
    for i in 0..order {
        let mut row = HashSet::new();
        let mut col = HashSet::new();
        for j in 0..order {
            if let Some(c) = table.product(i, j) {
                if !row.insert(c) {
                    trace!("{} appears twice in row {}", c, i);
                    return false;
                }
            }
            if let Some(c) = table.product(j, i) {
                if !col.insert(c) {
                    trace!("{} appears twice in column {}", c, i);
                    return false;
                }
            }
        }
    }
    true
}
