use itertools::{iproduct, Itertools};

use crate::table::{Element, MulTable};

/// A deduction from the group axioms that narrows product domains
trait Rule {
    /// Applies this rule once across the whole table.
    /// Returns `true` if any domain was narrowed.
    fn apply(&self, table: &mut MulTable, identity: Option<Element>) -> bool;
}

const RULES: &[&dyn Rule] = &[
    // the identity fixes its own row and column
    &IdentityRule,
    // a known product does not occur again in its row or column
    &LatinRule,
    // if a∘b is the identity, so is b∘a
    &InverseRule,
    // a∘(b∘c) takes the value of (a∘b)∘c
    &AssociativityRule,
    // a value with only one possible place in a row or column goes there
    &UniquePositionRule,
];

/// Applies every rule once. Returns `true` if any domain changed.
///
/// Domains are only ever narrowed, so repeated passes reach a fixpoint.
pub fn reduce(table: &mut MulTable) -> bool {
    let identity = table.unique_identity();
    RULES
        .iter()
        .fold(false, |changed, rule| rule.apply(table, identity) || changed)
}

/// Reduces the table until no rule makes progress or a product has no candidates left.
/// Returns the number of passes that made changes.
pub fn propagate(table: &mut MulTable) -> u32 {
    let mut passes = 0;
    while reduce(table) {
        passes += 1;
        if table.has_empty_entry() {
            trace!("contradiction found after {} passes", passes);
            return passes;
        }
    }
    trace!("propagation finished after {} passes", passes);
    passes
}

struct IdentityRule;

impl Rule for IdentityRule {
    fn apply(&self, table: &mut MulTable, identity: Option<Element>) -> bool {
        let e = match identity {
            Some(e) => e,
            None => return false,
        };
        let mut changed = false;
        for x in 0..table.order() {
            changed |= table.set_product(x, e, x);
            changed |= table.set_product(e, x, x);
        }
        changed
    }
}

struct LatinRule;

impl Rule for LatinRule {
    fn apply(&self, table: &mut MulTable, _: Option<Element>) -> bool {
        let order = table.order();
        let mut changed = false;
        for (a, b) in iproduct!(0..order, 0..order) {
            let c = match table.product(a, b) {
                Some(c) => c,
                None => continue,
            };
            for x in 0..order {
                if x != b {
                    changed |= table.remove_candidate(a, x, c);
                }
                if x != a {
                    changed |= table.remove_candidate(x, b, c);
                }
            }
        }
        changed
    }
}

struct InverseRule;

impl Rule for InverseRule {
    fn apply(&self, table: &mut MulTable, identity: Option<Element>) -> bool {
        let e = match identity {
            Some(e) => e,
            None => return false,
        };
        let order = table.order();
        let mut changed = false;
        for (a, b) in iproduct!(0..order, 0..order) {
            if table.product(a, b) == Some(e) {
                changed |= table.set_product(b, a, e);
            }
        }
        changed
    }
}

struct AssociativityRule;

impl Rule for AssociativityRule {
    fn apply(&self, table: &mut MulTable, _: Option<Element>) -> bool {
        let order = table.order();
        let mut changed = false;
        for (a, b, c) in iproduct!(0..order, 0..order, 0..order) {
            let (ab, bc) = match (table.product(a, b), table.product(b, c)) {
                (Some(ab), Some(bc)) => (ab, bc),
                _ => continue,
            };
            if let Some(abc) = table.product(ab, c) {
                changed |= table.set_product(a, bc, abc);
            }
        }
        changed
    }
}

struct UniquePositionRule;

impl Rule for UniquePositionRule {
    fn apply(&self, table: &mut MulTable, _: Option<Element>) -> bool {
        let order = table.order();
        let mut changed = false;
        for (a, c) in iproduct!(0..order, 0..order) {
            let only = (0..order).filter(|&b| table.is_candidate(a, b, c)).exactly_one().ok();
            if let Some(b) = only {
                changed |= table.set_product(a, b, c);
            }
        }
        for (b, c) in iproduct!(0..order, 0..order) {
            let only = (0..order).filter(|&a| table.is_candidate(a, b, c)).exactly_one().ok();
            if let Some(a) = only {
                changed |= table.set_product(a, b, c);
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use itertools::iproduct;

    use super::{AssociativityRule, InverseRule, Rule};
    use crate::solve::{classify, propagate, reduce, Status};
    use crate::table::MulTable;

    #[test]
    fn identity_fills_row_and_column() {
        // 2 is the only element that can still be the identity
        let mut table = MulTable::from_assignments(3, vec![(0, 1, 2)]).unwrap();
        assert_eq!(Some(2), table.unique_identity());
        assert!(reduce(&mut table));
        for x in 0..3 {
            assert_eq!(Some(x), table.product(x, 2));
            assert_eq!(Some(x), table.product(2, x));
        }
    }

    #[test]
    fn known_product_leaves_row_and_column() {
        let mut table = MulTable::from_assignments(4, vec![(1, 2, 3)]).unwrap();
        reduce(&mut table);
        for x in (0..4).filter(|&x| x != 2) {
            assert!(!table.is_candidate(1, x, 3));
        }
        for x in (0..4).filter(|&x| x != 1) {
            assert!(!table.is_candidate(x, 2, 3));
        }
    }

    #[test]
    fn inverse_is_two_sided() {
        let identity = (0..3).flat_map(|x| vec![(0, x, x), (x, 0, x)]);
        let mut table = MulTable::from_assignments(3, identity.chain(vec![(1, 2, 0)])).unwrap();
        assert_eq!(None, table.product(2, 1));
        assert!(InverseRule.apply(&mut table, Some(0)));
        assert_eq!(Some(0), table.product(2, 1));
    }

    #[test]
    fn associativity_forces_product() {
        // (1∘1)∘1 = 2∘1 = 3, so 1∘(1∘1) = 1∘2 = 3
        let mut table = MulTable::from_assignments(4, vec![(1, 1, 2), (2, 1, 3)]).unwrap();
        assert!(AssociativityRule.apply(&mut table, None));
        assert_eq!(Some(3), table.product(1, 2));
    }

    #[test]
    fn unique_position_in_row() {
        let mut table = MulTable::new(3).unwrap();
        table.set_product_list(0, 0, vec![0, 1]);
        table.set_product_list(0, 1, vec![0, 1]);
        assert_eq!(None, table.unique_identity());
        reduce(&mut table);
        assert_eq!(Some(2), table.product(0, 2));
    }

    #[test]
    fn unique_position_in_column() {
        let mut table = MulTable::new(3).unwrap();
        table.set_product_list(1, 2, vec![0, 2]);
        table.set_product_list(2, 2, vec![0, 2]);
        reduce(&mut table);
        assert_eq!(Some(1), table.product(0, 2));
    }

    #[test]
    fn fixpoint_is_stable() {
        let mut table = MulTable::from_assignments(4, vec![(0, 0, 0), (1, 1, 0)]).unwrap();
        propagate(&mut table);
        let fixpoint = table.clone();
        assert!(!reduce(&mut table));
        assert_eq!(fixpoint, table);
    }

    #[test]
    fn domains_only_shrink() {
        let mut table = MulTable::from_assignments(5, vec![(0, 1, 1), (2, 3, 4)]).unwrap();
        loop {
            let before = table.clone();
            let changed = reduce(&mut table);
            for (a, b) in iproduct!(0..5, 0..5) {
                assert!(table.candidates(a, b).all(|c| before.is_candidate(a, b, c)));
            }
            if !changed {
                break;
            }
        }
    }

    #[test]
    fn jointly_inconsistent_products() {
        // 0∘1 = 0 makes 1 the identity, but then 1∘0 would be 0
        let mut table = MulTable::from_assignments(3, vec![(0, 1, 0), (1, 0, 2)]).unwrap();
        propagate(&mut table);
        assert_eq!(Status::Invalid, classify(&table));
    }

    #[test]
    fn complete_group_is_unchanged() {
        let products = iproduct!(0..4, 0..4).map(|(a, b)| (a, b, a ^ b));
        let mut table = MulTable::from_assignments(4, products).unwrap();
        let group = table.clone();
        assert_eq!(0, propagate(&mut table));
        assert_eq!(group, table);
    }
}
