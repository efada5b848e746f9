use crate::solve::Status;
use crate::table::{Element, MulTable};

impl MulTable {
    /// Elements `b` such that `x∘a = b∘x` for some `x`, i.e. the conjugacy class of `a`.
    ///
    /// Only defined for a complete group table. Returns an empty list otherwise.
    pub fn equivalence_class(&self, a: Element) -> Vec<Element> {
        if self.classify() != Status::Valid {
            return Vec::new();
        }
        let order = self.order();
        (0..order)
            .filter(|&b| (0..order).any(|x| self.product(x, a) == self.product(b, x)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::table::{Element, MulTable};

    fn cyclic(order: usize) -> MulTable {
        let products = (0..order)
            .cartesian_product(0..order)
            .map(|(a, b)| (a, b, (a + b) % order));
        MulTable::from_assignments(order, products).unwrap()
    }

    /// The symmetric group on 3 points, elements numbered by lexicographic order of permutations
    fn symmetric3() -> (MulTable, Vec<Vec<usize>>) {
        let perms: Vec<Vec<usize>> = (0..3).permutations(3).collect();
        let index_of = |p: &[usize]| perms.iter().position(|q| q.as_slice() == p).unwrap();
        let products = (0..6)
            .cartesian_product(0..6)
            .map(|(a, b)| {
                // (a∘b)(x) = a(b(x))
                let composed: Vec<usize> = (0..3).map(|x| perms[a][perms[b][x]]).collect();
                (a, b, index_of(&composed))
            })
            .collect_vec();
        (MulTable::from_assignments(6, products).unwrap(), perms)
    }

    #[test]
    fn abelian_classes_are_singletons() {
        let table = cyclic(5);
        for a in 0..5 {
            assert_eq!(vec![a], table.equivalence_class(a));
        }
    }

    #[test]
    fn conjugacy_classes_of_s3() {
        let (table, perms) = symmetric3();
        let fixed_points = |e: Element| (0..3).filter(|&x| perms[e][x] == x).count();
        for a in 0..6 {
            let class = table.equivalence_class(a);
            // conjugacy classes in S3 are determined by cycle type
            let expected = (0..6)
                .filter(|&b| fixed_points(b) == fixed_points(a))
                .collect_vec();
            assert_eq!(expected, class, "class of {:?}", perms[a]);
        }
    }

    #[test]
    fn incomplete_table_has_no_classes() {
        let mut table = cyclic(3);
        table.set_product_list(1, 1, vec![1, 2]);
        assert!(table.equivalence_class(0).is_empty());
        assert!(table.equivalence_class(1).is_empty());
    }

    #[test]
    fn invalid_table_has_no_classes() {
        let mut table = cyclic(3);
        table.set_product(1, 1, 0);
        assert!(table.equivalence_class(1).is_empty());
    }
}
