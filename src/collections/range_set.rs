/// A set of integers in `0..capacity`, iterated in ascending order
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RangeSet {
    size: usize,
    domain: Vec<bool>,
}

impl RangeSet {
    pub fn new(capacity: usize) -> RangeSet {
        RangeSet {
            size: 0,
            domain: vec![false; capacity],
        }
    }

    pub fn with_all(capacity: usize) -> RangeSet {
        RangeSet {
            size: capacity,
            domain: vec![true; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn insert(&mut self, n: usize) -> bool {
        if self.domain[n] {
            return false;
        }
        self.domain[n] = true;
        self.size += 1;
        true
    }

    pub fn remove(&mut self, n: usize) -> bool {
        if !self.domain[n] {
            return false;
        }
        self.domain[n] = false;
        self.size -= 1;
        true
    }

    pub fn contains(&self, n: usize) -> bool {
        self.domain[n]
    }

    pub fn clear(&mut self) -> bool {
        if self.size == 0 {
            return false;
        }
        self.domain.iter_mut().for_each(|e| *e = false);
        self.size = 0;
        true
    }

    /// Narrows the set to `{n}` if `n` is a member, otherwise empties it.
    /// Returns `true` if the set changed.
    pub fn retain_only(&mut self, n: usize) -> bool {
        if !self.contains(n) {
            return self.clear();
        }
        if self.size == 1 {
            return false;
        }
        self.clear();
        self.insert(n);
        true
    }

    pub fn single_value(&self) -> Option<usize> {
        match self.size {
            1 => self.iter().next(),
            _ => None,
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            domain: &self.domain,
            index: 0,
        }
    }
}

pub(crate) struct Iter<'a> {
    domain: &'a [bool],
    index: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        for i in self.index..self.domain.len() {
            if self.domain[i] {
                self.index = i + 1;
                return Some(i);
            }
        }
        self.index = self.domain.len();
        None
    }
}

impl Extend<usize> for RangeSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for i in iter {
            self.insert(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::collections::range_set::RangeSet;

    #[test]
    #[should_panic]
    fn insert_too_high() {
        let mut set = RangeSet::new(4);
        set.insert(4);
    }

    #[test]
    fn insert_remove_result() {
        let mut set = RangeSet::new(4);
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert!(set.remove(1));
        assert!(!set.remove(1));
    }

    #[test]
    fn iter_ascending() {
        let mut set = RangeSet::new(4);
        set.insert(3);
        set.insert(1);
        let vec: Vec<_> = set.iter().collect();
        assert_eq!(vec![1_usize, 3], vec);
    }

    #[test]
    fn extend_counts_new_members_only() {
        let mut set = RangeSet::new(4);
        set.extend(vec![0, 2, 2]);
        assert_eq!(2, set.len());
    }

    #[test]
    fn retain_only_member() {
        let mut set = RangeSet::with_all(4);
        assert!(set.retain_only(2));
        assert_eq!(Some(2), set.single_value());
        assert!(!set.retain_only(2));
    }

    #[test]
    fn retain_only_non_member_empties() {
        let mut set = RangeSet::with_all(4);
        set.remove(2);
        assert!(set.retain_only(2));
        assert!(set.is_empty());
        assert!(!set.retain_only(2));
    }

    #[test]
    fn single_value() {
        let mut set = RangeSet::new(4);
        assert_eq!(None, set.single_value());
        set.insert(1);
        assert_eq!(Some(1), set.single_value());
        set.insert(2);
        assert_eq!(None, set.single_value());
        set.remove(1);
        assert_eq!(Some(2), set.single_value());
        set.remove(2);
        assert_eq!(None, set.single_value());
    }
}
