//! Partially known multiplication tables

use std::fmt;
use std::fs;
use std::path::Path;

use itertools::Itertools;

use crate::collections::square::Coord;
use crate::collections::{RangeSet, Square};
use crate::error::{InvalidOrder, ParseTableError, TableFromFileError};
use crate::solve::{classify, Status};

mod equivalence;
mod parse;

/// An element of the underlying set, indexed `0..order`
pub type Element = usize;

/// An `order`×`order` multiplication table where each cell holds the set of
/// products still consistent with everything known about it
///
/// A cell whose domain is a single element is determined. An empty domain is
/// a contradiction. Within one line of reasoning, domains only ever shrink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MulTable {
    cells: Square<RangeSet>,
}

impl MulTable {
    /// Creates a table where every product is still unknown
    pub fn new(order: usize) -> Result<Self, InvalidOrder> {
        if order < 1 {
            return Err(InvalidOrder::new(order));
        }
        Ok(Self {
            cells: Square::with_width_and_value(order, RangeSet::with_all(order)),
        })
    }

    /// Creates a table from a list of known products `(a, b, a∘b)`
    pub fn from_assignments<I>(order: usize, assignments: I) -> Result<Self, InvalidOrder>
    where
        I: IntoIterator<Item = (Element, Element, Element)>,
    {
        let mut table = Self::new(order)?;
        for (a, b, c) in assignments {
            table.set_product(a, b, c);
        }
        Ok(table)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TableFromFileError> {
        let s = fs::read_to_string(path)?;
        let table = Self::parse(&s)?;
        Ok(table)
    }

    /// Parses a table written with 1-based values and `.` for unknown products
    pub fn parse(s: &str) -> Result<Self, ParseTableError> {
        parse::parse_table(s)
    }

    pub fn order(&self) -> usize {
        self.cells.width()
    }

    /// Narrows the domain of `a∘b` to `{c}`. If `c` was already ruled out, the domain
    /// becomes empty, recording a contradiction. Returns `true` if the domain changed.
    pub fn set_product(&mut self, a: Element, b: Element, c: Element) -> bool {
        self.check_element(c);
        let coord = self.coord(a, b);
        self.cells[coord].retain_only(c)
    }

    /// Replaces the domain of `a∘b` wholesale. Unlike `set_product`, this may widen the domain.
    pub fn set_product_list(
        &mut self,
        a: Element,
        b: Element,
        values: impl IntoIterator<Item = Element>,
    ) {
        let coord = self.coord(a, b);
        let mut domain = RangeSet::new(self.order());
        for c in values {
            self.check_element(c);
            domain.insert(c);
        }
        self.cells[coord] = domain;
    }

    /// Removes `c` from the domain of `a∘b`. Returns `true` if it was a candidate.
    pub(crate) fn remove_candidate(&mut self, a: Element, b: Element, c: Element) -> bool {
        self.check_element(c);
        let coord = self.coord(a, b);
        self.cells[coord].remove(c)
    }

    /// The product `a∘b` if it is determined
    pub fn product(&self, a: Element, b: Element) -> Option<Element> {
        self.cells[self.coord(a, b)].single_value()
    }

    /// The candidates for `a∘b` in ascending order
    pub fn candidates(&self, a: Element, b: Element) -> impl Iterator<Item = Element> + '_ {
        self.cells[self.coord(a, b)].iter()
    }

    pub fn is_candidate(&self, a: Element, b: Element, c: Element) -> bool {
        self.check_element(c);
        self.cells[self.coord(a, b)].contains(c)
    }

    pub fn candidate_count(&self, a: Element, b: Element) -> usize {
        self.cells[self.coord(a, b)].len()
    }

    pub fn has_empty_entry(&self) -> bool {
        self.cells.iter().any(RangeSet::is_empty)
    }

    /// Returns `true` if every product is determined
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|domain| domain.len() == 1)
    }

    /// Elements `e` for which `e∘x = x` and `x∘e = x` are still possible for every `x`
    pub fn identity_candidates(&self) -> Vec<Element> {
        let order = self.order();
        (0..order)
            .filter(|&e| (0..order).all(|x| self.is_candidate(e, x, x) && self.is_candidate(x, e, x)))
            .collect()
    }

    /// The identity element, if exactly one element can still be the identity
    pub fn unique_identity(&self) -> Option<Element> {
        match self.identity_candidates().as_slice() {
            &[e] => Some(e),
            _ => None,
        }
    }

    pub fn classify(&self) -> Status {
        classify(self)
    }

    /// Iterates over every `(row, column)` pair in row-major order
    pub(crate) fn coords(&self) -> impl Iterator<Item = Coord> {
        let order = self.order();
        (0..order).cartesian_product(0..order).map(Coord::from)
    }

    pub(crate) fn domain(&self, coord: Coord) -> &RangeSet {
        &self.cells[coord]
    }

    fn coord(&self, a: Element, b: Element) -> Coord {
        self.check_element(a);
        self.check_element(b);
        Coord::new(a, b)
    }

    fn check_element(&self, e: Element) {
        assert!(e < self.order(), "element {} out of range for order {}", e, self.order());
    }
}

impl fmt::Display for MulTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.order().to_string().len();
        for row in self.cells.rows() {
            let line = row
                .iter()
                .map(|domain| match domain.single_value() {
                    Some(c) => format!("{:>1$}", c + 1, len),
                    None => format!("{:>1$}", ".", len),
                })
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
