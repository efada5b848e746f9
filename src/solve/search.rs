use crate::collections::square::Coord;
use crate::solve::{classify, propagate, Status};
use crate::table::{Element, MulTable};

/// The number of branches a front end lets a search explore by default
pub const DEFAULT_SEARCH_LIMIT: u32 = 1000;

/// The number of branches a search may still explore, shared by every level of the search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchBudget {
    remaining: u32,
}

impl SearchBudget {
    pub fn new(limit: u32) -> Self {
        Self { remaining: limit }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns `true` once the search has been cut short
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Pays for one branch. Returns `false` if the branch may not be explored.
    fn spend(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        !self.is_exhausted()
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_LIMIT)
    }
}

/// The group tables found by `complete`
#[derive(Clone, Debug)]
pub struct Completions {
    pub tables: Vec<MulTable>,
    /// The budget ran out, so `tables` may be missing some completions
    pub truncated: bool,
}

impl Completions {
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// The only completion, if it is known that there is exactly one
    pub fn unique(&self) -> Option<&MulTable> {
        match (self.truncated, self.tables.as_slice()) {
            (false, [table]) => Some(table),
            _ => None,
        }
    }
}

/// Finds every group table that agrees with `table`, exploring at most as many
/// branches as `budget` allows.
///
/// `table` itself is propagated. If the search ran to the end, every product that
/// all completions agree on is also written into `table`.
pub fn complete(table: &mut MulTable, budget: &mut SearchBudget) -> Completions {
    let tables = search_next(0, table, budget);
    let truncated = budget.is_exhausted();
    if truncated {
        info!("Search limit reached after {} completions", tables.len());
    } else {
        info!("Search finished with {} completions", tables.len());
        write_common_products(table, &tables);
    }
    Completions { tables, truncated }
}

fn search_next(depth: u32, table: &mut MulTable, budget: &mut SearchBudget) -> Vec<MulTable> {
    if budget.is_exhausted() {
        return Vec::new();
    }
    propagate(table);
    match classify(table) {
        Status::Invalid => {
            debug!("Dead end (depth={})", depth);
            return Vec::new();
        }
        Status::Valid => {
            debug!("Found a completion (depth={})", depth);
            return vec![table.clone()];
        }
        Status::Incomplete => (),
    }
    debug!("Backtracking (depth={})", depth);
    let mut completions = Vec::new();
    for (i, guess) in guesses(table).into_iter().enumerate() {
        if !budget.spend() {
            debug!("Search budget exhausted (depth={})", depth);
            break;
        }
        debug!(
            "Guessing with {} at {:?}, guess #: {}",
            guess.value,
            guess.coord,
            i + 1
        );
        let mut branch = table.clone();
        branch.set_product(guess.coord.row(), guess.coord.col(), guess.value);
        completions.extend(search_next(depth + 1, &mut branch, budget));
    }
    completions
}

fn guesses(table: &MulTable) -> Vec<Guess> {
    // find the first of the products with the smallest domain
    let coord = table
        .coords()
        .filter(|&coord| table.domain(coord).len() > 1)
        .min_by_key(|&coord| table.domain(coord).len())
        .expect("No undetermined products");
    // guess every value in the domain
    table
        .domain(coord)
        .iter()
        .map(|value| Guess { coord, value })
        .collect()
}

fn write_common_products(table: &mut MulTable, completions: &[MulTable]) {
    let (first, rest) = match completions.split_first() {
        Some(split) => split,
        None => return,
    };
    for coord in table.coords() {
        let (a, b) = (coord.row(), coord.col());
        let value = match first.product(a, b) {
            Some(value) => value,
            None => continue,
        };
        if rest.iter().all(|other| other.product(a, b) == Some(value)) {
            table.set_product(a, b, value);
        }
    }
}

#[derive(Clone, Copy)]
struct Guess {
    coord: Coord,
    value: Element,
}
