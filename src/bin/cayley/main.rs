#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use anyhow::{anyhow, Result};
use itertools::Itertools;

use cayley::solve::{self, SearchBudget, Status};
use cayley::MulTable;

use crate::options::{Options, Source};

mod options;

/// Above this many completions only a count is reported
const MAX_LISTED_SOLUTIONS: usize = 20;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let mut table = read_table(options.source())?;
    print!("{}", table);
    if options.check() {
        check_table(&table);
    }
    if options.complete() {
        auto_complete(&mut table, options.limit());
    }
    if options.hints() {
        print_hints(&table);
    }
    if let Some(element) = options.class() {
        print_class(&table, element)?;
    }
    Ok(())
}

fn read_table(source: &Source) -> Result<MulTable> {
    let table = match source {
        Source::File(path) => {
            println!("Reading table from \"{}\"", path.display());
            MulTable::from_file(path)?
        }
        Source::Empty(order) => MulTable::new(*order)?,
    };
    Ok(table)
}

fn check_table(table: &MulTable) {
    let mut table = table.clone();
    solve::propagate(&mut table);
    let msg = match table.classify() {
        Status::Invalid => "There is an error in the table",
        Status::Incomplete => "The table is incomplete",
        Status::Valid => "This is a group",
    };
    println!("{}", msg);
}

fn auto_complete(table: &mut MulTable, limit: u32) {
    match table.classify() {
        Status::Invalid => {
            println!("Auto-complete: error in the table");
            return;
        }
        Status::Valid => {
            println!("Auto-complete: the table is already a group");
            return;
        }
        Status::Incomplete => (),
    }
    let mut budget = SearchBudget::new(limit);
    let completions = solve::complete(table, &mut budget);
    if let Some(solution) = completions.unique() {
        *table = solution.clone();
        println!("Auto-complete: solution found !");
    } else if completions.is_empty() {
        if completions.truncated {
            println!("Auto-complete: search limit reached before any solution was found");
        } else {
            println!("Auto-complete: error detected in the table");
        }
    } else if completions.truncated {
        println!(
            "Auto-complete: search limit reached after {} solutions",
            completions.len()
        );
    } else if completions.len() > MAX_LISTED_SOLUTIONS {
        println!(
            "Auto-complete: more than {} solutions found",
            MAX_LISTED_SOLUTIONS
        );
    } else {
        println!("Auto-complete: {} solutions found", completions.len());
    }
    print!("{}", table);
}

fn print_hints(table: &MulTable) {
    let mut table = table.clone();
    solve::propagate(&mut table);
    let order = table.order();
    for (a, b) in (0..order).cartesian_product(0..order) {
        if table.product(a, b).is_some() {
            continue;
        }
        let candidates = table.candidates(a, b).map(|c| c + 1).join(" ");
        println!("{}∘{}: {}", a + 1, b + 1, candidates);
    }
}

fn print_class(table: &MulTable, element: usize) -> Result<()> {
    if element >= table.order() {
        return Err(anyhow!("element {} is not in the table", element + 1));
    }
    let class = table.equivalence_class(element);
    if class.is_empty() {
        println!("The table is not a complete group");
    } else {
        println!(
            "Class of {}: {}",
            element + 1,
            class.iter().map(|e| e + 1).join(" ")
        );
    }
    Ok(())
}
