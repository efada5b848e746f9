use std::path::PathBuf;

use anyhow::{anyhow, Result};
use cayley::solve::DEFAULT_SEARCH_LIMIT;
use clap::ArgMatches;

#[derive(Clone)]
pub(crate) struct Options {
    source: Source,
    check: bool,
    complete: bool,
    hints: bool,
    class: Option<usize>,
    limit: u32,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let source = if let Some(path) = matches.value_of("input") {
            Source::File(path.into())
        } else {
            let order = matches.value_of("order").unwrap_or_default();
            Source::Empty(
                order
                    .parse()
                    .map_err(|_| anyhow!("invalid order: {}", order))?,
            )
        };
        let limit = match matches.value_of("limit") {
            Some(s) => s.parse().map_err(|_| anyhow!("invalid limit: {}", s))?,
            None => DEFAULT_SEARCH_LIMIT,
        };
        let class = match matches.value_of("class") {
            Some(s) => match s.parse::<usize>() {
                Ok(element) if element >= 1 => Some(element - 1),
                _ => return Err(anyhow!("invalid element: {}", s)),
            },
            None => None,
        };
        Ok(Self {
            source,
            check: matches.is_present("check"),
            complete: matches.is_present("complete"),
            hints: matches.is_present("hints"),
            class,
            limit,
        })
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn check(&self) -> bool {
        self.check
    }

    pub fn complete(&self) -> bool {
        self.complete
    }

    pub fn hints(&self) -> bool {
        self.hints
    }

    /// 0-based element to print the equivalence class of
    pub fn class(&self) -> Option<usize> {
        self.class
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

#[derive(Clone)]
pub(crate) enum Source {
    File(PathBuf),
    Empty(usize),
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg, ArgGroup};

    App::new("Cayley")
        .author("Cameron Steffen <cam.steffen94@gmail.com>")
        .about("Check and complete group multiplication tables")
        .setting(AppSettings::ArgRequiredElseHelp)
        .group(
            ArgGroup::with_name("source")
                .args(&["order", "input"])
                .required(true),
        )
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .value_name("PATH")
                .help("read a table from a file (1-based values, '.' for unknown products)")
                .display_order(1),
        )
        .arg(
            Arg::with_name("order")
                .short("n")
                .long("order")
                .takes_value(true)
                .value_name("ORDER")
                .help("start from an empty table of the given order")
                .display_order(1),
        )
        .arg(
            Arg::with_name("check")
                .long("check")
                .help("check the table against the group axioms"),
        )
        .arg(
            Arg::with_name("complete")
                .short("c")
                .long("complete")
                .help("search for group tables that complete the table"),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .takes_value(true)
                .value_name("BRANCHES")
                .requires("complete")
                .help("the maximum number of branches to explore while completing"),
        )
        .arg(
            Arg::with_name("hints")
                .long("hints")
                .help("list the remaining candidates of every unknown product"),
        )
        .arg(
            Arg::with_name("class")
                .long("class")
                .takes_value(true)
                .value_name("ELEMENT")
                .help("print the equivalence class of an element of a complete group table"),
        )
}
