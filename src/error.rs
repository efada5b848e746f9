use std::fmt::{Display, Formatter};
use std::{fmt, io};

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("invalid table order: {}", order)]
pub struct InvalidOrder {
    order: usize,
}

impl InvalidOrder {
    pub(crate) fn new(order: usize) -> Self {
        Self { order }
    }
}

#[derive(Error, Debug)]
pub enum TableFromFileError {
    #[error("error reading table file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseTableError),
}

#[derive(Debug, Error, PartialEq)]
pub struct ParseTableError {
    kind: ParseErrorKind,
    token: Option<String>,
    position: Option<(usize, usize)>,
}

impl ParseTableError {
    pub(crate) fn new(
        kind: ParseErrorKind,
        token: impl Display,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            kind,
            token: Some(token.to_string()),
            position: Some((line, column)),
        }
    }

    pub(crate) const fn from_kind(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            token: None,
            position: None,
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    Empty,
    InvalidToken,
    RaggedRow,
    ValueOutOfRange,
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParseErrorKind::Empty => "Table is empty",
            ParseErrorKind::InvalidToken => "Invalid token",
            ParseErrorKind::RaggedRow => "Row length does not match table order",
            ParseErrorKind::ValueOutOfRange => "Value out of range",
        };
        write!(f, "{}", s)
    }
}

impl Display for ParseTableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(token) = &self.token {
            write!(f, ": \"{}\"", token)?;
        }
        if let Some((line, column)) = &self.position {
            write!(f, " at {}:{}", line, column)?;
        }
        Ok(())
    }
}
