pub(crate) mod range_set;
pub mod square;

pub(crate) use self::range_set::RangeSet;
pub use self::square::Square;
