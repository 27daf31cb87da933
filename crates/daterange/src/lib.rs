//! Named relative date ranges (today, current week, next month, ...) resolved
//! against a reference date into half-open intervals, and from there into
//! search predicates over a named date field.

// public exports are one module level down
pub mod error;
pub mod predicate;
pub mod range;
pub mod types;

pub use error::Error;
pub use predicate::{build_predicate, filter_for};
pub use range::{Interval, RangeKind};
pub use types::Date;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or builder helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        predicate::{CompareOp, Predicate},
        range::{Interval, RangeKind},
        types::Date,
    };
}
