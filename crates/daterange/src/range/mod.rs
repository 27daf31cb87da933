pub mod kind;
pub mod resolve;

#[cfg(test)]
mod tests;

pub use kind::RangeKind;
pub use resolve::Interval;
