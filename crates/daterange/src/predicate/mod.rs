pub mod ast;
pub mod build;
pub mod domain;

pub use ast::{Compare, CompareOp, Predicate};
pub use build::{build_predicate, filter_for};
pub use domain::DomainTerm;
