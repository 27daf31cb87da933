use crate::types::Date;
use serde::{Deserialize, Serialize};
use std::ops::BitAnd;

///
/// Predicate AST
///
/// Pure representation of date-field filter predicates. This layer carries no
/// field metadata, evaluator logic, or wire formats; interpretation belongs to
/// the consuming query engine (or to the `domain` serialization for the host
/// grammar).
///

///
/// CompareOp
///
/// Interval bounds only ever need these two operators: `>=` for the inclusive
/// lower bound, `<` for the exclusive upper bound.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CompareOp {
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Gte,
}

impl CompareOp {
    /// The grammar's operator token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Gte => ">=",
        }
    }
}

///
/// Compare
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Compare {
    pub field: String,
    pub op: CompareOp,
    pub value: Date,
}

impl Compare {
    #[must_use]
    pub fn new(field: impl Into<String>, op: CompareOp, value: Date) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    Compare(Compare),
    And(Vec<Self>),
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub fn lt(field: impl Into<String>, value: Date) -> Self {
        Self::Compare(Compare::new(field, CompareOp::Lt, value))
    }

    #[must_use]
    pub fn gte(field: impl Into<String>, value: Date) -> Self {
        Self::Compare(Compare::new(field, CompareOp::Gte, value))
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitAnd for &Predicate {
    type Output = Predicate;

    fn bitand(self, rhs: Self) -> Self::Output {
        Predicate::And(vec![self.clone(), rhs.clone()])
    }
}
