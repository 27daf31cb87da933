use crate::predicate::{CompareOp, Predicate};
use serde::ser::{Serialize, SerializeTuple, Serializer};

///
/// DomainTerm
///
/// One token of the host grammar's flat prefix-notation filter sequence: a
/// comparison triple `(field, op, "YYYY-MM-DD")`, or the `&` marker that
/// announces a binary conjunction of the two predicates that follow it.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DomainTerm {
    And,
    Compare {
        field: String,
        op: CompareOp,
        value: String,
    },
}

impl Serialize for DomainTerm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::And => serializer.serialize_str("&"),
            Self::Compare { field, op, value } => {
                let mut triple = serializer.serialize_tuple(3)?;
                triple.serialize_element(field)?;
                triple.serialize_element(op.token())?;
                triple.serialize_element(value)?;
                triple.end()
            }
        }
    }
}

impl Predicate {
    /// Serialize into the host grammar's flat prefix sequence.
    ///
    /// A conjunction of `n` predicates emits `n - 1` leading `&` markers
    /// followed by the serialized operands, matching the host's generic
    /// filtering layer bit for bit.
    #[must_use]
    pub fn to_domain(&self) -> Vec<DomainTerm> {
        let mut terms = Vec::new();
        self.push_domain_terms(&mut terms);
        terms
    }

    fn push_domain_terms(&self, terms: &mut Vec<DomainTerm>) {
        match self {
            Self::Compare(cmp) => terms.push(DomainTerm::Compare {
                field: cmp.field.clone(),
                op: cmp.op,
                value: cmp.value.to_string(),
            }),
            Self::And(parts) => {
                for _ in 1..parts.len() {
                    terms.push(DomainTerm::And);
                }
                for part in parts {
                    part.push_domain_terms(terms);
                }
            }
        }
    }
}

///
/// TESTS
///
