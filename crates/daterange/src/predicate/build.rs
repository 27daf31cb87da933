use crate::{
    error::Error,
    predicate::Predicate,
    range::{Interval, RangeKind},
    types::Date,
};

/// Translate a resolved interval into a predicate over `field`.
///
/// `Before` emits a single `<` comparison; `Bounded` emits
/// `(field >= from) AND (field < to)`. A bounded interval whose lower bound is
/// not strictly below its upper bound is rejected instead of producing an
/// unsatisfiable predicate.
pub fn build_predicate(field: &str, interval: Interval) -> Result<Predicate, Error> {
    match interval {
        Interval::Before { to } => Ok(Predicate::lt(field, to)),
        Interval::Bounded { from, to } => {
            if from >= to {
                return Err(Error::InvalidInterval { from, to });
            }

            Ok(Predicate::gte(field, from) & Predicate::lt(field, to))
        }
    }
}

/// The `range` search operator: look up a kind by its registry identifier,
/// resolve it against `today`, and build the predicate over `field`.
pub fn filter_for(field: &str, kind: &str, today: Date) -> Result<Predicate, Error> {
    let kind: RangeKind = kind.parse()?;

    build_predicate(field, kind.resolve(today))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::CompareOp;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::new_checked(y, m, d).unwrap()
    }

    #[test]
    fn before_interval_is_a_single_comparison() {
        let interval = RangeKind::BeforeToday.resolve(date(2018, 5, 18));
        let predicate = build_predicate("create_date", interval).unwrap();

        assert_eq!(predicate, Predicate::lt("create_date", date(2018, 5, 18)));
    }

    #[test]
    fn bounded_interval_is_a_conjunction() {
        let interval = RangeKind::Today.resolve(date(2018, 5, 18));
        let predicate = build_predicate("create_date", interval).unwrap();

        assert_eq!(
            predicate,
            Predicate::And(vec![
                Predicate::gte("create_date", date(2018, 5, 18)),
                Predicate::lt("create_date", date(2018, 5, 19)),
            ])
        );
    }

    #[test]
    fn empty_intervals_are_rejected() {
        let interval = Interval::Bounded {
            from: date(2018, 5, 18),
            to: date(2018, 5, 18),
        };
        let err = build_predicate("create_date", interval).unwrap_err();

        assert_eq!(
            err,
            Error::InvalidInterval {
                from: date(2018, 5, 18),
                to: date(2018, 5, 18),
            }
        );
    }

    #[test]
    fn inverted_intervals_are_rejected() {
        let interval = Interval::Bounded {
            from: date(2018, 5, 19),
            to: date(2018, 5, 18),
        };

        assert!(build_predicate("create_date", interval).is_err());
    }

    #[test]
    fn building_twice_is_idempotent() {
        let interval = RangeKind::CurrentWeek.resolve(date(2018, 5, 20));

        assert_eq!(
            build_predicate("date", interval).unwrap(),
            build_predicate("date", interval).unwrap()
        );
    }

    #[test]
    fn filter_for_composes_lookup_resolve_and_build() {
        let predicate = filter_for("date", "today", date(2018, 5, 18)).unwrap();

        let Predicate::And(parts) = predicate else {
            panic!("expected a conjunction");
        };
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], Predicate::gte("date", date(2018, 5, 18)));
        assert_eq!(parts[1], Predicate::lt("date", date(2018, 5, 19)));
    }

    #[test]
    fn filter_for_rejects_unknown_kinds() {
        let err = filter_for("date", "range_today", date(2018, 5, 18)).unwrap_err();

        assert_eq!(
            err,
            Error::UnknownRangeKind {
                name: "range_today".to_string()
            }
        );
    }

    #[test]
    fn operator_tokens() {
        assert_eq!(CompareOp::Lt.token(), "<");
        assert_eq!(CompareOp::Gte.token(), ">=");
    }
}
