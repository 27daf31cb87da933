
use crate::types::Date;

pub(super) fn date(y: i32, m: u8, d: u8) -> Date {
    Date::new_checked(y, m, d).unwrap()
}
