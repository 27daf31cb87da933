pub mod date;

pub use date::Date;
