pub mod working_days;

pub use working_days::*;
