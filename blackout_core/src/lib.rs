pub mod helpers;
pub mod schedule;
