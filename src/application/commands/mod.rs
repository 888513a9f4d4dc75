pub mod answers;
pub mod categories;
pub mod questions;
