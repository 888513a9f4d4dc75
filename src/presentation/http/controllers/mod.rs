// src/presentation/http/controllers/mod.rs
pub mod answers;
pub mod categories;
pub mod questions;
