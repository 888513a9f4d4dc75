// src/domain/mod.rs
pub mod answer;
pub mod category;
pub mod errors;
pub mod question;
