// tests/support/mocks/mod.rs
//! In-memory stand-ins for the repositories and ports.
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod failing;
pub mod store;
pub mod util;

pub use failing::FailingStore;
pub use store::InMemoryStore;
pub use util::UppercaseSlug;
