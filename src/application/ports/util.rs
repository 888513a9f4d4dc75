// src/application/ports/util.rs

/// Derives the URL identifier stored alongside a display name.
///
/// Implementations must be deterministic and must not check uniqueness; the
/// store's unique constraint reports collisions.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
