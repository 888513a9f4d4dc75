use crate::application::ports::util::SlugGenerator;

/// Lowercases the input and joins its whitespace-separated words with single
/// hyphens. Punctuation is kept as typed.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        input
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }
}
