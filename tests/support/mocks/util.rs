// tests/support/mocks/util.rs
use trivia_api::application::ports::util::SlugGenerator;

/// Makes it obvious in assertions that the injected generator was used.
#[derive(Clone)]
pub struct UppercaseSlug;

impl SlugGenerator for UppercaseSlug {
    fn slugify(&self, s: &str) -> String {
        s.to_uppercase().replace(' ', "_")
    }
}
