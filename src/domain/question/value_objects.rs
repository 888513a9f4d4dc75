use crate::domain::errors::{DomainResult, non_blank, positive_id};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionId(i64);

impl QuestionId {
    pub fn new(id: i64) -> DomainResult<Self> {
        positive_id(id, "question").map(Self)
    }
}

impl From<QuestionId> for i64 {
    fn from(value: QuestionId) -> Self {
        value.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionText(String);

impl QuestionText {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        non_blank(value.into(), "question").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_text_rejects_blank_input() {
        assert!(QuestionText::new("").is_err());
        assert_eq!(QuestionText::new("Q?").unwrap().as_str(), "Q?");
    }

    #[test]
    fn question_id_rejects_zero() {
        assert!(QuestionId::new(0).is_err());
    }
}
