use crate::domain::errors::{DomainResult, non_blank, positive_id};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnswerId(i64);

impl AnswerId {
    pub fn new(id: i64) -> DomainResult<Self> {
        positive_id(id, "answer").map(Self)
    }
}

impl From<AnswerId> for i64 {
    fn from(value: AnswerId) -> Self {
        value.0
    }
}

impl fmt::Display for AnswerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerText(String);

impl AnswerText {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        non_blank(value.into(), "text").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
