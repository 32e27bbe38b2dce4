use std::fmt;

use crate::foundation::error::{CardError, CardResult};

/// Attribution name shown on a card: trimmed and never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DisplayName(String);

impl DisplayName {
    /// Trim `raw` and reject it if nothing is left.
    pub fn parse(raw: &str) -> CardResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CardError::validation("display name must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The trimmed name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for DisplayName {
    type Err = CardError;

    fn from_str(s: &str) -> CardResult<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/request.rs"]
mod tests;
