use std::fmt;

/// Ordered set of class tokens with exact-match membership.
///
/// `foo` is never considered present because `foobar` is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `class` attribute value; duplicate tokens are dropped.
    #[must_use]
    pub fn parse(attribute: &str) -> Self {
        let mut list = Self::new();
        for token in attribute.split_whitespace() {
            list.add(token);
        }
        list
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|existing| existing == token)
    }

    /// Adds `token` unless it is already present or blank.
    pub fn add(&mut self, token: &str) {
        let token = token.trim();
        if token.is_empty() || self.contains(token) {
            return;
        }
        self.tokens.push(token.to_string());
    }

    pub fn remove(&mut self, token: &str) {
        let token = token.trim();
        self.tokens.retain(|existing| existing != token);
    }

    #[must_use]
    pub fn with(mut self, token: &str) -> Self {
        self.add(token);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Attribute value to write, or `None` when the attribute should be removed.
    #[must_use]
    pub fn to_attribute(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(self.tokens.join(" "))
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}
