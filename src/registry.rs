//! Users are created through a [`UserRegistry`], which counts them.
//!
//! The count lives in the registry rather than in global state, so every
//! caller that needs it holds the registry explicitly. A fresh registry
//! starts at zero.

use crate::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
}

impl User {
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Default)]
pub struct UserRegistry {
    count: usize,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users created through this registry.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn register(&mut self, name: impl Into<String>) -> User {
        self.count += 1;
        User { name: name.into() }
    }

    /// Creates a user from free text. The name is trimmed and must not be empty.
    pub fn parse(&mut self, input: &str) -> Result<User, Error> {
        let name = input.trim();
        if name.is_empty() {
            return Err(Error::InvalidArgument("name"));
        }
        Ok(self.register(name))
    }
}
