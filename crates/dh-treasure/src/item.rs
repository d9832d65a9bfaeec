//! Generated treasure pieces.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single generated piece of treasure: what it is and what it is worth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedItem {
    /// Human-readable description.
    pub description: String,
    /// Price in gold pieces.
    pub price: u64,
}

impl GeneratedItem {
    /// Create an item from a description and a price.
    pub fn new(description: impl Into<String>, price: u64) -> Self {
        Self {
            description: description.into(),
            price,
        }
    }
}

impl fmt::Display for GeneratedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} gp)", self.description, self.price)
    }
}
