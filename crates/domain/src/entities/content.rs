use serde::{Deserialize, Serialize};

/// A single stored text value.
///
/// Rows carry no identifier; every operation addresses them by the value
/// itself, so two rows holding the same text are indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub content: String,
}

impl Content {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Replacement of every row holding `old_content` with `new_content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentUpdate {
    pub old_content: String,
    pub new_content: String,
}
