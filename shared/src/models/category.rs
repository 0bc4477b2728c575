//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
///
/// Flat namespace, independent of tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
