//! Tag Model

use serde::{Deserialize, Serialize};

/// Tag entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}
