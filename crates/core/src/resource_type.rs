//! Resource kinds a step can link to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The kind of external material a resource points at.
///
/// Stored as its `SCREAMING_SNAKE_CASE` name in `resources.resource_type`;
/// the migration's CHECK constraint must list the same values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    Video,
    Article,
    Course,
    Project,
    Documentation,
    Other,
}

impl ResourceType {
    pub const ALL: [ResourceType; 6] = [
        Self::Video,
        Self::Article,
        Self::Course,
        Self::Project,
        Self::Documentation,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "VIDEO",
            Self::Article => "ARTICLE",
            Self::Course => "COURSE",
            Self::Project => "PROJECT",
            Self::Documentation => "DOCUMENTATION",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = CoreError;

    /// Parse a resource type name. Matching is exact; clients send the
    /// uppercase names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|t| t.as_str()).collect();
                CoreError::Validation(format!(
                    "Invalid resource type '{s}'. Must be one of: {}",
                    allowed.join(", ")
                ))
            })
    }
}
