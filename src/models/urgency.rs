//! Urgency classification for a service type

use serde::{Deserialize, Serialize};
use std::fmt;

/// How close a service type is to being due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Good,
    Soon,
    Overdue,
    /// No service of this type has been recorded
    Unknown,
}

impl Urgency {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Soon => "Due Soon",
            Self::Overdue => "Overdue",
            Self::Unknown => "No Data",
        }
    }

    /// Accent color as `#RRGGBB`
    pub fn color(&self) -> &'static str {
        match self {
            Self::Good => "#33D94D",
            Self::Soon => "#FFCC00",
            Self::Overdue => "#E63326",
            Self::Unknown => "#80808C",
        }
    }

    /// True for states that need the rider's attention
    pub fn needs_attention(&self) -> bool {
        matches!(self, Self::Soon | Self::Overdue)
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
