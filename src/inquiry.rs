//! Follow-up inquiries
//!
//! After reading a report, a user can ask for a personal consultation: they
//! pick one or more concern areas, write a question and leave an email. The
//! inquiry is validated and delivered through the same sink as reports.

use serde::{Deserialize, Serialize};

/// Concern areas offered on the inquiry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcernCategory {
    Children,
    Property,
    Health,
    Business,
    Finance,
    Family,
    Other,
}

impl ConcernCategory {
    pub const ALL: [ConcernCategory; 7] = [
        ConcernCategory::Children,
        ConcernCategory::Property,
        ConcernCategory::Health,
        ConcernCategory::Business,
        ConcernCategory::Finance,
        ConcernCategory::Family,
        ConcernCategory::Other,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ConcernCategory::Children => "children",
            ConcernCategory::Property => "property",
            ConcernCategory::Health => "health",
            ConcernCategory::Business => "business",
            ConcernCategory::Finance => "finance",
            ConcernCategory::Family => "family",
            ConcernCategory::Other => "other",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            ConcernCategory::Children => "👨‍👩‍👧",
            ConcernCategory::Property => "🏠",
            ConcernCategory::Health => "🏥",
            ConcernCategory::Business => "💼",
            ConcernCategory::Finance => "💰",
            ConcernCategory::Family => "🤝",
            ConcernCategory::Other => "📋",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConcernCategory::Children => "Children & Marriage",
            ConcernCategory::Property => "Property & Assets",
            ConcernCategory::Health => "Health & Longevity",
            ConcernCategory::Business => "Business & Career",
            ConcernCategory::Finance => "Money & Investment",
            ConcernCategory::Family => "Family Relations",
            ConcernCategory::Other => "Other",
        }
    }
}

/// A consultation request tied to the session of an earlier report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub session_id: String,
    pub email: String,
    #[serde(default)]
    pub categories: Vec<ConcernCategory>,
    pub question: String,
}

impl Inquiry {
    /// Selected category ids joined with ", ", e.g. "children, property"
    pub fn categories_line(&self) -> String {
        self.categories
            .iter()
            .map(|c| c.id())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
