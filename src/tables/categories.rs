//! Life-Category Advisory Tables
//!
//! Canned text for the six life categories:
//! - tier texts keyed by (category, surplus tier)
//! - warnings keyed by (category, surplus tier)
//! - remedies keyed by (category, needed element) with a per-category default
//! - expert prescriptions keyed by (category, needed element)
//!
//! The raw rows are static slices; `AdvisoryTables` indexes them into
//! `FxHashMap`s once so lookups stay O(1).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::reference_year::SurplusTier;
use super::symbols::Element;

/// The six life categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FortuneCategory {
    Wealth,
    Love,
    Health,
    Career,
    Study,
    Family,
}

impl FortuneCategory {
    pub const ALL: [FortuneCategory; 6] = [
        FortuneCategory::Wealth,
        FortuneCategory::Love,
        FortuneCategory::Health,
        FortuneCategory::Career,
        FortuneCategory::Study,
        FortuneCategory::Family,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FortuneCategory::Wealth => "wealth",
            FortuneCategory::Love => "love",
            FortuneCategory::Health => "health",
            FortuneCategory::Career => "career",
            FortuneCategory::Study => "study",
            FortuneCategory::Family => "family",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FortuneCategory::Wealth => "Wealth & Household",
            FortuneCategory::Love => "Family & Relationships",
            FortuneCategory::Health => "Health & Body Care",
            FortuneCategory::Career => "Career & Retirement",
            FortuneCategory::Study => "Children & Grandchildren",
            FortuneCategory::Family => "Home & Harmony",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            FortuneCategory::Wealth => "💰",
            FortuneCategory::Love => "🤝",
            FortuneCategory::Health => "🩺",
            FortuneCategory::Career => "🏦",
            FortuneCategory::Study => "👨‍👩‍👧‍👦",
            FortuneCategory::Family => "🏡",
        }
    }
}

/// Appended to detail text when the fortune score is above 70
pub const HIGH_SCORE_ADDENDUM: &str =
    "Overall, this year's energy is on your side. Move forward with confidence!";

/// Appended to detail text when the fortune score is below 30
pub const LOW_SCORE_ADDENDUM: &str =
    "This year favours a careful, unhurried pace. Talk big decisions over with your family.";

// ============================================================================
// Row types
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct TierTextRow {
    pub category: FortuneCategory,
    pub tier: SurplusTier,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct WarningRow {
    pub category: FortuneCategory,
    pub tier: SurplusTier,
    pub warnings: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct RemedyRow {
    pub category: FortuneCategory,
    pub by_element: &'static [(Element, &'static [&'static str])],
    pub default: &'static [&'static str],
}

/// Action + tip pair shown on the prescription page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prescription {
    pub action: &'static str,
    pub tip: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct PrescriptionRow {
    pub category: FortuneCategory,
    pub element: Element,
    pub prescription: Prescription,
}

/// Used when no category/element prescription exists
pub const GENERIC_PRESCRIPTION: Prescription = Prescription {
    action: "Keep your surroundings clean and bright so that incoming luck has room to settle.",
    tip: "Ten minutes of meditation each morning improves the overall flow of your fortune.",
};

// ============================================================================
// EMBEDDED TABLE DATA
// ============================================================================

static TIER_TEXTS: &[TierTextRow] = &[
    TierTextRow {
        category: FortuneCategory::Wealth,
        tier: SurplusTier::Surplus,
        text: "Money comes in quickly this year but goes out just as fast. Hold back on impulse spending and keep your savings out of reach.",
    },
    TierTextRow {
        category: FortuneCategory::Wealth,
        tier: SurplusTier::Balanced,
        text: "A steady year for household finances. Small, careful gains add up when you stick to a plan.",
    },
    TierTextRow {
        category: FortuneCategory::Wealth,
        tier: SurplusTier::Deficit,
        text: "The year's fire warms up stalled finances. Opportunities come to those who move first, so don't let caution make you miss them.",
    },
    TierTextRow {
        category: FortuneCategory::Love,
        tier: SurplusTier::Surplus,
        text: "Emotions run hot this year. A little patience keeps small disagreements from turning into quarrels.",
    },
    TierTextRow {
        category: FortuneCategory::Love,
        tier: SurplusTier::Balanced,
        text: "Relationships feel warm and comfortable. Reaching out to old friends brings pleasant news.",
    },
    TierTextRow {
        category: FortuneCategory::Love,
        tier: SurplusTier::Deficit,
        text: "The year's warmth draws people to you. Go out and meet others; new bonds form easily.",
    },
    TierTextRow {
        category: FortuneCategory::Health,
        tier: SurplusTier::Surplus,
        text: "With fire piled on fire, your heart, blood pressure and sleep need extra care. Avoid overwork, especially in summer.",
    },
    TierTextRow {
        category: FortuneCategory::Health,
        tier: SurplusTier::Balanced,
        text: "Your health is stable overall. Regular checkups and steady routines keep it that way.",
    },
    TierTextRow {
        category: FortuneCategory::Health,
        tier: SurplusTier::Deficit,
        text: "Vitality returns this year. Light, consistent exercise turns the added fire into lasting stamina.",
    },
    TierTextRow {
        category: FortuneCategory::Career,
        tier: SurplusTier::Surplus,
        text: "Ambition runs high, but overexpansion is risky. Consolidate what you have before taking on more.",
    },
    TierTextRow {
        category: FortuneCategory::Career,
        tier: SurplusTier::Balanced,
        text: "Steady progress at work. Focus on what you already do well and the results will follow.",
    },
    TierTextRow {
        category: FortuneCategory::Career,
        tier: SurplusTier::Deficit,
        text: "New energy lifts your working life. A good year for the role, project or course you have been putting off.",
    },
    TierTextRow {
        category: FortuneCategory::Study,
        tier: SurplusTier::Surplus,
        text: "Children and grandchildren are full of drive but bristle at advice. Cheer them on rather than correcting them.",
    },
    TierTextRow {
        category: FortuneCategory::Study,
        tier: SurplusTier::Balanced,
        text: "Good news arrives from children and grandchildren. Respecting their choices strengthens the bond.",
    },
    TierTextRow {
        category: FortuneCategory::Study,
        tier: SurplusTier::Deficit,
        text: "More time with children and grandchildren brings joy and renewed energy to the whole family.",
    },
    TierTextRow {
        category: FortuneCategory::Family,
        tier: SurplusTier::Surplus,
        text: "Tempers flare easily at home. Yielding a little keeps the peace.",
    },
    TierTextRow {
        category: FortuneCategory::Family,
        tier: SurplusTier::Balanced,
        text: "A calm and harmonious home. Small shared routines bring the family closer.",
    },
    TierTextRow {
        category: FortuneCategory::Family,
        tier: SurplusTier::Deficit,
        text: "Your home grows warmer this year. Gatherings and shared meals bring everyone together.",
    },
];

static WARNINGS: &[WarningRow] = &[
    WarningRow {
        category: FortuneCategory::Wealth,
        tier: SurplusTier::Surplus,
        warnings: &[
            "Beware of impulsive large purchases",
            "Never stand guarantor or take on new loans",
            "Risk of financial loss from June to August",
        ],
    },
    WarningRow {
        category: FortuneCategory::Wealth,
        tier: SurplusTier::Balanced,
        warnings: &[
            "Hold back on unplanned investments",
            "Be careful with money lent between family members",
        ],
    },
    WarningRow {
        category: FortuneCategory::Wealth,
        tier: SurplusTier::Deficit,
        warnings: &[
            "Saving too hard can make you miss opportunities",
            "Review your taxes and insurance",
        ],
    },
    WarningRow {
        category: FortuneCategory::Love,
        tier: SurplusTier::Surplus,
        warnings: &["Watch for quarrels driven by mood swings", "Practise patience"],
    },
    WarningRow {
        category: FortuneCategory::Love,
        tier: SurplusTier::Balanced,
        warnings: &["Misunderstandings arise easily, so talk things through often"],
    },
    WarningRow {
        category: FortuneCategory::Love,
        tier: SurplusTier::Deficit,
        warnings: &["Don't spend too much time alone; join gatherings"],
    },
    WarningRow {
        category: FortuneCategory::Health,
        tier: SurplusTier::Surplus,
        warnings: &[
            "Regular heart and blood pressure checks are a must",
            "Beware of overwork and lack of sleep",
            "Take care not to overheat in summer",
        ],
    },
    WarningRow {
        category: FortuneCategory::Health,
        tier: SurplusTier::Balanced,
        warnings: &[
            "Be sure to get a regular health checkup",
            "Managing stress is important",
        ],
    },
    WarningRow {
        category: FortuneCategory::Health,
        tier: SurplusTier::Deficit,
        warnings: &[
            "Watch for declining stamina and start some light exercise",
            "Look after your immunity",
        ],
    },
    WarningRow {
        category: FortuneCategory::Career,
        tier: SurplusTier::Surplus,
        warnings: &[
            "Beware of overexpanding your business",
            "Weigh partnership and investment offers carefully",
        ],
    },
    WarningRow {
        category: FortuneCategory::Career,
        tier: SurplusTier::Balanced,
        warnings: &["Focus on the work in front of you", "Overreaching will cost you"],
    },
    WarningRow {
        category: FortuneCategory::Career,
        tier: SurplusTier::Deficit,
        warnings: &["Time to review your retirement funds", "Put steady savings first"],
    },
    WarningRow {
        category: FortuneCategory::Study,
        tier: SurplusTier::Surplus,
        warnings: &[
            "Watch for friction with your children; conversation matters",
            "Encourage rather than interfere",
        ],
    },
    WarningRow {
        category: FortuneCategory::Study,
        tier: SurplusTier::Balanced,
        warnings: &["Respect your children's decisions"],
    },
    WarningRow {
        category: FortuneCategory::Study,
        tier: SurplusTier::Deficit,
        warnings: &["Spend more time with your children and grandchildren"],
    },
    WarningRow {
        category: FortuneCategory::Family,
        tier: SurplusTier::Surplus,
        warnings: &[
            "Beware of arguments between family members",
            "There is potential for household disputes",
        ],
    },
    WarningRow {
        category: FortuneCategory::Family,
        tier: SurplusTier::Balanced,
        warnings: &["Keeping the peace takes some give and take"],
    },
    WarningRow {
        category: FortuneCategory::Family,
        tier: SurplusTier::Deficit,
        warnings: &["Arrange family gatherings often"],
    },
];

const WEALTH_EARTH_REMEDIES: &[&str] = &[
    "Good luck with real estate",
    "Keep valuables in the centre or southwest of your home",
];

const HEALTH_EARTH_REMEDIES: &[&str] = &[
    "Regular meals are the best tonic",
    "Look after your digestion and stomach",
];

static REMEDIES: &[RemedyRow] = &[
    RemedyRow {
        category: FortuneCategory::Wealth,
        by_element: &[
            (Element::Wood, &["Use a green wallet", "The east is a lucky direction for wealth"]),
            (Element::Fire, &["Build calm spending habits", "Yellow accessories bring stability"]),
            (Element::Earth, WEALTH_EARTH_REMEDIES),
            (Element::Metal, &["Precious metals and gold look promising", "Luck lies to the west"]),
            (Element::Water, &["Flexible asset management works in your favour", "Wealth arrives from the north"]),
        ],
        default: WEALTH_EARTH_REMEDIES,
    },
    RemedyRow {
        category: FortuneCategory::Health,
        by_element: &[
            (Element::Wood, &["Walks and hikes in nature are recommended", "Check your liver and gallbladder"]),
            (Element::Fire, &["Swimming and water exercise are recommended", "Watch your heart and small intestine"]),
            (Element::Earth, HEALTH_EARTH_REMEDIES),
            (Element::Metal, &["Breathing exercises and yoga are recommended", "Check your lungs and large intestine"]),
            (Element::Water, &["Drink warm tea often", "Look after your kidneys and bladder"]),
        ],
        default: HEALTH_EARTH_REMEDIES,
    },
    RemedyRow {
        category: FortuneCategory::Love,
        by_element: &[],
        default: &[
            "Thank your family often",
            "Share more meals together",
            "Be the first to contact an old friend",
        ],
    },
    RemedyRow {
        category: FortuneCategory::Career,
        by_element: &[],
        default: &[
            "Be grateful for the work you have",
            "Review your retirement financial plan",
            "Join a lifelong learning programme",
        ],
    },
    RemedyRow {
        category: FortuneCategory::Study,
        by_element: &[],
        default: &[
            "Give your children words of encouragement often",
            "Spend more time playing with your grandchildren",
            "Sort through the family photo albums",
        ],
    },
    RemedyRow {
        category: FortuneCategory::Family,
        by_element: &[],
        default: &[
            "Hold a family gathering once a month",
            "Take walks with your spouse",
            "Tidy the house to refresh its energy",
        ],
    },
];

static PRESCRIPTIONS: &[PrescriptionRow] = &[
    PrescriptionRow {
        category: FortuneCategory::Wealth,
        element: Element::Wood,
        prescription: Prescription {
            action: "Place blue-green objects or a potted plant in the east to let wealth sprout.",
            tip: "A wallet or accessories made of wood keep money flowing smoothly.",
        },
    },
    PrescriptionRow {
        category: FortuneCategory::Wealth,
        element: Element::Fire,
        prescription: Prescription {
            action: "Use a red wallet or bright lighting to wake up stalled money luck.",
            tip: "Wear a red tie or scarf when signing important contracts.",
        },
    },
    PrescriptionRow {
        category: FortuneCategory::Wealth,
        element: Element::Earth,
        prescription: Prescription {
            action: "Keep yellow ceramics or earthenware in the centre of the living room or bedroom to store wealth.",
            tip: "Steady property investment or savings beat windfalls this year.",
        },
    },
    PrescriptionRow {
        category: FortuneCategory::Wealth,
        element: Element::Metal,
        prescription: Prescription {
            action: "Place metal ornaments or white frames in the west to support decisive investments.",
            tip: "Wearing a watch or precious metals keeps metal energy close to you.",
        },
    },
    PrescriptionRow {
        category: FortuneCategory::Wealth,
        element: Element::Water,
        prescription: Prescription {
            action: "Place dark objects or images of water in the north so wealth does not leak away.",
            tip: "Holding cash is wiser than volatile investments.",
        },
    },
    PrescriptionRow {
        category: FortuneCategory::Health,
        element: Element::Wood,
        prescription: Prescription {
            action: "Enjoy early-morning walks for your liver; green clothing lifts your vitality.",
            tip: "Sleep with your head to the east and eat sour fruit.",
        },
    },
    PrescriptionRow {
        category: FortuneCategory::Health,
        element: Element::Fire,
        prescription: Prescription {
            action: "Take special care of your cardiovascular health and calm inner heat with bitter teas.",
            tip: "Quiet meditation and sleep matter more than strenuous midday activity.",
        },
    },
    PrescriptionRow {
        category: FortuneCategory::Health,
        element: Element::Earth,
        prescription: Prescription {
            action: "Barefoot walking on soil or red-clay saunas strengthen your digestion.",
            tip: "Sweet pumpkin and root vegetables restore your energy.",
        },
    },
    PrescriptionRow {
        category: FortuneCategory::Health,
        element: Element::Metal,
        prescription: Prescription {
            action: "Use white bedding and keep indoor air clean for your lungs and large intestine.",
            tip: "Moderately spicy food activates lung function.",
        },
    },
    PrescriptionRow {
        category: FortuneCategory::Health,
        element: Element::Water,
        prescription: Prescription {
            action: "Drink water often and enjoy black beans or sesame for your kidneys and bladder.",
            tip: "Go to bed early rather than staying active late, to preserve water energy.",
        },
    },
];

// ============================================================================
// Indexed tables
// ============================================================================

/// Keyed view over the advisory rows
#[derive(Debug, Default)]
pub struct AdvisoryTables {
    tier_texts: FxHashMap<(FortuneCategory, SurplusTier), &'static str>,
    warnings: FxHashMap<(FortuneCategory, SurplusTier), &'static [&'static str]>,
    remedies: FxHashMap<FortuneCategory, &'static RemedyRow>,
    prescriptions: FxHashMap<(FortuneCategory, Element), Prescription>,
}

impl AdvisoryTables {
    /// Build the index from row slices. Later rows overwrite earlier ones.
    pub fn from_rows(
        tier_texts: &'static [TierTextRow],
        warnings: &'static [WarningRow],
        remedies: &'static [RemedyRow],
        prescriptions: &'static [PrescriptionRow],
    ) -> Self {
        Self {
            tier_texts: tier_texts
                .iter()
                .map(|row| ((row.category, row.tier), row.text))
                .collect(),
            warnings: warnings
                .iter()
                .map(|row| ((row.category, row.tier), row.warnings))
                .collect(),
            remedies: remedies.iter().map(|row| (row.category, row)).collect(),
            prescriptions: prescriptions
                .iter()
                .map(|row| ((row.category, row.element), row.prescription))
                .collect(),
        }
    }

    /// The embedded tables for the reference year
    pub fn standard() -> &'static AdvisoryTables {
        static TABLES: OnceLock<AdvisoryTables> = OnceLock::new();
        TABLES.get_or_init(|| {
            AdvisoryTables::from_rows(TIER_TEXTS, WARNINGS, REMEDIES, PRESCRIPTIONS)
        })
    }

    pub fn tier_text(&self, category: FortuneCategory, tier: SurplusTier) -> Option<&'static str> {
        self.tier_texts.get(&(category, tier)).copied()
    }

    pub fn warnings(
        &self,
        category: FortuneCategory,
        tier: SurplusTier,
    ) -> Option<&'static [&'static str]> {
        self.warnings.get(&(category, tier)).copied()
    }

    pub fn remedies(&self, category: FortuneCategory) -> Option<&'static RemedyRow> {
        self.remedies.get(&category).copied()
    }

    pub fn prescription(&self, category: FortuneCategory, element: Element) -> Option<Prescription> {
        self.prescriptions.get(&(category, element)).copied()
    }

    pub fn has_tier_texts_for(&self, category: FortuneCategory) -> bool {
        self.tier_texts.keys().any(|(c, _)| *c == category)
    }

    pub fn has_prescriptions_for(&self, category: FortuneCategory) -> bool {
        self.prescriptions.keys().any(|(c, _)| *c == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tables_are_complete() {
        let tables = AdvisoryTables::standard();
        for category in FortuneCategory::ALL {
            for tier in [SurplusTier::Surplus, SurplusTier::Balanced, SurplusTier::Deficit] {
                assert!(tables.tier_text(category, tier).is_some(), "{:?}/{:?}", category, tier);
                assert!(tables.warnings(category, tier).is_some(), "{:?}/{:?}", category, tier);
            }
            assert!(tables.remedies(category).is_some());
        }
    }

    #[test]
    fn test_prescriptions_only_for_wealth_and_health() {
        let tables = AdvisoryTables::standard();
        assert!(tables.has_prescriptions_for(FortuneCategory::Wealth));
        assert!(tables.has_prescriptions_for(FortuneCategory::Health));
        assert!(!tables.has_prescriptions_for(FortuneCategory::Love));
        assert!(tables.prescription(FortuneCategory::Health, Element::Water).is_some());
    }

    #[test]
    fn test_category_serializes_as_id() {
        for category in FortuneCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.id()));
        }
    }
}
