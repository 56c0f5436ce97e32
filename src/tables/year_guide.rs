//! Per-element year guides and the monthly calendar for the reference year

use super::symbols::Element;

/// How a day-master element fares in the reference year, plus lucky attributes
#[derive(Debug, Clone, Copy)]
pub struct ElementYearGuide {
    pub element: Element,
    pub relationship: &'static str,
    pub overall: &'static str,
    pub lucky_direction: &'static str,
    pub lucky_color: &'static str,
    pub lucky_number: Option<&'static str>,
    pub lucky_gem: Option<&'static str>,
}

pub const DEFAULT_LUCKY_NUMBER: &str = "3, 8";
pub const DEFAULT_LUCKY_GEM: &str = "Amber (琥珀)";

/// Indexed by `Element::index()`
static ELEMENT_YEAR_GUIDES: [ElementYearGuide; 5] = [
    ElementYearGuide {
        element: Element::Wood,
        relationship: "Your wood feeds the year's fire. What you pour out this year turns into visible results.",
        overall: "A year to show your talents. Pace yourself so that giving does not leave you drained.",
        lucky_direction: "East",
        lucky_color: "Green",
        lucky_number: Some("3, 8"),
        lucky_gem: Some("Jade (翡翠)"),
    },
    ElementYearGuide {
        element: Element::Fire,
        relationship: "The year's fire is your own element. Your presence grows, and so does the heat.",
        overall: "Confidence and momentum are high. Cool down with rest and steady earth-like habits.",
        lucky_direction: "Southwest",
        lucky_color: "Yellow",
        lucky_number: Some("5, 10"),
        lucky_gem: None,
    },
    ElementYearGuide {
        element: Element::Earth,
        relationship: "The year's fire generates your earth. Support and recognition arrive from those around you.",
        overall: "A year of backing and learning. Accept help gratefully and build on it.",
        lucky_direction: "Centre",
        lucky_color: "Yellow and brown",
        lucky_number: Some("5, 10"),
        lucky_gem: Some("Citrine (黃水晶)"),
    },
    ElementYearGuide {
        element: Element::Metal,
        relationship: "The year's fire tempers your metal. Pressure from work and duty shapes you.",
        overall: "Discipline pays off, but rest matters. Do not carry every burden alone.",
        lucky_direction: "West",
        lucky_color: "White",
        lucky_number: Some("4, 9"),
        lucky_gem: Some("Pearl (眞珠)"),
    },
    ElementYearGuide {
        element: Element::Water,
        relationship: "Your water controls the year's fire. Wealth and results are within reach if you manage them.",
        overall: "Opportunities for gain appear. Keep your footing and avoid spreading yourself thin.",
        lucky_direction: "North",
        lucky_color: "Black and navy",
        lucky_number: Some("1, 6"),
        lucky_gem: None,
    },
];

/// Guide for a day-master element; unknown elements use the earth guide.
pub fn element_year_guide(element: Option<Element>) -> &'static ElementYearGuide {
    &ELEMENT_YEAR_GUIDES[element.unwrap_or(Element::Earth).index()]
}

// ============================================================================
// Monthly calendar
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct MonthlyDetail {
    pub month: u8,
    pub theme: &'static str,
    pub keyword: &'static str,
    pub advice: &'static str,
    pub good: &'static str,
    pub bad: &'static str,
    pub health: &'static str,
}

pub static MONTHLY_DETAILS: [MonthlyDetail; 12] = [
    MonthlyDetail {
        month: 1,
        theme: "Preparing for the new year",
        keyword: "Planning",
        advice: "Write down what you want from the year before acting on it.",
        good: "Making plans, family gatherings",
        bad: "Reckless investment, heavy drinking",
        health: "Watch your joints and lower back",
    },
    MonthlyDetail {
        month: 2,
        theme: "Spring energy arrives",
        keyword: "Fresh start",
        advice: "Start one small new habit and keep it.",
        good: "Starting a hobby, health checkup",
        bad: "Arguments, standing guarantor",
        health: "Watch for colds and respiratory trouble",
    },
    MonthlyDetail {
        month: 3,
        theme: "Spring energy rising",
        keyword: "Growth",
        advice: "Small steps forward are better than one big leap.",
        good: "Small investments, outings",
        bad: "Large contracts, moving house",
        health: "Watch for allergies",
    },
    MonthlyDetail {
        month: 4,
        theme: "A month of activity",
        keyword: "Connection",
        advice: "Say yes to invitations, but keep your promises realistic.",
        good: "Social activity, volunteering",
        bad: "Overwork, overcommitting",
        health: "Keep your blood pressure in check",
    },
    MonthlyDetail {
        month: 5,
        theme: "Stability and growth",
        keyword: "Steadiness",
        advice: "Put something aside each week; it adds up.",
        good: "Saving, family trips",
        bad: "Gambling, impulse buying",
        health: "Look after your digestion",
    },
    MonthlyDetail {
        month: 6,
        theme: "Fire at its peak",
        keyword: "Composure",
        advice: "When tempers rise, step away before answering.",
        good: "Tending your network, learning",
        bad: "Irritability, quarrels",
        health: "Watch your heart and blood vessels",
    },
    MonthlyDetail {
        month: 7,
        theme: "Wisdom in the heat",
        keyword: "Rest",
        advice: "Recharge now so the second half of the year goes smoothly.",
        good: "Rest, recharging",
        bad: "Packed schedules",
        health: "Beware of heatstroke and dehydration",
    },
    MonthlyDetail {
        month: 8,
        theme: "Preparing for the harvest festival",
        keyword: "Gratitude",
        advice: "Thank the people who helped you this year.",
        good: "Family harmony, expressing thanks",
        bad: "Property disputes",
        health: "Mind your sleep",
    },
    MonthlyDetail {
        month: 9,
        theme: "Autumn harvest",
        keyword: "Results",
        advice: "Collect what you have sown before starting anything new.",
        good: "Recovering investments, reaping results",
        bad: "Starting a new business",
        health: "Watch for dry skin",
    },
    MonthlyDetail {
        month: 10,
        theme: "Strengthening from within",
        keyword: "Order",
        advice: "Tidy your home and your finances.",
        good: "Tidying up, health care",
        bad: "Unnecessary spending",
        health: "Look after your immunity",
    },
    MonthlyDetail {
        month: 11,
        theme: "Preparing for winter",
        keyword: "Thrift",
        advice: "Check your plans against your budget.",
        good: "Saving, reviewing plans",
        bad: "Year-end overspending",
        health: "Watch your joints and keep warm",
    },
    MonthlyDetail {
        month: 12,
        theme: "Closing the year",
        keyword: "Reflection",
        advice: "Look back with thanks, not regret.",
        good: "Gratitude, family time",
        bad: "Regret, impatience",
        health: "Look after your mood and stamina",
    },
];
