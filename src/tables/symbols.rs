//! Stems, Branches and the Five Elements
//!
//! The 10 heavenly stems and 12 earthly branches that make up every pillar,
//! each mapped to its element, polarity and readings. Element relationships
//! follow the two classical cycles:
//! - Generation: wood → fire → earth → metal → water → wood
//! - Domination: wood → earth → water → fire → metal → wood
//!
//! Serialized forms use the hanja symbol (e.g. `"木"`, `"甲"`, `"子"`), which is
//! also what the chart calculator emits.

use serde::{Deserialize, Serialize};

/// One of the five elements, declared in the fixed enumeration order used for
/// tie-breaks (wood, fire, earth, metal, water).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "水")]
    Water,
}

impl Element {
    /// All elements in enumeration order
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Position in [`Element::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The element this one generates (feeds)
    pub fn generates(self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// The element this one dominates (overcomes)
    pub fn dominates(self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
            Element::Metal => Element::Wood,
        }
    }

    pub fn hanja(self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }

    /// Korean reading (목, 화, 토, 금, 수)
    pub fn korean(self) -> &'static str {
        match self {
            Element::Wood => "목",
            Element::Fire => "화",
            Element::Earth => "토",
            Element::Metal => "금",
            Element::Water => "수",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Element::Wood => "Wood",
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Metal => "Metal",
            Element::Water => "Water",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Element::Wood => "🌳",
            Element::Fire => "🔥",
            Element::Earth => "⛰️",
            Element::Metal => "⚔️",
            Element::Water => "💧",
        }
    }

    /// Parse an element code in any of the forms the calculator emits:
    /// hanja (`"土"`), Korean (`"토"`, `"토(土)"`) or English (`"earth"`).
    pub fn from_code(code: &str) -> Option<Element> {
        let code = code.trim();
        let first = code.chars().next()?;
        let by_symbol = match first {
            '木' | '목' => Some(Element::Wood),
            '火' | '화' => Some(Element::Fire),
            '土' | '토' => Some(Element::Earth),
            '金' | '금' => Some(Element::Metal),
            '水' | '수' => Some(Element::Water),
            _ => None,
        };
        by_symbol.or_else(|| match code.to_lowercase().as_str() {
            "wood" => Some(Element::Wood),
            "fire" => Some(Element::Fire),
            "earth" => Some(Element::Earth),
            "metal" => Some(Element::Metal),
            "water" => Some(Element::Water),
            _ => None,
        })
    }
}

/// Yin/yang polarity of a stem or branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

/// The ten heavenly stems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    #[serde(rename = "甲")]
    Gap,
    #[serde(rename = "乙")]
    Eul,
    #[serde(rename = "丙")]
    Byeong,
    #[serde(rename = "丁")]
    Jeong,
    #[serde(rename = "戊")]
    Mu,
    #[serde(rename = "己")]
    Gi,
    #[serde(rename = "庚")]
    Gyeong,
    #[serde(rename = "辛")]
    Sin,
    #[serde(rename = "壬")]
    Im,
    #[serde(rename = "癸")]
    Gye,
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Gap,
        Stem::Eul,
        Stem::Byeong,
        Stem::Jeong,
        Stem::Mu,
        Stem::Gi,
        Stem::Gyeong,
        Stem::Sin,
        Stem::Im,
        Stem::Gye,
    ];

    pub fn from_symbol(symbol: char) -> Option<Stem> {
        Stem::ALL.into_iter().find(|s| s.symbol() == symbol)
    }

    pub fn symbol(self) -> char {
        match self {
            Stem::Gap => '甲',
            Stem::Eul => '乙',
            Stem::Byeong => '丙',
            Stem::Jeong => '丁',
            Stem::Mu => '戊',
            Stem::Gi => '己',
            Stem::Gyeong => '庚',
            Stem::Sin => '辛',
            Stem::Im => '壬',
            Stem::Gye => '癸',
        }
    }

    /// Stems come in yang/yin pairs per element
    pub fn element(self) -> Element {
        Element::ALL[(self as usize) / 2]
    }

    pub fn polarity(self) -> Polarity {
        if (self as usize) % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    pub fn korean(self) -> &'static str {
        ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"][self as usize]
    }

    pub fn romanized(self) -> &'static str {
        ["Gap", "Eul", "Byeong", "Jeong", "Mu", "Gi", "Gyeong", "Sin", "Im", "Gye"][self as usize]
    }
}

/// The twelve earthly branches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "子")]
    Ja,
    #[serde(rename = "丑")]
    Chuk,
    #[serde(rename = "寅")]
    In,
    #[serde(rename = "卯")]
    Myo,
    #[serde(rename = "辰")]
    Jin,
    #[serde(rename = "巳")]
    Sa,
    #[serde(rename = "午")]
    O,
    #[serde(rename = "未")]
    Mi,
    #[serde(rename = "申")]
    Sin,
    #[serde(rename = "酉")]
    Yu,
    #[serde(rename = "戌")]
    Sul,
    #[serde(rename = "亥")]
    Hae,
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Ja,
        Branch::Chuk,
        Branch::In,
        Branch::Myo,
        Branch::Jin,
        Branch::Sa,
        Branch::O,
        Branch::Mi,
        Branch::Sin,
        Branch::Yu,
        Branch::Sul,
        Branch::Hae,
    ];

    pub fn from_symbol(symbol: char) -> Option<Branch> {
        Branch::ALL.into_iter().find(|b| b.symbol() == symbol)
    }

    pub fn symbol(self) -> char {
        ['子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥'][self as usize]
    }

    pub fn element(self) -> Element {
        match self {
            Branch::In | Branch::Myo => Element::Wood,
            Branch::Sa | Branch::O => Element::Fire,
            Branch::Chuk | Branch::Jin | Branch::Mi | Branch::Sul => Element::Earth,
            Branch::Sin | Branch::Yu => Element::Metal,
            Branch::Hae | Branch::Ja => Element::Water,
        }
    }

    pub fn polarity(self) -> Polarity {
        if (self as usize) % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    pub fn korean(self) -> &'static str {
        ["자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해"][self as usize]
    }

    pub fn romanized(self) -> &'static str {
        ["Ja", "Chuk", "In", "Myo", "Jin", "Sa", "O", "Mi", "Sin", "Yu", "Sul", "Hae"][self as usize]
    }

    /// Zodiac animal of the branch
    pub fn zodiac(self) -> &'static str {
        [
            "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey",
            "Rooster", "Dog", "Pig",
        ][self as usize]
    }
}

/// Position of a pillar in the chart, in fixed analysis order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarPosition {
    pub const ALL: [PillarPosition; 4] = [
        PillarPosition::Year,
        PillarPosition::Month,
        PillarPosition::Day,
        PillarPosition::Hour,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            PillarPosition::Year => "Year pillar",
            PillarPosition::Month => "Month pillar",
            PillarPosition::Day => "Day pillar",
            PillarPosition::Hour => "Hour pillar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_cycle_closes() {
        let mut element = Element::Wood;
        for _ in 0..5 {
            element = element.generates();
        }
        assert_eq!(element, Element::Wood);
        assert_eq!(Element::Fire.generates(), Element::Earth);
    }

    #[test]
    fn test_domination_cycle() {
        assert_eq!(Element::Fire.dominates(), Element::Metal);
        assert_eq!(Element::Water.dominates(), Element::Fire);
        assert_eq!(Element::Metal.dominates(), Element::Wood);
    }

    #[test]
    fn test_every_distinct_pair_has_exactly_one_relation() {
        for a in Element::ALL {
            for b in Element::ALL {
                if a == b {
                    continue;
                }
                let relations = [
                    b.generates() == a,
                    a.generates() == b,
                    a.dominates() == b,
                    b.dominates() == a,
                ];
                assert_eq!(relations.iter().filter(|r| **r).count(), 1, "{:?}/{:?}", a, b);
            }
        }
    }

    #[test]
    fn test_stem_lookup() {
        let stem = Stem::from_symbol('丙').unwrap();
        assert_eq!(stem, Stem::Byeong);
        assert_eq!(stem.element(), Element::Fire);
        assert_eq!(stem.polarity(), Polarity::Yang);
        assert_eq!(Stem::Sin.element(), Element::Metal);
        assert_eq!(Stem::Sin.polarity(), Polarity::Yin);
        assert!(Stem::from_symbol('X').is_none());
    }

    #[test]
    fn test_branch_lookup() {
        assert_eq!(Branch::from_symbol('午'), Some(Branch::O));
        assert_eq!(Branch::O.element(), Element::Fire);
        assert_eq!(Branch::Sul.element(), Element::Earth);
        assert_eq!(Branch::Ja.zodiac(), "Rat");
        assert_eq!(Branch::Hae.korean(), "해");
    }

    #[test]
    fn test_element_codes() {
        assert_eq!(Element::from_code("土"), Some(Element::Earth));
        assert_eq!(Element::from_code("토(土)"), Some(Element::Earth));
        assert_eq!(Element::from_code("Water"), Some(Element::Water));
        assert_eq!(Element::from_code(""), None);
        assert_eq!(Element::from_code("?"), None);
    }

    #[test]
    fn test_serde_uses_hanja() {
        assert_eq!(serde_json::to_string(&Element::Fire).unwrap(), "\"火\"");
        assert_eq!(serde_json::to_string(&Branch::Sul).unwrap(), "\"戌\"");
        let stem: Stem = serde_json::from_str("\"癸\"").unwrap();
        assert_eq!(stem, Stem::Gye);
    }
}
