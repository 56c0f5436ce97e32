use crate::interpretation::types::{DetailProjection, MonthlyFortune};
use crate::tables::Element;

/// Separator between document pages
pub const PAGE_BREAK: &str = "\n<!-- page-break -->\n\n";

/// Label band for a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreGrade {
    Excellent,
    Good,
    Average,
    Caution,
    Warning,
}

impl ScoreGrade {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreGrade::Excellent,
            65..=79 => ScoreGrade::Good,
            45..=64 => ScoreGrade::Average,
            30..=44 => ScoreGrade::Caution,
            _ => ScoreGrade::Warning,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreGrade::Excellent => "Excellent",
            ScoreGrade::Good => "Good",
            ScoreGrade::Average => "Average",
            ScoreGrade::Caution => "Caution",
            ScoreGrade::Warning => "Warning",
        }
    }
}

/// Markdown formatter for the paginated long-form document
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format the detail projection as a 12-page document
    pub fn format(detail: &DetailProjection) -> String {
        let pages = Self::pages(detail);
        pages.join(PAGE_BREAK)
    }

    /// Individual pages in order: cover, chart, overall, six categories,
    /// two monthly pages, prescriptions
    pub fn pages(detail: &DetailProjection) -> Vec<String> {
        let mut pages = Vec::with_capacity(12);
        pages.push(Self::format_cover(detail));
        pages.push(Self::format_chart(detail));
        pages.push(Self::format_overall(detail));
        for category in detail.categories.values() {
            let advisory = &category.advisory;
            let mut md = String::with_capacity(1024);
            md.push_str(&format!("## {} {}\n\n", advisory.emoji, advisory.name));
            md.push_str(&format!("{}\n\n", advisory.detail_text));
            if !advisory.warnings.is_empty() {
                md.push_str("### ⚠️ Watch out for\n\n");
                for warning in &advisory.warnings {
                    md.push_str(&format!("- {}\n", warning));
                }
                md.push('\n');
            }
            if !advisory.remedies.is_empty() {
                md.push_str("### 🍀 Remedies\n\n");
                for remedy in &advisory.remedies {
                    md.push_str(&format!("- {}\n", remedy));
                }
                md.push('\n');
            }
            pages.push(md);
        }
        let (first_half, second_half) = detail.monthly.split_at(detail.monthly.len().min(6));
        pages.push(Self::format_months("Monthly Fortune: January to June", first_half));
        pages.push(Self::format_months("Monthly Fortune: July to December", second_half));
        pages.push(Self::format_prescriptions(detail));
        pages
    }

    fn format_cover(detail: &DetailProjection) -> String {
        let grade = ScoreGrade::from_score(detail.fortune_score);
        let mut md = String::with_capacity(512);
        md.push_str(&format!("# {}\n\n", detail.title));
        md.push_str(&format!("{}\n\n", detail.subtitle));
        md.push_str(&format!(
            "**Fortune Score:** {}/100 ({})\n\n",
            detail.fortune_score,
            grade.label()
        ));
        md.push_str(&format!(
            "*Generated {}*\n",
            detail.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        md
    }

    fn format_chart(detail: &DetailProjection) -> String {
        let mut md = String::with_capacity(1024);
        md.push_str("## 📋 Your Four Pillars\n\n");
        md.push_str("| Pillar | Stem | Branch |\n|---|---|---|\n");
        for pillar in detail.pillars.iter() {
            md.push_str(&format!(
                "| {} | {} {} | {} {} |\n",
                pillar.position.display_name(),
                pillar.stem_symbol,
                pillar.stem_korean,
                pillar.branch_symbol,
                pillar.branch_korean
            ));
        }
        md.push('\n');

        for line in &detail.saju_summary {
            md.push_str(&format!("{}  \n", line));
        }
        md.push('\n');

        md.push_str("### Five Elements\n\n");
        md.push_str("| Element | Count | Share |\n|---|---|---|\n");
        for element in Element::ALL {
            let share = detail.elements.share(element);
            md.push_str(&format!(
                "| {} {} ({}) | {} | {}% |\n",
                element.emoji(),
                element.display_name(),
                element.hanja(),
                share.count,
                share.ratio
            ));
        }
        md.push('\n');

        let balance = &detail.interactions.element_balance;
        md.push_str(&format!(
            "**Balance:** {}/100. {}\n\n",
            balance.balance_score, balance.interpretation_text
        ));

        if !detail.yong_shen_advice.is_empty() {
            md.push_str("### Needed Element\n\n");
            for line in &detail.yong_shen_advice {
                md.push_str(&format!("{}  \n", line));
            }
        }
        md
    }

    fn format_overall(detail: &DetailProjection) -> String {
        let mut md = String::with_capacity(1024);
        md.push_str("## 🌅 Overall Fortune\n\n");
        for line in &detail.overall {
            if line.is_empty() {
                md.push('\n');
            } else {
                md.push_str(&format!("{}  \n", line));
            }
        }
        md.push('\n');

        let relations = &detail.interactions.relations;
        let chart_relations: Vec<_> = relations
            .combinations
            .iter()
            .chain(&relations.clashes)
            .chain(&relations.harms)
            .chain(&relations.punishments)
            .collect();
        if !chart_relations.is_empty() {
            md.push_str("### Relations within your chart\n\n");
            for relation in chart_relations {
                md.push_str(&format!("- {}: {}\n", relation.description, relation.type_description));
            }
            md.push('\n');
        }

        let lucky = &detail.lucky;
        md.push_str("### 🍀 Lucky Attributes\n\n");
        md.push_str(&format!("- Direction: {}\n", lucky.direction));
        md.push_str(&format!("- Colour: {}\n", lucky.color));
        md.push_str(&format!("- Element: {}\n", lucky.element));
        md.push_str(&format!("- Numbers: {}\n", lucky.number));
        md.push_str(&format!("- Gem: {}\n", lucky.gem));
        md
    }

    fn format_months(title: &str, months: &[MonthlyFortune]) -> String {
        let mut md = String::with_capacity(1024);
        md.push_str(&format!("## 📅 {}\n\n", title));
        for month in months {
            md.push_str(&format!(
                "### Month {}: {} ({}/100, {})\n\n",
                month.month,
                month.keyword,
                month.score,
                ScoreGrade::from_score(month.score).label()
            ));
            md.push_str(&format!("*{}*  \n", month.theme));
            md.push_str(&format!("{}\n\n", month.advice));
            md.push_str(&format!("- Good: {}\n", month.good));
            md.push_str(&format!("- Avoid: {}\n", month.bad));
            md.push_str(&format!("- Health: {}\n\n", month.health));
        }
        md
    }

    fn format_prescriptions(detail: &DetailProjection) -> String {
        let mut md = String::with_capacity(512);
        md.push_str("## ✍️ Expert Prescriptions\n\n");
        for prescription in &detail.prescriptions {
            md.push_str(&format!("### {} {}\n\n", prescription.emoji, prescription.name));
            md.push_str(&format!("{}\n\n", prescription.action));
            md.push_str(&format!("*Tip:* {}\n\n", prescription.tip));
        }
        md
    }
}
