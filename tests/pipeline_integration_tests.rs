// Pipeline integration tests
//
// Run with: cargo test --test pipeline_integration_tests

use chrono::{TimeZone, Utc};
use fortune_scorer_rust::analysis::BalanceInterpretation;
use fortune_scorer_rust::tables::categories::{HIGH_SCORE_ADDENDUM, LOW_SCORE_ADDENDUM};
use fortune_scorer_rust::tables::{BranchRelationKind, DayMasterCategory, SurplusTier};
use fortune_scorer_rust::{
    FortunePipeline, FortuneReport, FortuneRequest, FortuneCategory, JsonFormatter,
    MarkdownFormatter, RequestContext, Stage, PAGE_BREAK,
};
use serde_json::json;

fn request(pillars: [&str; 4], relations: serde_json::Value) -> FortuneRequest {
    serde_json::from_value(json!({
        "birthInput": {
            "year": 1974, "month": 2, "day": 5, "hour": 8,
            "gender": "female", "isLunar": false
        },
        "chart": {
            "pillars": {
                "year": pillars[0], "month": pillars[1],
                "day": pillars[2], "hour": pillars[3]
            },
            "strength": { "level": "strong", "score": 62.5 },
            "yongShen": { "primary": { "hanja": "金", "korean": "금" }, "reasoning": "drain the earth" },
            "relations": relations,
            "majorLuck": [{ "age": 8, "pillar": "乙卯" }],
            "yearlyLuck": []
        }
    }))
    .expect("fixture request")
}

fn run(request: &FortuneRequest) -> FortuneReport {
    let ctx = RequestContext::with_id("fixture", Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap());
    FortunePipeline::without_sync()
        .run_request(&ctx, request)
        .expect("pipeline succeeds")
}

// =========================================================================
// Section 1: Scoring fixtures
// =========================================================================

#[test]
fn test_metal_day_master_without_branch_matches() {
    // 庚辰 丁巳 辛酉 壬申: two fire symbols, no branch pairs with 午
    let report = run(&request(["庚辰", "丁巳", "辛酉", "壬申"], json!({})));
    let interactions = &report.interpretation.detail.interactions;
    let year = &interactions.year2026;

    let day_master = year.day_master_interaction.as_ref().expect("known day master");
    assert_eq!(day_master.category, DayMasterCategory::AuthorityPressure);
    assert_eq!(year.element_interaction.tier, SurplusTier::Balanced);
    assert!(year.branch_interactions.is_empty());
    assert_eq!(year.impact_level, 0);

    // ratios 0/25/13/50/13 → deviations 20+5+7+30+7
    assert_eq!(interactions.element_balance.balance_score, 31);
    assert_eq!(
        interactions.element_balance.interpretation,
        BalanceInterpretation::StrongImbalance
    );
    assert_eq!(interactions.fortune_score, 46);
}

#[test]
fn test_favourable_chart_clamps_and_scores_high() {
    // earth day master, 寅 戌 未 combine with 午, 午 punishes itself
    let report = run(&request(
        ["甲寅", "丙戌", "戊午", "己未"],
        json!({ "combinations": [{ "pair": ["寅", "午"], "positions": ["year", "day"] }] }),
    ));
    let fortune = &report.interpretation.fortune;
    let year = &report.interpretation.detail.interactions.year2026;

    assert_eq!(
        year.day_master_interaction.as_ref().map(|d| d.category),
        Some(DayMasterCategory::ResourceSupport)
    );
    let kinds: Vec<_> = year.branch_interactions.iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BranchRelationKind::Combination,
            BranchRelationKind::Combination,
            BranchRelationKind::SelfPunishment,
            BranchRelationKind::Combination,
        ]
    );
    assert_eq!(year.impact_level, 3);
    assert_eq!(fortune.fortune_score, 71);

    let wealth = &fortune.categories[&FortuneCategory::Wealth];
    assert!(wealth.detail_text.ends_with(HIGH_SCORE_ADDENDUM));
}

#[test]
fn test_hostile_chart_clamps_and_scores_low() {
    // three fire symbols, three 子 and one 丑 against 午, plus a chart clash
    let report = run(&request(
        ["丙子", "丁丑", "庚子", "丙子"],
        json!({ "clashes": [{ "pair": ["子", "午"] }] }),
    ));
    let interactions = &report.interpretation.detail.interactions;
    let year = &interactions.year2026;

    assert_eq!(year.element_interaction.tier, SurplusTier::Surplus);
    assert_eq!(year.impact_level, -3);
    assert!(year.branch_interactions[0].name.contains("子午"));
    assert!(interactions.relations.has_significant);
    assert_eq!(interactions.element_balance.balance_score, 30);
    assert_eq!(interactions.fortune_score, 17);

    let health = &report.interpretation.fortune.categories[&FortuneCategory::Health];
    assert!(health.detail_text.ends_with(LOW_SCORE_ADDENDUM));
}

#[test]
fn test_unknown_pillars_do_not_fail() {
    let report = run(&request(["", "?", "甲", "乙丑"], json!({})));
    let detail = &report.interpretation.detail;
    assert!(detail.pillars.year.is_unknown());
    assert!(detail.day_master.element.is_none());
    assert!(detail.interactions.year2026.day_master_interaction.is_none());
    assert!(detail.fortune_score <= 100);
}

// =========================================================================
// Section 2: Projections
// =========================================================================

#[test]
fn test_summary_and_detail_agree() {
    let report = run(&request(["甲寅", "丙戌", "戊午", "己未"], json!({})));
    let summary = &report.interpretation.summary;
    let detail = &report.interpretation.detail;

    assert_eq!(summary.fortune_score, detail.fortune_score);
    assert_eq!(summary.greeting, detail.subtitle);
    assert_eq!(summary.saju_summary, detail.saju_summary);
    assert_eq!(summary.lucky, detail.lucky);
    for (id, category) in &summary.all_categories {
        assert_eq!(category.text, detail.categories[id].advisory.text);
    }
    assert_eq!(detail.monthly.len(), 12);
    assert!(detail
        .monthly
        .iter()
        .all(|m| (20..=95).contains(&m.score)));
}

#[test]
fn test_export_and_document() {
    let report = run(&request(["庚辰", "丁巳", "辛酉", "壬申"], json!({})));
    let detail = &report.interpretation.detail;

    let exported = JsonFormatter::format(detail).unwrap();
    let value: serde_json::Value = serde_json::from_str(&exported).unwrap();
    assert_eq!(value["fortuneScore"], 46);
    assert_eq!(value["birthInput"]["gender"], "female");
    assert_eq!(value["interactions"]["year2026"]["impactLevel"], 0);
    assert_eq!(value["majorLuck"][0]["pillar"], "乙卯");

    let document = MarkdownFormatter::format(detail);
    assert_eq!(document.split(PAGE_BREAK).count(), 12);
    assert!(document.contains("46/100"));
}

#[test]
fn test_same_request_twice_differs_only_in_timestamp() {
    let request = request(["甲子", "丙寅", "辛未", "壬辰"], json!({}));
    let pipeline = FortunePipeline::without_sync();
    let first = pipeline
        .run_request(&RequestContext::with_id("a", Utc.timestamp_opt(1_000, 0).unwrap()), &request)
        .unwrap();
    let mut second = pipeline
        .run_request(&RequestContext::with_id("a", Utc.timestamp_opt(2_000, 0).unwrap()), &request)
        .unwrap();

    assert_ne!(first.interpretation.detail.generated_at, second.interpretation.detail.generated_at);
    second.interpretation.detail.generated_at = first.interpretation.detail.generated_at;
    assert_eq!(first, second);
}

// =========================================================================
// Section 3: Failures and batches
// =========================================================================

#[test]
fn test_invalid_birth_input_reports_validation_stage() {
    let mut bad = request(["甲子", "丙寅", "辛未", "壬辰"], json!({}));
    bad.birth_input.day = 31;
    bad.birth_input.month = 4;

    let failure = FortunePipeline::without_sync()
        .run_request(&RequestContext::new(), &bad)
        .unwrap_err();
    assert_eq!(failure.stage, Stage::Validation);

    let json = serde_json::to_value(&failure).unwrap();
    assert_eq!(json["source"], "validation");
}

#[test]
fn test_batch_keeps_order() {
    let requests = vec![
        request(["庚辰", "丁巳", "辛酉", "壬申"], json!({})),
        request(["丙子", "丁丑", "庚子", "丙子"], json!({ "clashes": [{ "pair": ["子", "午"] }] })),
        request(["甲寅", "丙戌", "戊午", "己未"], json!({ "combinations": [{ "pair": ["寅", "午"] }] })),
    ];
    let scores: Vec<u8> = FortunePipeline::without_sync()
        .run_batch(&requests)
        .into_iter()
        .map(|r| r.unwrap().interpretation.fortune.fortune_score)
        .collect();
    assert_eq!(scores, vec![46, 17, 71]);
}
