//! Report sync
//!
//! After a report is generated, a flat session payload is delivered to a
//! `ReportSink`; follow-up inquiries go to the same sink as inquiry payloads.
//! Delivery is retried with a linearly increasing delay. When every attempt
//! fails the outcome says so and the report is still returned to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info, warn};

use crate::chart::BirthInput;
use crate::error::{FortuneError, Result};
use crate::inquiry::Inquiry;
use crate::interpretation::{DetailProjection, SummaryProjection};

/// Characters of category text kept in the categories summary
const CATEGORY_SNIPPET_CHARS: usize = 30;

/// Row written to the session store, tagged by `type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SyncPayload {
    Session(SessionPayload),
    Inquiry(InquiryPayload),
}

impl SyncPayload {
    pub fn session_id(&self) -> &str {
        match self {
            SyncPayload::Session(p) => &p.session_id,
            SyncPayload::Inquiry(p) => &p.session_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
    pub birth_year: Option<i32>,
    pub birth_month: Option<u32>,
    pub birth_day: Option<u32>,
    pub birth_hour: Option<u32>,
    pub gender: Option<String>,
    pub is_lunar: bool,
    pub fortune_score: u8,
    pub four_pillars: String,
    pub categories_summary: String,
    pub result_json: String,
}

impl SessionPayload {
    pub fn build(
        session_id: &str,
        created_at: DateTime<Utc>,
        summary: &SummaryProjection,
        detail: &DetailProjection,
    ) -> Result<Self> {
        let birth: Option<&BirthInput> = detail.birth_input.as_ref();

        let categories_summary = summary
            .all_categories
            .values()
            .map(|c| {
                let snippet: String = c.text.chars().take(CATEGORY_SNIPPET_CHARS).collect();
                format!("{} {}: {}", c.emoji, c.name, snippet)
            })
            .collect::<Vec<_>>()
            .join(" | ");

        Ok(Self {
            session_id: session_id.to_string(),
            created_at,
            status: "free_viewed".to_string(),
            birth_year: birth.map(|b| b.year),
            birth_month: birth.map(|b| b.month),
            birth_day: birth.map(|b| b.day),
            birth_hour: birth.map(|b| b.hour),
            gender: birth.map(|b| b.gender.clone()),
            is_lunar: birth.map(|b| b.is_lunar).unwrap_or(false),
            fortune_score: summary.fortune_score,
            four_pillars: summary.saju_summary.first().cloned().unwrap_or_default(),
            categories_summary,
            result_json: serde_json::to_string(detail)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryPayload {
    pub session_id: String,
    pub email: String,
    pub concern_categories: String,
    pub question_text: String,
    pub submitted_at: DateTime<Utc>,
}

impl InquiryPayload {
    pub fn build(inquiry: &Inquiry, submitted_at: DateTime<Utc>) -> Self {
        Self {
            session_id: inquiry.session_id.clone(),
            email: inquiry.email.trim().to_string(),
            concern_categories: inquiry.categories_line(),
            question_text: inquiry.question.trim().to_string(),
            submitted_at,
        }
    }
}

/// Destination for sync payloads
pub trait ReportSink: Send + Sync {
    fn name(&self) -> &str;

    fn deliver(&self, payload: &SyncPayload) -> anyhow::Result<()>;
}

/// Logs payloads instead of sending them; used when no remote sink is set up
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn name(&self) -> &str {
        "console"
    }

    fn deliver(&self, payload: &SyncPayload) -> anyhow::Result<()> {
        info!(
            session_id = %payload.session_id(),
            "No remote sink configured, payload logged only"
        );
        tracing::debug!("Sync payload: {}", serde_json::to_string(payload)?);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(2000),
        }
    }
}

impl RetryPolicy {
    /// Wait after a failed attempt (1-based): base × attempt
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SyncOutcome {
    Delivered { sink: String, attempts: u32 },
    Failed { sink: String, attempts: u32, error: String },
    Skipped,
}

impl SyncOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SyncOutcome::Delivered { .. })
    }
}

/// Deliver with bounded retries, sleeping between attempts
pub fn deliver_with_retry(
    sink: &dyn ReportSink,
    payload: &SyncPayload,
    policy: &RetryPolicy,
) -> SyncOutcome {
    let max_attempts = policy.max_attempts.max(1);
    let mut last_error = String::new();

    for attempt in 1..=max_attempts {
        match sink.deliver(payload) {
            Ok(()) => {
                info!(
                    sink = sink.name(),
                    session_id = %payload.session_id(),
                    attempt,
                    "Sync payload delivered"
                );
                return SyncOutcome::Delivered {
                    sink: sink.name().to_string(),
                    attempts: attempt,
                };
            }
            Err(e) => {
                last_error = format!("{:#}", e);
                warn!(
                    "Sync to {} failed (attempt {}/{}): {}",
                    sink.name(),
                    attempt,
                    max_attempts,
                    last_error
                );
                if attempt < max_attempts {
                    std::thread::sleep(policy.delay_after(attempt));
                }
            }
        }
    }

    let err = FortuneError::Sync {
        attempts: max_attempts,
        message: last_error,
    };
    error!(sink = sink.name(), session_id = %payload.session_id(), "{}", err);
    SyncOutcome::Failed {
        sink: sink.name().to_string(),
        attempts: max_attempts,
        error: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::ConcernCategory;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct FlakySink {
        failures_before_success: u32,
        calls: AtomicU32,
    }

    impl ReportSink for FlakySink {
        fn name(&self) -> &str {
            "flaky"
        }

        fn deliver(&self, _payload: &SyncPayload) -> anyhow::Result<()> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if call <= self.failures_before_success {
                anyhow::bail!("connection refused (call {})", call);
            }
            Ok(())
        }
    }

    fn payload() -> SyncPayload {
        SyncPayload::Session(SessionPayload {
            session_id: "abc".into(),
            created_at: Utc::now(),
            status: "free_viewed".into(),
            birth_year: Some(1960),
            birth_month: Some(1),
            birth_day: Some(2),
            birth_hour: Some(3),
            gender: Some("male".into()),
            is_lunar: false,
            fortune_score: 60,
            four_pillars: String::new(),
            categories_summary: String::new(),
            result_json: "{}".into(),
        })
    }

    const NO_WAIT: RetryPolicy = RetryPolicy {
        max_attempts: 3,
        base_delay: Duration::ZERO,
    };

    #[test]
    fn test_delay_grows_linearly() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_after(1), Duration::from_millis(2000));
        assert_eq!(policy.delay_after(2), Duration::from_millis(4000));
    }

    #[test]
    fn test_succeeds_after_retries() {
        let sink = FlakySink {
            failures_before_success: 2,
            calls: AtomicU32::new(0),
        };
        let outcome = deliver_with_retry(&sink, &payload(), &NO_WAIT);
        assert_eq!(
            outcome,
            SyncOutcome::Delivered {
                sink: "flaky".into(),
                attempts: 3
            }
        );
    }

    #[test]
    fn test_gives_up_after_max_attempts() {
        let sink = FlakySink {
            failures_before_success: 10,
            calls: AtomicU32::new(0),
        };
        let outcome = deliver_with_retry(&sink, &payload(), &NO_WAIT);
        match outcome {
            SyncOutcome::Failed { attempts, error, .. } => {
                assert_eq!(attempts, 3);
                assert_eq!(
                    error,
                    "report sync failed after 3 attempts: connection refused (call 3)"
                );
            }
            other => panic!("expected failure, got {:?}", other),
        }
        assert_eq!(sink.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_console_sink_always_delivers() {
        let outcome = deliver_with_retry(&ConsoleSink, &payload(), &NO_WAIT);
        assert!(outcome.is_delivered());
    }

    #[test]
    fn test_payload_uses_sheet_column_names() {
        let json = serde_json::to_value(payload()).unwrap();
        assert_eq!(json["type"], "session");
        assert_eq!(json["status"], "free_viewed");
        assert_eq!(json["birth_year"], 1960);
        assert_eq!(json["session_id"], "abc");
    }

    #[test]
    fn test_inquiry_payload_columns() {
        let inquiry = Inquiry {
            session_id: "abc".into(),
            email: " kim@example.com".into(),
            categories: vec![ConcernCategory::Children, ConcernCategory::Finance],
            question: "Can I sell the apartment this year? ".into(),
        };
        let submitted_at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let payload = SyncPayload::Inquiry(InquiryPayload::build(&inquiry, submitted_at));
        assert_eq!(payload.session_id(), "abc");

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "inquiry");
        assert_eq!(json["email"], "kim@example.com");
        assert_eq!(json["concern_categories"], "children, finance");
        assert_eq!(json["question_text"], "Can I sell the apartment this year?");
        assert_eq!(json["submitted_at"], "2026-03-01T12:00:00Z");

        let outcome = deliver_with_retry(&ConsoleSink, &payload, &NO_WAIT);
        assert!(outcome.is_delivered());
    }
}
