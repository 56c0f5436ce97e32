//! Request orchestration
//!
//! One request runs validation → chart calculation → normalization →
//! interaction analysis → interpretation → report sync as a direct call chain.
//! A failing stage becomes a `StageFailure`, logged once here; other requests
//! are unaffected. Follow-up inquiries are validated here and delivered through
//! the same sink.

use anyhow::Context;
use chrono::{DateTime, Utc};
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

use crate::analysis::analyze_interactions;
use crate::chart::{normalize, BirthInput, RawChart};
use crate::error::{FortuneError, Stage, StageFailure};
use crate::inquiry::Inquiry;
use crate::interpretation::{Interpretation, InterpretationGenerator};
use crate::sync::{
    deliver_with_retry, ConsoleSink, InquiryPayload, ReportSink, RetryPolicy, SessionPayload,
    SyncOutcome, SyncPayload,
};
use crate::validation::{validate_birth_input, validate_inquiry};

/// Per-request identity and clock, passed explicitly through every stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub request_id: String,
    pub generated_at: DateTime<Utc>,
}

impl RequestContext {
    /// Fresh context with a random 16-hex-digit id and the current time
    pub fn new() -> Self {
        let id: u64 = rand::thread_rng().gen();
        Self::with_id(format!("{:016x}", id), Utc::now())
    }

    pub fn with_id(request_id: impl Into<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            request_id: request_id.into(),
            generated_at,
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Boundary to the calendar → stems/branches library
pub trait ChartCalculator: Send + Sync {
    fn calculate(&self, input: &BirthInput) -> anyhow::Result<RawChart>;
}

/// Calculator that returns a chart computed elsewhere
#[derive(Debug, Clone)]
pub struct PrecomputedChart(pub RawChart);

impl ChartCalculator for PrecomputedChart {
    fn calculate(&self, _input: &BirthInput) -> anyhow::Result<RawChart> {
        Ok(self.0.clone())
    }
}

/// Birth input together with the chart the calculator produced for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneRequest {
    pub birth_input: BirthInput,
    pub chart: RawChart,
}

/// Finished request: the interpretation plus what happened to the sync
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneReport {
    pub request_id: String,
    pub interpretation: Interpretation,
    pub sync: SyncOutcome,
}

pub struct FortunePipeline {
    generator: InterpretationGenerator<'static>,
    sink: Option<Arc<dyn ReportSink>>,
    retry_policy: RetryPolicy,
}

impl Default for FortunePipeline {
    fn default() -> Self {
        Self::new(Some(Arc::new(ConsoleSink)), RetryPolicy::default())
    }
}

impl FortunePipeline {
    pub fn new(sink: Option<Arc<dyn ReportSink>>, retry_policy: RetryPolicy) -> Self {
        Self {
            generator: InterpretationGenerator::default(),
            sink,
            retry_policy,
        }
    }

    /// Pipeline that never syncs
    pub fn without_sync() -> Self {
        Self::new(None, RetryPolicy::default())
    }

    /// Run every stage for one birth input
    pub fn run<C: ChartCalculator + ?Sized>(
        &self,
        ctx: &RequestContext,
        calculator: &C,
        input: &BirthInput,
    ) -> Result<FortuneReport, StageFailure> {
        let raw = self.calculate(ctx, calculator, input)?;
        self.interpret(ctx, &raw, input)
    }

    pub fn run_request(
        &self,
        ctx: &RequestContext,
        request: &FortuneRequest,
    ) -> Result<FortuneReport, StageFailure> {
        validate_birth_input(&request.birth_input)
            .map_err(|e| fail(ctx, StageFailure::from_error(Stage::Validation, &e)))?;
        self.interpret(ctx, &request.chart, &request.birth_input)
    }

    /// Validate the input and invoke the calculator
    pub fn calculate<C: ChartCalculator + ?Sized>(
        &self,
        ctx: &RequestContext,
        calculator: &C,
        input: &BirthInput,
    ) -> Result<RawChart, StageFailure> {
        validate_birth_input(input)
            .map_err(|e| fail(ctx, StageFailure::from_error(Stage::Validation, &e)))?;

        calculator
            .calculate(input)
            .with_context(|| format!("calculating chart for {}-{:02}-{:02}", input.year, input.month, input.day))
            .map_err(|e| {
                let err = FortuneError::Calculator(format!("{:#}", e));
                fail(ctx, StageFailure::from_error(Stage::Calculator, &err))
            })
    }

    /// Stages after the calculator: normalize, analyze, interpret, sync.
    /// `input` is assumed to be validated already.
    pub fn interpret(
        &self,
        ctx: &RequestContext,
        raw: &RawChart,
        input: &BirthInput,
    ) -> Result<FortuneReport, StageFailure> {
        let interpretation = self.interpret_unsynced(ctx, raw, input)?;
        Ok(self.finish(ctx, interpretation))
    }

    fn interpret_unsynced(
        &self,
        ctx: &RequestContext,
        raw: &RawChart,
        input: &BirthInput,
    ) -> Result<Interpretation, StageFailure> {
        let start = Instant::now();

        let chart = normalize(raw);
        debug!(request_id = %ctx.request_id, "Chart normalized: {}", chart.pillars.line());

        let interactions = analyze_interactions(&chart)
            .map_err(|e| fail(ctx, StageFailure::from_error(Stage::Interactions, &e)))?;

        let interpretation =
            self.generator
                .generate(&chart, &interactions, Some(input), ctx.generated_at);

        info!(
            request_id = %ctx.request_id,
            "Interpretation ready in {:.2} ms (score {})",
            start.elapsed().as_secs_f64() * 1000.0,
            interpretation.fortune.fortune_score
        );
        Ok(interpretation)
    }

    fn finish(&self, ctx: &RequestContext, interpretation: Interpretation) -> FortuneReport {
        let sync = self.sync(ctx, &interpretation);
        FortuneReport {
            request_id: ctx.request_id.clone(),
            interpretation,
            sync,
        }
    }

    /// Independent requests in parallel; results keep input order.
    ///
    /// Only the pure stages run on the Rayon pool. Sync runs afterwards on the
    /// calling thread, one report at a time in input order.
    pub fn run_batch(&self, requests: &[FortuneRequest]) -> Vec<Result<FortuneReport, StageFailure>> {
        let start = Instant::now();
        let interpreted: Vec<_> = requests
            .par_iter()
            .map(|request| -> Result<_, StageFailure> {
                let ctx = RequestContext::new();
                validate_birth_input(&request.birth_input)
                    .map_err(|e| fail(&ctx, StageFailure::from_error(Stage::Validation, &e)))?;
                let interpretation =
                    self.interpret_unsynced(&ctx, &request.chart, &request.birth_input)?;
                Ok((ctx, interpretation))
            })
            .collect();

        let results: Vec<_> = interpreted
            .into_iter()
            .map(|result| result.map(|(ctx, interpretation)| self.finish(&ctx, interpretation)))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(
            "Batch of {} requests finished in {:.2} ms ({} failed)",
            requests.len(),
            start.elapsed().as_secs_f64() * 1000.0,
            failed
        );
        results
    }

    /// Validate a follow-up inquiry and deliver it to the sink.
    ///
    /// The inquiry's `session_id` names the report it follows up on; `ctx`
    /// supplies the submission time and the id used in logs.
    pub fn submit_inquiry(
        &self,
        ctx: &RequestContext,
        inquiry: &Inquiry,
    ) -> Result<SyncOutcome, StageFailure> {
        validate_inquiry(inquiry)
            .map_err(|e| fail(ctx, StageFailure::from_error(Stage::Validation, &e)))?;

        let Some(sink) = self.sink.as_deref() else {
            return Ok(SyncOutcome::Skipped);
        };
        let payload = SyncPayload::Inquiry(InquiryPayload::build(inquiry, ctx.generated_at));
        info!(
            request_id = %ctx.request_id,
            session_id = %inquiry.session_id,
            "Inquiry accepted ({} categories)",
            inquiry.categories.len()
        );
        Ok(deliver_with_retry(sink, &payload, &self.retry_policy))
    }

    fn sync(&self, ctx: &RequestContext, interpretation: &Interpretation) -> SyncOutcome {
        let Some(sink) = self.sink.as_deref() else {
            return SyncOutcome::Skipped;
        };

        match SessionPayload::build(
            &ctx.request_id,
            ctx.generated_at,
            &interpretation.summary,
            &interpretation.detail,
        ) {
            Ok(payload) => {
                deliver_with_retry(sink, &SyncPayload::Session(payload), &self.retry_policy)
            }
            Err(e) => {
                let failure = fail(ctx, StageFailure::from_error(Stage::Sync, &e));
                SyncOutcome::Failed {
                    sink: sink.name().to_string(),
                    attempts: 0,
                    error: failure.message,
                }
            }
        }
    }
}

fn fail(ctx: &RequestContext, failure: StageFailure) -> StageFailure {
    error!(
        request_id = %ctx.request_id,
        stage = %failure.stage,
        "{}",
        failure.message
    );
    failure
}
