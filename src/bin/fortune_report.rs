//! Generate a fortune report from a request file
//!
//! Usage: fortune_report <request.json> [--format summary|detail|markdown]
//!
//! The file holds one request `{ "birthInput": {...}, "chart": {...} }` or an
//! array of them. Arrays are processed in parallel and printed in input order
//! as a JSON array (or Markdown documents); a failed request prints as its
//! `{ "source", "message" }` failure without stopping the others.

use anyhow::{bail, Context};
use fortune_scorer_rust::{
    FortunePipeline, FortuneReport, FortuneRequest, JsonFormatter, MarkdownFormatter,
    RequestContext, StageFailure, PAGE_BREAK,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Summary,
    Detail,
    Markdown,
}

impl OutputFormat {
    fn parse(value: &str) -> anyhow::Result<Self> {
        match value {
            "summary" => Ok(OutputFormat::Summary),
            "detail" => Ok(OutputFormat::Detail),
            "markdown" => Ok(OutputFormat::Markdown),
            other => bail!("unknown format '{}' (expected summary, detail or markdown)", other),
        }
    }
}

fn parse_args() -> anyhow::Result<(String, OutputFormat)> {
    let mut path = None;
    let mut format = OutputFormat::Summary;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" => {
                let value = args.next().context("--format needs a value")?;
                format = OutputFormat::parse(&value)?;
            }
            _ if path.is_none() => path = Some(arg),
            other => bail!("unexpected argument '{}'", other),
        }
    }

    let path = path.context("usage: fortune_report <request.json> [--format summary|detail|markdown]")?;
    Ok((path, format))
}

fn render(report: &FortuneReport, format: OutputFormat) -> anyhow::Result<String> {
    let detail = &report.interpretation.detail;
    Ok(match format {
        OutputFormat::Summary => JsonFormatter::format_summary(&report.interpretation.summary)?,
        OutputFormat::Detail => JsonFormatter::format(detail)?,
        OutputFormat::Markdown => MarkdownFormatter::format(detail),
    })
}

fn render_failure_markdown(index: usize, failure: &StageFailure) -> String {
    format!(
        "# Request {} failed\n\n- Stage: {}\n- Reason: {}\n",
        index + 1,
        failure.stage,
        failure.message
    )
}

/// Every batch result in input order; failures keep their own entry
fn render_batch(
    results: &[Result<FortuneReport, StageFailure>],
    format: OutputFormat,
) -> anyhow::Result<String> {
    if format == OutputFormat::Markdown {
        let documents = results
            .iter()
            .enumerate()
            .map(|(i, result)| match result {
                Ok(report) => render(report, format),
                Err(failure) => Ok(render_failure_markdown(i, failure)),
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        return Ok(documents.join(PAGE_BREAK));
    }

    let entries: Vec<serde_json::Value> = results
        .iter()
        .map(|result| match result {
            Ok(report) if format == OutputFormat::Detail => {
                serde_json::to_value(&report.interpretation.detail)
            }
            Ok(report) => serde_json::to_value(&report.interpretation.summary),
            Err(failure) => serde_json::to_value(failure),
        })
        .collect::<Result<_, _>>()?;
    Ok(serde_json::to_string_pretty(&entries)?)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fortune_scorer_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let (path, format) = parse_args()?;
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("reading request file {}", path))?;
    let value: serde_json::Value =
        serde_json::from_str(&contents).with_context(|| format!("parsing {}", path))?;

    let pipeline = FortunePipeline::default();

    if value.is_array() {
        let requests: Vec<FortuneRequest> =
            serde_json::from_value(value).context("reading request array")?;
        let results = pipeline.run_batch(&requests);
        println!("{}", render_batch(&results, format)?);
    } else {
        let request: FortuneRequest = serde_json::from_value(value).context("reading request")?;
        let report = pipeline.run_request(&RequestContext::new(), &request)?;
        println!("{}", render(&report, format)?);
    }

    Ok(())
}
