use crate::infra::in_memory_service;
use chrono::Local;
use clap::Args;
use entrepreneur_profile::assessment::intake::flatten_answers;
use entrepreneur_profile::assessment::{
    AssessmentReport, ContentCatalog, ContentSection, NativeSubmission, Participant,
    ReportSelections,
};
use entrepreneur_profile::error::AppError;
use entrepreneur_profile::scoring::{Category, ScoringConfig, ScoringEngine, ScoringResult};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON object of question reference to answer value
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Scoring configuration JSON. Defaults to the shipped battery.
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Email used for the synthetic native-form participant
    #[arg(long, default_value = "demo.founder@example.com")]
    pub(crate) email: String,
    /// Base URL printed in front of report links
    #[arg(long, default_value = "http://localhost:3000")]
    pub(crate) base_url: String,
    /// Skip the webhook delivery portion of the demo
    #[arg(long)]
    pub(crate) skip_webhook: bool,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            email: "demo.founder@example.com".to_string(),
            base_url: "http://localhost:3000".to_string(),
            skip_webhook: false,
        }
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw: BTreeMap<String, Value> = read_json(&args.answers)?;
    let answers = flatten_answers(&raw);
    let config = match args.config.as_deref() {
        Some(path) => read_json(path)?,
        None => ScoringConfig::reference(),
    };

    let result = ScoringEngine::new(config).score(&answers);
    let report = AssessmentReport::assemble(
        &Participant {
            name: "CLI participant".to_string(),
            email: String::new(),
        },
        &result,
        &ReportSelections::default(),
        &ContentCatalog::reference(),
        Local::now().date_naive(),
    );

    println!("Scored {} answers", answers.len());
    render_result(&result);
    render_report(&report);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        email,
        base_url,
        skip_webhook,
    } = args;

    let service = in_memory_service(Duration::from_secs(300), &base_url);

    println!("Entrepreneur profile demo");
    let receipt = service.submit(&synthetic_submission(&email))?;
    println!("\nNative form submission stored for {}", receipt.record.email);
    println!("Report link: {}", receipt.report_url);
    render_report(&receipt.record.report);

    if !skip_webhook {
        let record = service.ingest_webhook(&synthetic_webhook())?;
        println!("\nWebhook delivery stored for {}", record.email);
        render_report(&record.report);
    }

    let stats = service.report_stats()?;
    println!("\nStored reports: {}", stats.total);
    for (archetype, count) in &stats.by_archetype {
        println!("  - {archetype}: {count}");
    }

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn render_result(result: &ScoringResult) {
    println!(
        "Risk: {} ({}) | Reward: {} ({})",
        result.risk_score, result.risk_level, result.reward_score, result.reward_level
    );
    println!("Archetype: {}", result.category_type);
    let votes: Vec<String> = Category::ORDER
        .iter()
        .map(|category| {
            let count = result.vote_breakdown.get(category).copied().unwrap_or(0);
            format!("{category} {count}")
        })
        .collect();
    println!("Votes: {}", votes.join(" | "));
}

fn render_report(report: &AssessmentReport) {
    println!(
        "{} <{}> on {}",
        report.name,
        report.email,
        report.report_date.format("%Y-%m-%d")
    );
    render_section("Personality", &report.personality);
    println!("  Risk score {} ({})", report.risk_score, report.risk_level);
    render_section("Risk", &report.risk);
    println!(
        "  Reward score {} ({})",
        report.reward_score, report.reward_level
    );
    render_section("Reward", &report.reward);
    render_section("Driver", &report.driver);
    render_section("Primary area", &report.primary_area);
    render_section("Secondary area", &report.secondary_area);
    render_section("Strategy", &report.strategy);
}

fn render_section(label: &str, section: &ContentSection) {
    println!("  {label}: {}", section.title);
    for item in &section.items {
        println!("    - {item}");
    }
}

fn synthetic_submission(email: &str) -> NativeSubmission {
    let answers: BTreeMap<String, Value> = [
        ("risk_q1", json!("B")),
        ("risk_q2", json!("A")),
        ("risk_q3", json!("B")),
        ("risk_q6", json!(4)),
        ("risk_q7", json!(2)),
        ("risk_q8", json!(5)),
        ("reward_q1", json!("B")),
        ("reward_q9", json!(5)),
        ("reward_q10", json!(4)),
        ("type_q1", json!("D")),
        ("type_q2", json!("C")),
        ("type_q3", json!("B")),
        ("type_q4", json!("A")),
        ("type_q5", json!("B")),
        ("type_q6", json!("B")),
        ("tiebreaker", json!("B")),
        ("rank_q", json!(["Impact", "Money", "Legacy"])),
        ("select_driver", json!("Solve")),
        ("select_aoi1", json!("Tech")),
        ("select_aoi2", json!("Education")),
        ("select_strategy", json!("Creator")),
    ]
    .into_iter()
    .map(|(reference, value)| (reference.to_string(), value))
    .collect();

    NativeSubmission {
        first_name: "Demo".to_string(),
        last_name: "Founder".to_string(),
        email: email.to_string(),
        answers,
    }
}

fn synthetic_webhook() -> Value {
    json!({
        "event_type": "form_response",
        "form_response": {
            "hidden": { "email": "webhook.founder@example.com" },
            "variables": [
                { "key": "money", "type": "number", "number": 1 },
                { "key": "retail", "type": "number", "number": 1 },
                { "key": "franchisee", "type": "number", "number": 1 }
            ],
            "answers": [
                { "type": "choice", "choice": { "label": "A" }, "field": { "ref": "risk_q1" } },
                { "type": "number", "number": 2, "field": { "ref": "risk_q8" } },
                { "type": "boolean", "boolean": false, "field": { "ref": "reward_q2" } },
                { "type": "choice", "choice": { "label": "B" }, "field": { "ref": "type_q1" } },
                { "type": "choice", "choice": { "label": "D" }, "field": { "ref": "type_q2" } },
                { "type": "choice", "choice": { "label": "C" }, "field": { "ref": "type_q3" } }
            ]
        }
    })
}
