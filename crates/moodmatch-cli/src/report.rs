use serde::Serialize;
use tera::{Context, Tera};

use moodmatch_core::models::recommendation::{RecommendationResult, ScoredCandidate};
use moodmatch_ranking::guidance::DISCLAIMER;

const TEMPLATE_NAME: &str = "report.txt";
const TEMPLATE: &str = include_str!("templates/report.txt.tera");

/// Flattened, label-resolved view of a result for the text template.
#[derive(Debug, Serialize)]
struct ReportView<'a> {
    title: &'static str,
    phq9: u32,
    phq9_band: &'static str,
    gad7: u32,
    gad7_band: &'static str,
    overall_band: &'static str,
    safety_flags: &'a [String],
    must_discuss_first: &'a [String],
    general_cautions: &'a [String],
    primary: &'a [ScoredCandidate],
    adjunct: &'a [ScoredCandidate],
    next_steps: &'a [String],
    disclaimer: Option<&'static str>,
}

impl<'a> ReportView<'a> {
    fn new(result: &'a RecommendationResult, show_disclaimer: bool) -> Self {
        Self {
            title: result.pattern.title(),
            phq9: result.totals.phq9,
            phq9_band: result.bands.phq9.label(),
            gad7: result.totals.gad7,
            gad7_band: result.bands.gad7.label(),
            overall_band: result.bands.overall.label(),
            safety_flags: &result.safety_flags,
            must_discuss_first: &result.must_discuss_first,
            general_cautions: &result.general_cautions,
            primary: &result.primary_tier,
            adjunct: &result.adjunct_tier,
            next_steps: &result.next_steps,
            disclaimer: show_disclaimer.then_some(DISCLAIMER),
        }
    }
}

/// Render a result as a plain-text report.
pub fn render_text(result: &RecommendationResult, show_disclaimer: bool) -> eyre::Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;

    let context = Context::from_serialize(ReportView::new(result, show_disclaimer))?;
    let rendered = tera.render(TEMPLATE_NAME, &context)?;
    Ok(rendered)
}

pub fn render_json(result: &RecommendationResult) -> eyre::Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
