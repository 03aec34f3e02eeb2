//! Downloadable estimate documents
//!
//! Pairs an `EstimateRequest` with its `EstimateResult` and renders them
//! as a plain-text document or as JSON. No computation happens here.

use crate::core::{Error, EstimateRequest, EstimateResult, Result};
use crate::estimator::{LABOR_SHARE, MATERIAL_SHARE, OVERHEAD_SHARE};
use crate::format::{format_amount, format_area, format_compact, CurrencyFormat};
use crate::i18n::I18n;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const RULE_WIDTH: usize = 46;
const LABEL_WIDTH: usize = 24;

/// Output representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Labels and number formatting used for the text form
pub struct TextStyle<'a> {
    pub i18n: &'a I18n,
    pub currency: &'a CurrencyFormat,
    pub area_unit: &'a str,
}

impl TextStyle<'_> {
    /// Full amount, or the translated "unable to calculate" text
    pub fn amount(&self, amount: f64) -> String {
        format_amount(amount, self.currency).unwrap_or_else(|| self.unavailable(amount))
    }

    /// Lakh/crore (or K/M) amount, with the same fallback as `amount`
    pub fn compact(&self, amount: f64) -> String {
        format_compact(amount, self.currency).unwrap_or_else(|| self.unavailable(amount))
    }

    fn unavailable(&self, amount: f64) -> String {
        log::warn!("Cannot display amount {}", amount);
        self.i18n.get("error.unable_to_calculate")
    }
}

/// An estimate as handed to the customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateReport {
    pub generated_at: DateTime<Utc>,
    pub request: EstimateRequest,
    pub result: EstimateResult,
}

impl EstimateReport {
    pub fn new(request: EstimateRequest, result: EstimateResult) -> Self {
        Self {
            generated_at: Utc::now(),
            request,
            result,
        }
    }

    pub fn with_timestamp(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    pub fn to_text(&self, style: &TextStyle<'_>) -> String {
        let t = style.i18n;
        let money = |amount: f64| style.amount(amount);
        let req = &self.request;
        let res = &self.result;
        let rule = "-".repeat(RULE_WIDTH);
        let banner = "=".repeat(RULE_WIDTH);

        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", banner);
        let _ = writeln!(out, "  {}", t.get("report.title"));
        let _ = writeln!(out, "{}", banner);
        let _ = writeln!(
            out,
            "{}: {}",
            t.get("report.generated"),
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        );
        out.push('\n');

        section(&mut out, &t.get("report.project"), &rule);
        line(&mut out, &t.get("report.project_kind"), &t.kind_label(req.project_kind));
        line(&mut out, &t.get("report.quality_tier"), &t.tier_label(req.quality_tier));
        line(&mut out, &t.get("report.area_per_floor"), &format_area(req.area, style.area_unit));
        line(&mut out, &t.get("report.floors"), &req.floors.to_string());
        line(&mut out, &t.get("report.total_area"), &format_area(res.total_area, style.area_unit));
        line(&mut out, &t.get("report.price_per_area"), &money(res.price_per_area));
        out.push('\n');

        section(&mut out, &t.get("report.cost_breakdown"), &rule);
        line(&mut out, &t.get("report.base_cost"), &money(res.base_cost));
        let parts = [
            ("report.material_cost", MATERIAL_SHARE, res.material_cost),
            ("report.labor_cost", LABOR_SHARE, res.labor_cost),
            ("report.overhead_cost", OVERHEAD_SHARE, res.overhead_cost),
        ];
        for (key, share, amount) in parts {
            let label = format!("  {} ({:.0}%)", t.get(key), share * 100.0);
            line(&mut out, &label, &money(amount));
        }
        out.push('\n');

        section(&mut out, &t.get("report.additional_features"), &rule);
        if res.feature_costs.is_empty() {
            let _ = writeln!(out, "  {}", t.get("report.no_features"));
        }
        for item in &res.feature_costs {
            line(&mut out, &t.feature_label(item.feature), &money(item.cost));
        }
        line(&mut out, &t.get("report.additional_cost"), &money(res.additional_cost));
        out.push('\n');

        let _ = writeln!(out, "{}", banner);
        line(&mut out, &t.get("report.total_cost"), &money(res.total_cost));
        line(
            &mut out,
            &t.get("report.timeline"),
            &format!("{} {}", res.timeline_months, t.get("report.months")),
        );
        let _ = writeln!(out, "{}", banner);
        out.push('\n');
        let _ = writeln!(out, "{}", t.get("report.disclaimer"));

        out
    }

    pub fn render(&self, format: ReportFormat, style: &TextStyle<'_>) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_text(style)),
            ReportFormat::Json => self.to_json(),
        }
    }

    pub fn write_to(&self, path: &Path, format: ReportFormat, style: &TextStyle<'_>) -> Result<()> {
        let contents = self.render(format, style)?;
        fs::write(path, contents)?;
        log::info!("Estimate written to {}", path.display());
        Ok(())
    }
}

fn section(out: &mut String, title: &str, rule: &str) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", rule);
}

fn line(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {:<width$}{}", label, value, width = LABEL_WIDTH);
}
