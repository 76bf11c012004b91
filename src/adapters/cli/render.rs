//! Text and JSON rendering of handler results.

use serde::Serialize;
use std::fmt::Write;

use super::dto::{DrugSummary, ErrorResponse};
use crate::application::{CalculateMmeResult, ConvertDoseResult};
use crate::config::OutputFormat;
use crate::domain::catalog::Drug;
use crate::domain::conversion::ValidationReport;
use crate::domain::foundation::EngineError;
use crate::domain::safety::SafetyLevel;

/// Renders values for one output format.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    show_disclaimer: bool,
}

impl Renderer {
    pub fn new(format: OutputFormat, show_disclaimer: bool) -> Self {
        Self {
            format,
            show_disclaimer,
        }
    }

    pub fn drugs(&self, drugs: &[&Drug]) -> Result<String, serde_json::Error> {
        let summaries: Vec<DrugSummary> = drugs.iter().map(|d| DrugSummary::from(*d)).collect();
        if self.format == OutputFormat::Json {
            return to_json(&summaries);
        }

        let mut out = String::new();
        for drug in &summaries {
            let _ = writeln!(out, "{:<20} {} [{}, {}]", drug.id, drug.label, drug.route, drug.unit);
            let _ = writeln!(out, "{:<20} {}", "", drug.formula);
            if let Some(note) = drug.note {
                let _ = writeln!(out, "{:<20} Note: {}", "", note);
            }
        }
        Ok(out)
    }

    pub fn mme(&self, result: &CalculateMmeResult) -> Result<String, serde_json::Error> {
        if self.format == OutputFormat::Json {
            return to_json(result);
        }

        let mme = &result.mme;
        let mut out = String::new();
        let _ = writeln!(out, "{} {} {}/day", mme.drug.name, mme.dose, mme.drug.unit);
        let _ = writeln!(out, "  MME:      {}", mme.meq);
        let _ = writeln!(out, "  Formula:  {}", mme.formula);
        if let Some(detail) = &mme.methadone {
            let _ = writeln!(out, "  Band:     {} (factor {})", detail.dose_range, detail.band.factor);
            let _ = writeln!(out, "  Warning:  {}", detail.warning);
        }
        let _ = writeln!(out, "  Safety:   {}", describe_level(&result.safety_level));
        Ok(out)
    }

    pub fn conversion(&self, result: &ConvertDoseResult) -> Result<String, serde_json::Error> {
        if self.format == OutputFormat::Json {
            return to_json(result);
        }

        let c = &result.conversion;
        let unit = c.to_drug.unit;
        let mut out = String::new();
        let _ = writeln!(out, "Conversion: {} → {}", c.from_drug.name, c.to_drug.name);
        let _ = writeln!(out, "  Current dose:     {} {}/day", c.current_dose, c.from_drug.unit);
        let _ = writeln!(out, "  MME:              {}", c.meq);
        let _ = writeln!(out, "  Calculated dose:  {} {}/day", c.calculated_dose, unit);
        let _ = writeln!(out, "  25% reduction:    {} {}/day", c.recommended_dose_25, unit);
        let _ = writeln!(out, "  50% reduction:    {} {}/day", c.recommended_dose_50, unit);
        let _ = writeln!(
            out,
            "  Breakthrough:     {} - {} {}",
            c.breakthrough_dose_range.min, c.breakthrough_dose_range.max, unit
        );
        let _ = writeln!(out, "  Safety:           {}", describe_level(&c.safety_level));

        let advisory = &result.advisory;
        let _ = writeln!(out);
        let _ = writeln!(out, "Safety warnings [{:?}]:", advisory.severity);
        for warning in &advisory.warnings {
            let _ = writeln!(out, "  - {}", warning);
        }
        if let Some(alert) = advisory.high_dose_alert {
            let _ = writeln!(out);
            let _ = writeln!(out, "High-dose alert: {}", alert);
        }
        if self.show_disclaimer {
            let _ = writeln!(out);
            let _ = writeln!(out, "Medical disclaimer: {}", advisory.disclaimer);
        }
        Ok(out)
    }

    pub fn safety_level(&self, level: &SafetyLevel) -> Result<String, serde_json::Error> {
        if self.format == OutputFormat::Json {
            return to_json(level);
        }
        Ok(format!("{}\n", describe_level(level)))
    }

    pub fn invalid(&self, report: &ValidationReport) -> Result<String, serde_json::Error> {
        if self.format == OutputFormat::Json {
            return to_json(report);
        }

        let mut out = String::from("Please correct the following errors:\n");
        for message in report.messages() {
            let _ = writeln!(out, "  - {}", message);
        }
        Ok(out)
    }

    pub fn error(&self, err: &EngineError) -> Result<String, serde_json::Error> {
        let response = ErrorResponse::from(err);
        if self.format == OutputFormat::Json {
            return to_json(&response);
        }

        let mut out = format!("Calculation error: {}\n", response.error);
        if let Some(meq) = response.meq {
            let _ = writeln!(out, "  MME: {}", meq);
        }
        Ok(out)
    }
}

fn describe_level(level: &SafetyLevel) -> String {
    format!(
        "{} - {} ({} MME, gauge {:.0}%)",
        level.label,
        level.description,
        level.value,
        level.gauge_percent()
    )
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value).map(|mut s| {
        s.push('\n');
        s
    })
}
