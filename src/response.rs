//! # Response Module
//!
//! Builds the final report: metric line, risks, recommendations, activity
//! addendum and the call to action, always in that order.

use reqwest::Url;

use crate::errors::MeasurementError;
use crate::localization::{t, t_args};
use crate::measurement_types::Questionnaire;
use crate::metrics::{evaluate, Metric};
use crate::risk::{assess, Assessment};

/// Outgoing result message plus the consultation link button target
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub text: String,
    pub consultation_url: Url,
}

/// Render a rounded value the way it was computed, keeping one decimal for whole numbers
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

pub fn metric_line(metric: &Metric) -> String {
    let value = format_value(metric.value());
    match metric {
        Metric::Bmi(_) => t_args("result-bmi", &[("value", &value)]),
        Metric::BodyFat { .. } => t_args("result-body-fat", &[("value", &value)]),
    }
}

pub fn compose_report(metric: &Metric, assessment: &Assessment, consultation_url: &Url) -> Report {
    let mut recommendations = vec![t(assessment.diet), t(assessment.activity)];
    if let Some(caution) = assessment.caution {
        recommendations.push(t(caution));
    }

    let text = [
        metric_line(metric),
        t_args("result-risks", &[("risk", &t(assessment.risk))]),
        format!("{}\n{}", t("result-recommendations"), recommendations.join("\n\n")),
        t(assessment.addendum),
        t("call-to-action"),
    ]
    .join("\n\n");

    Report {
        text,
        consultation_url: consultation_url.clone(),
    }
}

/// Compute, assess and compose in one go
pub fn report_for(
    questionnaire: &Questionnaire,
    consultation_url: &Url,
) -> Result<Report, MeasurementError> {
    let metric = evaluate(questionnaire)?;
    let assessment = assess(&metric, questionnaire.activity());
    Ok(compose_report(&metric, &assessment, consultation_url))
}
