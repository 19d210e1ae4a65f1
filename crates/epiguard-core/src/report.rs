//! The structured risk report returned by the analytical model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of risk levels, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown risk level: {0:?}")]
pub struct UnknownRiskLevel(pub String);

impl FromStr for RiskLevel {
    type Err = UnknownRiskLevel;

    /// Exact match on the four literals; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UnknownRiskLevel(s.to_string()))
    }
}

/// Outbreak risk report.
///
/// Text fields are the model's own words and are kept verbatim. `probability`
/// is display text such as `"85%"`, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    pub risk_level: RiskLevel,
    pub probability: String,
    pub primary_threat: String,
    pub analysis: String,
    pub action_plan: Vec<String>,
    pub citation: String,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid report JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("actionPlan is empty")]
    EmptyActionPlan,
}

impl RiskReport {
    /// Parse model reply text into a fully populated report.
    ///
    /// Every field is required and `riskLevel` must be one of the four
    /// literals. No defaults are filled in.
    pub fn from_model_text(text: &str) -> Result<Self, ReportError> {
        let report: RiskReport = serde_json::from_str(text)?;
        if report.action_plan.is_empty() {
            return Err(ReportError::EmptyActionPlan);
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIGH_REPORT: &str = r#"{
        "riskLevel": "High",
        "probability": "85%",
        "primaryThreat": "Leptospirosis",
        "analysis": "Standing water after heavy rain. Warm temperatures favour growth.",
        "actionPlan": ["Chlorinate wells", "Distribute boots", "Alert PHCs"],
        "citation": "IDSP Guidelines 2023"
    }"#;

    #[test]
    fn levels_ordered_by_severity() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
        assert_eq!(RiskLevel::ALL.iter().max(), Some(&RiskLevel::Critical));
    }

    #[test]
    fn level_from_str_is_exact() {
        assert_eq!("High".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert!("high".parse::<RiskLevel>().is_err());
        assert!("Severe".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn parses_complete_report_verbatim() {
        let report = RiskReport::from_model_text(HIGH_REPORT).unwrap();
        assert_eq!(report.risk_level, RiskLevel::High);
        assert_eq!(report.probability, "85%");
        assert_eq!(report.primary_threat, "Leptospirosis");
        assert_eq!(report.action_plan.len(), 3);
        assert_eq!(report.action_plan[0], "Chlorinate wells");
        assert_eq!(report.citation, "IDSP Guidelines 2023");
    }

    #[test]
    fn unknown_level_rejected() {
        let text = HIGH_REPORT.replace("\"High\"", "\"Severe\"");
        assert!(matches!(
            RiskReport::from_model_text(&text),
            Err(ReportError::Json(_))
        ));
    }

    #[test]
    fn missing_field_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(HIGH_REPORT).unwrap();
        value.as_object_mut().unwrap().remove("citation");
        let err = RiskReport::from_model_text(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("citation"));
    }

    #[test]
    fn empty_action_plan_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(HIGH_REPORT).unwrap();
        value["actionPlan"] = serde_json::json!([]);
        assert!(matches!(
            RiskReport::from_model_text(&value.to_string()),
            Err(ReportError::EmptyActionPlan)
        ));
    }

    #[test]
    fn extra_fields_ignored() {
        let mut value: serde_json::Value = serde_json::from_str(HIGH_REPORT).unwrap();
        value["confidence"] = serde_json::json!(0.9);
        assert!(RiskReport::from_model_text(&value.to_string()).is_ok());
    }
}
