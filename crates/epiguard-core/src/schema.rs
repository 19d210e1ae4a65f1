//! Response-shape schema sent to the model alongside the prompt.
//!
//! Written in the generative-language API's OpenAPI subset: upper-case type
//! names, `enum` on strings, and an explicit `required` list.

use serde_json::{Value, json};

use crate::report::RiskLevel;

/// Every field the model must return.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "riskLevel",
    "probability",
    "primaryThreat",
    "analysis",
    "actionPlan",
    "citation",
];

/// Schema for [`RiskReport`](crate::RiskReport) replies.
pub fn risk_report_schema() -> Value {
    let levels: Vec<&str> = RiskLevel::ALL.iter().map(|l| l.as_str()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "riskLevel": {
                "type": "STRING",
                "enum": levels,
                "description": "The overall risk level based on environmental factors."
            },
            "probability": {
                "type": "STRING",
                "description": "The percentage probability of an outbreak (e.g., '85%')."
            },
            "primaryThreat": {
                "type": "STRING",
                "description": "The most likely disease (Cholera, Typhoid, or Leptospirosis)."
            },
            "analysis": {
                "type": "STRING",
                "description": "A 2-sentence biological explanation of why conditions increase risk."
            },
            "actionPlan": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "3 specific bullet points for local health officials."
            },
            "citation": {
                "type": "STRING",
                "description": "Relevant health guideline citation (WHO/IDSP)."
            }
        },
        "required": REQUIRED_FIELDS,
    })
}
