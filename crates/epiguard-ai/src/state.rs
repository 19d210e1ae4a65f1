//! What a presentation layer shows between and after assessments.

use epiguard_core::RiskReport;

use crate::error::AssessmentError;

/// Last good report plus the current error banner and loading flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentView {
    pub report: Option<RiskReport>,
    pub error: Option<&'static str>,
    pub loading: bool,
}

impl AssessmentView {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record the outcome. A failure keeps whatever report was already shown.
    pub fn finish(&mut self, result: Result<RiskReport, AssessmentError>) {
        self.loading = false;
        match result {
            Ok(report) => {
                self.report = Some(report);
                self.error = None;
            }
            Err(e) => self.error = Some(e.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use epiguard_core::RiskLevel;

    use super::*;
    use crate::error::GENERIC_FAILURE_MESSAGE;

    fn report(level: RiskLevel) -> RiskReport {
        RiskReport {
            risk_level: level,
            probability: "40%".into(),
            primary_threat: "Typhoid".into(),
            analysis: "Moderate rain.".into(),
            action_plan: vec!["Test water sources".into()],
            citation: "WHO Guidelines for Drinking-water Quality".into(),
        }
    }

    #[test]
    fn begin_clears_error_and_sets_loading() {
        let mut view = AssessmentView {
            error: Some(GENERIC_FAILURE_MESSAGE),
            ..Default::default()
        };
        view.begin();
        assert!(view.loading);
        assert!(view.error.is_none());
    }

    #[test]
    fn success_replaces_report() {
        let mut view = AssessmentView::default();
        view.begin();
        view.finish(Ok(report(RiskLevel::Medium)));
        view.begin();
        view.finish(Ok(report(RiskLevel::Critical)));
        assert!(!view.loading);
        assert_eq!(view.report.unwrap().risk_level, RiskLevel::Critical);
    }

    #[test]
    fn failure_keeps_previous_report() {
        let mut view = AssessmentView::default();
        view.begin();
        view.finish(Ok(report(RiskLevel::High)));

        view.begin();
        view.finish(Err(AssessmentError::EmptyResponse));
        assert!(!view.loading);
        assert_eq!(view.error, Some(GENERIC_FAILURE_MESSAGE));
        assert_eq!(view.report.as_ref().unwrap().risk_level, RiskLevel::High);
    }

    #[test]
    fn every_failure_kind_shows_same_message() {
        for err in [
            AssessmentError::Configuration("no key".into()),
            AssessmentError::EmptyResponse,
            AssessmentError::MalformedResponse("bad".into()),
        ] {
            let mut view = AssessmentView::default();
            view.finish(Err(err));
            assert_eq!(view.error, Some(GENERIC_FAILURE_MESSAGE));
            assert!(view.report.is_none());
        }
    }
}
