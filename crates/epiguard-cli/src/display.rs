//! Vertical card display for risk reports and the region catalog.

use std::fmt::{self, Write};

use epiguard_core::{EnvironmentalInput, NE_LOCATIONS, RiskLevel, RiskReport};

const LABEL_WIDTH: usize = 16;

// ── Public API ──

/// Print a report as a card headed by the location it was assessed for.
pub fn print_report_card(input: &EnvironmentalInput, report: &RiskReport) -> fmt::Result {
    print!("{}", render_report_card(input, report)?);
    Ok(())
}

/// Print every state with its districts.
pub fn print_regions() -> fmt::Result {
    print!("{}", render_regions()?);
    Ok(())
}

// ── Rendering ──

fn render(write: impl FnOnce(&mut String) -> fmt::Result) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write(&mut out)?;
    Ok(out)
}

pub fn render_report_card(
    input: &EnvironmentalInput,
    report: &RiskReport,
) -> Result<String, fmt::Error> {
    render(|out| write_report_card(out, input, report))
}

fn write_report_card(
    out: &mut String,
    input: &EnvironmentalInput,
    report: &RiskReport,
) -> fmt::Result {
    writeln!(out, "=== {} ===", input.location)?;
    writeln!(
        out,
        "{:.1}°C  {:.0}% humidity  {:.0} mm rain (24h)",
        input.temperature_c, input.humidity_pct, input.rainfall_mm_24h
    )?;
    writeln!(out)?;

    writeln!(out, "Risk")?;
    writeln!(
        out,
        "  {:<LABEL_WIDTH$} {} {}",
        "Risk Level",
        report.risk_level,
        severity_bar(report.risk_level)
    )?;
    writeln!(out, "  {:<LABEL_WIDTH$} {}", "Probability", report.probability)?;
    writeln!(out, "  {:<LABEL_WIDTH$} {}", "Primary Threat", report.primary_threat)?;
    writeln!(out)?;

    writeln!(out, "Biological Analysis")?;
    writeln!(out, "  {}", report.analysis)?;
    writeln!(out)?;

    writeln!(out, "Action Plan")?;
    for (i, step) in report.action_plan.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, step)?;
    }
    writeln!(out)?;

    writeln!(out, "Reference: {}", report.citation)?;
    Ok(())
}

/// Filled blocks for severity, e.g. `[###-]` for High.
fn severity_bar(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "[#---]",
        RiskLevel::Medium => "[##--]",
        RiskLevel::High => "[###-]",
        RiskLevel::Critical => "[####]",
    }
}

pub fn render_regions() -> Result<String, fmt::Error> {
    let width = NE_LOCATIONS
        .iter()
        .map(|r| r.state.len())
        .max()
        .unwrap_or(0);
    render(|out| {
        for region in NE_LOCATIONS {
            writeln!(out, "{:<width$}  {}", region.state, region.districts.join(", "))?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> RiskReport {
        RiskReport {
            risk_level: RiskLevel::High,
            probability: "85%".into(),
            primary_threat: "Leptospirosis".into(),
            analysis: "Heavy rain has flooded paddy fields.".into(),
            action_plan: vec![
                "Issue boil-water advisory".into(),
                "Distribute doxycycline prophylaxis".into(),
            ],
            citation: "IDSP 2023".into(),
        }
    }

    fn input() -> EnvironmentalInput {
        EnvironmentalInput {
            location: "Guwahati, Assam".into(),
            temperature_c: 32.0,
            humidity_pct: 90.0,
            rainfall_mm_24h: 120.0,
        }
    }

    #[test]
    fn card_lists_every_field() {
        let card = render_report_card(&input(), &report()).unwrap();
        assert!(card.starts_with("=== Guwahati, Assam ===\n"));
        assert!(card.contains("32.0°C  90% humidity  120 mm rain (24h)"));
        assert!(card.contains("High [###-]"));
        assert!(card.contains("85%"));
        assert!(card.contains("Leptospirosis"));
        assert!(card.contains("  Heavy rain has flooded paddy fields.\n"));
        assert!(card.contains("  1. Issue boil-water advisory\n"));
        assert!(card.contains("  2. Distribute doxycycline prophylaxis\n"));
        assert!(card.ends_with("Reference: IDSP 2023\n"));
    }

    #[test]
    fn severity_bar_grows_with_level() {
        let filled: Vec<usize> = RiskLevel::ALL
            .iter()
            .map(|&l| severity_bar(l).matches('#').count())
            .collect();
        assert_eq!(filled, [1, 2, 3, 4]);
    }

    #[test]
    fn regions_one_line_per_state() {
        let text = render_regions().unwrap();
        assert_eq!(text.lines().count(), NE_LOCATIONS.len());
        assert!(text.lines().any(|l| l.starts_with("Assam") && l.ends_with("Jorhat, Tezpur")));
    }

    #[test]
    fn render_propagates_write_errors() {
        assert!(render(|_| Err(fmt::Error)).is_err());
        assert_eq!(render(|out| write!(out, "ok")).unwrap(), "ok");
    }
}
