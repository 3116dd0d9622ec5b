//! Human-readable and JSON rendering of search results.
//!
//! Dimensions are reported in search units and, scaled by
//! [`ReportConfig::scale`], in display units. Inner volume is converted to
//! cubic meters via [`ReportConfig::volume_divisor`].

use crate::candidate::{Candidate, Dims};
use crate::config::{Config, ReportConfig};
use crate::search::{best, distinct_shapes};

/// Printed in place of a report when nothing qualifies.
pub const NO_SOLUTIONS: &str = "No solutions found! Try expanding the search range.";

/// Inner volume of a candidate in cubic meters.
pub fn inner_volume_m3(candidate: &Candidate, report: &ReportConfig) -> f64 {
    candidate.inner_volume as f64 * (report.scale as f64).powi(3) / report.volume_divisor
}

fn scaled((length, width, height): Dims, report: &ReportConfig) -> String {
    // widened so any i64 dimension and scale multiply without overflow
    let scale = i128::from(report.scale);
    format!(
        "{} × {} × {} {}",
        i128::from(length) * scale,
        i128::from(width) * scale,
        i128::from(height) * scale,
        report.unit
    )
}

/// Formats one ranked entry; `rank` is 1-based.
pub fn format_candidate(rank: usize, candidate: &Candidate, config: &Config) -> String {
    let search = &config.search;
    let report = &config.report;

    let mut output = format!(
        "{}. l={}, w={}, h={}:\n",
        rank, candidate.length, candidate.width, candidate.height
    );
    output.push_str(&format!(
        "   Material used: {}/{}\n",
        candidate.material_used, search.target
    ));
    output.push_str(&format!(
        "   Outer dimensions: {}\n",
        scaled(candidate.dims(), report)
    ));
    output.push_str(&format!(
        "   Inner dimensions: {}\n",
        scaled(candidate.inner_dims(), report)
    ));
    output.push_str(&format!(
        "   Inner volume: {:.2} m³\n",
        inner_volume_m3(candidate, report)
    ));
    output
}

/// Formats the best-solution block for the top candidate.
pub fn format_best(candidate: &Candidate, config: &Config) -> String {
    let search = &config.search;
    let report = &config.report;

    let mut output = String::from("BEST SOLUTION:\n");
    output.push_str(&format!(
        "l = {}, w = {}, h = {}\n",
        candidate.length, candidate.width, candidate.height
    ));
    output.push_str(&format!("Outer: {}\n", scaled(candidate.dims(), report)));
    output.push_str(&format!(
        "Inner: {}\n",
        scaled(candidate.inner_dims(), report)
    ));
    output.push_str(&format!(
        "Material used: {} (target: {})\n",
        candidate.material_used, search.target
    ));
    output.push_str(&format!(
        "Inner volume: {:.2} m³\n",
        inner_volume_m3(candidate, report)
    ));
    output
}

/// Formats the top entries of a ranked sequence followed by the best solution.
pub fn format_report(solutions: &[Candidate], config: &Config) -> String {
    let Some(top) = best(solutions) else {
        return format!("{NO_SOLUTIONS}\n");
    };

    let mut output = String::from("Top solutions:\n");
    for (i, candidate) in solutions.iter().take(config.report.top).enumerate() {
        output.push_str(&format_candidate(i + 1, candidate, config));
        output.push('\n');
    }
    output.push_str(&format_best(top, config));
    output
}

/// Summarizes how many candidates qualified and how many distinct boxes they form.
pub fn format_count(solutions: &[Candidate]) -> String {
    format!(
        "{} solutions ({} distinct shapes)\n",
        solutions.len(),
        distinct_shapes(solutions).len()
    )
}

/// Serializes a ranked sequence as a JSON array, in rank order.
pub fn export_json(solutions: &[Candidate]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(solutions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::search::search;

    #[test]
    fn test_default_report_snapshot() {
        let config = Config::default();
        let solutions = search(&config.search);

        insta::assert_snapshot!(format_report(&solutions, &config));
    }

    #[test]
    fn test_best_block() {
        let config = Config::default();
        let candidate = Candidate::evaluate((38, 43, 48), 4).unwrap();

        assert_eq!(
            format_best(&candidate, &config),
            "BEST SOLUTION:\n\
             l = 38, w = 43, h = 48\n\
             Outer: 3800 × 4300 × 4800 mm\n\
             Inner: 3400 × 3900 × 4400 mm\n\
             Material used: 20088 (target: 20000)\n\
             Inner volume: 58.34 m³\n"
        );
    }

    #[test]
    fn test_empty_report() {
        let config = Config {
            search: SearchConfig {
                target: -1,
                tolerance: 0,
                ..SearchConfig::default()
            },
            ..Config::default()
        };
        let solutions = search(&config.search);

        assert!(solutions.is_empty());
        assert_eq!(
            format_report(&solutions, &config),
            "No solutions found! Try expanding the search range.\n"
        );
    }

    #[test]
    fn test_report_respects_top() {
        let mut config = Config::default();
        config.report.top = 2;
        let solutions = search(&config.search);
        let output = format_report(&solutions, &config);

        assert!(output.contains("\n2. l=38, w=48, h=43:\n"));
        assert!(!output.contains("\n3. "));
        assert!(output.ends_with("Inner volume: 58.34 m³\n"));
    }

    #[test]
    fn test_custom_units() {
        let mut config = Config::default();
        config.report.scale = 10;
        config.report.unit = "cm".to_string();
        config.report.volume_divisor = 1e6;
        let candidate = Candidate::evaluate((38, 43, 48), 4).unwrap();

        let output = format_candidate(1, &candidate, &config);
        assert!(output.contains("Outer dimensions: 380 × 430 × 480 cm\n"));
        assert!(output.contains("Inner dimensions: 340 × 390 × 440 cm\n"));
        assert!(output.contains("Inner volume: 58.34 m³\n"));
    }

    #[test]
    fn test_inner_dimensions_use_evaluated_shrink() {
        // the config shrink differs from the one the candidate was evaluated with
        let mut config = Config::default();
        config.search.shrink = 1;
        let candidate = Candidate::evaluate((38, 43, 48), 4).unwrap();

        let output = format_candidate(1, &candidate, &config);
        assert!(output.contains("Inner dimensions: 3400 × 3900 × 4400 mm\n"));
        assert!(format_best(&candidate, &config).contains("Inner: 3400 × 3900 × 4400 mm\n"));
    }

    #[test]
    fn test_large_scale_does_not_overflow() {
        let mut config = Config::default();
        config.report.scale = i64::MAX;
        let candidate = Candidate::evaluate((38, 43, 48), 4).unwrap();

        let output = format_best(&candidate, &config);
        let expected = format!("Outer: {} × ", 38 * i128::from(i64::MAX));
        assert!(output.contains(&expected));
    }

    #[test]
    fn test_count() {
        let solutions = search(&SearchConfig::default());
        assert_eq!(format_count(&solutions), "579 solutions (101 distinct shapes)\n");
        assert_eq!(format_count(&[]), "0 solutions (0 distinct shapes)\n");
    }

    #[test]
    fn test_export_json() {
        let candidate = Candidate::evaluate((38, 43, 48), 4).unwrap();
        let json = export_json(&[candidate]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[0]["length"], 38);
        assert_eq!(parsed[0]["material_used"], 20088);
        assert_eq!(parsed[0]["inner_volume"], 58344);
        assert_eq!(export_json(&[]).unwrap(), "[]");
    }
}
