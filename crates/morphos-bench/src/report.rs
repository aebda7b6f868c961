use std::path::Path;

use crate::runner::BenchmarkResult;

/// A complete baseline containing results from all scenes.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Baseline {
    pub timestamp: String,
    pub results: Vec<BenchmarkResult>,
}

/// Load a baseline from a JSON file. Returns None if the file doesn't exist
/// or cannot be parsed.
pub fn load_baseline(path: &Path) -> Option<Baseline> {
    let contents = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(baseline) => Some(baseline),
        Err(e) => {
            log::warn!("Ignoring malformed baseline {}: {}", path.display(), e);
            None
        }
    }
}

/// Save a baseline to a JSON file.
pub fn save_baseline(path: &Path, baseline: &Baseline) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(baseline).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Compare current results against a baseline. Returns a list of regressions
/// (scene name, percent change) where the threshold is exceeded.
pub fn compare(
    current: &[BenchmarkResult],
    baseline: &Baseline,
    threshold_pct: f64,
) -> Vec<(String, f64)> {
    let mut regressions = Vec::new();

    for result in current {
        let Some(base) = baseline
            .results
            .iter()
            .find(|b| b.scene_name == result.scene_name)
        else {
            continue;
        };
        if base.timings.mean_ms <= 0.0 {
            continue;
        }
        let pct_change =
            (result.timings.mean_ms - base.timings.mean_ms) / base.timings.mean_ms * 100.0;
        if pct_change > threshold_pct {
            regressions.push((result.scene_name.clone(), pct_change));
        }
    }

    regressions
}

/// Format results as a markdown summary table.
pub fn format_markdown(results: &[BenchmarkResult]) -> String {
    let mut out = String::new();
    out.push_str("| Scene | Shape | Particles | In grid | Acquisitions | Mean (ms) | Median (ms) | P95 (ms) | P99 (ms) | Min (ms) | Max (ms) |\n");
    out.push_str("|-------|-------|-----------|---------|--------------|-----------|-------------|----------|----------|----------|----------|\n");

    for r in results {
        out.push_str(&format!(
            "| {} | {} | {} | {:.0} | {} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} |\n",
            r.scene_name,
            r.shape,
            r.particle_count,
            r.mean_grid_occupancy,
            r.acquisitions,
            r.timings.mean_ms,
            r.timings.median_ms,
            r.timings.p95_ms,
            r.timings.p99_ms,
            r.timings.min_ms,
            r.timings.max_ms,
        ));
    }

    out
}

/// Format a comparison report showing regressions.
pub fn format_comparison(regressions: &[(String, f64)], threshold_pct: f64) -> String {
    if regressions.is_empty() {
        return format!(
            "All scenes within {:.0}% threshold. No regressions detected.\n",
            threshold_pct
        );
    }

    let mut out = String::new();
    out.push_str(&format!(
        "REGRESSIONS DETECTED (>{:.0}% threshold):\n",
        threshold_pct
    ));
    for (scene, pct) in regressions {
        out.push_str(&format!("  - {}: +{:.1}%\n", scene, pct));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{compute_timings, TimingSeries};
    use morphos_core::ShapeKind;

    fn result(name: &str, mean: f64) -> BenchmarkResult {
        BenchmarkResult {
            scene_name: name.to_string(),
            shape: ShapeKind::Galaxy,
            particle_count: 1000,
            frame_count: 10,
            acquisitions: 0,
            mean_grid_occupancy: 1000.0,
            timings: TimingSeries {
                mean_ms: mean,
                ..compute_timings(&[mean])
            },
        }
    }

    #[test]
    fn test_compare_flags_only_regressions() {
        let baseline = Baseline {
            timestamp: "t".into(),
            results: vec![result("a", 10.0), result("b", 10.0), result("zero", 0.0)],
        };
        let current = vec![
            result("a", 12.0),
            result("b", 10.5),
            result("new", 99.0),
            result("zero", 5.0),
        ];
        let regressions = compare(&current, &baseline, 10.0);
        assert_eq!(regressions.len(), 1);
        assert_eq!(regressions[0].0, "a");
        assert!((regressions[0].1 - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_baseline_json_roundtrip() {
        let dir = std::env::temp_dir().join(format!("morphos-bench-{}", std::process::id()));
        let path = dir.join("baseline.json");
        let baseline = Baseline {
            timestamp: "bench-test".into(),
            results: vec![result("a", 3.0)],
        };
        save_baseline(&path, &baseline).expect("save");
        let loaded = load_baseline(&path).expect("load");
        assert_eq!(loaded.results.len(), 1);
        assert_eq!(loaded.results[0].shape, ShapeKind::Galaxy);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_baseline_is_none() {
        assert!(load_baseline(Path::new("/nonexistent/morphos/baseline.json")).is_none());
    }

    #[test]
    fn test_markdown_has_row_per_result() {
        let md = format_markdown(&[result("a", 1.0), result("b", 2.0)]);
        assert_eq!(md.lines().count(), 4);
        assert!(md.contains("| a | galaxy |"));
    }

    #[test]
    fn test_comparison_text() {
        assert!(format_comparison(&[], 10.0).contains("No regressions"));
        let text = format_comparison(&[("a".into(), 12.5)], 10.0);
        assert!(text.contains("a: +12.5%"));
    }
}
