//! Convergence report rendering.
//!
//! Renders a `ConvergenceResult` either as a structured JSON record or as a
//! human-readable summary. The non-converged list is always included; it is
//! the actionable part of the output when a command ultimately fails.

use std::fmt::Display;

use comfy_table::{presets, Cell, ContentArrangement, Table};

/// Machine-readable record shape for `--to-json` output.
fn json_record<S: Display>(
    result: &crate::domain::models::ConvergenceResult<S>,
) -> serde_json::Value {
    serde_json::json!({
        "desired_states": result.desired.iter().map(ToString::to_string).collect::<Vec<_>>(),
        "transitioned": &result.converged,
        "non_transitioned": &result.non_converged,
    })
}

/// Render the human-readable report: a two-line summary plus a per-target
/// state table.
fn render_text<S: Display>(result: &crate::domain::models::ConvergenceResult<S>) -> String {
    let desired = result
        .desired
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    out.push_str(&format!(
        "Entered [{desired}] status: [{}]\n",
        result.converged.join(", ")
    ));
    out.push_str(&format!(
        "Did not enter [{desired}] status: [{}]\n",
        result.non_converged.join(", ")
    ));

    if result.target_count() > 0 {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["TARGET", "LAST SEEN", "CONVERGED"]);

        for target in result.converged.iter().chain(result.non_converged.iter()) {
            let last_seen = result
                .observed
                .get(target)
                .map_or_else(|| "-".to_string(), ToString::to_string);
            let converged = result.converged.contains(target);
            table.add_row(vec![
                Cell::new(target),
                Cell::new(last_seen),
                Cell::new(if converged { "yes" } else { "no" }),
            ]);
        }
        out.push_str(&table.to_string());
        out.push('\n');
    }
    out
}

/// Print the convergence report in the requested format.
pub fn print_report<S: Display>(
    result: &crate::domain::models::ConvergenceResult<S>,
    to_json: bool,
) {
    if to_json {
        println!("{}", json_record(result));
    } else {
        print!("{}", render_text(result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ConvergenceResult, MaintenanceMode, Outcome};
    use std::collections::HashMap;

    fn sample() -> ConvergenceResult<MaintenanceMode> {
        let mut observed = HashMap::new();
        observed.insert("host-a".to_string(), MaintenanceMode::Drained);
        observed.insert("host-b".to_string(), MaintenanceMode::Draining);
        ConvergenceResult {
            desired: vec![MaintenanceMode::Drained],
            converged: vec!["host-a".to_string()],
            non_converged: vec!["host-b".to_string()],
            observed,
            outcome: Outcome::TimedOut,
        }
    }

    #[test]
    fn json_record_partitions_targets() {
        let record = json_record(&sample());
        assert_eq!(record["desired_states"], serde_json::json!(["DRAINED"]));
        assert_eq!(record["transitioned"], serde_json::json!(["host-a"]));
        assert_eq!(record["non_transitioned"], serde_json::json!(["host-b"]));
    }

    #[test]
    fn text_report_never_drops_non_converged() {
        let text = render_text(&sample());
        assert!(text.contains("Entered [DRAINED] status: [host-a]"));
        assert!(text.contains("Did not enter [DRAINED] status: [host-b]"));
        assert!(text.contains("DRAINING"));
    }

    #[test]
    fn unreported_target_shows_placeholder() {
        let result: ConvergenceResult<MaintenanceMode> = ConvergenceResult {
            desired: vec![MaintenanceMode::None],
            converged: vec![],
            non_converged: vec!["ghost-host".to_string()],
            observed: HashMap::new(),
            outcome: Outcome::TimedOut,
        };
        let text = render_text(&result);
        assert!(text.contains("ghost-host"));
        assert!(text.contains('-'));
    }
}
