//! Output formatting utilities for CLI.

use depths::render::{render_events, render_stats};
use depths::RunResult;

/// Trailer printed after every text run.
const FINISHED: &str = "Test script finished.\n";

/// Format a run as the full human-readable event log.
pub(super) fn format_text(result: &RunResult) -> String {
    let mut output = render_events(&result.events);
    output.push_str(FINISHED);
    output
}

/// Format only the final stats of a run.
pub(super) fn format_summary(result: &RunResult) -> String {
    let mut output = render_stats(&result.stats);
    output.push_str(&format!(
        "Turns: {} ({} iterations, stopped: {:?})\n",
        result.turns_played, result.iterations, result.stop_reason
    ));
    output.push_str(FINISHED);
    output
}
