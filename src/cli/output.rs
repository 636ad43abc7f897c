use anyhow::Result;
use mqx::ExploreOutcome;
use serde_json::json;

/// Print a plain-text representation of the explorer outcome.
pub(crate) fn print_plain(outcome: &ExploreOutcome) {
	println!("From: {}", outcome.from.as_deref().unwrap_or("(none)"));
	println!("To: {}", outcome.to.as_deref().unwrap_or("(none)"));

	let Some(trip) = &outcome.trip else {
		println!("No route plotted");
		return;
	};
	println!("Route: {} -> {}", trip.from, trip.to);
	for (index, maneuver) in trip.maneuvers.iter().enumerate() {
		println!("{:>3}. {} ({})", index + 1, maneuver.narrative, maneuver.start);
	}
}

/// Format the explorer outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &ExploreOutcome) -> Result<String> {
	let payload = json!({
		"from": outcome.from,
		"to": outcome.to,
		"trip": outcome.trip,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the explorer outcome.
pub(crate) fn print_json(outcome: &ExploreOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
