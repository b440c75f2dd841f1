use std::fmt::Write;

use superwheel_types::wheel::RoundResult;

pub fn push_resolved_entry(out: &mut String, result: &RoundResult) {
    if !out.is_empty() {
        out.push(',');
    }
    let _ = write!(
        out,
        r#"{{"ring":"{}","label":"{}","winnings":{}}}"#,
        result.ring, result.label, result.winnings
    );
}

/// Compact JSON array of the rings resolved in a round, for log lines.
pub fn format_round_results(results: &[RoundResult]) -> String {
    let mut entries = String::with_capacity(results.len().saturating_mul(48));
    for result in results {
        push_resolved_entry(&mut entries, result);
    }
    format!("[{entries}]")
}

pub fn total_winnings(results: &[RoundResult]) -> u64 {
    results
        .iter()
        .map(|result| result.winnings)
        .fold(0u64, u64::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use superwheel_types::wheel::Ring;

    fn result(ring: Ring, label: &str, winnings: u64) -> RoundResult {
        RoundResult {
            ring,
            label: label.to_string(),
            winnings,
        }
    }

    #[test]
    fn test_format_round_results() {
        assert_eq!(format_round_results(&[]), "[]");

        let results = [
            result(Ring::Outer, "BONUS", 220),
            result(Ring::Middle, "60", 305),
        ];
        let formatted = format_round_results(&results);
        assert_eq!(
            formatted,
            r#"[{"ring":"Outer","label":"BONUS","winnings":220},{"ring":"Middle","label":"60","winnings":305}]"#
        );

        let parsed: serde_json::Value = serde_json::from_str(&formatted).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(total_winnings(&results), 525);
    }
}
