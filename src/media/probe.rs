//! ffprobe duration parsing.

use serde::Deserialize;

/// ffprobe JSON output, reduced to the fields we read.
#[derive(Debug, Deserialize)]
struct ProbeOutput {
    format: ProbeFormat,
}

#[derive(Debug, Deserialize)]
struct ProbeFormat {
    duration: Option<String>,
}

/// Extract the container duration in seconds from `ffprobe -show_format` JSON.
///
/// Returns `None` when the JSON is malformed, the duration is absent, or it
/// is not a positive finite number.
pub fn parse_probe_duration(json: &[u8]) -> Option<f64> {
    let probe: ProbeOutput = serde_json::from_slice(json).ok()?;
    probe
        .format
        .duration?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && *d > 0.0)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        let json = br#"{"format": {"filename": "in.mp4", "duration": "12.345000", "size": "100"}}"#;
        assert_eq!(parse_probe_duration(json), Some(12.345));
    }

    #[test]
    fn test_missing_duration() {
        assert_eq!(parse_probe_duration(br#"{"format": {}}"#), None);
    }

    #[test]
    fn test_not_available_duration() {
        assert_eq!(parse_probe_duration(br#"{"format": {"duration": "N/A"}}"#), None);
    }

    #[test]
    fn test_malformed_json() {
        assert_eq!(parse_probe_duration(b"not json"), None);
    }
}
