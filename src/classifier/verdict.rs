//! Verdict normalization.

use super::pipeline::PipelineKind;

/// Map the classifier's final output line to a verdict label.
///
/// Only an exact `"1"` (after trimming) classifies positive. Everything else,
/// including `"0"` and malformed output, falls back to the negative label;
/// unexpected classifier output is never an error.
pub fn normalize(kind: PipelineKind, last_line: &str) -> &'static str {
    if last_line.trim() == "1" {
        kind.positive_label()
    } else {
        kind.negative_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_one_is_positive() {
        assert_eq!(normalize(PipelineKind::Url, "1"), "Phishing");
        assert_eq!(normalize(PipelineKind::Sms, "1"), "Spam");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(normalize(PipelineKind::Url, " 1 \r"), "Phishing");
        assert_eq!(normalize(PipelineKind::Sms, "1\n"), "Spam");
    }

    #[test]
    fn zero_is_negative() {
        assert_eq!(normalize(PipelineKind::Url, "0"), "Safe");
        assert_eq!(normalize(PipelineKind::Sms, "0"), "Not Spam");
    }

    #[test]
    fn anything_else_degrades_to_negative() {
        for garbage in ["", "2", "01", "1.0", "yes", "Traceback (most recent call last):"] {
            assert_eq!(normalize(PipelineKind::Url, garbage), "Safe");
            assert_eq!(normalize(PipelineKind::Sms, garbage), "Not Spam");
        }
    }
}
