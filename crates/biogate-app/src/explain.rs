//! The `explain` use case: look up policy and reason documentation.

use biogate_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; includes the known policies and reasons.
    NotFound {
        identifier: String,
        available_policies: &'static [&'static str],
        available_reasons: &'static [&'static str],
    },
}

/// Look up an explanation for a policy id or reason token.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_policies: explain::all_policy_ids(),
            available_reasons: explain::all_reasons(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Guidance\n");
    out.push_str("--------\n");
    out.push_str(exp.guidance);
    out.push('\n');

    if let Some(example) = exp.example {
        out.push_str("\nExample (biogate.toml)\n");
        out.push_str("----------------------\n\n");
        out.push_str("```toml\n");
        out.push_str(example);
        out.push('\n');
        out.push_str("```\n");
    }

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, policies: &[&str], reasons: &[&str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown policy or reason: {}\n\n", identifier));
    out.push_str("Available policies:\n");
    for id in policies {
        out.push_str(&format!("  - {}\n", id));
    }
    out.push_str("\nAvailable reasons:\n");
    for reason in reasons {
        out.push_str(&format!("  - {}\n", reason));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_known_policy() {
        let exp = unwrap_found(run_explain("require_biometric"));
        let formatted = format_explanation(&exp);
        assert!(formatted.contains("Guidance"));
        assert!(formatted.contains("```toml"));
    }

    #[test]
    fn explain_known_reason_without_example() {
        let exp = unwrap_found(run_explain("liveness_rejected"));
        let formatted = format_explanation(&exp);
        assert!(formatted.contains("Guidance"));
        assert!(!formatted.contains("```toml"));
    }

    #[test]
    fn explain_unknown() {
        match run_explain("retina_scan") {
            ExplainOutput::NotFound {
                identifier,
                available_policies,
                available_reasons,
            } => {
                assert_eq!(identifier, "retina_scan");
                assert_eq!(available_policies.len(), 3);
                assert!(available_reasons.contains(&"factor_failed"));
            }
            ExplainOutput::Found(_) => panic!("expected NotFound"),
        }
    }

    #[test]
    fn format_not_found_output() {
        let formatted = format_not_found("missing", &["require_all"], &["factor_failed"]);
        assert!(formatted.contains("Unknown policy or reason: missing"));
        assert!(formatted.contains("Available policies:\n  - require_all"));
        assert!(formatted.contains("Available reasons:\n  - factor_failed"));
    }

    fn unwrap_found(output: ExplainOutput) -> Explanation {
        match output {
            ExplainOutput::Found(exp) => exp,
            _ => panic!("expected Found"),
        }
    }
}
