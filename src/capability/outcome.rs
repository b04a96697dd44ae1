//! Result of running a capability chain.

/// What one `operate()` call produced.
///
/// Denial is a normal outcome, not an error: the access-control proxy turning
/// a request away is expected, user-facing behavior. `diagnostics` carries the
/// proxy's action log when a proxy sits in the chain, so callers can display
/// it without inspecting the chain's concrete layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationOutcome {
    /// Accumulated report text, one line per chain layer.
    pub report: String,
    /// True when the access-control proxy rejected the license key.
    pub denied: bool,
    /// Access-control action log; empty for chains without a proxy.
    pub diagnostics: Vec<String>,
}

impl OperationOutcome {
    pub(crate) fn ok(report: impl Into<String>) -> Self {
        Self {
            report: report.into(),
            denied: false,
            diagnostics: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_outcome_is_not_denied() {
        let outcome = OperationOutcome::ok("ready");
        assert!(!outcome.denied);
        assert_eq!(outcome.report, "ready");
        assert!(outcome.diagnostics.is_empty());
    }
}
