//! Dispatch outcomes.

/// The result of dispatching one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchReport {
    /// Whether any matching module returned `true`.
    pub handled: bool,
    /// How many module invocations the scan made.
    pub matched: usize,
    /// Whether the fallback sink was invoked.
    pub fell_back: bool,
    /// Panics caught and skipped under the isolating failure policy.
    pub isolated_failures: usize,
}

impl DispatchReport {
    /// A report for a submission no module matched.
    pub const fn unmatched() -> Self {
        Self {
            handled: false,
            matched: 0,
            fell_back: true,
            isolated_failures: 0,
        }
    }

    /// Whether at least one module was invoked.
    pub const fn any_matched(&self) -> bool {
        self.matched > 0
    }
}

impl From<DispatchReport> for bool {
    fn from(report: DispatchReport) -> Self {
        report.handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_matched() {
        assert!(!DispatchReport::unmatched().any_matched());

        let report = DispatchReport {
            matched: 2,
            ..DispatchReport::default()
        };
        assert!(report.any_matched());
    }

    #[test]
    fn test_into_bool_is_handled() {
        let handled = DispatchReport {
            handled: true,
            matched: 1,
            ..DispatchReport::default()
        };
        assert!(bool::from(handled));
        assert!(!bool::from(DispatchReport::unmatched()));

        let matched_but_declined = DispatchReport {
            matched: 3,
            fell_back: true,
            ..DispatchReport::default()
        };
        let as_bool: bool = matched_but_declined.into();
        assert!(!as_bool);
    }
}
