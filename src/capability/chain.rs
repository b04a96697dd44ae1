//! The capability trait, the base capability, and the plain decorator layers.

use super::OperationOutcome;

/// One layer of composed software behavior.
///
/// `name()` is pure; `operate()` may carry layer-internal side effects (the
/// access-control proxy logs actions and lazily loads its delegate), which is
/// why it takes `&mut self`.
pub trait Capability {
    /// Derived display name of the chain from this layer down.
    fn name(&self) -> String;

    /// Run the chain from this layer down and report what happened.
    fn operate(&mut self) -> OperationOutcome;
}

/// The innermost capability: the equipment's base software.
pub struct BaseSoftware {
    title: String,
}

impl BaseSoftware {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Capability for BaseSoftware {
    fn name(&self) -> String {
        self.title.clone()
    }

    fn operate(&mut self) -> OperationOutcome {
        OperationOutcome::ok("Base software ready to run.")
    }
}

/// Online connectivity layer.
pub struct OnlineLayer {
    inner: Box<dyn Capability>,
}

impl OnlineLayer {
    pub fn new(inner: Box<dyn Capability>) -> Self {
        Self { inner }
    }
}

impl Capability for OnlineLayer {
    fn name(&self) -> String {
        format!("{} + Online", self.inner.name())
    }

    fn operate(&mut self) -> OperationOutcome {
        let mut outcome = self.inner.operate();
        outcome.report.push('\n');
        outcome
            .report
            .push_str("Online connection established. Workout sync enabled.");
        outcome
    }
}

/// Workout analytics layer.
pub struct AnalyticsLayer {
    inner: Box<dyn Capability>,
}

impl AnalyticsLayer {
    pub fn new(inner: Box<dyn Capability>) -> Self {
        Self { inner }
    }
}

impl Capability for AnalyticsLayer {
    fn name(&self) -> String {
        format!("{} + Analytics", self.inner.name())
    }

    fn operate(&mut self) -> OperationOutcome {
        let mut outcome = self.inner.operate();
        outcome.report.push('\n');
        outcome
            .report
            .push_str("Analytics collection enabled. Workout metrics are being recorded.");
        outcome
    }
}
