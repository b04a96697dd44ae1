//! Access-control proxy: license check, lazy heavy load, action log.

use super::{Capability, OperationOutcome};
use std::time::Duration;
use tracing::debug;

/// License key the proxy accepts. Everything else is denied.
pub const REQUIRED_LICENSE: &str = "VALID-KEY";

/// Simulated cost of bringing up the protected module. The load is a
/// deliberate blocking cost, not I/O; it completes before `operate` returns.
const LOAD_COST: Duration = Duration::from_millis(40);

/// The protected module behind the proxy. Expensive to construct, so the
/// proxy only loads it on the first successful access.
struct ProtectedModule {
    title: String,
}

impl ProtectedModule {
    fn load(title: &str) -> Self {
        debug!(title, "loading protected module");
        std::thread::sleep(LOAD_COST);
        Self {
            title: title.to_string(),
        }
    }

    fn operate(&self) -> String {
        format!(
            "Protected module '{}' executed (heavy logic, network, drivers).",
            self.title
        )
    }
}

/// Outermost chain layer when `use_proxy` is set.
///
/// Checks the supplied license key against [`REQUIRED_LICENSE`] on every
/// `operate()` call. On a mismatch the wrapped capability is never invoked.
/// On a match the protected module is lazily loaded once and cached for the
/// lifetime of this chain instance only — any flag change rebuilds the whole
/// chain, discarding cache and log together.
pub struct AccessControl {
    inner: Box<dyn Capability>,
    license_key: String,
    real: Option<ProtectedModule>,
    log: Vec<String>,
}

impl AccessControl {
    pub fn new(inner: Box<dyn Capability>, license_key: &str) -> Self {
        Self {
            inner,
            license_key: license_key.to_string(),
            real: None,
            log: vec![format!("set_license({license_key})")],
        }
    }

    /// Append-only action log, consumable for diagnostics.
    pub fn action_log(&self) -> &[String] {
        &self.log
    }

    fn check_access(&mut self) -> bool {
        let ok = self.license_key == REQUIRED_LICENSE;
        self.log
            .push(format!("check_access() -> {}", if ok { "OK" } else { "DENIED" }));
        ok
    }

    fn loaded_module(&mut self) -> ProtectedModule {
        match self.real.take() {
            Some(module) => module,
            None => {
                self.log
                    .push("lazy_load() -> loading the protected module".to_string());
                let module = ProtectedModule::load(&self.inner.name());
                self.log
                    .push("lazy_load() -> protected module ready".to_string());
                module
            }
        }
    }
}

impl Capability for AccessControl {
    fn name(&self) -> String {
        format!("{} (via Proxy)", self.inner.name())
    }

    fn operate(&mut self) -> OperationOutcome {
        if !self.check_access() {
            return OperationOutcome {
                report: "Access denied: invalid license key.".to_string(),
                denied: true,
                diagnostics: self.log.clone(),
            };
        }

        let module = self.loaded_module();
        self.log
            .push("delegate.operate() -> handing control to the protected module".to_string());

        let mut outcome = self.inner.operate();
        outcome.report.push('\n');
        outcome.report.push_str(&module.operate());
        self.real = Some(module);

        outcome.diagnostics = self.log.clone();
        outcome
    }
}
