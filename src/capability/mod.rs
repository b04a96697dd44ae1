//! Capability chains derived from feature flags.
//!
//! A capability chain is the composed software object a model's flags imply:
//! a base capability progressively wrapped by the online layer, the analytics
//! layer, and the access-control proxy, in that fixed order. Chains are
//! always rebuilt from their inputs (`base title` + flags) — they are derived
//! state, never captured in snapshots.
//!
//! # Example
//!
//! ```rust
//! use trainset::capability;
//! use trainset::model::FeatureFlags;
//!
//! let flags = FeatureFlags {
//!     use_online: true,
//!     ..FeatureFlags::default()
//! };
//! let chain = capability::build("Bike Software", &flags);
//! assert_eq!(chain.name(), "Bike Software + Online");
//! ```

mod chain;
mod outcome;
mod proxy;

pub use chain::{AnalyticsLayer, BaseSoftware, Capability, OnlineLayer};
pub use outcome::OperationOutcome;
pub use proxy::{AccessControl, REQUIRED_LICENSE};

use crate::model::FeatureFlags;

/// Build the capability chain for one base title + flag combination.
///
/// Wrapping order is fixed and non-configurable: Base → Online → Analytics →
/// AccessControl, each layer applied only when its flag is set. Every call
/// produces a fresh chain; the proxy's lazy cache and action log live and die
/// with the returned instance.
pub fn build(base_title: &str, flags: &FeatureFlags) -> Box<dyn Capability> {
    let mut chain: Box<dyn Capability> = Box::new(BaseSoftware::new(base_title));
    if flags.use_online {
        chain = Box::new(OnlineLayer::new(chain));
    }
    if flags.use_analytics {
        chain = Box::new(AnalyticsLayer::new(chain));
    }
    if flags.use_proxy {
        chain = Box::new(AccessControl::new(chain, &flags.license_key));
    }
    chain
}

/// Derived display name of the chain a title + flags would produce.
///
/// `name()` is pure, so this is a cheap read used by summary rendering.
pub fn chain_name(base_title: &str, flags: &FeatureFlags) -> String {
    build(base_title, flags).name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_flags_build_the_base_alone() {
        let chain = build("Bike Software", &FeatureFlags::default());
        assert_eq!(chain.name(), "Bike Software");
    }

    #[test]
    fn wrapping_order_is_fixed() {
        let flags = FeatureFlags {
            use_online: true,
            use_analytics: true,
            use_proxy: true,
            license_key: REQUIRED_LICENSE.to_string(),
        };

        let chain = build("Rowing Software", &flags);
        assert_eq!(
            chain.name(),
            "Rowing Software + Online + Analytics (via Proxy)"
        );
    }

    #[test]
    fn chain_name_matches_built_chain() {
        let flags = FeatureFlags {
            use_analytics: true,
            ..FeatureFlags::default()
        };

        assert_eq!(
            chain_name("Treadmill Software", &flags),
            build("Treadmill Software", &flags).name()
        );
    }
}
