//! Feature flags driving capability chain construction.

use serde::{Deserialize, Serialize};

/// Configuration flags for a single equipment model.
///
/// A pure value type. The flags are the *inputs* to capability chain
/// construction; the chain itself is rebuilt from them whenever they change,
/// so the flags are the only configuration state a snapshot needs to carry.
///
/// # Example
///
/// ```rust
/// use trainset::model::FeatureFlags;
///
/// let flags = FeatureFlags {
///     use_online: true,
///     ..FeatureFlags::default()
/// };
/// assert!(!flags.use_proxy);
/// assert!(flags.license_key.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Wrap the base software with the online layer.
    pub use_online: bool,
    /// Wrap with the analytics layer.
    pub use_analytics: bool,
    /// Wrap with the access-control proxy.
    pub use_proxy: bool,
    /// License key handed to the proxy; ignored while `use_proxy` is false.
    pub license_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_are_all_off() {
        let flags = FeatureFlags::default();
        assert!(!flags.use_online);
        assert!(!flags.use_analytics);
        assert!(!flags.use_proxy);
        assert_eq!(flags.license_key, "");
    }

    #[test]
    fn flags_roundtrip_serialization() {
        let flags = FeatureFlags {
            use_online: true,
            use_analytics: false,
            use_proxy: true,
            license_key: "VALID-KEY".to_string(),
        };

        let json = serde_json::to_string(&flags).unwrap();
        let back: FeatureFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(flags, back);
    }
}
