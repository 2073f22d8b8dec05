//! Process-wide rustls crypto provider selection.
//!
//! The dependency graph compiles rustls with both `ring` and `aws-lc-rs`, so
//! rustls has no implicit default. Octocrab's connector needs one; `ring` is
//! installed before the GitHub client is built.

use std::sync::Once;

static INSTALL: Once = Once::new();

/// Installs `ring` as the process-default rustls crypto provider.
///
/// Safe to call repeatedly; a provider already installed by the host
/// process is left in place.
pub fn install_crypto_provider() {
    INSTALL.call_once(|| {
        if rustls::crypto::ring::default_provider()
            .install_default()
            .is_err()
        {
            tracing::debug!("rustls crypto provider already installed");
        }
    });
}
