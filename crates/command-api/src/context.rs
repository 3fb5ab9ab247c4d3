use std::path::PathBuf;

/// Host-supplied application identity and trust material.
///
/// Passed in explicitly at attach time instead of living in nullable
/// process-wide fields; commands that need it fail with `Unavailable`
/// until the host attaches one.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    /// Package/bundle identity the process is actually running under.
    pub package_name: String,
    /// Canonical identity to compare against for clone detection.
    pub expected_package_name: Option<String>,
    /// Sandbox data directory of the running install.
    pub data_dir: PathBuf,
    /// DER signing certificates from the platform trust store, preferred
    /// source for the signature identity.
    pub signing_certificates: Vec<Vec<u8>>,
    /// Raw embedded provisioning profile, fallback source for the
    /// signature identity.
    pub provisioning_profile: Option<Vec<u8>>,
}
