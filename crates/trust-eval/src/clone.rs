//! App-clone detection.
//!
//! A cloned install runs under a package identity that differs from the
//! canonical one, or inside a sandbox path created by a dual-app /
//! multi-instance host. Platforms where host-level cloning is not
//! observable answer with [`NullCloneProbe`], which is a valid probe
//! result rather than an error.

use std::path::PathBuf;

use crate::signal::{SignalKind, SignalProbe};

/// Path fragments left behind by multi-instance hosts. User id 999 is the
/// dedicated dual-app user on several vendor ROMs.
const CLONE_PATH_MARKERS: &[&str] = &[
    "/user/999/",
    "/999/",
    "dual_app",
    "dualapp",
    "parallel",
    "clone",
    "multi_user",
    "virtual",
];

pub fn path_has_clone_markers(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    CLONE_PATH_MARKERS.iter().any(|marker| lower.contains(marker))
}

#[derive(Debug, Clone)]
pub struct AppCloneProbe {
    expected_package: Option<String>,
    observed_package: String,
    data_dir: PathBuf,
}

impl AppCloneProbe {
    pub fn new(
        expected_package: Option<String>,
        observed_package: String,
        data_dir: PathBuf,
    ) -> Self {
        Self {
            expected_package,
            observed_package,
            data_dir,
        }
    }
}

impl SignalProbe for AppCloneProbe {
    fn kind(&self) -> SignalKind {
        SignalKind::AppClone
    }

    fn check(&self) -> bool {
        if let Some(expected) = &self.expected_package {
            if expected != &self.observed_package {
                return true;
            }
        }
        path_has_clone_markers(&self.data_dir.to_string_lossy())
    }
}

/// Always-`false` clone probe for platforms without detectable
/// multi-instance hosting.
#[derive(Debug, Default)]
pub struct NullCloneProbe;

impl SignalProbe for NullCloneProbe {
    fn kind(&self) -> SignalKind {
        SignalKind::AppClone
    }

    fn check(&self) -> bool {
        false
    }
}
