//! Developer-mode and debugging-mode (ADB) flags.
//!
//! On Android both are global settings, read through the `settings`
//! shell tool. On every other platform the flags are not observable and
//! the probes report the deterministic default `false`.

use crate::signal::{SignalKind, SignalProbe};

#[derive(Debug, Default)]
pub struct DeveloperModeProbe;

impl SignalProbe for DeveloperModeProbe {
    fn kind(&self) -> SignalKind {
        SignalKind::DeveloperMode
    }

    fn check(&self) -> bool {
        global_setting_enabled("development_settings_enabled")
    }
}

#[derive(Debug, Default)]
pub struct DebuggingModeProbe;

impl SignalProbe for DebuggingModeProbe {
    fn kind(&self) -> SignalKind {
        SignalKind::DebuggingMode
    }

    fn check(&self) -> bool {
        global_setting_enabled("adb_enabled")
    }
}

#[cfg(target_os = "android")]
fn global_setting_enabled(name: &str) -> bool {
    use std::process::Command;

    let output = match Command::new("settings").args(["get", "global", name]).output() {
        Ok(out) => out,
        Err(err) => {
            tracing::warn!(setting = name, %err, "settings query failed, defaulting to unflagged");
            return false;
        }
    };
    if !output.status.success() {
        return false;
    }
    String::from_utf8_lossy(&output.stdout).trim() == "1"
}

#[cfg(not(target_os = "android"))]
fn global_setting_enabled(_name: &str) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::SignalProbe;

    #[test]
    fn probes_default_to_unflagged_off_android() {
        #[cfg(not(target_os = "android"))]
        {
            assert!(!DeveloperModeProbe.check());
            assert!(!DebuggingModeProbe.check());
        }
    }

    #[test]
    fn probe_kinds_are_distinct() {
        assert_ne!(DeveloperModeProbe.kind(), DebuggingModeProbe.kind());
    }
}
