//! Root/jailbreak detection.
//!
//! Heuristic only: looks for superuser binaries, root-manager artifacts,
//! and suspicious build properties. A clean result does not prove the
//! device is unrooted.

use std::path::PathBuf;

use crate::env::{env_bool, env_path_list};
use crate::signal::{SignalKind, SignalProbe};

/// Well-known locations of `su` binaries on rooted devices.
pub const SU_BINARY_PATHS: &[&str] = &[
    "/sbin/su",
    "/su/bin/su",
    "/system/bin/su",
    "/system/bin/.ext/su",
    "/system/bin/failsafe/su",
    "/system/xbin/su",
    "/system/sd/xbin/su",
    "/system_ext/bin/su",
    "/data/local/su",
    "/data/local/bin/su",
    "/data/local/xbin/su",
    "/vendor/bin/su",
    "/vendor/xbin/su",
    "/odm/bin/su",
    "/product/bin/su",
    "/cache/su",
    "/dev/su",
];

/// Root-manager and hook-framework artifacts (Magisk, Xposed variants).
const ROOT_ARTIFACT_PATHS: &[&str] = &[
    "/data/adb/magisk",
    "/sbin/.magisk",
    "/sbin/magisk",
    "/system/bin/magisk",
    "/cache/magisk.log",
    "/data/adb/modules",
    "/system/framework/XposedBridge.jar",
    "/system/lib/libxposed_art.so",
    "/system/lib64/libxposed_art.so",
    "/data/adb/modules/lsposed",
    "/data/adb/modules/edxposed",
    "/data/xposed.prop",
];

const BUILD_PROP_PATHS: &[&str] = &["/system/build.prop", "/default.prop"];

#[derive(Debug, Clone)]
pub struct RootProbeConfig {
    pub su_paths: Vec<PathBuf>,
    pub artifact_paths: Vec<PathBuf>,
    pub build_prop_paths: Vec<PathBuf>,
    /// Also look for `su` on `PATH`.
    pub scan_path: bool,
}

impl Default for RootProbeConfig {
    fn default() -> Self {
        Self {
            su_paths: to_paths(env_path_list(
                "APPGUARD_ROOT_SCAN_PATHS",
                string_list(SU_BINARY_PATHS),
            )),
            artifact_paths: to_paths(env_path_list(
                "APPGUARD_ROOT_ARTIFACT_PATHS",
                string_list(ROOT_ARTIFACT_PATHS),
            )),
            build_prop_paths: to_paths(string_list(BUILD_PROP_PATHS)),
            scan_path: env_bool("APPGUARD_ROOT_SCAN_PATH_ENV", true),
        }
    }
}

#[derive(Debug, Default)]
pub struct RootProbe {
    config: RootProbeConfig,
}

impl RootProbe {
    pub fn new(config: RootProbeConfig) -> Self {
        Self { config }
    }
}

impl SignalProbe for RootProbe {
    fn kind(&self) -> SignalKind {
        SignalKind::Root
    }

    fn check(&self) -> bool {
        if self.config.su_paths.iter().any(|path| path.exists()) {
            return true;
        }
        if self.config.artifact_paths.iter().any(|path| path.exists()) {
            return true;
        }
        for prop_path in &self.config.build_prop_paths {
            if let Ok(content) = std::fs::read_to_string(prop_path) {
                if build_props_are_suspicious(&content) {
                    return true;
                }
            }
        }
        self.config.scan_path && su_on_path()
    }
}

/// Inspect build properties for signs of a custom or insecure ROM.
pub fn build_props_are_suspicious(props: &str) -> bool {
    for line in props.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "ro.build.tags" if value.contains("test-keys") => return true,
            "ro.debuggable" if value == "1" => return true,
            "ro.secure" if value == "0" => return true,
            _ => {}
        }
    }
    false
}

fn su_on_path() -> bool {
    let Some(raw) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&raw).any(|dir| dir.join("su").exists())
}

fn string_list(paths: &[&str]) -> Vec<String> {
    paths.iter().map(|path| (*path).to_string()).collect()
}

fn to_paths(paths: Vec<String>) -> Vec<PathBuf> {
    paths.into_iter().map(PathBuf::from).collect()
}
