//! Emulator detection heuristics.
//!
//! Emulators leak through QEMU/Goldfish device nodes, build properties,
//! and CPU identification strings. Any one marker is enough to flag.

use std::path::PathBuf;

use crate::env::env_path_list;
use crate::signal::{SignalKind, SignalProbe};

/// Device nodes and libraries that only exist under QEMU-family emulators.
pub const EMULATOR_ARTIFACT_PATHS: &[&str] = &[
    "/dev/qemu_pipe",
    "/dev/socket/qemud",
    "/dev/socket/baseband_genyd",
    "/sys/qemu_trace",
    "/sys/bus/platform/drivers/qemu_pipe",
    "/system/bin/qemu-props",
    "/system/lib/libqemu.so",
    "/system/lib64/libqemu.so",
    "/system/lib/libhoudini.so",
    "/system/lib64/libhoudini.so",
];

const PROP_PATHS: &[&str] = &["/system/build.prop", "/default.prop"];
const CPUINFO_PATH: &str = "/proc/cpuinfo";

#[derive(Debug, Clone)]
pub struct EmulatorProbeConfig {
    pub artifact_paths: Vec<PathBuf>,
    pub prop_paths: Vec<PathBuf>,
    pub cpuinfo_path: PathBuf,
}

impl Default for EmulatorProbeConfig {
    fn default() -> Self {
        Self {
            artifact_paths: env_path_list(
                "APPGUARD_EMULATOR_ARTIFACT_PATHS",
                EMULATOR_ARTIFACT_PATHS
                    .iter()
                    .map(|path| (*path).to_string())
                    .collect(),
            )
            .into_iter()
            .map(PathBuf::from)
            .collect(),
            prop_paths: PROP_PATHS.iter().map(PathBuf::from).collect(),
            cpuinfo_path: PathBuf::from(CPUINFO_PATH),
        }
    }
}

#[derive(Debug, Default)]
pub struct EmulatorProbe {
    config: EmulatorProbeConfig,
}

impl EmulatorProbe {
    pub fn new(config: EmulatorProbeConfig) -> Self {
        Self { config }
    }
}

impl SignalProbe for EmulatorProbe {
    fn kind(&self) -> SignalKind {
        SignalKind::Emulator
    }

    fn check(&self) -> bool {
        if self.config.artifact_paths.iter().any(|path| path.exists()) {
            return true;
        }
        for prop_path in &self.config.prop_paths {
            if let Ok(content) = std::fs::read_to_string(prop_path) {
                if content.lines().any(prop_line_flags_emulator) {
                    return true;
                }
            }
        }
        match std::fs::read_to_string(&self.config.cpuinfo_path) {
            Ok(cpuinfo) => cpuinfo_has_emulator_markers(&cpuinfo),
            Err(_) => false,
        }
    }
}

/// Whether a single build-property line identifies an emulator image.
pub fn prop_line_flags_emulator(line: &str) -> bool {
    let Some((key, value)) = line.split_once('=') else {
        return false;
    };
    let value = value.trim().to_ascii_lowercase();
    match key.trim() {
        "ro.kernel.qemu" => value == "1",
        "ro.hardware" => ["goldfish", "ranchu", "vbox"]
            .iter()
            .any(|marker| value.contains(marker)),
        "ro.product.model" | "ro.product.device" => {
            ["sdk", "emulator", "generic", "vbox", "genymotion"]
                .iter()
                .any(|marker| value.contains(marker))
        }
        "ro.build.characteristics" => value.contains("emulator"),
        _ => false,
    }
}

/// Whether `/proc/cpuinfo` content carries emulator CPU markers.
pub fn cpuinfo_has_emulator_markers(cpuinfo: &str) -> bool {
    let lower = cpuinfo.to_ascii_lowercase();
    ["goldfish", "ranchu", "vbox"]
        .iter()
        .any(|marker| lower.contains(marker))
}
