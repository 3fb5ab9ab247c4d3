//! Execution-environment trust signals and the verdict engine.
//!
//! Each integrity dimension (root, developer mode, debugger, emulator,
//! app clone) is an independent probe behind the [`SignalProbe`] trait.
//! [`TrustEvaluator`] runs the probes in a fixed order and folds the
//! results into a single pass/fail [`TrustVerdict`]. Signature identity
//! is exposed standalone because mismatch detection needs an expected
//! value the engine does not retain.

mod clone;
mod debugger;
mod developer;
mod emulator;
mod env;
mod evaluator;
mod root;
mod signal;
mod signature;

pub use clone::{path_has_clone_markers, AppCloneProbe, NullCloneProbe};
pub use debugger::{debugger_attached, parse_tracer_pid, DebuggerProbe};
pub use developer::{DebuggingModeProbe, DeveloperModeProbe};
pub use emulator::{
    cpuinfo_has_emulator_markers, prop_line_flags_emulator, EmulatorProbe, EmulatorProbeConfig,
    EMULATOR_ARTIFACT_PATHS,
};
pub use evaluator::{signature_mismatch, TrustEvaluator};
pub use root::{build_props_are_suspicious, RootProbe, RootProbeConfig, SU_BINARY_PATHS};
pub use signal::{SignalKind, SignalProbe, SignalResult, TrustVerdict};
pub use signature::{
    digest_first_certificate, extract_profile_certificates, signature_from_provisioning_profile,
};
