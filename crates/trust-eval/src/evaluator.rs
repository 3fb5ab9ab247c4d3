use tracing::debug;

use crate::debugger::DebuggerProbe;
use crate::developer::DeveloperModeProbe;
use crate::emulator::EmulatorProbe;
use crate::root::RootProbe;
use crate::signal::{SignalKind, SignalProbe, SignalResult, TrustVerdict};

/// Combines independent signal probes into a single verdict.
///
/// The policy is AND-of-negations: the environment is safe iff no probe
/// flags. Probes run in the order given so diagnostics are reproducible.
pub struct TrustEvaluator {
    probes: Vec<Box<dyn SignalProbe>>,
}

impl TrustEvaluator {
    pub fn new(probes: Vec<Box<dyn SignalProbe>>) -> Self {
        Self { probes }
    }

    /// Platform probe set in the canonical order: root, developer mode,
    /// debugger, emulator, app clone. The clone probe is supplied by the
    /// caller because it needs host identity the evaluator does not hold.
    pub fn platform(clone_probe: Box<dyn SignalProbe>) -> Self {
        Self::new(vec![
            Box::new(RootProbe::default()),
            Box::new(DeveloperModeProbe),
            Box::new(DebuggerProbe),
            Box::new(EmulatorProbe::default()),
            clone_probe,
        ])
    }

    /// Run every probe, even after an early signal fires, so the full
    /// result set is always available for diagnostics.
    pub fn evaluate(&self) -> TrustVerdict {
        let signals = self
            .probes
            .iter()
            .map(|probe| SignalResult {
                kind: probe.kind(),
                flagged: probe.check(),
            })
            .collect();
        let verdict = TrustVerdict::from_signals(signals);
        if !verdict.safe {
            debug!(flagged = ?verdict.flagged_codes(), "environment flagged");
        }
        verdict
    }
}

/// Compare an externally supplied expected digest against the observed
/// signature identity. An absent observed identity is indeterminate and
/// reports unflagged.
pub fn signature_mismatch(expected_hex: &str, observed_hex: Option<&str>) -> SignalResult {
    let flagged = observed_hex
        .map(|observed| !observed.eq_ignore_ascii_case(expected_hex.trim()))
        .unwrap_or(false);
    SignalResult {
        kind: SignalKind::SignatureMismatch,
        flagged,
    }
}
