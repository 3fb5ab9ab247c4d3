use serde::Serialize;

/// One independently computed integrity dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Root,
    DeveloperMode,
    DebuggingMode,
    Debugger,
    Emulator,
    AppClone,
    SignatureMismatch,
}

impl SignalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::DeveloperMode => "developer_mode",
            Self::DebuggingMode => "debugging_mode",
            Self::Debugger => "debugger",
            Self::Emulator => "emulator",
            Self::AppClone => "app_clone",
            Self::SignatureMismatch => "signature_mismatch",
        }
    }
}

/// A probe for a single signal.
///
/// `check` never fails: a probe that cannot determine its signal reports
/// `false` ("not flagged") so the aggregate verdict is always computable.
pub trait SignalProbe {
    fn kind(&self) -> SignalKind;
    fn check(&self) -> bool;
}

/// The outcome of one probe run. Recomputed on every evaluation; the
/// environment can change between calls, so results are never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignalResult {
    pub kind: SignalKind,
    pub flagged: bool,
}

/// Aggregate verdict over all probes, plus the per-signal results that
/// explain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrustVerdict {
    pub safe: bool,
    pub signals: Vec<SignalResult>,
}

impl TrustVerdict {
    /// `safe` iff no signal fired.
    pub fn from_signals(signals: Vec<SignalResult>) -> Self {
        let safe = signals.iter().all(|signal| !signal.flagged);
        Self { safe, signals }
    }

    pub fn flagged_codes(&self) -> Vec<&'static str> {
        self.signals
            .iter()
            .filter(|signal| signal.flagged)
            .map(|signal| signal.kind.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_is_safe_only_without_flagged_signals() {
        let clean = TrustVerdict::from_signals(vec![
            SignalResult {
                kind: SignalKind::Root,
                flagged: false,
            },
            SignalResult {
                kind: SignalKind::Emulator,
                flagged: false,
            },
        ]);
        assert!(clean.safe);
        assert!(clean.flagged_codes().is_empty());

        let flagged = TrustVerdict::from_signals(vec![
            SignalResult {
                kind: SignalKind::Root,
                flagged: true,
            },
            SignalResult {
                kind: SignalKind::Emulator,
                flagged: false,
            },
        ]);
        assert!(!flagged.safe);
        assert_eq!(flagged.flagged_codes(), vec!["root"]);
    }
}
