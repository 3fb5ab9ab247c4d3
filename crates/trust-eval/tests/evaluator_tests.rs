use std::cell::Cell;
use std::rc::Rc;

use trust_eval::{signature_mismatch, SignalKind, SignalProbe, TrustEvaluator};

struct FakeProbe {
    kind: SignalKind,
    flagged: bool,
    calls: Rc<Cell<u32>>,
}

impl SignalProbe for FakeProbe {
    fn kind(&self) -> SignalKind {
        self.kind
    }

    fn check(&self) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.flagged
    }
}

const AGGREGATE_KINDS: [SignalKind; 5] = [
    SignalKind::Root,
    SignalKind::DeveloperMode,
    SignalKind::Debugger,
    SignalKind::Emulator,
    SignalKind::AppClone,
];

fn evaluator_with_flags(flags: [bool; 5]) -> (TrustEvaluator, Vec<Rc<Cell<u32>>>) {
    let mut probes: Vec<Box<dyn SignalProbe>> = Vec::new();
    let mut counters = Vec::new();
    for (kind, flagged) in AGGREGATE_KINDS.into_iter().zip(flags) {
        let calls = Rc::new(Cell::new(0));
        counters.push(Rc::clone(&calls));
        probes.push(Box::new(FakeProbe {
            kind,
            flagged,
            calls,
        }));
    }
    (TrustEvaluator::new(probes), counters)
}

#[test]
fn verdict_matches_the_exhaustive_truth_table() {
    for mask in 0u32..32 {
        let flags = [
            mask & 1 != 0,
            mask & 2 != 0,
            mask & 4 != 0,
            mask & 8 != 0,
            mask & 16 != 0,
        ];
        let (evaluator, _) = evaluator_with_flags(flags);
        let verdict = evaluator.evaluate();
        assert_eq!(
            verdict.safe,
            mask == 0,
            "mask {mask:#07b} produced the wrong verdict"
        );
        assert_eq!(verdict.signals.len(), 5);
        for (result, expected) in verdict.signals.iter().zip(flags) {
            assert_eq!(result.flagged, expected);
        }
    }
}

#[test]
fn every_probe_runs_even_when_the_first_signal_fires() {
    let (evaluator, counters) = evaluator_with_flags([true, true, true, true, true]);
    let verdict = evaluator.evaluate();
    assert!(!verdict.safe);
    for calls in &counters {
        assert_eq!(calls.get(), 1, "a probe was skipped or re-run");
    }
}

#[test]
fn signal_order_is_fixed_and_reproducible() {
    let (evaluator, _) = evaluator_with_flags([false, true, false, true, false]);
    let first = evaluator.evaluate();
    let second = evaluator.evaluate();
    let kinds: Vec<SignalKind> = first.signals.iter().map(|signal| signal.kind).collect();
    assert_eq!(kinds, AGGREGATE_KINDS.to_vec());
    assert_eq!(first, second);
    assert_eq!(first.flagged_codes(), vec!["developer_mode", "emulator"]);
}

#[test]
fn signature_mismatch_requires_an_observed_divergent_digest() {
    assert!(signature_mismatch("abc123", Some("def456")).flagged);
    assert!(!signature_mismatch("abc123", Some("ABC123")).flagged);
    assert!(!signature_mismatch("abc123", None).flagged);
    assert_eq!(
        signature_mismatch("abc123", None).kind,
        SignalKind::SignatureMismatch
    );
}
