//! Screen-capture protection.
//!
//! [`ProtectionController`] is a small state machine over the desired
//! protection style, the applied style, and the app lifecycle phase. It
//! decides *when* protection sub-operations fire; the OS-facing work is
//! behind the [`ScreenProtector`] seam.

mod controller;
mod protector;
mod style;

pub use controller::{LifecyclePhase, ProtectionController};
pub use protector::{ScreenProtector, TracingProtector};
pub use style::{AppliedProtection, ProtectionStyle, StyleError};
