use tracing::debug;

use crate::protector::ScreenProtector;
use crate::style::{AppliedProtection, ProtectionStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Foreground,
    Background,
}

/// Lifecycle-driven protection state machine.
///
/// Holds the desired style, what is actually applied, and the current
/// phase. All transitions are idempotent because the OS may deliver
/// duplicate or out-of-order lifecycle notifications.
pub struct ProtectionController {
    protector: Option<Box<dyn ScreenProtector>>,
    desired: ProtectionStyle,
    applied: AppliedProtection,
    phase: LifecyclePhase,
    capture_allowed: bool,
}

impl Default for ProtectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtectionController {
    pub fn new() -> Self {
        Self {
            protector: None,
            desired: ProtectionStyle::None,
            applied: AppliedProtection::Unapplied,
            phase: LifecyclePhase::Foreground,
            capture_allowed: true,
        }
    }

    /// Bind an OS protector. The desired style survives attach/detach so a
    /// window re-attach (config change) resumes the same policy.
    pub fn attach_protector(&mut self, protector: Box<dyn ScreenProtector>) {
        self.protector = Some(protector);
    }

    pub fn detach_protector(&mut self) {
        // Whatever was applied went away with the window.
        self.applied = AppliedProtection::Unapplied;
        self.protector = None;
    }

    pub fn has_protector(&self) -> bool {
        self.protector.is_some()
    }

    pub fn desired_style(&self) -> &ProtectionStyle {
        &self.desired
    }

    pub fn applied(&self) -> &AppliedProtection {
        &self.applied
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    pub fn capture_allowed(&self) -> bool {
        self.capture_allowed
    }

    /// Store the style to apply on the next background transition.
    /// An explicit `None` is an opt-out and clears any applied overlay
    /// immediately, whatever the phase.
    pub fn set_background_style(&mut self, style: ProtectionStyle) {
        if style == ProtectionStyle::None {
            self.clear_applied();
        }
        debug!(style = %style, "background protection style set");
        self.desired = style;
    }

    /// The app is leaving the foreground: apply the desired style.
    pub fn will_background(&mut self) {
        if self.desired != ProtectionStyle::None
            && self.applied != AppliedProtection::Applied(self.desired.clone())
        {
            self.apply_desired();
        }
        self.phase = LifecyclePhase::Background;
    }

    /// The app returned to the foreground: clear unconditionally.
    /// Protection is a background-only policy, not a persistent lock.
    pub fn did_foreground(&mut self) {
        self.clear_applied();
        self.phase = LifecyclePhase::Foreground;
    }

    /// Direct toggle: allow screenshots immediately, independent of style
    /// and phase.
    pub fn enable_capture(&mut self) -> bool {
        if let Some(protector) = self.protector.as_mut() {
            protector.set_capture_allowed(true);
        }
        self.capture_allowed = true;
        true
    }

    /// Direct toggle: block screenshots immediately, independent of style
    /// and phase.
    pub fn disable_capture(&mut self) -> bool {
        if let Some(protector) = self.protector.as_mut() {
            protector.set_capture_allowed(false);
        }
        self.capture_allowed = false;
        true
    }

    fn apply_desired(&mut self) {
        let Some(protector) = self.protector.as_mut() else {
            return;
        };
        match &self.desired {
            ProtectionStyle::Blur => protector.apply_blur(),
            ProtectionStyle::Color(hex) => protector.apply_color(hex),
            ProtectionStyle::Image(asset) => protector.apply_image(asset),
            ProtectionStyle::None => return,
        }
        self.applied = AppliedProtection::Applied(self.desired.clone());
        debug!(style = %self.desired, "protection applied");
    }

    fn clear_applied(&mut self) {
        if !self.applied.is_applied() {
            return;
        }
        if let Some(protector) = self.protector.as_mut() {
            protector.clear_overlay();
        }
        self.applied = AppliedProtection::Unapplied;
        debug!("protection cleared");
    }
}
