use tracing::debug;

/// OS-level collaborator that blocks capture or draws overlays.
///
/// Implementations bind to a platform window surface; the controller only
/// decides when each sub-operation fires.
pub trait ScreenProtector {
    fn apply_blur(&mut self);
    fn apply_color(&mut self, hex: &str);
    fn apply_image(&mut self, asset: &str);
    fn clear_overlay(&mut self);
    fn set_capture_allowed(&mut self, allowed: bool);
}

/// Protector that only logs. Stands in on hosts without a window surface.
#[derive(Debug, Default)]
pub struct TracingProtector;

impl ScreenProtector for TracingProtector {
    fn apply_blur(&mut self) {
        debug!("apply blur overlay");
    }

    fn apply_color(&mut self, hex: &str) {
        debug!(hex, "apply color overlay");
    }

    fn apply_image(&mut self, asset: &str) {
        debug!(asset, "apply image overlay");
    }

    fn clear_overlay(&mut self) {
        debug!("clear overlay");
    }

    fn set_capture_allowed(&mut self, allowed: bool) {
        debug!(allowed, "set capture allowed");
    }
}
