use std::cell::RefCell;
use std::rc::Rc;

use screen_protect::{
    AppliedProtection, LifecyclePhase, ProtectionController, ProtectionStyle, ScreenProtector,
};

#[derive(Default)]
struct RecordingProtector {
    ops: Rc<RefCell<Vec<String>>>,
}

impl ScreenProtector for RecordingProtector {
    fn apply_blur(&mut self) {
        self.ops.borrow_mut().push("blur".to_string());
    }

    fn apply_color(&mut self, hex: &str) {
        self.ops.borrow_mut().push(format!("color:{hex}"));
    }

    fn apply_image(&mut self, asset: &str) {
        self.ops.borrow_mut().push(format!("image:{asset}"));
    }

    fn clear_overlay(&mut self) {
        self.ops.borrow_mut().push("clear".to_string());
    }

    fn set_capture_allowed(&mut self, allowed: bool) {
        self.ops.borrow_mut().push(format!("capture:{allowed}"));
    }
}

fn controller_with_recorder() -> (ProtectionController, Rc<RefCell<Vec<String>>>) {
    let ops = Rc::new(RefCell::new(Vec::new()));
    let mut controller = ProtectionController::new();
    controller.attach_protector(Box::new(RecordingProtector {
        ops: Rc::clone(&ops),
    }));
    (controller, ops)
}

#[test]
fn color_style_round_trips_through_the_lifecycle() {
    let (mut controller, ops) = controller_with_recorder();

    controller.set_background_style(ProtectionStyle::Color("#FF0000".to_string()));
    // Deferred: nothing is applied until the app actually backgrounds.
    assert_eq!(*controller.applied(), AppliedProtection::Unapplied);
    assert!(ops.borrow().is_empty());

    controller.will_background();
    assert_eq!(controller.phase(), LifecyclePhase::Background);
    assert_eq!(
        *controller.applied(),
        AppliedProtection::Applied(ProtectionStyle::Color("#FF0000".to_string()))
    );
    assert_eq!(*ops.borrow(), vec!["color:#FF0000".to_string()]);

    controller.did_foreground();
    assert_eq!(controller.phase(), LifecyclePhase::Foreground);
    assert_eq!(*controller.applied(), AppliedProtection::Unapplied);
    assert_eq!(
        *ops.borrow(),
        vec!["color:#FF0000".to_string(), "clear".to_string()]
    );
}

#[test]
fn duplicate_background_notifications_are_no_ops() {
    let (mut controller, ops) = controller_with_recorder();
    controller.set_background_style(ProtectionStyle::Blur);

    controller.will_background();
    controller.will_background();

    assert_eq!(
        *controller.applied(),
        AppliedProtection::Applied(ProtectionStyle::Blur)
    );
    assert_eq!(ops.borrow().len(), 1);
}

#[test]
fn duplicate_foreground_notifications_are_no_ops() {
    let (mut controller, ops) = controller_with_recorder();
    controller.set_background_style(ProtectionStyle::Blur);
    controller.will_background();

    controller.did_foreground();
    controller.did_foreground();

    assert_eq!(*controller.applied(), AppliedProtection::Unapplied);
    // One apply, one clear; the second foreground added nothing.
    assert_eq!(ops.borrow().len(), 2);
}

#[test]
fn opting_out_clears_immediately_while_backgrounded() {
    let (mut controller, ops) = controller_with_recorder();
    controller.set_background_style(ProtectionStyle::Blur);
    controller.will_background();
    assert!(controller.applied().is_applied());

    controller.set_background_style(ProtectionStyle::None);

    assert_eq!(*controller.applied(), AppliedProtection::Unapplied);
    assert_eq!(controller.phase(), LifecyclePhase::Background);
    assert_eq!(ops.borrow().last().map(String::as_str), Some("clear"));

    // A later background transition must not re-apply anything.
    controller.will_background();
    assert_eq!(*controller.applied(), AppliedProtection::Unapplied);
}

#[test]
fn direct_capture_toggles_ignore_style_and_phase() {
    let (mut controller, ops) = controller_with_recorder();
    assert!(controller.capture_allowed());

    assert!(controller.disable_capture());
    assert!(!controller.capture_allowed());
    assert_eq!(ops.borrow().last().map(String::as_str), Some("capture:false"));

    controller.will_background();
    assert!(controller.enable_capture());
    assert!(controller.capture_allowed());
    assert_eq!(ops.borrow().last().map(String::as_str), Some("capture:true"));
}

#[test]
fn desired_style_survives_protector_reattach() {
    let (mut controller, first_ops) = controller_with_recorder();
    controller.set_background_style(ProtectionStyle::Image("cover.png".to_string()));
    controller.detach_protector();
    assert!(!controller.has_protector());

    let second_ops = Rc::new(RefCell::new(Vec::new()));
    controller.attach_protector(Box::new(RecordingProtector {
        ops: Rc::clone(&second_ops),
    }));

    controller.will_background();
    assert!(first_ops.borrow().is_empty());
    assert_eq!(*second_ops.borrow(), vec!["image:cover.png".to_string()]);
}

#[test]
fn lifecycle_without_a_protector_only_tracks_phase() {
    let mut controller = ProtectionController::new();
    controller.set_background_style(ProtectionStyle::Blur);

    controller.will_background();
    // Nothing was actually applied on screen, so applied stays unapplied.
    assert_eq!(*controller.applied(), AppliedProtection::Unapplied);
    assert_eq!(controller.phase(), LifecyclePhase::Background);

    controller.did_foreground();
    assert_eq!(controller.phase(), LifecyclePhase::Foreground);
}
