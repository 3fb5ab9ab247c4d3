use serde_json::Value;
use tracing::{debug, warn};

use screen_protect::{ProtectionController, ProtectionStyle, ScreenProtector};
use trust_eval::{
    digest_first_certificate, signature_from_provisioning_profile, AppCloneProbe,
    DebuggerProbe, DebuggingModeProbe, DeveloperModeProbe, EmulatorProbe, NullCloneProbe,
    RootProbe, SignalProbe, TrustEvaluator,
};

use crate::context::AppContext;
use crate::error::{DispatchError, DispatchResult};

/// Routes named commands to the trust evaluator and the protection
/// controller. Calls are serialized by the host; every command is handled
/// synchronously and returns exactly one result.
pub struct Dispatcher {
    app: Option<AppContext>,
    controller: ProtectionController,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            app: None,
            controller: ProtectionController::new(),
        }
    }

    pub fn attach_app(&mut self, app: AppContext) {
        self.app = Some(app);
    }

    pub fn detach_app(&mut self) {
        self.app = None;
    }

    pub fn attach_protector(&mut self, protector: Box<dyn ScreenProtector>) {
        self.controller.attach_protector(protector);
    }

    pub fn detach_protector(&mut self) {
        self.controller.detach_protector();
    }

    pub fn controller(&self) -> &ProtectionController {
        &self.controller
    }

    /// Lifecycle notification: the app is about to leave the foreground.
    pub fn on_will_background(&mut self) {
        self.controller.will_background();
    }

    /// Lifecycle notification: the app returned to the foreground.
    pub fn on_did_foreground(&mut self) {
        self.controller.did_foreground();
    }

    pub fn dispatch(&mut self, method: &str, args: &Value) -> DispatchResult {
        debug!(method, "dispatch");
        let Some(app) = self.app.as_ref() else {
            warn!(method, "command rejected, app context not attached");
            return Err(DispatchError::Unavailable(
                "host application context not attached".to_string(),
            ));
        };

        match method {
            "getPlatformVersion" => Ok(Value::String(platform_version())),
            "isDeviceRooted" => Ok(Value::Bool(RootProbe::default().check())),
            "isDeveloperModeEnabled" => Ok(Value::Bool(DeveloperModeProbe.check())),
            "isDebuggingModeEnable" => Ok(Value::Bool(DebuggingModeProbe.check())),
            "isEmulator" => Ok(Value::Bool(EmulatorProbe::default().check())),
            "isDebuggerAttached" => Ok(Value::Bool(DebuggerProbe.check())),
            "isAppCloned" => {
                require_ui(&self.controller, "app clone check")?;
                Ok(Value::Bool(clone_probe(app).check()))
            }
            "isDeviceSafe" => {
                // Without a UI surface the clone dimension is unobservable;
                // the probe answers false rather than failing the verdict.
                let probe: Box<dyn SignalProbe> = if self.controller.has_protector() {
                    Box::new(clone_probe(app))
                } else {
                    Box::new(NullCloneProbe)
                };
                let verdict = TrustEvaluator::platform(probe).evaluate();
                Ok(Value::Bool(verdict.safe))
            }
            "getAppSignature" => Ok(app_signature(app)
                .map(Value::String)
                .unwrap_or(Value::Null)),
            "enableScreenshot" => {
                require_ui(&self.controller, "screenshot toggle")?;
                Ok(Value::Bool(self.controller.enable_capture()))
            }
            "disableScreenshot" => {
                require_ui(&self.controller, "screenshot toggle")?;
                Ok(Value::Bool(self.controller.disable_capture()))
            }
            "setBackgroundProtection" => {
                require_ui(&self.controller, "background protection")?;
                let style = style_from_args(args)?;
                self.controller.set_background_style(style);
                Ok(Value::Null)
            }
            other => {
                warn!(method = other, "unknown command");
                Err(DispatchError::NotImplemented(other.to_string()))
            }
        }
    }
}

fn require_ui(controller: &ProtectionController, what: &str) -> Result<(), DispatchError> {
    if controller.has_protector() {
        Ok(())
    } else {
        warn!(what, "command rejected, no window surface attached");
        Err(DispatchError::Unavailable(format!(
            "no window surface attached for {what}"
        )))
    }
}

fn clone_probe(app: &AppContext) -> AppCloneProbe {
    AppCloneProbe::new(
        app.expected_package_name.clone(),
        app.package_name.clone(),
        app.data_dir.clone(),
    )
}

/// Prefer directly supplied certificates, fall back to the embedded
/// provisioning profile.
fn app_signature(app: &AppContext) -> Option<String> {
    digest_first_certificate(&app.signing_certificates).or_else(|| {
        app.provisioning_profile
            .as_deref()
            .and_then(signature_from_provisioning_profile)
    })
}

fn style_from_args(args: &Value) -> Result<ProtectionStyle, DispatchError> {
    let style = args
        .get("style")
        .and_then(Value::as_str)
        .ok_or_else(|| DispatchError::InvalidArguments("missing style".to_string()))?;
    let color = args.get("color").and_then(Value::as_str);
    let asset = args.get("assetImage").and_then(Value::as_str);
    ProtectionStyle::from_parts(style, color, asset)
        .map_err(|err| DispatchError::InvalidArguments(err.to_string()))
}

fn platform_version() -> String {
    let os = std::env::consts::OS;
    match std::fs::read_to_string("/proc/sys/kernel/osrelease") {
        Ok(release) => format!("{os} {}", release.trim()),
        Err(_) => os.to_string(),
    }
}
