//! Minimal host harness for the command surface.
//!
//! Reads one JSON request per stdin line (`{"method": "...", "args": {...}}`)
//! and writes one JSON reply per line. Lifecycle notifications arrive over
//! the same channel as `appWillBackground` / `appDidForeground`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use command_api::{AppContext, Dispatcher};
use screen_protect::TracingProtector;
use serde_json::{json, Value};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut dispatcher = Dispatcher::new();
    let app = app_context_from_env();
    info!(package = %app.package_name, "guard host started");
    dispatcher.attach_app(app);
    dispatcher.attach_protector(Box::new(TracingProtector));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let reply = handle_line(&mut dispatcher, trimmed);
        serde_json::to_writer(&mut out, &reply)?;
        out.write_all(b"\n")?;
        out.flush()?;
    }

    info!("guard host stopped");
    Ok(())
}

fn handle_line(dispatcher: &mut Dispatcher, line: &str) -> Value {
    let request: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(err) => return error_reply("INVALID_ARGUMENTS", &format!("malformed request: {err}")),
    };
    let Some(method) = request.get("method").and_then(Value::as_str) else {
        return error_reply("INVALID_ARGUMENTS", "missing method");
    };

    match method {
        "appWillBackground" => {
            dispatcher.on_will_background();
            json!({ "result": null })
        }
        "appDidForeground" => {
            dispatcher.on_did_foreground();
            json!({ "result": null })
        }
        _ => {
            let args = request.get("args").cloned().unwrap_or_else(|| json!({}));
            match dispatcher.dispatch(method, &args) {
                Ok(value) => json!({ "result": value }),
                Err(err) => error_reply(err.code(), &err.to_string()),
            }
        }
    }
}

fn error_reply(code: &str, message: &str) -> Value {
    json!({ "error": { "code": code, "message": message } })
}

fn app_context_from_env() -> AppContext {
    AppContext {
        package_name: env_or("APPGUARD_PACKAGE_NAME", "com.appguard.host"),
        expected_package_name: std::env::var("APPGUARD_EXPECTED_PACKAGE_NAME").ok(),
        data_dir: PathBuf::from(env_or("APPGUARD_DATA_DIR", "/data/local/tmp")),
        signing_certificates: Vec::new(),
        provisioning_profile: std::env::var("APPGUARD_PROVISIONING_PROFILE")
            .ok()
            .and_then(|path| std::fs::read(path).ok()),
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
