//! Environment-variable overrides for probe configuration.

pub(crate) fn env_path_list(name: &str, fallback: Vec<String>) -> Vec<String> {
    let Ok(raw) = std::env::var(name) else {
        return fallback;
    };
    let mut out = Vec::new();
    for part in raw.split(',') {
        let trimmed = part.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_string());
        }
    }
    if out.is_empty() {
        fallback
    } else {
        out
    }
}

pub(crate) fn env_bool(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(raw) => matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => default,
    }
}
