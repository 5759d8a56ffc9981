use std::path::PathBuf;

pub const ENV_API_URL: &str = "SCOREDECK_API_URL";
pub const ENV_SESSION_FILE: &str = "SCOREDECK_SESSION_FILE";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

pub fn resolve_api_url(flag: Option<String>) -> String {
    if let Some(url) = flag {
        let trimmed = url.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    if let Ok(url) = std::env::var(ENV_API_URL) {
        let trimmed = url.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    DEFAULT_API_URL.to_string()
}

pub fn resolve_session_path() -> PathBuf {
    if let Ok(explicit) = std::env::var(ENV_SESSION_FILE) {
        let trimmed = explicit.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = xdg_config_home.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed).join("scoredeck").join("session.json");
        }
    }

    if let Ok(home) = std::env::var("HOME") {
        let trimmed = home.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed)
                .join(".config")
                .join("scoredeck")
                .join("session.json");
        }
    }

    PathBuf::from(".scoredeck").join("session.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_default() {
        assert_eq!(
            resolve_api_url(Some("http://api.internal:9000".to_string())),
            "http://api.internal:9000"
        );
    }

    #[test]
    fn test_blank_flag_falls_through() {
        // A blank flag must not shadow the configured fallback chain.
        let resolved = resolve_api_url(Some("   ".to_string()));
        assert_ne!(resolved, "   ");
        assert!(!resolved.is_empty());
    }
}
