use std::time::{Duration, Instant};

pub const ALERT_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    shown_at: Instant,
}

impl Alert {
    pub fn banner(&self) -> String {
        match self.kind {
            AlertKind::Success => format!("[OK] {}", self.message),
            AlertKind::Error => format!("[ERROR] {}", self.message),
        }
    }
}

/// Holds at most one transient alert. Showing a new alert replaces the
/// current one; an alert stops being visible 5 seconds after it was shown.
#[derive(Debug, Default)]
pub struct AlertPresenter {
    current: Option<Alert>,
}

impl AlertPresenter {
    pub fn show(&mut self, kind: AlertKind, message: impl Into<String>, now: Instant) {
        self.current = Some(Alert {
            kind,
            message: message.into(),
            shown_at: now,
        });
    }

    pub fn current(&self, now: Instant) -> Option<&Alert> {
        let alert = self.current.as_ref()?;
        if now.duration_since(alert.shown_at) >= ALERT_TTL {
            return None;
        }
        Some(alert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_alert_replaces_current() {
        let now = Instant::now();
        let mut alerts = AlertPresenter::default();
        alerts.show(AlertKind::Success, "saved", now);
        alerts.show(AlertKind::Error, "failed", now);

        let current = alerts.current(now).unwrap();
        assert_eq!(current.kind, AlertKind::Error);
        assert_eq!(current.message, "failed");
    }

    #[test]
    fn test_alert_auto_dismisses_after_ttl() {
        let now = Instant::now();
        let mut alerts = AlertPresenter::default();
        alerts.show(AlertKind::Success, "saved", now);

        assert!(alerts.current(now + Duration::from_secs(4)).is_some());
        assert!(alerts.current(now + ALERT_TTL).is_none());
    }

    #[test]
    fn test_banner_styling() {
        let now = Instant::now();
        let mut alerts = AlertPresenter::default();
        alerts.show(AlertKind::Error, "Login failed: Unknown error", now);
        assert_eq!(
            alerts.current(now).unwrap().banner(),
            "[ERROR] Login failed: Unknown error"
        );
    }
}
