use crate::model::{Product, Scorecard};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

/// Application state passed explicitly through command handlers. Cached lists
/// are replaced wholesale on each successful load, never merged.
#[derive(Debug, Default)]
pub struct AppState {
    pub session: Option<Session>,
    products: Vec<Product>,
    scorecards: Vec<Scorecard>,
}

impl AppState {
    pub fn with_session(session: Option<Session>) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    pub fn session_state(&self) -> SessionState {
        if self.session.is_some() {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }

    pub fn set_session(&mut self, session: Session) {
        self.session = Some(session);
    }

    pub fn clear_session(&mut self) {
        self.session = None;
    }

    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn scorecards(&self) -> &[Scorecard] {
        &self.scorecards
    }

    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn replace_scorecards(&mut self, scorecards: Vec<Scorecard>) {
        self.scorecards = scorecards;
    }

    pub fn product_name(&self, product_id: i64) -> Option<&str> {
        self.products
            .iter()
            .find(|p| p.id == product_id)
            .map(|p| p.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: None,
            created_at: None,
        }
    }

    #[test]
    fn test_session_state_transitions() {
        let mut state = AppState::default();
        assert_eq!(state.session_state(), SessionState::LoggedOut);

        state.set_session(Session {
            token: "tok".to_string(),
            current_user: None,
        });
        assert_eq!(state.session_state(), SessionState::LoggedIn);

        state.clear_session();
        assert_eq!(state.session_state(), SessionState::LoggedOut);
    }

    #[test]
    fn test_replace_products_is_wholesale() {
        let mut state = AppState::default();
        state.replace_products(vec![product(1, "Alpha"), product(2, "Beta")]);
        state.replace_products(vec![product(3, "Gamma")]);
        assert_eq!(state.products().len(), 1);
        assert_eq!(state.product_name(3), Some("Gamma"));
        assert_eq!(state.product_name(1), None);
    }
}
