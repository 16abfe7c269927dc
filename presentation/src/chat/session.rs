//! Per-run session state for the interactive REPL

use promptcraft_domain::ChatbotDomain;

/// Who is logged in and which domain they are generating for.
///
/// Prompt generation is only reachable while `username` is set.
#[derive(Debug, Clone)]
pub struct Session {
    username: Option<String>,
    domain: ChatbotDomain,
    default_domain: ChatbotDomain,
}

impl Session {
    pub fn new(default_domain: ChatbotDomain) -> Self {
        Self {
            username: None,
            domain: default_domain,
            default_domain,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn domain(&self) -> ChatbotDomain {
        self.domain
    }

    pub fn set_domain(&mut self, domain: ChatbotDomain) {
        self.domain = domain;
    }

    /// Mark `username` as logged in and reset the domain
    pub fn login(&mut self, username: impl Into<String>) {
        self.username = Some(username.into());
        self.domain = self.default_domain;
    }

    /// Clear the login; returns the user that was logged in
    pub fn logout(&mut self) -> Option<String> {
        self.domain = self.default_domain;
        self.username.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_logged_out() {
        let session = Session::new(ChatbotDomain::HrBot);
        assert!(!session.is_logged_in());
        assert_eq!(session.username(), None);
        assert_eq!(session.domain(), ChatbotDomain::HrBot);
    }

    #[test]
    fn test_logout_resets_domain() {
        let mut session = Session::new(ChatbotDomain::CustomerSupport);
        session.login("alice");
        session.set_domain(ChatbotDomain::HealthcareAssistant);

        assert_eq!(session.logout().as_deref(), Some("alice"));
        assert!(!session.is_logged_in());
        assert_eq!(session.domain(), ChatbotDomain::CustomerSupport);
        assert_eq!(session.logout(), None);
    }
}
