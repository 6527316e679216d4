use validator::{Validate, ValidationErrors};

use crate::page::Page;
use crate::validation::absolute_path;

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct RouteEntry {
    #[validate(custom = "absolute_path", length(min = 1, max = 128))]
    path: String,
    page: Page,
    #[validate(length(min = 1, max = 64))]
    label: String,
    enabled: bool,
}

impl RouteEntry {
    pub fn new(
        path: impl Into<String>,
        page: Page,
        label: impl Into<String>,
        enabled: bool,
    ) -> Result<Self, ValidationErrors> {
        let raw_entry = Self {
            path: path.into(),
            page,
            label: label.into(),
            enabled,
        };

        raw_entry.validate()?;
        Ok(raw_entry)
    }

    /// Shorthand for an entry that takes part in routing and navigation.
    pub fn active(
        path: impl Into<String>,
        page: Page,
        label: impl Into<String>,
    ) -> Result<Self, ValidationErrors> {
        Self::new(path, page, label, true)
    }

    /// Shorthand for an entry that is declared but never registered.
    pub fn disabled(
        path: impl Into<String>,
        page: Page,
        label: impl Into<String>,
    ) -> Result<Self, ValidationErrors> {
        Self::new(path, page, label, false)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::RouteEntry;
    use crate::page::Page;

    #[test]
    fn keeps_what_it_was_given() {
        let entry = RouteEntry::active("/chat", Page::Chat, "Chat").unwrap();

        assert_eq!(entry.path(), "/chat");
        assert_eq!(entry.page(), Page::Chat);
        assert_eq!(entry.label(), "Chat");
        assert!(entry.enabled());
    }

    #[test]
    fn rejects_relative_path() {
        let errors = RouteEntry::active("chat", Page::Chat, "Chat").unwrap_err();

        assert!(errors.field_errors().contains_key("path"));
    }

    #[test]
    fn rejects_empty_label() {
        let errors = RouteEntry::disabled("/member1", Page::MemberWork1, "").unwrap_err();

        assert!(errors.field_errors().contains_key("label"));
    }

    #[test]
    fn rejects_query_in_path() {
        assert!(RouteEntry::active("/login?next=/chat", Page::Login, "Login").is_err());
    }
}
