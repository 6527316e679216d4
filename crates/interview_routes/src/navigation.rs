use tracing::{info, warn};

use crate::page::Page;
use crate::table::{NavLink, RouteTable};

/// Owns the current path of one session and answers what it renders.
///
/// Navigation only replaces the path; there is no history stack here.
#[derive(Debug, Clone)]
pub struct Navigator<'t> {
    table: &'t RouteTable,
    current: String,
}

impl<'t> Navigator<'t> {
    pub fn new(table: &'t RouteTable, initial_path: impl Into<String>) -> Self {
        Self {
            table,
            current: initial_path.into(),
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current
    }

    pub fn navigate(&mut self, target: &str) {
        if self.current == target {
            return;
        }

        match self.table.resolve(target) {
            Some(page) => info!(from = %self.current, to = target, %page, "navigating"),
            None => warn!(from = %self.current, to = target, "navigating to a path with no page"),
        }

        target.clone_into(&mut self.current);
    }

    pub fn follow(&mut self, link: &NavLink<'_>) {
        self.navigate(link.path);
    }

    pub fn render(&self) -> Option<Page> {
        self.table.resolve(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::Navigator;
    use crate::page::Page;
    use crate::table::app_routes;

    #[test]
    fn starts_on_the_loaded_path() {
        let nav = Navigator::new(app_routes(), "/interview");

        assert_eq!(nav.current_path(), "/interview");
        assert_eq!(nav.render(), Some(Page::Interview));
    }

    #[test]
    fn loaded_on_unbound_path_renders_nothing() {
        let nav = Navigator::new(app_routes(), "/");

        assert_eq!(nav.render(), None);
    }

    #[test]
    fn navigating_to_chat_always_renders_chat() {
        for start in ["/", "/login", "/chat", "/interview2", "/member3", "/nowhere"] {
            let mut nav = Navigator::new(app_routes(), start);
            nav.navigate("/chat");

            assert_eq!(nav.render(), Some(Page::Chat), "starting from '{start}'");
        }
    }

    #[test]
    fn navigating_twice_is_the_same_as_once() {
        let mut once = Navigator::new(app_routes(), "/login");
        once.navigate("/interview2");

        let mut twice = Navigator::new(app_routes(), "/login");
        twice.navigate("/interview2");
        twice.navigate("/interview2");

        assert_eq!(once.current_path(), twice.current_path());
        assert_eq!(once.render(), twice.render());
    }

    #[test]
    fn navigating_away_to_unbound_path_clears_the_page() {
        let mut nav = Navigator::new(app_routes(), "/chat");
        nav.navigate("/member1");

        assert_eq!(nav.current_path(), "/member1");
        assert_eq!(nav.render(), None);
    }

    #[test]
    fn interview_chat2_link_goes_to_interview2() {
        let link = app_routes()
            .nav_links()
            .find(|l| l.label == "Interview-Chat2")
            .unwrap();

        let mut nav = Navigator::new(app_routes(), "/interview");
        nav.follow(&link);

        assert_eq!(nav.current_path(), "/interview2");
        assert_eq!(nav.render(), Some(Page::Interview2));
    }

    #[test]
    fn every_link_renders_its_own_page() {
        let mut nav = Navigator::new(app_routes(), "/");

        for link in app_routes().nav_links() {
            nav.follow(&link);
            assert_eq!(nav.render(), app_routes().resolve(link.path));
            assert!(nav.render().is_some());
        }
    }
}
