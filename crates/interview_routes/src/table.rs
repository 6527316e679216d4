use std::collections::HashSet;

use once_cell::sync::Lazy;
use tracing::debug;
use validator::ValidationErrors;

use crate::entry::RouteEntry;
use crate::page::Page;

#[derive(thiserror::Error, Debug)]
pub enum RouteTableError {
    #[error("The route entry for '{path}' is malformed: {source}")]
    InvalidEntry {
        path: String,
        #[source]
        source: ValidationErrors,
    },

    #[error("The path '{0}' is bound by more than one enabled route entry.")]
    DuplicatePath(String),
}

/// A user-activatable control that moves the router to `path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink<'a> {
    pub label: &'a str,
    pub path: &'a str,
}

/// Ordered, immutable set of path to page bindings.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Builds a table, rejecting two enabled entries on the same path.
    /// Disabled entries are not checked against each other since they never match.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        let mut seen = HashSet::new();

        for entry in entries.iter().filter(|e| e.enabled()) {
            if !seen.insert(entry.path()) {
                return Err(RouteTableError::DuplicatePath(entry.path().to_owned()));
            }
        }

        Ok(Self { entries })
    }

    /// Builds a table from raw `(path, page, label, enabled)` rows.
    pub fn from_rows<'a, I>(rows: I) -> Result<Self, RouteTableError>
    where
        I: IntoIterator<Item = (&'a str, Page, &'a str, bool)>,
    {
        let entries = rows
            .into_iter()
            .map(|(path, page, label, enabled)| {
                RouteEntry::new(path, page, label, enabled).map_err(|source| {
                    RouteTableError::InvalidEntry {
                        path: path.to_owned(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(entries)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    fn active(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter().filter(|e| e.enabled())
    }

    /// Page bound to `path`, or `None` when nothing should be rendered.
    /// One trailing slash is ignored, so `/chat/` resolves like `/chat`.
    pub fn resolve(&self, path: &str) -> Option<Page> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        let page = self
            .active()
            .find(|e| e.path() == trimmed)
            .map(RouteEntry::page);
        debug!(path, ?page, "resolved route");

        page
    }

    pub fn path_of(&self, page: Page) -> Option<&str> {
        self.active()
            .find(|e| e.page() == page)
            .map(RouteEntry::path)
    }

    pub fn nav_links(&self) -> impl Iterator<Item = NavLink<'_>> {
        self.active().map(|e| NavLink {
            label: e.label(),
            path: e.path(),
        })
    }
}

const APP_ROUTES: [(&str, Page, &str, bool); 8] = [
    ("/member1", Page::MemberWork1, "Go to Member 1 Work", false),
    ("/member2", Page::MemberWork2, "Go to Member 2 Work", false),
    ("/member3", Page::MemberWork3, "Go to Member 3 Work", false),
    ("/member4", Page::ConfidenceTracker, "Go to Member 4 Work", false),
    ("/login", Page::Login, "Login", true),
    ("/chat", Page::Chat, "Chat", true),
    ("/interview", Page::Interview, "Interview-Chat1", true),
    ("/interview2", Page::Interview2, "Interview-Chat2", true),
];

static APP_TABLE: Lazy<RouteTable> =
    Lazy::new(|| RouteTable::from_rows(APP_ROUTES).expect("application route table is malformed"));

/// The route table the application is served with.
pub fn app_routes() -> &'static RouteTable {
    &APP_TABLE
}
