use std::fmt::Display;

/// A renderable unit the router can bind a path to.
///
/// The router never looks inside a page; it only hands the identifier to
/// whoever renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Chat,
    Interview,
    Interview2,
    MemberWork1,
    MemberWork2,
    MemberWork3,
    ConfidenceTracker,
}

impl Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Page::Login => "login",
            Page::Chat => "chat",
            Page::Interview => "interview",
            Page::Interview2 => "interview2",
            Page::MemberWork1 => "member-work-1",
            Page::MemberWork2 => "member-work-2",
            Page::MemberWork3 => "member-work-3",
            Page::ConfidenceTracker => "confidence-tracker",
        };

        f.write_str(name)
    }
}
