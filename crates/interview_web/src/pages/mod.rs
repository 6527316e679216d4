pub mod chat;
pub mod interview;
pub mod login;
pub mod member;

use chat::Chat;
use interview::{Interview, Interview2};
use interview_routes::Page;
use login::Login;
use member::{ConfidenceTracker, MemberWork};
use yew::{html, Html};
use yew_router::Routable;

/// Paths registered with the browser router. Only enabled table entries
/// appear here; the member pages are never routable.
#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/chat")]
    Chat,
    #[at("/interview")]
    Interview,
    #[at("/interview2")]
    Interview2,
}

impl Route {
    pub fn page(self) -> Page {
        match self {
            Route::Login => Page::Login,
            Route::Chat => Page::Chat,
            Route::Interview => Page::Interview,
            Route::Interview2 => Page::Interview2,
        }
    }
}

pub fn switch(route: Route) -> Html {
    view(route.page())
}

pub fn view(page: Page) -> Html {
    match page {
        Page::Login => html!(<Login />),
        Page::Chat => html!(<Chat />),
        Page::Interview => html!(<Interview />),
        Page::Interview2 => html!(<Interview2 />),
        Page::MemberWork1 => html!(<MemberWork member={1} />),
        Page::MemberWork2 => html!(<MemberWork member={2} />),
        Page::MemberWork3 => html!(<MemberWork member={3} />),
        Page::ConfidenceTracker => html!(<ConfidenceTracker />),
    }
}
