use interview_routes::RouteTable;
use stylist::yew::styled_component;
use tracing::warn;
use yew::{html, Html, Properties};
use yew_router::components::Link;
use yew_router::Routable;

use crate::pages::Route;

#[derive(Properties)]
pub struct NavBarProps {
    pub routes: &'static RouteTable,
}

impl PartialEq for NavBarProps {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.routes, other.routes)
    }
}

/// One link per enabled route entry, in table order.
#[styled_component]
pub fn NavBar(props: &NavBarProps) -> Html {
    let links = props
        .routes
        .nav_links()
        .filter_map(|link| match Route::recognize(link.path) {
            Some(route) => Some((link.label, route)),
            None => {
                warn!(path = link.path, "nav link has no registered route, skipping");
                None
            }
        })
        .map(|(label, route)| {
            html! {
                <li>
                    <Link<Route> to={route}>{label}</Link<Route>>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <nav class={css!(r#"
            background-color: #f3f4f6;
            box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
            padding: 1rem;
            border-radius: 0.375rem;

            ul {
                display: flex;
                gap: 1rem;
                justify-content: center;
                list-style: none;
                margin: 0;
                padding: 0;
            }

            a {
                padding: 0.5rem 1rem;
                border: 1px solid #ef4444;
                color: #dc2626;
                border-radius: 0.25rem;
                text-decoration: none;
                transition: background-color 200ms;
            }

            a:hover {
                background-color: #fee2e2;
            }
        "#)}>
            <ul>{links}</ul>
        </nav>
    }
}
