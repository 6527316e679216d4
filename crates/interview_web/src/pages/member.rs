//! Member work pages. They have table entries but are never registered
//! with the router, so nothing links to them.

use yew::{function_component, html, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct MemberWorkProps {
    pub member: u8,
}

#[function_component]
pub fn MemberWork(props: &MemberWorkProps) -> Html {
    html! {
        <section class="member-page">
            <h1>{format!("Member {} Work", props.member)}</h1>
        </section>
    }
}

#[function_component]
pub fn ConfidenceTracker() -> Html {
    html! {
        <section class="member-page">
            <h1>{"Confidence Tracker"}</h1>
        </section>
    }
}
