use yew::{function_component, html, Html};

#[function_component]
pub fn Chat() -> Html {
    html! {
        <section class="chat-page">
            <h1>{"Chat"}</h1>
        </section>
    }
}
