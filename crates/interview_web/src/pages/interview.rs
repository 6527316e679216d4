use yew::{function_component, html, Html};

#[function_component]
pub fn Interview() -> Html {
    html! {
        <section class="interview-page">
            <h1>{"Interview-Chat1"}</h1>
        </section>
    }
}

#[function_component]
pub fn Interview2() -> Html {
    html! {
        <section class="interview-page">
            <h1>{"Interview-Chat2"}</h1>
        </section>
    }
}
