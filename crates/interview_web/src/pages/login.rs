use web_sys::HtmlInputElement;
use yew::events::InputEvent;
use yew::{function_component, html, use_state, AttrValue, Callback, Html, TargetCast, UseStateHandle};

/// `(label, input type)` of the login form, top to bottom.
const FIELDS: [(&str, &str); 2] = [("User ID", "text"), ("Password", "password")];

/// Text field that mirrors what is typed into `state`.
fn field(label: &'static str, kind: &'static str, state: &UseStateHandle<String>) -> Html {
    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.set(input.value());
            }
        })
    };

    html! {
        <label class="login-field">
            {label}
            <input type={kind} {oninput} value={AttrValue::from((**state).clone())} />
        </label>
    }
}

// Only holds the form state; signing in lives outside this app shell.
#[function_component]
pub fn Login() -> Html {
    let user_id = use_state(String::new);
    let password = use_state(String::new);

    html! {
        <section class="login-page">
            <h1>{"Login"}</h1>
            {field(FIELDS[0].0, FIELDS[0].1, &user_id)}
            {field(FIELDS[1].0, FIELDS[1].1, &password)}
        </section>
    }
}
