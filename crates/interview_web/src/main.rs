mod components;
mod config;
mod hooks;
mod pages;

use interview_routes::{app_routes, RouteTable};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::{FmtSpan, Pretty};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use yew::{function_component, html, AttrValue, Html, Properties};
use yew_router::{BrowserRouter, Switch};

use crate::components::nav_bar::NavBar;
use crate::config::AppConfig;
use crate::hooks::route_logging::use_route_logging;
use crate::pages::{switch, Route};

#[derive(Properties)]
struct ShellProps {
    routes: &'static RouteTable,
}

impl PartialEq for ShellProps {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.routes, other.routes)
    }
}

#[function_component]
fn Shell(props: &ShellProps) -> Html {
    use_route_logging(props.routes);

    html! {
        <div class="main-container">
            <NavBar routes={props.routes} />
            <Switch<Route> render={switch} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    basename: Option<AttrValue>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <BrowserRouter basename={props.basename.clone()}>
            <Shell routes={app_routes()} />
        </BrowserRouter>
    }
}

fn init_tracing(level: Level) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(true)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(tracing_web::MakeConsoleWriter)
        .with_span_events(FmtSpan::ACTIVE);
    let perf_layer = tracing_web::performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry()
        .with(LevelFilter::from_level(level))
        .with(fmt_layer)
        .with(perf_layer)
        .init();
}

fn main() {
    let (config, config_error) = match AppConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(config.log_level);

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "invalid build configuration, using defaults");
    }

    tracing::info!(basename = ?config.basename, "starting up!");

    yew::Renderer::<App>::with_props(AppProps {
        basename: config.basename.map(AttrValue::from),
    })
    .render();
}
