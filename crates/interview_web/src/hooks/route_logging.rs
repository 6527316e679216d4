use interview_routes::RouteTable;
use tracing::{info, warn};
use yew::{hook, use_effect_with_deps};
use yew_router::hooks::use_location;

/// Logs every path the router observes and what it renders for it.
/// Must be called below a router.
#[hook]
pub fn use_route_logging(routes: &'static RouteTable) {
    let path = use_location()
        .map(|location| location.path().to_owned())
        .unwrap_or_default();

    use_effect_with_deps(
        move |path: &String| {
            match routes.resolve(path) {
                Some(page) => info!(path = %path, %page, "🗺️ rendering page"),
                None => warn!(path = %path, "no page is bound to this path, rendering nothing"),
            }
            || ()
        },
        path,
    );
}
