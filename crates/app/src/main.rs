use dioxus::prelude::*;

mod auth;
mod components;
mod format_helpers;
mod routes;
mod session;

use auth::AuthState;
use routes::Route;
use session::SessionRestorer;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_config();
        let flags = server::config::feature_flags();

        if flags.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let state = server::state::AppState::from_config();
        let mut router = dioxus::server::router(App).merge(server::rest::api_router(state));

        if flags.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            SessionRestorer {}
            Router::<Route> {}
        }
    }
}
