use dioxus::prelude::*;

mod format_helpers;
mod labour;
mod routes;

use routes::Route;

const FARMEASE_CSS: Asset = asset!("/assets/farmease.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let flags = server::config::load_feature_flags();

        if flags.telemetry {
            if let Err(e) = server::telemetry::init_telemetry() {
                tracing::error!(error = %e, "telemetry init failed, continuing without export");
            }
        }
        server::health::record_start_time();

        let pool = server::db::create_pool()?;
        server::db::run_migrations(&pool).await?;

        if flags.status_sweep {
            server::sweep::spawn_status_sweep(pool.clone());
        }

        let mut router = dioxus::server::router(App).merge(server::openapi::api_router(pool));

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
    rsx! {
        document::Link { rel: "stylesheet", href: FARMEASE_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
