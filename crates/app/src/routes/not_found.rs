use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, CardTitle};

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        div { class: "page-center",
            Card {
                CardHeader {
                    CardTitle { "404 · Page Not Found" }
                }
                CardContent {
                    p {
                        "Nothing lives at "
                        code { "{path}" }
                        "."
                    }
                    Link { to: Route::LabourDashboard {}, "Back to Dashboard" }
                }
            }
        }
    }
}
