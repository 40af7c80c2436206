use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMapPin, LdSun};
use dioxus_free_icons::Icon;
use shared_types::LocationResponse;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, EmptyState,
    PageHeader, PageSubtitle, PageTitle, Skeleton,
};

use crate::labour::api::HttpFarmWorksApi;
use crate::labour::controller::{self, Start};
use crate::labour::session::LocalStorage;
use crate::routes::Route;

/// Location the forecast would be drawn for. Forecast data is not fetched.
#[component]
pub fn Weather() -> Element {
    let mut location = use_signal(|| Option::<Result<LocationResponse, String>>::None);

    use_effect(move || {
        spawn(async move {
            match controller::start_weather(&LocalStorage, &HttpFarmWorksApi::default()).await {
                Start::Redirect => {
                    navigator().replace(Route::Login {});
                }
                Start::Loaded(result) => location.set(Some(result)),
            }
        });
    });

    rsx! {
        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "Weather" }
                    PageSubtitle { "Forecasts for your registered location" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        navigator().push(Route::LabourDashboard {});
                    },
                    "Back to Dashboard"
                }
            }

            match location() {
                None => rsx! {
                    Skeleton { style: "height: 8rem;" }
                },
                Some(Ok(loc)) => rsx! {
                    Card {
                        CardHeader {
                            CardTitle {
                                Icon { icon: LdMapPin, width: 18, height: 18 }
                                " {loc.area}, {loc.state}"
                            }
                            CardDescription {
                                if let Some(zip) = loc.zipcode.as_ref() {
                                    "Zipcode {zip}"
                                }
                            }
                        }
                        CardContent {
                            p { "Weather updates for this location will appear here." }
                        }
                    }
                },
                Some(Err(message)) => rsx! {
                    EmptyState {
                        title: "Location unavailable",
                        description: message,
                        icon: rsx! { Icon { icon: LdSun, width: 32, height: 32 } },
                    }
                },
            }
        }
    }
}
