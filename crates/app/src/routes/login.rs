use dioxus::prelude::*;
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
    ToastOptions,
};

use crate::labour::api::HttpFarmWorksApi;
use crate::labour::controller::{self, SignedIn};
use crate::labour::session::LocalStorage;
use crate::routes::Route;

/// Username-or-email sign-in. Labourers land on their dashboard.
#[component]
pub fn Login() -> Element {
    let toast = use_toast();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut other_role = use_signal(|| Option::<String>::None);

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        other_role.set(None);

        match controller::sign_in(
            &LocalStorage,
            &HttpFarmWorksApi::default(),
            &username(),
            &password(),
        )
        .await
        {
            Ok(SignedIn::Labour) => {
                navigator().push(Route::LabourDashboard {});
            }
            Ok(SignedIn::OtherRole(role)) => other_role.set(Some(role)),
            Err(message) => toast.error(message, ToastOptions::new()),
        }
        loading.set(false);
    };

    rsx! {
        div { class: "page-center",
            Card { style: "width: min(26rem, 100%);",
                CardHeader {
                    CardTitle { "FarmEase" }
                    CardDescription { "Sign in to find farm work near you" }
                }
                CardContent {
                    if let Some(role) = other_role() {
                        p { class: "labour-notice",
                            "Signed in as {role}. This app only has pages for labour accounts."
                        }
                    }
                    form { onsubmit: handle_login,
                        Input {
                            label: "Username or Email",
                            placeholder: "Enter your username or email",
                            value: username(),
                            required: true,
                            on_input: move |e: FormEvent| username.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            required: true,
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button { button_type: "submit", block: true, disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
