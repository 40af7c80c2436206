use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdMapPin, LdSearch, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{can_apply, local_now, FarmWork};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, EmptyState, Input, PageHeader, PageSubtitle, PageTitle, Skeleton,
    ToastOptions,
};

use crate::format_helpers::format_date;
use crate::labour::api::HttpFarmWorksApi;
use crate::labour::controller::{
    self, apply_state, deadline_message, ApplicantDetails, ApplyState, OpportunitiesData, Start,
};
use crate::labour::session::LocalStorage;
use crate::labour::show_notices;
use crate::routes::Route;

#[component]
pub fn WorkOpportunities() -> Element {
    let toast = use_toast();
    let mut loading = use_signal(|| true);
    let mut data = use_signal(OpportunitiesData::default);
    let mut details = use_signal(ApplicantDetails::default);
    let mut applying = use_signal(|| Option::<String>::None);

    use_effect(move || {
        spawn(async move {
            match controller::start_opportunities(&LocalStorage, &HttpFarmWorksApi::default()).await
            {
                Start::Redirect => {
                    navigator().replace(Route::Login {});
                }
                Start::Loaded(outcome) => {
                    show_notices(toast, &outcome.notices);
                    if let Some(session) = outcome.data.session.as_ref() {
                        details.write().name = session.username.clone();
                    }
                    data.set(outcome.data);
                    loading.set(false);
                }
            }
        });
    });

    let mut apply = move |work: FarmWork| {
        if applying().is_some() {
            return;
        }
        let Some(session) = data.read().session.clone() else {
            return;
        };
        let applicant = details();
        if !applicant.is_complete() {
            toast.error(
                "Enter your name and mobile number to apply".to_string(),
                ToastOptions::new(),
            );
            return;
        }
        applying.set(Some(work.id.clone()));
        spawn(async move {
            let outcome = controller::submit_application(
                &HttpFarmWorksApi::default(),
                &session,
                &work,
                &applicant,
            )
            .await;
            show_notices(toast, &outcome.notices);
            if let Some(works) = outcome.refreshed {
                data.write().works = works;
            }
            applying.set(None);
        });
    };

    if loading() {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./labour_dashboard.css") }
            div { class: "labour-loading",
                Skeleton { class: "labour-loading-bar" }
                h2 { "Loading Opportunities" }
            }
        };
    }

    let snapshot = data.read().clone();
    let username = snapshot
        .session
        .as_ref()
        .map(|s| s.username.clone())
        .unwrap_or_default();
    let now = local_now();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./labour_dashboard.css") }

        div { class: "container labour-dashboard",
            PageHeader {
                div {
                    PageTitle { "Work Opportunities" }
                    if let Some(session) = snapshot.session.as_ref() {
                        PageSubtitle { "Showing opportunities in: {session.location()}" }
                    }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        navigator().push(Route::LabourDashboard {});
                    },
                    "Back to Dashboard"
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Your Contact Details" }
                    CardDescription { "Sent to the farmer with every application" }
                }
                CardContent {
                    div { class: "labour-apply-form",
                        Input {
                            label: "Name",
                            value: details().name,
                            required: true,
                            on_input: move |e: FormEvent| details.write().name = e.value(),
                        }
                        Input {
                            label: "Mobile",
                            input_type: "tel",
                            value: details().mobile,
                            required: true,
                            on_input: move |e: FormEvent| details.write().mobile = e.value(),
                        }
                    }
                }
            }

            Card { class: "labour-section",
                CardHeader {
                    CardTitle { "Available Work Opportunities ({snapshot.works.len()})" }
                    CardDescription { "Farm work opportunities in your area that match your location" }
                }
                CardContent {
                    if snapshot.works.is_empty() {
                        EmptyState {
                            title: "No Work Opportunities Available",
                            description: "There are currently no active work opportunities in your area",
                            icon: rsx! { Icon { icon: LdSearch, width: 32, height: 32 } },
                        }
                    } else {
                        ul { class: "labour-work-list",
                            for work in snapshot.works.iter().cloned() {
                                li { key: "{work.id}", class: "labour-work-item",
                                    div { class: "labour-work-heading",
                                        h3 { "{work.title()}" }
                                        Badge { variant: BadgeVariant::Soft, tone: work.work_type.tone().as_str(),
                                            "{work.work_type.as_str()}"
                                        }
                                    }
                                    div { class: "labour-work-meta",
                                        span {
                                            Icon { icon: LdCalendar, width: 14, height: 14 }
                                            "{format_date(work.work_date)}"
                                        }
                                        span {
                                            Icon { icon: LdUsers, width: 14, height: 14 }
                                            "{work.applied_count()}/{work.labours_required} applied"
                                        }
                                        span {
                                            Icon { icon: LdMapPin, width: 14, height: 14 }
                                            "{work.location()}"
                                        }
                                    }
                                    if !work.additional_details.is_empty() {
                                        p { class: "labour-work-details", "{work.additional_details}" }
                                    }
                                    p {
                                        class: "labour-notice",
                                        "data-closed": if can_apply(work.work_date, now) { "false" } else { "true" },
                                        strong { "Application Deadline: " }
                                        "{deadline_message(work.work_date, now)}"
                                    }
                                    p { class: "labour-notice",
                                        strong { "Posted by: " }
                                        "{work.farmer_username}"
                                    }
                                    div { class: "labour-work-actions",
                                        match apply_state(&work, &username, now) {
                                            ApplyState::Applied => rsx! {
                                                Badge { tone: "green", "Application Submitted" }
                                            },
                                            ApplyState::Closed => rsx! {
                                                Badge { variant: BadgeVariant::Soft, tone: "gray", "Application Deadline Passed" }
                                            },
                                            ApplyState::Filled => rsx! {
                                                Badge { variant: BadgeVariant::Soft, tone: "gray", "All Positions Filled" }
                                            },
                                            ApplyState::Open { spots_left } => {
                                                let busy = applying().as_deref() == Some(work.id.as_str());
                                                let target = work.clone();
                                                rsx! {
                                                    span { class: "labour-notice", "{spots_left} of {work.labours_required} spots left" }
                                                    Button {
                                                        disabled: busy,
                                                        onclick: move |_| apply(target.clone()),
                                                        if busy { "Applying..." } else { "Apply Now" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
