use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdCalendar, LdClock, LdMapPin, LdSearch, LdSun, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{can_withdraw, local_now, FarmWork, WithdrawFlow};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, EmptyState,
    PageHeader, PageSubtitle, PageTitle, Skeleton, StatCard, StatGrid,
};

use crate::format_helpers::{format_date, format_datetime};
use crate::labour::api::HttpFarmWorksApi;
use crate::labour::controller::{self, DashboardData, Start};
use crate::labour::session::LocalStorage;
use crate::labour::show_notices;
use crate::routes::Route;

/// Labour dashboard: summary counters, active applications and work history.
#[component]
pub fn LabourDashboard() -> Element {
    let toast = use_toast();
    let mut loading = use_signal(|| true);
    let mut data = use_signal(DashboardData::default);
    let mut flow = use_signal(WithdrawFlow::default);

    use_effect(move || {
        spawn(async move {
            match controller::start(&LocalStorage, &HttpFarmWorksApi::default()).await {
                Start::Redirect => {
                    navigator().replace(Route::Login {});
                }
                Start::Loaded(outcome) => {
                    show_notices(toast, &outcome.notices);
                    data.set(outcome.data);
                    loading.set(false);
                }
            }
        });
    });

    let confirm_withdraw = move |_: MouseEvent| {
        let Some(target) = flow.write().confirm() else {
            return;
        };
        let Some(session) = data.read().session.clone() else {
            flow.write().finish();
            return;
        };
        spawn(async move {
            let outcome =
                controller::submit_withdrawal(&HttpFarmWorksApi::default(), &session, &target)
                    .await;
            show_notices(toast, &outcome.notices);
            if let Some(classification) = outcome.refreshed {
                data.write().classification = classification;
            }
            flow.write().finish();
        });
    };

    if loading() {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./labour_dashboard.css") }
            div { class: "labour-loading",
                Skeleton { class: "labour-loading-bar" }
                h2 { "Loading Dashboard" }
                p { "Fetching your work information..." }
            }
        };
    }

    let snapshot = data.read().clone();
    let username = snapshot
        .session
        .as_ref()
        .map(|s| s.username.clone())
        .unwrap_or_default();
    let stats = snapshot.classification.stats;
    let submitting = matches!(*flow.read(), WithdrawFlow::Submitting(_));
    let dialog_text = flow
        .read()
        .target()
        .map(|t| t.confirmation_text())
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./labour_dashboard.css") }

        div { class: "container labour-dashboard",
            PageHeader {
                div {
                    PageTitle { "Labour Dashboard" }
                    PageSubtitle { "Find farm work opportunities in your area" }
                }
                if let Some(session) = snapshot.session.as_ref() {
                    Badge { variant: BadgeVariant::Outline, tone: "green",
                        Icon { icon: LdMapPin, width: 14, height: 14 }
                        "{session.location()}"
                    }
                }
            }

            StatGrid {
                StatCard {
                    label: "Active Applications",
                    value: stats.active_applications,
                    tone: "blue",
                    icon: rsx! { Icon { icon: LdBriefcase, width: 20, height: 20 } },
                }
                StatCard {
                    label: "Completed Works",
                    value: stats.completed_works,
                    tone: "green",
                    icon: rsx! { Icon { icon: LdClock, width: 20, height: 20 } },
                }
                StatCard {
                    label: "Available Jobs",
                    value: stats.available_jobs,
                    tone: "purple",
                    icon: rsx! { Icon { icon: LdSearch, width: 20, height: 20 } },
                }
            }

            div { class: "labour-promos",
                PromoCard {
                    title: "Work Opportunities",
                    description: "Browse and apply for farm work in your region",
                    items: vec!["Browse Local Jobs", "Apply for Work", "Track Applications"],
                    icon: rsx! { Icon { icon: LdBriefcase, width: 24, height: 24 } },
                    Button {
                        block: true,
                        onclick: move |_| {
                            navigator().push(Route::WorkOpportunities {});
                        },
                        "Find Work"
                    }
                }
                PromoCard {
                    title: "Weather Forecast",
                    description: "Get weather updates and farming alerts",
                    items: vec!["24-Hour Forecast", "5-Day Outlook", "Weather Alerts"],
                    icon: rsx! { Icon { icon: LdSun, width: 24, height: 24 } },
                    Button {
                        block: true,
                        onclick: move |_| {
                            navigator().push(Route::Weather {});
                        },
                        "View Weather"
                    }
                }
                PromoCard {
                    title: "Community",
                    description: "Connect with other farm workers and share experiences",
                    items: vec![
                        "Experience Sharing",
                        "Skill Development Resources",
                        "Group Work Coordination",
                    ],
                    icon: rsx! { Icon { icon: LdUsers, width: 24, height: 24 } },
                    Button { block: true, disabled: true, variant: ButtonVariant::Outline,
                        "Coming Soon"
                    }
                }
            }

            Card { class: "labour-section",
                CardHeader {
                    CardTitle { "My Active Applications" }
                    CardDescription { "Track and manage your current work applications" }
                }
                CardContent {
                    if snapshot.classification.active.is_empty() {
                        EmptyState {
                            title: "No Active Applications",
                            description: "Apply for work opportunities to see them here",
                            icon: rsx! { Icon { icon: LdBriefcase, width: 32, height: 32 } },
                            action: rsx! {
                                Button {
                                    onclick: move |_| {
                                        navigator().push(Route::WorkOpportunities {});
                                    },
                                    "Find Work Opportunities"
                                }
                            },
                        }
                    } else {
                        ul { class: "labour-work-list",
                            for work in snapshot.classification.active.iter().cloned() {
                                ActiveApplication {
                                    key: "{work.id}",
                                    username: username.clone(),
                                    submitting: flow.read().is_submitting(&work.id),
                                    on_withdraw: move |work: FarmWork| {
                                        flow.write().request(&work, local_now());
                                    },
                                    work,
                                }
                            }
                        }
                    }
                }
            }

            Card { class: "labour-section",
                CardHeader {
                    CardTitle { "Work History" }
                    CardDescription { "View your completed and cancelled work history" }
                }
                CardContent {
                    if snapshot.classification.past.is_empty() {
                        EmptyState {
                            title: "No Work History",
                            description: "Your completed and cancelled works will appear here",
                            icon: rsx! { Icon { icon: LdClock, width: 32, height: 32 } },
                        }
                    } else {
                        ul { class: "labour-work-list",
                            for work in snapshot.classification.past.iter() {
                                li { key: "{work.id}", class: "labour-work-item",
                                    div { class: "labour-work-heading",
                                        h3 { "{work.title()}" }
                                        Badge { variant: BadgeVariant::Soft, tone: work.work_type.tone().as_str(),
                                            "{work.work_type.as_str()}"
                                        }
                                    }
                                    div { class: "labour-work-meta",
                                        span {
                                            Icon { icon: LdUsers, width: 14, height: 14 }
                                            "{work.applied_count()}/{work.labours_required} workers"
                                        }
                                        span {
                                            strong { "Status: " }
                                            "{work.status.label()}"
                                        }
                                        span {
                                            strong { "Date: " }
                                            "{format_date(work.work_date)}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            AlertDialogRoot {
                open: flow.read().is_open(),
                on_open_change: move |open: bool| {
                    if !open {
                        flow.write().cancel();
                    }
                },
                AlertDialogContent {
                    AlertDialogTitle { "Withdraw Application" }
                    AlertDialogDescription { "{dialog_text}" }
                    AlertDialogActions {
                        AlertDialogCancel { disabled: submitting, "Cancel" }
                        AlertDialogAction { on_click: confirm_withdraw, disabled: submitting,
                            if submitting { "Withdrawing..." } else { "Withdraw Application" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PromoCard(
    #[props(into)] title: String,
    #[props(into)] description: String,
    items: Vec<&'static str>,
    icon: Element,
    children: Element,
) -> Element {
    rsx! {
        Card { class: "labour-promo",
            CardHeader {
                div { class: "labour-promo-icon", {icon} }
                CardTitle { "{title}" }
                CardDescription { "{description}" }
            }
            CardContent {
                ul { class: "labour-promo-items",
                    for item in items {
                        li { "{item}" }
                    }
                }
                {children}
            }
        }
    }
}

/// One job the labourer has applied to, with the withdraw control while the
/// deadline has not passed.
#[component]
fn ActiveApplication(
    work: FarmWork,
    username: String,
    submitting: bool,
    on_withdraw: EventHandler<FarmWork>,
) -> Element {
    let applied_at = work
        .application_by(&username)
        .map(|a| format_datetime(a.applied_at))
        .unwrap_or_default();
    let withdrawable = can_withdraw(work.work_date, local_now());
    let clicked = work.clone();

    rsx! {
        li { class: "labour-work-item",
            div { class: "labour-work-heading",
                h3 { "{work.title()}" }
                Badge { variant: BadgeVariant::Soft, tone: work.work_type.tone().as_str(),
                    "{work.work_type.as_str()}"
                }
                Badge { tone: work.status.tone().as_str(), "{work.status.label()}" }
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
            div { class: "labour-work-meta",
                span {
                    strong { "Farmer: " }
                    "{work.farmer_username}"
                }
                span {
                    strong { "Applied: " }
                    "{applied_at}"
                }
            }
            if withdrawable {
                div { class: "labour-work-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: submitting,
                        onclick: move |_| on_withdraw.call(clicked.clone()),
                        if submitting { "Withdrawing..." } else { "Withdraw Application" }
                    }
                }
            }
        }
    }
}
