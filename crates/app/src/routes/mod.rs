pub mod labour_dashboard;
pub mod login;
pub mod not_found;
pub mod weather;
pub mod work_opportunities;

use dioxus::prelude::*;

use labour_dashboard::LabourDashboard;
use login::Login;
use not_found::NotFound;
use weather::Weather;
use work_opportunities::WorkOpportunities;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[redirect("/", || Route::LabourDashboard {})]
    #[route("/login")]
    Login {},
    #[route("/dashboard/labour")]
    LabourDashboard {},
    #[route("/work-opportunities")]
    WorkOpportunities {},
    #[route("/weather")]
    Weather {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
