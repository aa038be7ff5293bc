use crate::auth::Credentials;
use crate::config::FrontendConfig;
use crate::containers::dashboard_shell::DashboardShell;
use crate::guard::{NavigationDecision, NavigationGuard, NavigationRequest, RedirectTarget};
use crate::pages::*;
use crate::storage::BrowserStorage;
use log::{debug, warn};
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;

/// The main routes
///
/// No catch-all is declared: a path outside this table renders nothing.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Chat,
    #[at("/doctor/login")]
    Login,
    #[at("/doctor/dashboard")]
    DashboardRoot,
    #[at("/doctor/dashboard/*")]
    Dashboard,
}

/// The dashboard child routes, rendered inside [`DashboardShell`].
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum DashboardRoute {
    #[at("/doctor/dashboard")]
    Root,
    #[at("/doctor/dashboard/schedule")]
    Schedule,
    #[at("/doctor/dashboard/appointments")]
    Appointments,
    #[at("/doctor/dashboard/settings")]
    Settings,
}

impl DashboardRoute {
    /// Child the bare dashboard path lands on.
    pub const INDEX: DashboardRoute = DashboardRoute::Schedule;

    /// Navigation label, `None` for routes that only redirect.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            DashboardRoute::Root => None,
            DashboardRoute::Schedule => Some("Schedule"),
            DashboardRoute::Appointments => Some("Appointments"),
            DashboardRoute::Settings => Some("Settings"),
        }
    }
}

/// `Switch<MainRoute>` behind the navigation guard.
///
/// The guard runs on every location change, before the matched view renders.
#[function_component(GuardedSwitch)]
pub fn guarded_switch() -> Html {
    let location = use_location();
    let previous = use_mut_ref(|| None::<String>);

    let evaluated = location.map(|location| {
        let request = NavigationRequest::from_location(&location, previous.borrow().clone());
        let guard = NavigationGuard::new(Credentials::from_config(
            BrowserStorage,
            &FrontendConfig::new(),
        ));
        let decision = guard.evaluate(&request);
        (request, decision)
    });

    let committed = evaluated.as_ref().and_then(|(request, decision)| {
        (*decision == NavigationDecision::Proceed).then(|| request.full_path.clone())
    });
    {
        let previous = previous.clone();
        use_effect_with(committed, move |committed| {
            if let Some(full_path) = committed {
                *previous.borrow_mut() = Some(full_path.clone());
            }
            || ()
        });
    }

    match evaluated {
        Some((_, NavigationDecision::Proceed)) => {
            html! { <Switch<MainRoute> render={switch_main} /> }
        }
        Some((_, NavigationDecision::Redirect(target))) => {
            html! { <GuardRedirect {target} /> }
        }
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
struct GuardRedirectProps {
    target: RedirectTarget,
}

/// Replaces the current history entry with the guard's redirect. Nothing is
/// rendered for the refused location.
#[function_component(GuardRedirect)]
fn guard_redirect(props: &GuardRedirectProps) -> Html {
    let navigator = use_navigator();

    use_effect_with(props.target.clone(), move |target| {
        if let Some(navigator) = navigator {
            let result = match target {
                RedirectTarget::Login(query) => {
                    navigator.replace_with_query(&target.route(), query)
                }
                RedirectTarget::Dashboard => {
                    navigator.replace(&target.route());
                    Ok(())
                }
            };
            if let Err(err) = result {
                warn!("guard redirect to {} failed: {err:?}", target.full_path());
            }
        } else {
            warn!("guard redirect outside of a router");
        }
        || ()
    });

    html! {}
}

/// Swaps the bare dashboard path for [`DashboardRoute::INDEX`] in place, so
/// Back leaves the dashboard instead of landing on `/doctor/dashboard` again.
#[function_component(DashboardIndexRedirect)]
fn dashboard_index_redirect() -> Html {
    let navigator = use_navigator();

    use_effect_with((), move |()| {
        match navigator {
            Some(navigator) => navigator.replace(&DashboardRoute::INDEX),
            None => warn!("dashboard index redirect outside of a router"),
        }
        || ()
    });

    html! {}
}

/// Switch function for the main routes.
fn switch_main(route: MainRoute) -> Html {
    debug!("switching to main route: {route:?}");
    match route {
        MainRoute::Chat => html! { <ChatPage /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::DashboardRoot | MainRoute::Dashboard => html! {
            <DashboardShell>
                <Switch<DashboardRoute> render={switch_dashboard} />
            </DashboardShell>
        },
    }
}

/// Switch function for the dashboard routes.
fn switch_dashboard(route: DashboardRoute) -> Html {
    debug!("switching to dashboard route: {route:?}");
    match route {
        DashboardRoute::Root => html! { <DashboardIndexRedirect /> },
        DashboardRoute::Schedule => html! { <SchedulePage /> },
        DashboardRoute::Appointments => html! { <AppointmentsPage /> },
        DashboardRoute::Settings => html! { <SettingsPage /> },
    }
}
