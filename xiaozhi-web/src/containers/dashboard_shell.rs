use crate::auth::Credentials;
use crate::config::FrontendConfig;
use crate::routes::{DashboardRoute, MainRoute};
use crate::storage::BrowserStorage;
use log::info;
use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator, use_route};

#[derive(Properties, PartialEq)]
pub struct DashboardShellProps {
    pub children: Children,
}

/// Frame around the dashboard child views: side navigation, sign-out, and
/// the nested route outlet.
#[function_component(DashboardShell)]
pub fn dashboard_shell(props: &DashboardShellProps) -> Html {
    let current_route = use_route::<DashboardRoute>();
    let navigator = use_navigator();

    let on_sign_out = Callback::from(move |_: MouseEvent| {
        let credentials = Credentials::from_config(BrowserStorage, &FrontendConfig::new());
        credentials.sign_out();
        info!("doctor signed out");
        if let Some(ref nav) = navigator {
            nav.push(&MainRoute::Login);
        }
    });

    let nav_items = DashboardRoute::iter().filter_map(|route| {
        let title = route.title()?;
        let active_route_class = if current_route.as_ref() == Some(&route) {
            "btn-active"
        } else {
            ""
        };
        Some(html! {
            <li>
                <Link<DashboardRoute> to={route} classes={classes!("btn", "btn-ghost", active_route_class)}>
                    {title}
                </Link<DashboardRoute>>
            </li>
        })
    });

    html! {
        <div class="min-h-screen bg-base-100 drawer lg:drawer-open">
            <div class="drawer-content flex flex-col">
                <main class="flex-grow p-4">
                    {props.children.clone()}
                </main>
            </div>
            <div class="drawer-side">
                <ul class="menu p-4 w-60 min-h-full bg-base-200">
                    { for nav_items }
                    <li>
                        <button class="btn btn-outline mt-4" onclick={on_sign_out}>
                            {"Sign out"}
                        </button>
                    </li>
                </ul>
            </div>
        </div>
    }
}
