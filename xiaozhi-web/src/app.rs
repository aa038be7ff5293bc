use crate::routes::GuardedSwitch;
use yew::{Html, function_component, html};
use yew_router::prelude::BrowserRouter;

/// Application root: HTML5 history routing with every route behind the guard.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <GuardedSwitch />
        </BrowserRouter>
    }
}
