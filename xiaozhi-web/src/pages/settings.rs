use yew::{Html, function_component, html};

/// `SettingsPage` page component
#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Settings" }</h1>
            <p>{ "Consultation preferences and account settings." }</p>
        </div>
    }
}
