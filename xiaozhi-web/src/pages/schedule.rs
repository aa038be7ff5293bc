use yew::{Html, function_component, html};

/// `SchedulePage` page component
#[function_component(SchedulePage)]
pub fn schedule_page() -> Html {
    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Schedule" }</h1>
            <p>{ "Your clinic hours for the coming week." }</p>
        </div>
    }
}
