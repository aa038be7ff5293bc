use yew::{Html, function_component, html};

/// `AppointmentsPage` page component
#[function_component(AppointmentsPage)]
pub fn appointments_page() -> Html {
    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Appointments" }</h1>
            <p>{ "Patients booked with you." }</p>
        </div>
    }
}
