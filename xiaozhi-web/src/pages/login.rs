use yew::{Html, function_component, html};

/// Doctor sign-in view.
///
/// The guard sends bounced visitors here with a
/// [`LoginQuery`](crate::guard::LoginQuery). Reading it, and writing the
/// credential record, belongs to the sign-in flow.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <div class="card-body">
                    <h2 class="card-title text-2xl">{"Doctor sign in"}</h2>
                </div>
            </div>
        </div>
    }
}
