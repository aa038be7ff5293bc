use yew::{Html, function_component, html};

/// Primary chat window shown at the site root.
#[function_component(ChatPage)]
pub fn chat_page() -> Html {
    html! {
        <div class="flex flex-col h-screen">
            <header class="navbar bg-base-300">
                <span class="text-lg font-bold">{ "Xiaozhi" }</span>
            </header>
            <main class="flex-grow p-4 chat-view"></main>
        </div>
    }
}
