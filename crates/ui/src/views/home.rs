use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let identity = ctx.identity();

    let signed_in = use_resource(move || {
        let identity = identity.clone();
        async move { identity.current_user().await.is_some() }
    });
    let account_note = match signed_in.value().read().as_ref() {
        Some(true) => "Signed in. Finished quizzes are saved to your history.",
        Some(false) => "Playing as a guest. Results are not saved.",
        None => "",
    };

    rsx! {
        div { class: "page",
            h2 { "Welcome" }
            p { "Pick a topic and difficulty, and take an AI-generated quiz against the clock." }
            if !account_note.is_empty() {
                p { class: "account-note", "{account_note}" }
            }
            Link { class: "btn btn-primary", to: Route::Setup {}, "Start a Quiz" }
        }
    }
}
