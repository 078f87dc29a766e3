use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SavedResultVm, map_saved_results};

#[derive(Clone, Debug, PartialEq)]
enum HistoryData {
    Anonymous,
    Saved(Vec<SavedResultVm>),
}

#[component]
pub fn HistoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let identity = ctx.identity();
    let result_store = ctx.result_store();

    let resource = use_resource(move || {
        let identity = identity.clone();
        let result_store = result_store.clone();
        async move {
            let Some(user) = identity.current_user().await else {
                return Ok(HistoryData::Anonymous);
            };
            let items = result_store
                .recent_for_user(user.id, 10)
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok(HistoryData::Saved(map_saved_results(&items)))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "History" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(HistoryData::Anonymous) => rsx! {
                    p { "Sign in to keep your quiz history." }
                    Link { class: "btn btn-primary", to: Route::Setup {}, "Take a Quiz" }
                },
                ViewState::Ready(HistoryData::Saved(saved)) => rsx! {
                    if saved.is_empty() {
                        p { "No saved quizzes yet." }
                    } else {
                        ul { class: "history-list",
                            for item in saved {
                                HistoryRow { item }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn HistoryRow(item: SavedResultVm) -> Element {
    rsx! {
        li { class: "history-row",
            span { class: "history-title", "{item.title}" }
            span { class: "history-score", "{item.score_label}" }
            span { class: "history-date", "{item.completed_at_str}" }
        }
    }
}
