use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::model::{Difficulty, QuizSetup};

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn SetupView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let handoff = ctx.handoff();

    let mut topic = use_signal(String::new);
    let mut difficulty = use_signal(|| Difficulty::Medium);
    let mut count = use_signal(|| "5".to_string());
    let mut form_error = use_signal(|| None::<String>);

    let on_start = move |_| {
        let Ok(question_count) = count.read().trim().parse::<u32>() else {
            form_error.set(Some("Enter how many questions to generate.".to_string()));
            return;
        };
        match QuizSetup::new(topic.read().as_str(), difficulty(), question_count) {
            Ok(setup) => {
                form_error.set(None);
                handoff.put_setup(setup);
                let _ = navigator.push(Route::Quiz {});
            }
            Err(err) => form_error.set(Some(err.to_string())),
        }
    };

    rsx! {
        div { class: "page",
            h2 { "Set Up Your Quiz" }

            div { class: "setup-form",
                label { r#for: "setup-topic", "Topic" }
                input {
                    id: "setup-topic",
                    r#type: "text",
                    placeholder: "e.g. Roman history",
                    value: "{topic}",
                    oninput: move |evt| topic.set(evt.value()),
                }

                label { r#for: "setup-difficulty", "Difficulty" }
                select {
                    id: "setup-difficulty",
                    onchange: move |evt| {
                        if let Ok(parsed) = evt.value().parse::<Difficulty>() {
                            difficulty.set(parsed);
                        }
                    },
                    for level in Difficulty::ALL {
                        option {
                            value: level.as_str(),
                            selected: difficulty() == level,
                            "{level}"
                        }
                    }
                }

                label { r#for: "setup-count", "Number of questions" }
                input {
                    id: "setup-count",
                    r#type: "number",
                    min: "1",
                    value: "{count}",
                    oninput: move |evt| count.set(evt.value()),
                }

                if let Some(message) = form_error.read().as_ref() {
                    p { class: "form-error", "{message}" }
                }

                button {
                    class: "btn btn-primary",
                    id: "setup-start",
                    r#type: "button",
                    onclick: on_start,
                    "Start Quiz"
                }
            }
        }
    }
}
