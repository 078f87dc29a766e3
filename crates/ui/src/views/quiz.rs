use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::model::QUESTION_TIME_LIMIT_SECS;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{CountdownTimer, QuestionCard, ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizIntent, QuizOutcome, QuizVm, start_quiz};

const SELECT_PROMPT: &str = "Please select an answer before continuing.";

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let flow = ctx.quiz_flow();
    let handoff = ctx.handoff();

    // The setup slot is take-once; arriving without one means the route was
    // hit out of order.
    let setup = use_hook(|| handoff.take_setup());
    let missing_setup = setup.is_none();
    use_effect(move || {
        if missing_setup {
            let _ = navigator.push(Route::Setup {});
        }
    });

    let vm = use_signal(|| None::<QuizVm>);
    let error = use_signal(|| None::<ViewError>);
    let notice = use_signal(|| None::<&'static str>);

    let flow_for_resource = flow.clone();
    let resource = use_resource(move || {
        let flow = flow_for_resource.clone();
        let setup = setup.clone();
        let mut vm = vm;

        async move {
            let Some(setup) = setup else {
                return Ok(());
            };
            let started = start_quiz(&flow, setup).await?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch = {
        let flow = flow.clone();
        let handoff = handoff.clone();
        use_callback(move |intent: QuizIntent| {
            let flow = flow.clone();
            let handoff = handoff.clone();
            let mut vm = vm;
            let mut error = error;
            let mut notice = notice;

            spawn(async move {
                // Take the vm out of the signal so nothing borrows it across
                // the await; put it back unless the quiz finished.
                let taken = vm.write().take();
                let Some(mut vm_value) = taken else {
                    error.set(Some(ViewError::Unknown));
                    return;
                };

                let outcome = vm_value.apply(&flow, intent).await;
                match outcome {
                    Ok(QuizOutcome::Finished(result)) => {
                        handoff.put_result(result);
                        let _ = navigator.push(Route::Result {});
                    }
                    Ok(QuizOutcome::Blocked) => {
                        *vm.write() = Some(vm_value);
                        notice.set(Some(SELECT_PROMPT));
                    }
                    Ok(QuizOutcome::Continue) => {
                        *vm.write() = Some(vm_value);
                        notice.set(None);
                    }
                    Err(err) => {
                        *vm.write() = Some(vm_value);
                        error.set(Some(err));
                    }
                }
            });
        })
    };

    let on_select = use_callback(move |choice: String| {
        let mut vm = vm;
        let mut notice = notice;
        if let Some(vm) = vm.write().as_mut() {
            vm.select(&choice);
        }
        notice.set(None);
    });

    let vm_guard = vm.read();
    let header = vm_guard.as_ref().map(|vm| {
        let setup = vm.setup();
        (
            setup.topic().to_string(),
            format!("{} · {} Questions", setup.difficulty(), vm.total()),
        )
    });
    let question = vm_guard.as_ref().and_then(QuizVm::current_question).cloned();
    let current_index = vm_guard.as_ref().map_or(0, QuizVm::current_index);
    let total = vm_guard.as_ref().map_or(0, QuizVm::total);
    let is_first = vm_guard.as_ref().is_none_or(QuizVm::is_first);
    let is_last = vm_guard.as_ref().is_some_and(QuizVm::is_last);
    let selected = vm_guard
        .as_ref()
        .and_then(QuizVm::selected_answer)
        .map(str::to_string);
    let timer_active = question.is_some() && error.read().is_none();
    let next_label = if is_last { "Finish Quiz" } else { "Next Question" };
    drop(vm_guard);

    rsx! {
        div { class: "page quiz-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    div { class: "quiz-loading",
                        h2 { "Generating Your Quiz..." }
                        p { "Personalized questions are being written for you." }
                    }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "quiz-error",
                        h2 { "Oops! Something went wrong" }
                        p { "{err.message()}" }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| {
                                let _ = navigator.push(Route::Setup {});
                            },
                            "Try Again"
                        }
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some((topic, subtitle)) = header {
                        header { class: "quiz-header",
                            div {
                                h2 { "{topic}" }
                                p { class: "quiz-subtitle", "{subtitle}" }
                            }
                            CountdownTimer {
                                duration_secs: QUESTION_TIME_LIMIT_SECS,
                                active: timer_active,
                                reset_key: current_index,
                                on_expire: move |()| dispatch.call(QuizIntent::TimeUp),
                            }
                        }
                    }
                    if let Some(err) = error.read().as_ref() {
                        p { class: "quiz-error-note", "{err.message()}" }
                    }
                    if let Some(question) = question {
                        QuestionCard {
                            prompt: question.prompt().to_string(),
                            choices: question.choices().to_vec(),
                            question_number: current_index + 1,
                            total_questions: total,
                            selected_answer: selected,
                            correct_answer: None,
                            disabled: false,
                            on_select,
                        }
                        if let Some(message) = notice() {
                            p { class: "quiz-notice", id: "quiz-notice", "{message}" }
                        }
                        div { class: "quiz-nav",
                            button {
                                class: "btn btn-secondary",
                                id: "quiz-previous",
                                r#type: "button",
                                disabled: is_first,
                                onclick: move |_| dispatch.call(QuizIntent::Previous),
                                "Previous"
                            }
                            span { class: "quiz-progress", "{current_index + 1} of {total}" }
                            button {
                                class: "btn btn-primary",
                                id: "quiz-next",
                                r#type: "button",
                                onclick: move |_| dispatch.call(QuizIntent::Next),
                                "{next_label}"
                            }
                        }
                    }
                },
            }
        }
    }
}
