use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::QuestionCard;
use crate::vm::{ResultQuestionVm, map_result_questions, score_message};

#[component]
pub fn ResultView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let handoff = ctx.handoff();

    // Take-once: landing here without a fresh result redirects home.
    let result = use_hook(|| handoff.take_result());
    let missing_result = result.is_none();
    use_effect(move || {
        if missing_result {
            let _ = navigator.push(Route::Home {});
        }
    });

    let Some(result) = result else {
        return rsx! {
            div { class: "page", p { "Loading..." } }
        };
    };

    let percentage = result.percentage();
    let message = score_message(percentage);
    let score = result.score();
    let total = result.total();
    let minutes_taken = result.time_taken_secs() / 60;
    let questions = map_result_questions(&result);
    let question_count = questions.len();

    let mut review_index = use_signal(|| 0usize);
    let index = review_index().min(question_count.saturating_sub(1));
    let current = questions.get(index).cloned();

    rsx! {
        div { class: "page result-page",
            section { class: "result-summary",
                h2 { "Quiz Complete!" }
                p { class: "result-message", "{message}" }
                div { class: "result-stats",
                    div { class: "result-stat",
                        span { class: "result-stat__value", "{percentage}%" }
                        span { class: "result-stat__label", "Final Score" }
                    }
                    div { class: "result-stat",
                        span { class: "result-stat__value", "{score}/{total}" }
                        span { class: "result-stat__label", "Correct Answers" }
                    }
                    div { class: "result-stat",
                        span { class: "result-stat__value", "{minutes_taken}m" }
                        span { class: "result-stat__label", "Time Taken" }
                    }
                }
                div { class: "result-actions",
                    Link { class: "btn btn-primary", to: Route::Setup {}, "Take Another Quiz" }
                    Link { class: "btn btn-secondary", to: Route::Home {}, "Back to Home" }
                }
            }

            section { class: "result-review",
                div { class: "result-review__header",
                    h3 { "Review Questions" }
                    div { class: "result-review__nav",
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            disabled: index == 0,
                            onclick: move |_| {
                                review_index.set(index.saturating_sub(1));
                            },
                            "Previous"
                        }
                        span { "{index + 1} of {question_count}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            disabled: index + 1 >= question_count,
                            onclick: move |_| {
                                review_index.set((index + 1).min(question_count - 1));
                            },
                            "Next"
                        }
                    }
                }
                if let Some(question) = current {
                    ReviewedQuestion { question, index, total: question_count }
                }
            }

            section { class: "result-grid",
                h3 { "Question Overview" }
                div { class: "result-grid__cells",
                    for (cell_index, question) in questions.iter().enumerate() {
                        ReviewCell {
                            cell_index,
                            is_correct: question.is_correct,
                            is_active: cell_index == index,
                            on_pick: move |picked: usize| review_index.set(picked),
                        }
                    }
                }
                div { class: "result-grid__legend",
                    span { class: "legend legend--correct", "Correct" }
                    span { class: "legend legend--incorrect", "Incorrect" }
                }
            }
        }
    }
}

#[component]
fn ReviewedQuestion(question: ResultQuestionVm, index: usize, total: usize) -> Element {
    let selected = (!question.user_answer.is_empty()).then(|| question.user_answer.clone());
    rsx! {
        QuestionCard {
            prompt: question.prompt.clone(),
            choices: question.choices.clone(),
            question_number: index + 1,
            total_questions: total,
            selected_answer: selected,
            correct_answer: Some(question.correct_answer.clone()),
            disabled: true,
            on_select: move |_| {},
        }
    }
}

#[component]
fn ReviewCell(
    cell_index: usize,
    is_correct: bool,
    is_active: bool,
    on_pick: EventHandler<usize>,
) -> Element {
    let tone = if is_correct { "cell--correct" } else { "cell--incorrect" };
    let ring = if is_active { " cell--active" } else { "" };
    rsx! {
        button {
            class: "cell {tone}{ring}",
            r#type: "button",
            onclick: move |_| on_pick.call(cell_index),
            "{cell_index + 1}"
        }
    }
}
