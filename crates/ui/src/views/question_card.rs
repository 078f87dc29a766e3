use dioxus::prelude::*;

/// One question with its choice buttons.
///
/// Two modes share this component: taking a quiz (`correct_answer` is
/// `None`, clicks select) and reviewing a finished one (`correct_answer` is
/// `Some`, correctness is highlighted and clicks are ignored).
#[component]
pub fn QuestionCard(
    prompt: String,
    choices: Vec<String>,
    question_number: usize,
    total_questions: usize,
    selected_answer: Option<String>,
    correct_answer: Option<String>,
    disabled: bool,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "question-card",
            p { class: "question-card__counter", "Question {question_number} of {total_questions}" }
            h3 { class: "question-card__prompt", "{prompt}" }
            div { class: "question-card__choices",
                for choice in choices {
                    ChoiceButton {
                        choice: choice.clone(),
                        selected: selected_answer.as_deref() == Some(choice.as_str()),
                        correct_answer: correct_answer.clone(),
                        disabled,
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn ChoiceButton(
    choice: String,
    selected: bool,
    correct_answer: Option<String>,
    disabled: bool,
    on_select: EventHandler<String>,
) -> Element {
    let class = choice_class(&choice, selected, correct_answer.as_deref());
    let value = choice.clone();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled,
            onclick: move |_| {
                if !disabled {
                    on_select.call(value.clone());
                }
            },
            "{choice}"
        }
    }
}

fn choice_class(choice: &str, selected: bool, correct_answer: Option<&str>) -> &'static str {
    match correct_answer {
        Some(correct) if choice == correct => "choice choice--correct",
        Some(_) if selected => "choice choice--incorrect",
        Some(_) => "choice",
        None if selected => "choice choice--selected",
        None => "choice",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_mode_highlights_correct_and_picked() {
        assert_eq!(
            choice_class("Paris", false, Some("Paris")),
            "choice choice--correct"
        );
        assert_eq!(
            choice_class("Lyon", true, Some("Paris")),
            "choice choice--incorrect"
        );
        assert_eq!(choice_class("Nice", false, Some("Paris")), "choice");
    }

    #[test]
    fn quiz_mode_only_marks_the_selection() {
        assert_eq!(choice_class("Paris", true, None), "choice choice--selected");
        assert_eq!(choice_class("Paris", false, None), "choice");
    }
}
