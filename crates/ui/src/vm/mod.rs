mod quiz_vm;
mod result_vm;
mod time_fmt;

pub use quiz_vm::{QuizIntent, QuizOutcome, QuizVm, start_quiz};
pub use result_vm::{
    ResultQuestionVm, SavedResultVm, map_result_questions, map_saved_results, score_message,
};
pub use time_fmt::{format_clock, format_datetime};
