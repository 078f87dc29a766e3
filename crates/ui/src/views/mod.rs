mod history;
mod home;
mod question_card;
mod quiz;
mod result;
mod setup;
mod state;
mod timer;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use history::HistoryView;
pub use home::HomeView;
pub use question_card::QuestionCard;
pub use quiz::QuizView;
pub use result::ResultView;
pub use setup::SetupView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use timer::CountdownTimer;
