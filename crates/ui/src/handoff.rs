use std::sync::{Arc, Mutex, PoisonError};

use quiz_core::model::{QuizResult, QuizSetup};

#[derive(Default)]
struct Slots {
    setup: Option<QuizSetup>,
    result: Option<QuizResult>,
}

/// In-process handoff between navigation stages.
///
/// The setup view deposits the chosen `QuizSetup` before navigating to the
/// quiz, and the quiz deposits the `QuizResult` before navigating to the
/// result screen. Each slot is take-once: a view that finds its slot empty
/// was reached out of order and should redirect instead of rendering.
#[derive(Clone, Default)]
pub struct StageHandoff {
    slots: Arc<Mutex<Slots>>,
}

impl StageHandoff {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_setup(&self, setup: QuizSetup) {
        self.lock().setup = Some(setup);
    }

    #[must_use]
    pub fn take_setup(&self) -> Option<QuizSetup> {
        self.lock().setup.take()
    }

    pub fn put_result(&self, result: QuizResult) {
        self.lock().result = Some(result);
    }

    #[must_use]
    pub fn take_result(&self) -> Option<QuizResult> {
        self.lock().result.take()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Slots> {
        // The slots hold plain data; a poisoned lock cannot leave them in a
        // broken state.
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
