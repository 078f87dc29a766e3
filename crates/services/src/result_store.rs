use std::sync::Arc;

use chrono::{DateTime, Utc};

use quiz_core::model::{Difficulty, QuizResult, QuizSetup, UserId};
use storage::repository::{NewQuizResultRecord, QuizResultId, QuizResultRepository};

use crate::Clock;
use crate::error::ResultStoreError;

/// One row for the history listing, without the full question payload.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedResultListItem {
    pub id: QuizResultId,
    pub topic: String,
    pub difficulty: Difficulty,
    pub score: u32,
    pub total: u32,
    pub completed_at: DateTime<Utc>,
}

/// Persists finished quizzes and reads them back for history views.
#[derive(Clone)]
pub struct ResultStoreService {
    clock: Clock,
    results: Arc<dyn QuizResultRepository>,
}

impl ResultStoreService {
    #[must_use]
    pub fn new(clock: Clock, results: Arc<dyn QuizResultRepository>) -> Self {
        Self { clock, results }
    }

    /// Persist a finished quiz for the given user, stamped with the current
    /// time.
    ///
    /// # Errors
    ///
    /// Returns `ResultStoreError` if the repository rejects the insert.
    pub async fn save(
        &self,
        user_id: UserId,
        setup: &QuizSetup,
        result: &QuizResult,
    ) -> Result<QuizResultId, ResultStoreError> {
        let record = NewQuizResultRecord::from_result(user_id, setup, result, self.clock.now());
        let id = self.results.insert_result(record).await?;
        Ok(id)
    }

    /// The user's most recent saved quizzes, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ResultStoreError` if the listing query fails.
    pub async fn recent_for_user(
        &self,
        user_id: UserId,
        limit: u32,
    ) -> Result<Vec<SavedResultListItem>, ResultStoreError> {
        let records = self.results.list_results_for_user(user_id, limit).await?;
        Ok(records
            .into_iter()
            .map(|record| SavedResultListItem {
                id: record.id,
                topic: record.topic,
                difficulty: record.difficulty,
                score: record.score,
                total: record.total,
                completed_at: record.completed_at,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Question;
    use quiz_core::time::{fixed_clock, fixed_now};
    use storage::repository::Storage;

    fn sample_result() -> (QuizSetup, QuizResult) {
        let setup = QuizSetup::new("Capitals", Difficulty::Easy, 1).unwrap();
        let question = Question::new(
            "Capital of France?",
            vec!["Paris".to_string(), "Lyon".to_string()],
            "Paris",
        )
        .unwrap();
        let result =
            QuizResult::from_answers(vec![question], vec!["Paris".to_string()], 12).unwrap();
        (setup, result)
    }

    #[tokio::test]
    async fn save_stamps_the_clock_time() {
        let storage = Storage::in_memory();
        let service = ResultStoreService::new(fixed_clock(), Arc::clone(&storage.results));
        let user = UserId::random();
        let (setup, result) = sample_result();

        let id = service.save(user, &setup, &result).await.unwrap();
        let record = storage.results.get_result(id).await.unwrap();
        assert_eq!(record.completed_at, fixed_now());
        assert_eq!(record.topic, "Capitals");
    }

    #[tokio::test]
    async fn recent_listing_carries_summary_fields() {
        let storage = Storage::in_memory();
        let service = ResultStoreService::new(fixed_clock(), Arc::clone(&storage.results));
        let user = UserId::random();
        let (setup, result) = sample_result();
        service.save(user, &setup, &result).await.unwrap();

        let listed = service.recent_for_user(user, 10).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].topic, "Capitals");
        assert_eq!(listed[0].difficulty, Difficulty::Easy);
        assert_eq!(listed[0].score, 1);
        assert_eq!(listed[0].total, 1);
    }
}
