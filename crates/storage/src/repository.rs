use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use quiz_core::model::{
    AnsweredQuestion, Difficulty, QuizResult, QuizResultError, QuizSetup, UserId,
};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Storage identifier for a persisted quiz result.
///
/// NOTE: This is currently `i64` to match `SQLite` row IDs.
pub type QuizResultId = i64;

/// Persisted shape for a finished quiz, ready for insertion.
///
/// This mirrors the domain `QuizResult` plus its ownership and setup context
/// so repositories can serialize without leaking storage concerns into the
/// domain layer.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuizResultRecord {
    pub user_id: UserId,
    pub topic: String,
    pub difficulty: Difficulty,
    pub questions: Vec<AnsweredQuestion>,
    pub score: u32,
    pub total: u32,
    pub time_taken_secs: u32,
    pub completed_at: DateTime<Utc>,
}

impl NewQuizResultRecord {
    #[must_use]
    pub fn from_result(
        user_id: UserId,
        setup: &QuizSetup,
        result: &QuizResult,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            topic: setup.topic().to_owned(),
            difficulty: setup.difficulty(),
            questions: result.questions().to_vec(),
            score: result.score(),
            total: result.total(),
            time_taken_secs: result.time_taken_secs(),
            completed_at,
        }
    }
}

/// Persisted quiz result, as read back from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizResultRecord {
    pub id: QuizResultId,
    pub user_id: UserId,
    pub topic: String,
    pub difficulty: Difficulty,
    pub questions: Vec<AnsweredQuestion>,
    pub score: u32,
    pub total: u32,
    pub time_taken_secs: u32,
    pub completed_at: DateTime<Utc>,
}

impl QuizResultRecord {
    /// Convert the record back into a domain `QuizResult`.
    ///
    /// # Errors
    ///
    /// Returns `QuizResultError` if the stored fields fail validation.
    pub fn into_result(self) -> Result<QuizResult, QuizResultError> {
        QuizResult::from_persisted(self.score, self.total, self.questions, self.time_taken_secs)
    }
}

/// Repository contract for persisted quiz results.
#[async_trait]
pub trait QuizResultRepository: Send + Sync {
    /// Persist a finished quiz and return its storage id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the result cannot be stored.
    async fn insert_result(
        &self,
        record: NewQuizResultRecord,
    ) -> Result<QuizResultId, StorageError>;

    /// Fetch a persisted result by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_result(&self, id: QuizResultId) -> Result<QuizResultRecord, StorageError>;

    /// Most recent results for a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` for storage failures.
    async fn list_results_for_user(
        &self,
        user_id: UserId,
        limit: u32,
    ) -> Result<Vec<QuizResultRecord>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    results: Arc<Mutex<Vec<QuizResultRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizResultRepository for InMemoryRepository {
    async fn insert_result(
        &self,
        record: NewQuizResultRecord,
    ) -> Result<QuizResultId, StorageError> {
        let mut guard = self
            .results
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let id = i64::try_from(guard.len())
            .map_err(|_| StorageError::Serialization("row id overflow".into()))?
            + 1;
        guard.push(QuizResultRecord {
            id,
            user_id: record.user_id,
            topic: record.topic,
            difficulty: record.difficulty,
            questions: record.questions,
            score: record.score,
            total: record.total,
            time_taken_secs: record.time_taken_secs,
            completed_at: record.completed_at,
        });
        Ok(id)
    }

    async fn get_result(&self, id: QuizResultId) -> Result<QuizResultRecord, StorageError> {
        let guard = self
            .results
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn list_results_for_user(
        &self,
        user_id: UserId,
        limit: u32,
    ) -> Result<Vec<QuizResultRecord>, StorageError> {
        let guard = self
            .results
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut matching: Vec<QuizResultRecord> = guard
            .iter()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.completed_at
                .cmp(&a.completed_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        matching.truncate(limit as usize);
        Ok(matching)
    }
}

/// Aggregates the result repository behind a trait object for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub results: Arc<dyn QuizResultRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let results: Arc<dyn QuizResultRepository> = Arc::new(repo);
        Self { results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quiz_core::model::Question;
    use quiz_core::time::fixed_now;

    fn build_record(user_id: UserId, completed_at: DateTime<Utc>) -> NewQuizResultRecord {
        let setup = QuizSetup::new("Capitals", Difficulty::Easy, 1).unwrap();
        let question = Question::new(
            "Capital of France?",
            vec!["Paris".to_string(), "Lyon".to_string()],
            "Paris",
        )
        .unwrap();
        let result =
            QuizResult::from_answers(vec![question], vec!["Paris".to_string()], 30).unwrap();
        NewQuizResultRecord::from_result(user_id, &setup, &result, completed_at)
    }

    #[tokio::test]
    async fn round_trips_a_result() {
        let repo = InMemoryRepository::new();
        let user = UserId::random();

        let id = repo
            .insert_result(build_record(user, fixed_now()))
            .await
            .unwrap();
        let record = repo.get_result(id).await.unwrap();
        assert_eq!(record.user_id, user);
        assert_eq!(record.topic, "Capitals");

        let result = record.into_result().unwrap();
        assert_eq!(result.score(), 1);
        assert_eq!(result.total(), 1);
        assert_eq!(result.time_taken_secs(), 30);
    }

    #[tokio::test]
    async fn lists_newest_first_per_user() {
        let repo = InMemoryRepository::new();
        let user = UserId::random();
        let other = UserId::random();

        repo.insert_result(build_record(user, fixed_now()))
            .await
            .unwrap();
        repo.insert_result(build_record(user, fixed_now() + Duration::hours(1)))
            .await
            .unwrap();
        repo.insert_result(build_record(other, fixed_now()))
            .await
            .unwrap();

        let listed = repo.list_results_for_user(user, 10).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed[0].completed_at > listed[1].completed_at);

        let limited = repo.list_results_for_user(user, 1).await.unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[tokio::test]
    async fn missing_result_is_not_found() {
        let repo = InMemoryRepository::new();
        assert!(matches!(
            repo.get_result(99).await,
            Err(StorageError::NotFound)
        ));
    }
}
