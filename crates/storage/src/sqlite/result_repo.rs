use std::str::FromStr;

use quiz_core::model::{AnsweredQuestion, Difficulty, UserId};
use sqlx::Row;

use super::SqliteRepository;
use crate::repository::{
    NewQuizResultRecord, QuizResultId, QuizResultRecord, QuizResultRepository, StorageError,
};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn u32_from_i64(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

fn map_result_row(row: &sqlx::sqlite::SqliteRow) -> Result<QuizResultRecord, StorageError> {
    let id: i64 = row.try_get("id").map_err(ser)?;
    let user_id_text: String = row.try_get("user_id").map_err(ser)?;
    let user_id = UserId::from_str(&user_id_text).map_err(ser)?;
    let topic: String = row.try_get("topic").map_err(ser)?;
    let difficulty_text: String = row.try_get("difficulty").map_err(ser)?;
    let difficulty = Difficulty::from_str(&difficulty_text).map_err(ser)?;
    let questions_json: String = row.try_get("questions").map_err(ser)?;
    let questions: Vec<AnsweredQuestion> = serde_json::from_str(&questions_json).map_err(ser)?;
    let score = u32_from_i64("score", row.try_get::<i64, _>("score").map_err(ser)?)?;
    let total = u32_from_i64("total", row.try_get::<i64, _>("total").map_err(ser)?)?;
    let time_taken_secs = u32_from_i64(
        "time_taken_secs",
        row.try_get::<i64, _>("time_taken_secs").map_err(ser)?,
    )?;
    let completed_at = row.try_get("completed_at").map_err(ser)?;

    Ok(QuizResultRecord {
        id,
        user_id,
        topic,
        difficulty,
        questions,
        score,
        total,
        time_taken_secs,
        completed_at,
    })
}

#[async_trait::async_trait]
impl QuizResultRepository for SqliteRepository {
    async fn insert_result(
        &self,
        record: NewQuizResultRecord,
    ) -> Result<QuizResultId, StorageError> {
        let questions_json = serde_json::to_string(&record.questions).map_err(ser)?;

        let res = sqlx::query(
            r"
                INSERT INTO quiz_results (
                    user_id, topic, difficulty, questions,
                    score, total, time_taken_secs, completed_at
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ",
        )
        .bind(record.user_id.to_string())
        .bind(&record.topic)
        .bind(record.difficulty.as_str())
        .bind(questions_json)
        .bind(i64::from(record.score))
        .bind(i64::from(record.total))
        .bind(i64::from(record.time_taken_secs))
        .bind(record.completed_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(res.last_insert_rowid())
    }

    async fn get_result(&self, id: QuizResultId) -> Result<QuizResultRecord, StorageError> {
        let row = sqlx::query(
            r"
                SELECT
                    id, user_id, topic, difficulty, questions,
                    score, total, time_taken_secs, completed_at
                FROM quiz_results
                WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .ok_or(StorageError::NotFound)?;

        map_result_row(&row)
    }

    async fn list_results_for_user(
        &self,
        user_id: UserId,
        limit: u32,
    ) -> Result<Vec<QuizResultRecord>, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT
                    id, user_id, topic, difficulty, questions,
                    score, total, time_taken_secs, completed_at
                FROM quiz_results
                WHERE user_id = ?1
                ORDER BY completed_at DESC, id DESC
                LIMIT ?2
            ",
        )
        .bind(user_id.to_string())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(map_result_row(&row)?);
        }

        Ok(out)
    }
}
