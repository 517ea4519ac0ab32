/// Owner-scoped store operations for schedule entries.
///
/// Every query filters by `owner_id`: an entry belonging to someone else is
/// indistinguishable from a missing one.
use sqlx::{Error as SqlxError, QueryBuilder};

use super::Database;
use crate::filter::EntryFilter;
use crate::models::{Day, NewEntry, ScheduleEntry};

impl Database {
    /// Insert a new entry for the given owner, status forced to NotStarted
    pub async fn insert_entry(
        &self,
        owner_id: i64,
        new: NewEntry,
    ) -> Result<ScheduleEntry, SqlxError> {
        sqlx::query_as(
            r#"
            INSERT INTO schedule_entries
                (owner_id, day, start_time, end_time, activity, category,
                 timer_duration_minutes, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'NotStarted')
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(new.day)
        .bind(new.start_time)
        .bind(new.end_time)
        .bind(new.activity)
        .bind(new.category)
        .bind(new.timer_duration_minutes)
        .fetch_one(self.pool())
        .await
    }

    /// Get one entry by id, scoped to its owner
    pub async fn get_entry(
        &self,
        owner_id: i64,
        id: i64,
    ) -> Result<Option<ScheduleEntry>, SqlxError> {
        sqlx::query_as("SELECT * FROM schedule_entries WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(self.pool())
            .await
    }

    /// List the owner's entries matching a resolved filter, ordered by
    /// calendar day (enum declaration order) then start time
    pub async fn list_entries(
        &self,
        owner_id: i64,
        filter: &EntryFilter,
    ) -> Result<Vec<ScheduleEntry>, SqlxError> {
        let mut query = QueryBuilder::new("SELECT * FROM schedule_entries WHERE owner_id = ");
        query.push_bind(owner_id);

        if let Some(day) = filter.day {
            query.push(" AND day = ");
            query.push_bind(day);
        }

        if let Some(category) = &filter.category {
            query.push(" AND category = ");
            query.push_bind(category.clone());
        }

        if let Some(bucket) = filter.time_of_day {
            let (first, second) = bucket.ranges();
            query.push(" AND (start_time BETWEEN ");
            query.push_bind(first.0);
            query.push(" AND ");
            query.push_bind(first.1);
            if let Some(second) = second {
                query.push(" OR start_time BETWEEN ");
                query.push_bind(second.0);
                query.push(" AND ");
                query.push_bind(second.1);
            }
            query.push(")");
        }

        if let Some(search) = &filter.search {
            query.push(" AND activity ILIKE ");
            query.push_bind(format!("%{}%", search));
        }

        query.push(" ORDER BY day, start_time");

        query
            .build_query_as::<ScheduleEntry>()
            .fetch_all(self.pool())
            .await
    }

    /// List the owner's entries for one day, ordered by start time
    pub async fn list_entries_for_day(
        &self,
        owner_id: i64,
        day: Day,
    ) -> Result<Vec<ScheduleEntry>, SqlxError> {
        sqlx::query_as(
            "SELECT * FROM schedule_entries \
             WHERE owner_id = $1 AND day = $2 ORDER BY start_time",
        )
        .bind(owner_id)
        .bind(day)
        .fetch_all(self.pool())
        .await
    }

    /// Persist a mutated entry as a whole, refreshing updated_at.
    ///
    /// All mutable columns are written together: single-entity atomicity,
    /// last write wins on concurrent mutations of the same entry.
    pub async fn save_entry(&self, entry: &ScheduleEntry) -> Result<ScheduleEntry, SqlxError> {
        sqlx::query_as(
            r#"
            UPDATE schedule_entries SET
                day = $1,
                start_time = $2,
                end_time = $3,
                activity = $4,
                category = $5,
                evaluation = $6,
                status = $7,
                timer_type = $8,
                timer_duration_minutes = $9,
                timer_start = $10,
                timer_end = $11,
                updated_at = NOW()
            WHERE id = $12 AND owner_id = $13
            RETURNING *
            "#,
        )
        .bind(entry.day)
        .bind(entry.start_time)
        .bind(entry.end_time)
        .bind(&entry.activity)
        .bind(&entry.category)
        .bind(&entry.evaluation)
        .bind(entry.status)
        .bind(&entry.timer_type)
        .bind(entry.timer_duration_minutes)
        .bind(entry.timer_start)
        .bind(entry.timer_end)
        .bind(entry.id)
        .bind(entry.owner_id)
        .fetch_one(self.pool())
        .await
    }

    /// Delete one entry, scoped to its owner; returns whether a row was removed
    pub async fn delete_entry(&self, owner_id: i64, id: i64) -> Result<bool, SqlxError> {
        let result = sqlx::query("DELETE FROM schedule_entries WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
