use super::Database;

impl Database {
    /// Run database migrations to create types and tables
    pub(super) async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        // Day enum, declared Monday-first so ORDER BY day sorts in calendar
        // week order rather than lexically
        sqlx::query(
            r#"
            DO $$ BEGIN
                CREATE TYPE day_of_week AS ENUM (
                    'Senin', 'Selasa', 'Rabu', 'Kamis', 'Jumat', 'Sabtu', 'Minggu'
                );
            EXCEPTION
                WHEN duplicate_object THEN NULL;
            END $$;
            "#,
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r#"
            DO $$ BEGIN
                CREATE TYPE entry_status AS ENUM ('NotStarted', 'Running', 'Done');
            EXCEPTION
                WHEN duplicate_object THEN NULL;
            END $$;
            "#,
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS schedule_entries (
                id BIGSERIAL PRIMARY KEY,
                owner_id BIGINT NOT NULL,
                day day_of_week NOT NULL,
                start_time TIME NOT NULL,
                end_time TIME,
                activity TEXT NOT NULL,
                category TEXT NOT NULL,
                evaluation TEXT,
                status entry_status NOT NULL DEFAULT 'NotStarted',
                timer_type TEXT,
                timer_duration_minutes INTEGER CHECK (
                    timer_duration_minutes IS NULL OR timer_duration_minutes >= 1
                ),
                timer_start TIMESTAMPTZ,
                timer_end TIMESTAMPTZ,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(self.pool())
        .await?;

        // Every read is scoped by owner, most also by day
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS schedule_entries_owner_day_idx \
             ON schedule_entries (owner_id, day)",
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }
}
