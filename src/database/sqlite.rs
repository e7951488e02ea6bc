use crate::database::{CampRepository, StoreError, StoreResult};
use crate::domain::{Activity, Camper, CamperChanges, NewCamper, NewSignup, Signup, SignupDetail};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite, SqliteConnection, Transaction};

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

// commit `tx` if `result` is Ok, roll it back otherwise
async fn finish<T>(tx: Transaction<'_, Sqlite>, result: StoreResult<T>) -> StoreResult<T> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!("Rollback failed after {}: {}", e, rollback_err);
            }
            Err(e)
        }
    }
}

async fn fetch_camper(conn: &mut SqliteConnection, id: i64) -> StoreResult<Option<Camper>> {
    let camper = sqlx::query_as::<_, Camper>("SELECT id, name, age FROM campers WHERE id = ?")
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(camper)
}

async fn fetch_activity(conn: &mut SqliteConnection, id: i64) -> StoreResult<Option<Activity>> {
    let activity = sqlx::query_as::<_, Activity>(
        "SELECT id, name, difficulty FROM activities WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(activity)
}

#[async_trait]
impl CampRepository for SqliteRepository {
    async fn all_campers(&self) -> StoreResult<Vec<Camper>> {
        let campers = sqlx::query_as::<_, Camper>("SELECT id, name, age FROM campers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(campers)
    }

    async fn camper_by_id(&self, id: i64) -> StoreResult<Option<Camper>> {
        let mut conn = self.pool.acquire().await?;
        fetch_camper(&mut *conn, id).await
    }

    async fn all_activities(&self) -> StoreResult<Vec<Activity>> {
        let activities = sqlx::query_as::<_, Activity>(
            "SELECT id, name, difficulty FROM activities ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(activities)
    }

    async fn activity_by_id(&self, id: i64) -> StoreResult<Option<Activity>> {
        let mut conn = self.pool.acquire().await?;
        fetch_activity(&mut *conn, id).await
    }

    async fn signups_by_camper(&self, camper_id: i64) -> StoreResult<Vec<Signup>> {
        let signups = sqlx::query_as::<_, Signup>(
            r#"
            SELECT id, time, camper_id, activity_id
            FROM signups
            WHERE camper_id = ?
            ORDER BY id
            "#,
        )
        .bind(camper_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(signups)
    }

    async fn insert_camper(&self, camper: &NewCamper) -> StoreResult<Camper> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query_as::<_, Camper>(
            "INSERT INTO campers (name, age) VALUES (?, ?) RETURNING id, name, age",
        )
        .bind(&camper.name)
        .bind(camper.age)
        .fetch_one(&mut *tx)
        .await
        .map_err(StoreError::from);

        finish(tx, result).await
    }

    async fn update_camper(&self, id: i64, changes: &CamperChanges) -> StoreResult<Camper> {
        let mut tx = self.pool.begin().await?;

        // COALESCE keeps the stored value for every field the caller left out
        let result = sqlx::query_as::<_, Camper>(
            r#"
            UPDATE campers
            SET
                name = COALESCE(?, name),
                age = COALESCE(?, age)
            WHERE id = ?
            RETURNING id, name, age
            "#,
        )
        .bind(changes.name.as_deref())
        .bind(changes.age)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(StoreError::from)
        .and_then(|camper| camper.ok_or(StoreError::NotFound("Camper")));

        finish(tx, result).await
    }

    async fn delete_activity(&self, id: i64) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        // signups referencing this activity go with it (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM activities WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::from)
            .and_then(|done| match done.rows_affected() {
                0 => Err(StoreError::NotFound("Activity")),
                _ => Ok(()),
            });

        finish(tx, result).await
    }

    async fn insert_signup(&self, signup: &NewSignup) -> StoreResult<SignupDetail> {
        let mut tx = self.pool.begin().await?;
        let result = insert_signup_in(&mut *tx, signup).await;
        finish(tx, result).await
    }
}

async fn insert_signup_in(conn: &mut SqliteConnection, new: &NewSignup) -> StoreResult<SignupDetail> {
    let camper = fetch_camper(&mut *conn, new.camper_id).await?;
    let activity = fetch_activity(&mut *conn, new.activity_id).await?;

    let (Some(camper), Some(activity)) = (camper, activity) else {
        return Err(StoreError::NotFound("Camper or Activity"));
    };

    let signup = sqlx::query_as::<_, Signup>(
        r#"
        INSERT INTO signups (time, camper_id, activity_id)
        VALUES (?, ?, ?)
        RETURNING id, time, camper_id, activity_id
        "#,
    )
    .bind(new.time)
    .bind(camper.id)
    .bind(activity.id)
    .fetch_one(&mut *conn)
    .await?;

    Ok(SignupDetail {
        signup,
        camper,
        activity,
    })
}
