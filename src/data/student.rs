use crate::{
    data::DataType,
    error::{GetDatabaseConnectionSnafu, MakeQuerySnafu, TrackerResult},
};
use snafu::ResultExt;
use sqlx::{FromRow, PgConnection, Pool, Postgres};

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct AddStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl DataType for Student {
    type Id = i32;
    type FormForAdding = AddStudent;

    async fn get_from_db_by_id(
        id: Self::Id,
        conn: &mut PgConnection,
    ) -> TrackerResult<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT id, first_name, last_name, email FROM public.student WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(conn)
        .await
        .context(MakeQuerySnafu)
    }

    async fn get_all(pool: &Pool<Postgres>) -> TrackerResult<Vec<Self>> {
        let mut conn = pool.acquire().await.context(GetDatabaseConnectionSnafu)?;

        sqlx::query_as::<_, Self>(
            "SELECT id, first_name, last_name, email FROM public.student ORDER BY last_name, id",
        )
        .fetch_all(&mut *conn)
        .await
        .context(MakeQuerySnafu)
    }

    async fn insert_into_database(
        to_be_added: Self::FormForAdding,
        conn: &mut PgConnection,
    ) -> TrackerResult<Self::Id> {
        let AddStudent {
            first_name,
            last_name,
            email,
        } = to_be_added;

        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO public.student (first_name, last_name, email) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .fetch_one(conn)
        .await
        .context(MakeQuerySnafu)?;

        info!(%id, "Added student");
        Ok(id)
    }

    async fn remove_from_database(id: Self::Id, conn: &mut PgConnection) -> TrackerResult<()> {
        let result = sqlx::query("DELETE FROM public.student WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await
            .context(MakeQuerySnafu)?;

        if result.rows_affected() == 0 {
            warn!(%id, "Tried to delete a student that doesn't exist");
        } else {
            info!(%id, "Deleted student");
        }
        Ok(())
    }
}

impl Student {
    /// Case-insensitive substring match on either name. A blank name lists everyone.
    pub async fn search_by_name(pool: &Pool<Postgres>, name: &str) -> TrackerResult<Vec<Self>> {
        let name = name.trim();
        if name.is_empty() {
            return Self::get_all(pool).await;
        }

        let mut conn = pool.acquire().await.context(GetDatabaseConnectionSnafu)?;
        let pattern = format!("%{}%", escape_like_pattern(name));

        sqlx::query_as::<_, Self>(
            "SELECT id, first_name, last_name, email FROM public.student WHERE first_name ILIKE $1 OR last_name ILIKE $1 ORDER BY last_name, id",
        )
        .bind(pattern)
        .fetch_all(&mut *conn)
        .await
        .context(MakeQuerySnafu)
    }

    pub async fn update_in_database(self, conn: &mut PgConnection) -> TrackerResult<()> {
        let Self {
            id,
            first_name,
            last_name,
            email,
        } = self;

        let result = sqlx::query(
            "UPDATE public.student SET first_name = $2, last_name = $3, email = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .execute(conn)
        .await
        .context(MakeQuerySnafu)?;

        if result.rows_affected() == 0 {
            warn!(%id, "Tried to update a student that doesn't exist");
        } else {
            info!(%id, "Updated student");
        }
        Ok(())
    }
}

fn escape_like_pattern(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
