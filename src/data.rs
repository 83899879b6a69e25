use crate::error::TrackerResult;
use sqlx::{PgConnection, Pool, Postgres};

pub mod student;

/// Operations every persisted record type supports.
pub trait DataType: Sized {
    type Id;
    type FormForAdding;

    async fn get_from_db_by_id(id: Self::Id, conn: &mut PgConnection)
    -> TrackerResult<Option<Self>>;
    async fn get_all(pool: &Pool<Postgres>) -> TrackerResult<Vec<Self>>;
    async fn insert_into_database(
        to_be_added: Self::FormForAdding,
        conn: &mut PgConnection,
    ) -> TrackerResult<Self::Id>;
    async fn remove_from_database(id: Self::Id, conn: &mut PgConnection) -> TrackerResult<()>;
}
