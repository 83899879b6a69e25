use crate::{
    config::RuntimeConfiguration,
    error::{GetDatabaseConnectionSnafu, MigrateSnafu, OpenDatabaseSnafu, TrackerResult},
};
use maud::{DOCTYPE, Markup, html};
use snafu::ResultExt;
use sqlx::{Pool, Postgres, pool::PoolConnection, postgres::PgPoolOptions};
use std::ops::Deref;

#[derive(Clone, Debug)]
pub struct TrackerState {
    pool: Pool<Postgres>,
}

impl TrackerState {
    pub async fn new(options: PgPoolOptions, config: &RuntimeConfiguration) -> TrackerResult<Self> {
        let pool = options
            .connect(&config.db_config().get_db_path())
            .await
            .context(OpenDatabaseSnafu)?;

        sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

        Ok(Self::from_pool(pool))
    }

    /// Wraps an existing pool, which must already have the schema applied.
    pub const fn from_pool(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    #[allow(clippy::unused_self)] //in case self is ever needed :), and to allow direct html! usage
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Student Tracker" }
                }
                body class="bg-gray-900 min-h-screen flex flex-col items-center justify-center text-white" {
                    (markup)
                }
            }
        }
    }

    pub async fn get_connection(&self) -> TrackerResult<PoolConnection<Postgres>> {
        self.pool
            .acquire()
            .await
            .context(GetDatabaseConnectionSnafu)
    }

    pub async fn sensible_shutdown(&self) {
        self.pool.close().await;
    }
}

impl Deref for TrackerState {
    type Target = Pool<Postgres>;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}
