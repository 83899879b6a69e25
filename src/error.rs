use axum::{
    extract::rejection::{FormRejection, QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;
use std::num::ParseIntError;

pub type TrackerResult<T> = Result<T, TrackerError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum TrackerError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error getting db connection"))]
    GetDatabaseConnection { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    MigrateError { source: sqlx::migrate::MigrateError },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse IP port"))]
    ParsePort { source: ParseIntError },
    #[snafu(display("Unable to parse student id {:?}", original))]
    ParseStudentId {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("Unable to read query parameters: {}", source))]
    QueryParameters { source: QueryRejection },
    #[snafu(display("Unable to read form parameters: {}", source))]
    FormParameters { source: FormRejection },
    #[snafu(display("Missing `studentId` parameter"))]
    MissingStudentId,
    #[snafu(display("Could not find student with id: {}", id))]
    MissingStudent { id: i32 },
}

impl TrackerError {
    pub fn status_code(&self) -> StatusCode {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        match self {
            Self::OpenDatabase { .. } | Self::GetDatabaseConnection { .. } => ISE,
            Self::MigrateError { .. } => ISE,
            Self::MakeQuery { source } => match source {
                sqlx::Error::RowNotFound => NF,
                _ => ISE,
            },
            Self::BadEnvVar { .. } | Self::ParsePort { .. } => ISE,
            Self::QueryParameters { source } => source.status(),
            Self::FormParameters { source } => source.status(),
            Self::ParseStudentId { .. } | Self::MissingStudentId => BI,
            Self::MissingStudent { .. } => NF,
        }
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let basic_error = |desc| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Student Tracker Error "}
                    span {(desc)}
                }
            }
        };

        let status_code = self.status_code();

        error!(?self, %status_code, "Error!");
        (status_code, Html(basic_error(self.to_string()))).into_response()
    }
}
