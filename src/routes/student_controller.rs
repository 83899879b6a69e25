use crate::{
    command::Command,
    data::{
        DataType,
        student::{AddStudent, Student},
    },
    error::{
        MissingStudentIdSnafu, MissingStudentSnafu, ParseStudentIdSnafu, QueryParametersSnafu,
        TrackerError, TrackerResult,
    },
    routes::{list_students::render_student_list, student_forms::render_update_form},
    state::TrackerState,
};
use axum::{
    Form,
    extract::{
        Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use snafu::{OptionExt, ResultExt};

pub const CONTROLLER_PATH: &str = "/StudentController";
const LIST_AFTER_WRITE: &str = "/StudentController?command=LIST";

/// Every parameter any command reads. Unused ones are ignored.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ControllerParams {
    pub command: Option<String>,
    pub student_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub the_search_name: Option<String>,
}

impl ControllerParams {
    /// Fields set in `self` win, missing ones come from `fallback`.
    fn overriding(self, fallback: Self) -> Self {
        Self {
            command: self.command.or(fallback.command),
            student_id: self.student_id.or(fallback.student_id),
            first_name: self.first_name.or(fallback.first_name),
            last_name: self.last_name.or(fallback.last_name),
            email: self.email.or(fallback.email),
            the_search_name: self.the_search_name.or(fallback.the_search_name),
        }
    }

    fn student_id(&self) -> TrackerResult<i32> {
        let original = self.student_id.as_deref().context(MissingStudentIdSnafu)?;
        original
            .trim()
            .parse()
            .context(ParseStudentIdSnafu { original })
    }

    fn into_add_student(self) -> AddStudent {
        AddStudent {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        }
    }
}

pub async fn get_student_controller(
    State(state): State<TrackerState>,
    query: Result<Query<ControllerParams>, QueryRejection>,
) -> TrackerResult<Response> {
    let Query(params) = query.context(QueryParametersSnafu)?;
    let command = Command::for_get(params.command.as_deref());
    dispatch(&state, command, params).await
}

pub async fn post_student_controller(
    State(state): State<TrackerState>,
    query: Result<Query<ControllerParams>, QueryRejection>,
    form: Result<Form<ControllerParams>, FormRejection>,
) -> TrackerResult<Response> {
    let Query(query) = query.context(QueryParametersSnafu)?;
    // no form body means every parameter came in the query string
    let form = match form {
        Ok(Form(form)) => form,
        Err(FormRejection::InvalidFormContentType(_)) => ControllerParams::default(),
        Err(source) => return Err(TrackerError::FormParameters { source }),
    };

    let params = form.overriding(query);
    let command = Command::for_post(params.command.as_deref());
    dispatch(&state, command, params).await
}

async fn dispatch(
    state: &TrackerState,
    command: Command,
    params: ControllerParams,
) -> TrackerResult<Response> {
    debug!(%command, "Dispatching student command");

    match command {
        Command::List => list_students(state).await,
        Command::Search => {
            search_students(state, params.the_search_name.unwrap_or_default()).await
        }
        Command::Load => load_student(state, params.student_id()?).await,
        Command::Delete => delete_student(state, params.student_id()?).await,
        Command::Add => add_student(state, params.into_add_student()).await,
        Command::Update => {
            let id = params.student_id()?;
            let AddStudent {
                first_name,
                last_name,
                email,
            } = params.into_add_student();
            update_student(
                state,
                Student {
                    id,
                    first_name,
                    last_name,
                    email,
                },
            )
            .await
        }
    }
}

async fn list_students(state: &TrackerState) -> TrackerResult<Response> {
    let students = Student::get_all(state).await?;
    Ok(state.render(render_student_list(students, None)).into_response())
}

async fn search_students(state: &TrackerState, search_name: String) -> TrackerResult<Response> {
    let students = Student::search_by_name(state, &search_name).await?;
    Ok(state
        .render(render_student_list(students, Some(search_name.as_str())))
        .into_response())
}

async fn load_student(state: &TrackerState, id: i32) -> TrackerResult<Response> {
    let student = Student::get_from_db_by_id(id, &mut *state.get_connection().await?)
        .await?
        .context(MissingStudentSnafu { id })?;

    Ok(state.render(render_update_form(&student)).into_response())
}

async fn delete_student(state: &TrackerState, id: i32) -> TrackerResult<Response> {
    Student::remove_from_database(id, &mut *state.get_connection().await?).await?;
    list_students(state).await
}

async fn add_student(state: &TrackerState, student: AddStudent) -> TrackerResult<Response> {
    Student::insert_into_database(student, &mut *state.get_connection().await?).await?;
    Ok(Redirect::to(LIST_AFTER_WRITE).into_response())
}

async fn update_student(state: &TrackerState, student: Student) -> TrackerResult<Response> {
    student
        .update_in_database(&mut *state.get_connection().await?)
        .await?;
    Ok(Redirect::to(LIST_AFTER_WRITE).into_response())
}
