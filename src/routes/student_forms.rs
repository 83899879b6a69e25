use crate::{
    command::Command,
    data::student::Student,
    maud_conveniences::{form_submit_button, simple_form_element, title},
    routes::student_controller::CONTROLLER_PATH,
    state::TrackerState,
};
use axum::extract::State;
use maud::{Markup, html};

pub const ADD_FORM_PATH: &str = "/add-student-form";

fn back_to_list() -> Markup {
    html! {
        p class="mt-4" {
            a href=(CONTROLLER_PATH) class="hover:text-blue-300 underline" {"Back to List"}
        }
    }
}

pub async fn get_add_student_form(State(state): State<TrackerState>) -> Markup {
    state.render(html! {
        div class="bg-gray-800 shadow-md rounded px-8 pt-6 pb-8 mb-4 w-full max-w-sm" {
            (title("Add Student"))
            form action=(CONTROLLER_PATH) method="post" {
                input type="hidden" name="command" value=(Command::Add.as_str());
                (simple_form_element("firstName", "First Name", false, None, None))
                (simple_form_element("lastName", "Last Name", false, None, None))
                (simple_form_element("email", "Email", false, Some("email"), None))
                (form_submit_button(Some("Save")))
            }
            (back_to_list())
        }
    })
}

pub fn render_update_form(student: &Student) -> Markup {
    html! {
        div class="bg-gray-800 shadow-md rounded px-8 pt-6 pb-8 mb-4 w-full max-w-sm" {
            (title("Update Student"))
            form action=(CONTROLLER_PATH) method="post" {
                input type="hidden" name="command" value=(Command::Update.as_str());
                input type="hidden" name="studentId" value=(student.id);
                (simple_form_element("firstName", "First Name", false, None, Some(student.first_name.as_str())))
                (simple_form_element("lastName", "Last Name", false, None, Some(student.last_name.as_str())))
                (simple_form_element("email", "Email", false, Some("email"), Some(student.email.as_str())))
                (form_submit_button(Some("Save")))
            }
            (back_to_list())
        }
    }
}
