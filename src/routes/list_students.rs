use crate::{
    command::Command,
    data::student::Student,
    maud_conveniences::{escape, link_button, render_table, title},
    routes::{student_controller::CONTROLLER_PATH, student_forms::ADD_FORM_PATH},
};
use maud::{Markup, html};

const DELETE_CONFIRMATION: &str =
    "if (!(confirm('Are you sure you want to delete this student?'))) return false";

pub fn render_student_list(students: Vec<Student>, search: Option<&str>) -> Markup {
    let header = html! {
        (title("Student Tracker"))
        div class="flex flex-row items-center space-x-4 mb-4" {
            (link_button(ADD_FORM_PATH, "Add Student"))
            form action=(CONTROLLER_PATH) method="get" class="flex flex-row space-x-2" {
                input type="hidden" name="command" value=(Command::Search.as_str());
                input type="search" name="theSearchName" value=[search] placeholder="Search by name..." class="shadow appearance-none border rounded py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600";
                button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded" {"Search"}
            }
            @if search.is_some() {
                a href=(CONTROLLER_PATH) class="hover:text-blue-300 underline" {"Clear search"}
            }
        }
    };

    let rows = students
        .into_iter()
        .map(|student| {
            [
                escape(student.first_name),
                escape(student.last_name),
                escape(student.email),
                html! {
                    a class="hover:text-blue-300 underline" href={(CONTROLLER_PATH) "?command=" (Command::Load.as_str()) "&studentId=" (student.id)} {"Update"}
                    " | "
                    a class="hover:text-red-300 underline" href={(CONTROLLER_PATH) "?command=" (Command::Delete.as_str()) "&studentId=" (student.id)} onclick=(DELETE_CONFIRMATION) {"Delete"}
                },
            ]
        })
        .collect();

    html! {
        div class="bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full" {
            (render_table(
                header,
                ["First Name", "Last Name", "Email", "Action"],
                rows,
                "No students found",
            ))
        }
    }
}
