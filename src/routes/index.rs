use crate::{
    maud_conveniences::link_button,
    routes::{student_controller::CONTROLLER_PATH, student_forms::ADD_FORM_PATH},
    state::TrackerState,
};
use axum::extract::State;
use maud::{Markup, html};

pub async fn get_index_route(State(state): State<TrackerState>) -> Markup {
    state.render(html! {
        div class="bg-gray-800 p-8 rounded shadow-md max-w-md w-full" {
            h1 class="text-2xl font-semibold mb-6 text-center" {
                "Student Tracker"
            }

            div class="flex flex-row space-x-4 justify-center" {
                (link_button(CONTROLLER_PATH, "View Students"))
                (link_button(ADD_FORM_PATH, "Add Student"))
            }
        }
    })
}
