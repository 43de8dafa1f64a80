use crate::{
    data::{IdForm, Student, student::avatar_label},
    maud_conveniences::{
        avatar_badge, error_notification, escape, render_table, spinner, success_notification,
    },
    state::RollcallState,
    view::RefreshOutcome,
};
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

/// Full students page. The table itself is loaded (and re-loaded) by htmx:
/// `students_changed`, fired from the body by any successful mutation, is
/// the refresh callback the drawer and the delete buttons invoke.
pub async fn get_students(State(state): State<RollcallState>) -> Markup {
    state.render(html! {
        div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-5xl w-full flex flex-col space-y-4" {
            div id="all_students" hx-get="/internal/get_students" hx-trigger="load, students_changed from:body" {
                (spinner())
            }
            div id="drawer" {}
        }
    })
}

/// The refresh operation: fetch the whole collection from the remote API
/// and make it the authoritative copy. On failure the rows we already hold
/// stay up and the error payload is surfaced as a notification.
pub async fn internal_get_students(State(state): State<RollcallState>) -> Markup {
    let token = state.list_view().write().await.begin_refresh();
    let result = state.api().list_students().await;

    let mut view = state.list_view().write().await;
    let failure_note = match view.complete_refresh(token, result) {
        RefreshOutcome::Replaced | RefreshOutcome::Stale => None,
        RefreshOutcome::Failed(e) => {
            warn!(?e, "refreshing the student list failed");
            Some(error_notification("There was an issue", &e.notification_body()))
        }
    };

    html! {
        // Still loading means a newer refresh is outstanding and will
        // re-render this container when it settles.
        @if view.is_loading() {
            (spinner())
        } @else {
            (render_students(view.students()))
        }
        @if let Some(note) = failure_note {
            (note)
        }
    }
}

fn add_student_button(css_class: &'static str) -> Markup {
    html! {
        button class={(css_class) " bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded"} hx-get="/internal/students/new_student_form" hx-target="#drawer" {
            "Add New Student"
        }
    }
}

fn render_students(students: &[Student]) -> Markup {
    if students.is_empty() {
        return html! {
            div class="flex flex-col items-center space-y-4 p-8" {
                p class="text-gray-400 italic" {"No students found"}
                (add_student_button("add-btn-empty"))
            }
        };
    }

    let header = html! {
        div class="flex flex-row items-center justify-between mb-4" {
            div class="flex flex-row items-center space-x-2" {
                span class="bg-blue-900 text-blue-300 text-sm font-medium px-2 py-1 rounded" {"Number of students"}
                span class="bg-blue-600 text-sm font-semibold px-2 py-1 rounded-full" {(students.len())}
            }
            (add_student_button("add-btn"))
        }
    };

    render_table(
        header,
        ["", "ID", "First Name", "Last Name", "Gender", "Email", "Actions"],
        students.iter().map(student_row).collect(),
    )
}

fn student_row(student: &Student) -> [Markup; 7] {
    [
        avatar_badge(avatar_label(&student.first_name)),
        html! { (student.id) },
        escape(&student.first_name),
        escape(&student.last_name),
        html! {
            span class="bg-gray-700 text-gray-300 text-sm px-2 py-1 rounded" {(student.gender)}
        },
        html! {
            a href={"mailto:" (student.email)} class="text-blue-500" {(student.email)}
        },
        html! {
            div class="flex flex-row space-x-2" {
                // No edit endpoint exists upstream; the affordance stays
                // visible but inert.
                button disabled title="Editing is not available" class="bg-slate-600 opacity-50 cursor-not-allowed font-bold py-1 px-3 rounded" {
                    "Edit"
                }
                button class="bg-red-600 hover:bg-red-800 font-bold py-1 px-3 rounded" hx-delete="/students" hx-vals={"{\"id\": \"" (student.id) "\"}"} hx-confirm="Are you sure you want to delete this student?" hx-swap="none" {
                    "Delete"
                }
            }
        },
    ]
}

/// Delete one student by id. There is no optimistic removal: the table only
/// changes when the triggered refresh re-fetches from the server.
pub async fn delete_student(
    State(state): State<RollcallState>,
    Query(IdForm { id }): Query<IdForm>,
) -> Response {
    match state.api().delete_student(id).await {
        Ok(()) => {
            info!(id, "student deleted");
            let note =
                success_notification("Student deleted", &format!("Student ID {id} was deleted."));
            ([("HX-Trigger", "students_changed")], note).into_response()
        }
        Err(e) => {
            warn!(?e, id, "deleting student failed");
            error_notification("There was an issue", &e.notification_body()).into_response()
        }
    }
}
