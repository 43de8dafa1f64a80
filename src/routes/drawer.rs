use crate::{
    data::{Gender, student::StudentFormInput},
    error::RollcallResult,
    maud_conveniences::{error_notification, form_element, simple_form_element, success_notification, title},
    state::RollcallState,
};
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

/// The drawer panel. Re-rendered with the entered values on every failed
/// submission so nothing the user typed is lost.
fn drawer_form(input: &StudentFormInput) -> Markup {
    html! {
        div class="bg-gray-800 border border-gray-700 p-6 rounded shadow-md" {
            (title("Create new student"))

            form hx-put="/internal/students/new_student_form" hx-trigger="submit" hx-target="#drawer" class="p-4" {
                (simple_form_element("first_name", "First Name", true, None, non_empty(&input.first_name)))
                (simple_form_element("last_name", "Last Name", true, None, non_empty(&input.last_name)))
                (simple_form_element("email", "Email", true, Some("email"), non_empty(&input.email)))
                (form_element("gender", "Gender", html! {
                    select required id="gender" name="gender" class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {
                        option value="" disabled selected[input.gender.is_empty()] {"Please select a gender"}
                        @for gender in Gender::ALL {
                            option value=(gender) selected[input.gender == gender.as_str()] {(gender)}
                        }
                    }
                }))

                div class="flex items-center justify-between" {
                    button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
                        "Submit"
                    }
                    button type="button" hx-post="/internal/students/close_drawer" hx-target="#drawer" class="bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded" {
                        "Cancel"
                    }
                }
            }
        }
    }
}

pub async fn internal_get_add_student_form(State(state): State<RollcallState>) -> Markup {
    state.drawer().write().await.open();
    drawer_form(&StudentFormInput::default())
}

/// Submit the creation form. Order matters here: presence validation and
/// the gender parse run before anything touches the network, and the
/// in-flight guard is claimed before the call so a double-click cannot
/// issue a second request.
pub async fn internal_put_new_student(
    State(state): State<RollcallState>,
    Form(input): Form<StudentFormInput>,
) -> RollcallResult<Response> {
    let missing = input.missing_fields();
    if !missing.is_empty() {
        // The browser's `required` attributes catch this first; this is the
        // backstop for anything that bypasses them. Still zero API calls.
        return Ok(html! {
            (drawer_form(&input))
            (error_notification("Missing required fields", &missing.join(", ")))
        }
        .into_response());
    }

    // A gender outside the enum can only arrive by bypassing the rendered
    // select, so it propagates as an error rather than a notification.
    let new_student = input.clone().into_new_student()?;

    if !state.drawer().write().await.begin_submit() {
        return Ok(html! {
            (drawer_form(&input))
            (error_notification(
                "Submission in progress",
                "The previous submission has not finished yet.",
            ))
        }
        .into_response());
    }

    let result = state.api().create_student(new_student).await;

    let mut drawer = state.drawer().write().await;
    drawer.finish_submit();

    Ok(match result {
        Ok(created) => {
            drawer.close();
            info!(id = created.id, "student added");
            // The un-targeted part of this response is empty, which clears
            // the drawer container; the notification rides along
            // out-of-band and the header fires the refresh.
            let note = success_notification(
                "Student added",
                &format!("{} was added successfully", created.first_name),
            );
            ([("HX-Trigger", "students_changed")], note).into_response()
        }
        Err(e) => {
            warn!(?e, "adding student failed");
            html! {
                (drawer_form(&input))
                (error_notification("There was an issue", &e.notification_body()))
            }
            .into_response()
        }
    })
}

pub async fn internal_post_close_drawer(State(state): State<RollcallState>) -> Markup {
    state.drawer().write().await.close();
    html! {}
}
