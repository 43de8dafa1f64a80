#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::single_match_else)]

use crate::{
    routes::{
        drawer::{internal_get_add_student_form, internal_post_close_drawer, internal_put_new_student},
        index::get_index_route,
        students::{delete_student, get_students, internal_get_students},
    },
    state::RollcallState,
};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

#[macro_use]
extern crate tracing;

pub mod client;
pub mod config;
pub mod data;
pub mod error;
pub mod maud_conveniences;
pub mod routes;
pub mod state;
pub mod view;

pub fn app(state: RollcallState) -> Router {
    Router::new()
        .route("/", get(get_index_route))
        .route("/students", get(get_students).delete(delete_student))
        .route("/internal/get_students", get(internal_get_students))
        .route(
            "/internal/students/new_student_form",
            get(internal_get_add_student_form).put(internal_put_new_student),
        )
        .route(
            "/internal/students/close_drawer",
            post(internal_post_close_drawer),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
