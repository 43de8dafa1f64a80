use serde::Deserialize;

pub mod student;

pub use student::{Gender, NewStudent, Student};

#[derive(Deserialize)]
pub struct IdForm {
    pub id: i64,
}
