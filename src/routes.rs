pub mod drawer;
pub mod index;
pub mod students;
