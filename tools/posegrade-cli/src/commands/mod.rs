pub mod grade;
pub mod joints;
pub mod validate;
