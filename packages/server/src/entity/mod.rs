pub mod photo;
pub mod project;
