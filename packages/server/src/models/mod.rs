pub mod photo;
pub mod project;
pub mod shared;
