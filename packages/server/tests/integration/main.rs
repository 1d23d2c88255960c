mod photo;
mod project;
