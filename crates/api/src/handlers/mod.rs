pub mod pages;
pub mod project;
