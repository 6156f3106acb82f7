pub mod portfolio;
pub mod project;
