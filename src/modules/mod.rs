pub mod about;
pub mod admin;
pub mod coding_profile;
pub mod contact;
pub mod hero;
pub mod learning_planner;
pub mod project;
pub mod resume;
pub mod site;
pub mod skill;
