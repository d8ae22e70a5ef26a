pub mod about;
pub mod contact;
pub mod education;
pub mod hero;
pub mod projects;
pub mod skills;
