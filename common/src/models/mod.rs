pub mod note;
pub mod session;
pub mod user;
