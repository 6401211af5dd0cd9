pub mod friend;
pub mod user;
