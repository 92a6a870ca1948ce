pub mod comment;
pub mod playlist;
pub mod user;
