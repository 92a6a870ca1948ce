pub mod comment;
pub mod playlist;
pub mod playlist_video;
pub mod user_profile;
