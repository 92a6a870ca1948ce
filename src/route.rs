use serde::{Deserialize, Serialize};

use crate::data::interface::user::AuthContext;

/// Pages of the application and their paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Home,
    Login,
    SignUp,
    EditPassword,
    Playlist { id: String },
    Profile { user_id: String },
    CreatePlaylist,
    Follow { user_id: String },
    Chat,
    Search,
    NotFound,
}

impl Route {
    /// Match a path. Query string, fragment and trailing slash are ignored.
    ///
    /// Segments are percent-decoded; a segment that does not decode to UTF-8 is `NotFound`.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Result<Vec<String>, _> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| urlencoding::decode(s).map(|s| s.into_owned()))
            .collect();
        let Ok(segments) = segments else {
            log::debug!("Undecodable path {}", path);
            return Route::NotFound;
        };
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["signup"] => Route::SignUp,
            ["editpw"] => Route::EditPassword,
            ["playlist", id] => Route::Playlist { id: id.to_string() },
            ["profile", user_id] => Route::Profile {
                user_id: user_id.to_string(),
            },
            ["createplaylist"] => Route::CreatePlaylist,
            ["follow", user_id] => Route::Follow {
                user_id: user_id.to_string(),
            },
            ["chat"] => Route::Chat,
            ["search"] => Route::Search,
            _ => Route::NotFound,
        }
    }

    /// Path of the page; ids are percent-encoded so `parse` gives the route back.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::SignUp => "/signup".to_string(),
            Route::EditPassword => "/editpw".to_string(),
            Route::Playlist { id } => format!("/playlist/{}", urlencoding::encode(id)),
            Route::Profile { user_id } => format!("/profile/{}", urlencoding::encode(user_id)),
            Route::CreatePlaylist => "/createplaylist".to_string(),
            Route::Follow { user_id } => format!("/follow/{}", urlencoding::encode(user_id)),
            Route::Chat => "/chat".to_string(),
            Route::Search => "/search".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Route::Login | Route::SignUp | Route::EditPassword | Route::NotFound
        )
    }

    /// Resolve `path` for a visitor; protected pages send anonymous visitors to login.
    pub fn guard(path: &str, auth: Option<&AuthContext>) -> Route {
        let route = Route::parse(path);
        if route.requires_auth() && auth.is_none() {
            log::debug!("Redirecting anonymous visitor from {} to login", path);
            Route::Login
        } else {
            route
        }
    }
}
