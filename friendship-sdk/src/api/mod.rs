pub use self::friend::FriendApi;
pub use self::http::FriendHttp;

use crate::config::HttpConfig;

mod friend;
mod http;

/// value of the csrf cookie, empty when the backend has not set one yet
pub fn csrf_token(conf: &HttpConfig) -> String {
    utils::get_cookie(&conf.csrf_cookie_name).unwrap_or_default()
}

pub fn friends(conf: HttpConfig) -> Box<dyn FriendApi> {
    Box::new(FriendHttp::new(conf))
}
