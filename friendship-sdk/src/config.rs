pub const BASE_URL: &str = "/api/v1/";
pub const CSRF_COOKIE_NAME: &str = "csrftoken";
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// transport settings, every request path is relative to `base_url`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub base_url: String,
    /// cookie the csrf token is read from
    pub csrf_cookie_name: String,
    /// header the token is echoed in
    pub csrf_header_name: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            csrf_cookie_name: CSRF_COOKIE_NAME.to_string(),
            csrf_header_name: CSRF_HEADER_NAME.to_string(),
        }
    }
}

impl HttpConfig {
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
