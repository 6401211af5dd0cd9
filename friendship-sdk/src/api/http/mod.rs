use async_trait::async_trait;
use gloo_net::http::Response;

pub use friend::*;

use crate::error::{Error, Result};

mod friend;

#[async_trait(?Send)]
pub trait RespStatus: Sized {
    async fn success(self) -> Result<Self>;
}

#[async_trait(?Send)]
impl RespStatus for Response {
    async fn success(self) -> Result<Self> {
        if (200..=299).contains(&self.status()) {
            Ok(self)
        } else {
            // hand the raw body upstream, whatever shape the backend chose
            let status = self.status();
            let body = self.text().await.unwrap_or_else(|_| self.status_text());
            Err(Error::network(Some(status), body))
        }
    }
}
