use gloo_net::http::{Request, RequestBuilder};

use crate::api::{csrf_token, friend::FriendApi};
use crate::config::HttpConfig;
use crate::error::Result;
use crate::model::friend::{ActionDelta, FriendshipRequest};
use crate::model::user::UserRef;

use super::RespStatus;

pub const FRIEND_PATH: &str = "friendships/friend/";
pub const FRIENDSHIP_PATH: &str = "friendships/friendship/";

pub struct FriendHttp {
    conf: HttpConfig,
}

impl FriendHttp {
    pub fn new(conf: HttpConfig) -> Self {
        Self { conf }
    }

    /// attach the csrf header every request carries
    fn with_csrf(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(&self.conf.csrf_header_name, &csrf_token(&self.conf))
    }
}

/// query pairs of the listing request, an absent status sends nothing
pub fn status_query(status: Option<&str>) -> Vec<(&'static str, &str)> {
    status.map(|s| vec![("status", s)]).unwrap_or_default()
}

#[async_trait::async_trait(?Send)]
impl FriendApi for FriendHttp {
    async fn list_friends(&self, status: Option<&str>) -> Result<Vec<UserRef>> {
        let url = self.conf.url(FRIEND_PATH);
        log::debug!("list friends: {url} status: {status:?}");
        let users: Vec<UserRef> = self
            .with_csrf(Request::get(&url).query(status_query(status)))
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(users)
    }

    async fn save_friendship(&self, req: FriendshipRequest) -> Result<ActionDelta> {
        let url = self.conf.url(FRIENDSHIP_PATH);
        log::debug!("save friendship: {url} {req:?}");
        let delta: ActionDelta = self
            .with_csrf(Request::post(&url))
            .json(&req)?
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(delta)
    }
}
