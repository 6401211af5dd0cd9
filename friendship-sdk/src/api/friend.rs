use crate::{
    error::Result,
    model::{
        friend::{ActionDelta, FriendshipRequest},
        user::UserRef,
    },
};

#[async_trait::async_trait(?Send)]
pub trait FriendApi {
    /// `GET friendships/friend/`, the status parameter is omitted when `None`
    async fn list_friends(&self, status: Option<&str>) -> Result<Vec<UserRef>>;

    /// `POST friendships/friendship/`
    async fn save_friendship(&self, req: FriendshipRequest) -> Result<ActionDelta>;
}
