use std::rc::Rc;

use yew::AttrValue;

use crate::api::FriendApi;
use crate::error::Result;
use crate::model::friend::{FriendshipAction, FriendshipRequest};
use crate::state::SharedStore;

/// posts a friendship action and applies the returned delta to the store
#[derive(Clone)]
pub struct FriendshipMutator {
    api: Rc<dyn FriendApi>,
    store: SharedStore,
}

impl FriendshipMutator {
    pub fn new(api: Rc<dyn FriendApi>, store: SharedStore) -> Self {
        Self { api, store }
    }

    /// one request, no retry. the store is only touched after the backend answered
    pub async fn mutate(
        &self,
        username: impl Into<AttrValue>,
        action: FriendshipAction,
    ) -> Result<SharedStore> {
        let req = FriendshipRequest {
            username: username.into(),
            action: action.clone(),
        };
        let delta = self.api.save_friendship(req).await.map_err(|err| {
            log::error!("{} friendship error: {}", action, err);
            err
        })?;
        log::debug!("{} friendship: {:?}", action, delta);
        self.store.borrow_mut().apply_delta(&delta, &action);
        Ok(self.store.clone())
    }
}
