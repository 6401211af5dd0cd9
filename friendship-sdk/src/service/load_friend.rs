use std::rc::Rc;

use crate::api::FriendApi;
use crate::error::Result;
use crate::state::SharedStore;

/// loads one friendship list from the backend into the store
#[derive(Clone)]
pub struct FriendFetcher {
    api: Rc<dyn FriendApi>,
    store: SharedStore,
}

impl FriendFetcher {
    pub fn new(api: Rc<dyn FriendApi>, store: SharedStore) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> SharedStore {
        self.store.clone()
    }

    /// replace the list picked by `status`: "A" current, "P" pending, anything else unknown.
    /// on failure the store keeps its previous list
    pub async fn fetch(&self, status: Option<&str>) -> Result<SharedStore> {
        let list = self.api.list_friends(status).await.map_err(|err| {
            log::error!("load friends with status {:?} error: {}", status, err);
            err
        })?;
        self.store.borrow_mut().replace_list(status, list);
        Ok(self.store.clone())
    }
}
