//! in-memory `FriendApi` for the service tests

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use futures::channel::oneshot;

use crate::account::SessionAccount;
use crate::api::FriendApi;
use crate::error::{Error, Result};
use crate::model::friend::{ActionDelta, FriendshipRequest};
use crate::model::user::UserRef;
use crate::state::{FriendshipStore, SharedStore};

/// answers are either queued up front or parked on a oneshot per status
#[derive(Default)]
pub struct StubApi {
    lists: RefCell<VecDeque<Result<Vec<UserRef>>>>,
    parked: RefCell<HashMap<Option<String>, oneshot::Receiver<Result<Vec<UserRef>>>>>,
    deltas: RefCell<VecDeque<Result<ActionDelta>>>,
    list_calls: RefCell<Vec<Option<String>>>,
    saved: RefCell<Vec<FriendshipRequest>>,
}

impl StubApi {
    pub fn push_list(&self, res: Result<Vec<UserRef>>) {
        self.lists.borrow_mut().push_back(res);
    }

    pub fn push_delta(&self, res: Result<ActionDelta>) {
        self.deltas.borrow_mut().push_back(res);
    }

    /// the listing for `status` completes when the returned sender fires
    pub fn park(&self, status: Option<&str>) -> oneshot::Sender<Result<Vec<UserRef>>> {
        let (tx, rx) = oneshot::channel();
        self.parked
            .borrow_mut()
            .insert(status.map(str::to_string), rx);
        tx
    }

    pub fn list_calls(&self) -> Vec<Option<String>> {
        self.list_calls.borrow().clone()
    }

    pub fn saved(&self) -> Vec<FriendshipRequest> {
        self.saved.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl FriendApi for StubApi {
    async fn list_friends(&self, status: Option<&str>) -> Result<Vec<UserRef>> {
        let key = status.map(str::to_string);
        self.list_calls.borrow_mut().push(key.clone());

        let parked = self.parked.borrow_mut().remove(&key);
        if let Some(rx) = parked {
            return rx
                .await
                .unwrap_or_else(|_| Err(Error::network(None, "stub dropped")));
        }
        let next = self.lists.borrow_mut().pop_front();
        next.unwrap_or_else(|| Err(Error::network(None, "no stub answer")))
    }

    async fn save_friendship(&self, req: FriendshipRequest) -> Result<ActionDelta> {
        self.saved.borrow_mut().push(req);
        let next = self.deltas.borrow_mut().pop_front();
        next.unwrap_or_else(|| Err(Error::network(None, "no stub answer")))
    }
}

pub fn shared_store(session_user: &str) -> SharedStore {
    FriendshipStore::shared(Rc::new(SessionAccount::new(Some(UserRef::new(
        session_user.to_string(),
    )))))
}

pub fn users(names: &[&str]) -> Vec<UserRef> {
    names
        .iter()
        .map(|name| UserRef::new(name.to_string()))
        .collect()
}

pub fn names(list: &[UserRef]) -> Vec<String> {
    list.iter().map(|user| user.username.to_string()).collect()
}
