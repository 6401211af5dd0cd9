use std::cell::RefCell;
use std::rc::Rc;

use crate::account::AccountModel;
use crate::model::friend::{ActionDelta, FriendshipAction, FriendshipStatus};
use crate::model::user::UserRef;

/// the one store instance shared by the services and the ui.
/// borrows are never held across an await point
pub type SharedStore = Rc<RefCell<FriendshipStore>>;

/// current friends, pending requests and unknown users of the session user.
///
/// a username lives in at most one of the lists, the delta protocol keeps it that way
#[derive(Debug)]
pub struct FriendshipStore {
    account: Rc<dyn AccountModel>,
    current: Vec<UserRef>,
    pending: Vec<UserRef>,
    unknown: Vec<UserRef>,
}

impl FriendshipStore {
    pub fn new(account: Rc<dyn AccountModel>) -> Self {
        Self {
            account,
            current: Vec::new(),
            pending: Vec::new(),
            unknown: Vec::new(),
        }
    }

    pub fn shared(account: Rc<dyn AccountModel>) -> SharedStore {
        Rc::new(RefCell::new(Self::new(account)))
    }

    pub fn clear(&mut self) {
        self.current.clear();
        self.pending.clear();
        self.unknown.clear();
    }

    pub fn current(&self) -> &[UserRef] {
        &self.current
    }

    pub fn pending(&self) -> &[UserRef] {
        &self.pending
    }

    pub fn unknown(&self) -> &[UserRef] {
        &self.unknown
    }

    /// overwrite the list selected by `status`; anything besides "A" and "P" lands in unknown
    pub fn replace_list(&mut self, status: impl Into<FriendshipStatus>, list: Vec<UserRef>) {
        let status = status.into();
        log::debug!("replace {:?} list with {} users", status, list.len());
        match status {
            FriendshipStatus::Accepted => self.current = list,
            FriendshipStatus::Pending => self.pending = list,
            FriendshipStatus::Unknown => self.unknown = list,
        }
    }

    /// apply the relation returned by a friendship write
    pub fn apply_delta(&mut self, delta: &ActionDelta, action: &FriendshipAction) {
        let Some(me) = self.account.user() else {
            log::warn!("no session user, drop {} delta {:?}", action, delta);
            return;
        };
        let other = delta.other_user(&me.username);

        match action {
            FriendshipAction::Request => {
                remove_user(&mut self.unknown, other);
            }
            FriendshipAction::Accept => {
                // a missing pending entry adds nobody
                if let Some(user) = remove_user(&mut self.pending, other) {
                    self.current.push(user);
                }
            }
            FriendshipAction::Reject => {
                remove_user(&mut self.pending, other);
            }
            FriendshipAction::Other(tag) => {
                log::debug!("ignore delta for unknown action {}", tag);
            }
        }
    }
}

/// remove the first record named `username`, keeping the order of the rest
fn remove_user(list: &mut Vec<UserRef>, username: &str) -> Option<UserRef> {
    let pos = list.iter().position(|user| user.username == username)?;
    Some(list.remove(pos))
}
