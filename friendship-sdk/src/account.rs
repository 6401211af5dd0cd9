use std::fmt::Debug;

use crate::model::user::UserRef;

/// the session user collaborator, owned by whoever handles login
pub trait AccountModel: Debug {
    fn user(&self) -> Option<UserRef>;

    fn has_user(&self) -> bool {
        self.user().is_some()
    }
}

/// in-memory session user, for hosts that keep the login themselves
#[derive(Debug, Default)]
pub struct SessionAccount {
    user: Option<UserRef>,
}

impl SessionAccount {
    pub fn new(user: Option<UserRef>) -> Self {
        Self { user }
    }
}

impl AccountModel for SessionAccount {
    fn user(&self) -> Option<UserRef> {
        self.user.clone()
    }
}
