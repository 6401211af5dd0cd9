use serde::{Deserialize, Serialize};
use yewdux::{Dispatch, Store};

use friendship_sdk::account::AccountModel;
use friendship_sdk::model::user::UserRef;

/// signed in user, written by the login flow
#[derive(Default, Debug, Clone, PartialEq, Store, Serialize, Deserialize)]
#[store(storage = "local")]
pub struct AppState {
    pub login_user: Option<UserRef>,
}

/// session user backed by the `AppState` store
#[derive(Debug, Default)]
pub struct StoreAccount;

impl AccountModel for StoreAccount {
    fn user(&self) -> Option<UserRef> {
        Dispatch::<AppState>::global().get().login_user.clone()
    }
}
