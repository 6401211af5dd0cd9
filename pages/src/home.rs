use std::rc::Rc;

use yew::{html, AttrValue, Callback, Component, Context, Html, Properties};

use friendship_sdk::account::AccountModel;
use friendship_sdk::api::{self, FriendApi};
use friendship_sdk::config::HttpConfig;
use friendship_sdk::model::friend::{FriendshipAction, FriendshipStatus};
use friendship_sdk::model::user::UserRef;
use friendship_sdk::service::{AggregateLoader, FriendFetcher, FriendshipMutator};
use friendship_sdk::state::{FriendshipStore, SharedStore};

use crate::friend_item::FriendItem;
use crate::spawner::BrowserSpawner;
use crate::state::StoreAccount;

pub struct Home {
    account: Rc<dyn AccountModel>,
    store: SharedStore,
    mutator: FriendshipMutator,
    error: Option<AttrValue>,
}

pub enum HomeMsg {
    Loaded(friendship_sdk::Result<()>),
    Action(AttrValue, FriendshipAction),
    ActionRes(friendship_sdk::Result<()>),
}

#[derive(Properties, Clone, PartialEq)]
pub struct HomeProps {
    pub conf: HttpConfig,
}

impl Component for Home {
    type Message = HomeMsg;
    type Properties = HomeProps;

    fn create(ctx: &Context<Self>) -> Self {
        let account: Rc<dyn AccountModel> = Rc::new(StoreAccount);
        let store = FriendshipStore::shared(account.clone());
        let api: Rc<dyn FriendApi> = Rc::from(api::friends(ctx.props().conf.clone()));
        let fetcher = FriendFetcher::new(api.clone(), store.clone());
        let mutator = FriendshipMutator::new(api, store.clone());

        // nothing to load for anonymous visitors
        if account.has_user() {
            let loader = AggregateLoader::new(fetcher, Rc::new(BrowserSpawner));
            ctx.link().send_future(async move {
                HomeMsg::Loaded(loader.load_all().await.map(|_| ()))
            });
        }

        Self {
            account,
            store,
            mutator,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            HomeMsg::Loaded(res) | HomeMsg::ActionRes(res) => {
                self.error = res
                    .err()
                    .map(|err| AttrValue::from(err.body().to_string()));
                true
            }
            HomeMsg::Action(username, action) => {
                let mutator = self.mutator.clone();
                ctx.link().send_future(async move {
                    HomeMsg::ActionRes(mutator.mutate(username, action).await.map(|_| ()))
                });
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(user) = self.account.user() else {
            return html! {
                <div class="friendships">{"Sign in to see your friends."}</div>
            };
        };
        let on_action = ctx
            .link()
            .callback(|(username, action): (AttrValue, FriendshipAction)| {
                HomeMsg::Action(username, action)
            });
        let store = self.store.borrow();

        html! {
            <div class="friendships">
                <div class="session-user">{user.username}</div>
                if let Some(err) = &self.error {
                    <div class="error">{err.clone()}</div>
                }
                {section("Friends", FriendshipStatus::Accepted, store.current(), &on_action)}
                {section("Pending", FriendshipStatus::Pending, store.pending(), &on_action)}
                {section("Other users", FriendshipStatus::Unknown, store.unknown(), &on_action)}
            </div>
        }
    }
}

fn section(
    title: &'static str,
    status: FriendshipStatus,
    list: &[UserRef],
    on_action: &Callback<(AttrValue, FriendshipAction)>,
) -> Html {
    html! {
        <section class="friend-list">
            <h3>{title}</h3>
            { for list.iter().map(|user| html! {
                <FriendItem
                    user={user.clone()}
                    {status}
                    on_action={on_action.clone()} />
            }) }
        </section>
    }
}
