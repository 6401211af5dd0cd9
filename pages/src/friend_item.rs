use yew::{html, AttrValue, Callback, Component, Context, Html, Properties};

use friendship_sdk::model::friend::{FriendshipAction, FriendshipStatus};
use friendship_sdk::model::user::UserRef;

/// one user row, the buttons depend on the list it is shown in
pub struct FriendItem;

pub enum FriendItemMsg {
    Act(FriendshipAction),
}

#[derive(Properties, Clone, PartialEq)]
pub struct FriendItemProps {
    pub user: UserRef,
    pub status: FriendshipStatus,
    pub on_action: Callback<(AttrValue, FriendshipAction)>,
}

impl Component for FriendItem {
    type Message = FriendItemMsg;
    type Properties = FriendItemProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FriendItemMsg::Act(action) => {
                let props = ctx.props();
                props
                    .on_action
                    .emit((props.user.username.clone(), action));
            }
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let buttons = match props.status {
            FriendshipStatus::Unknown => html! {
                <button type="button"
                    onclick={link.callback(|_| FriendItemMsg::Act(FriendshipAction::Request))}>
                    {"Request"}
                </button>
            },
            FriendshipStatus::Pending => html! {
                <>
                    <button type="button"
                        onclick={link.callback(|_| FriendItemMsg::Act(FriendshipAction::Accept))}>
                        {"Accept"}
                    </button>
                    <button type="button"
                        onclick={link.callback(|_| FriendItemMsg::Act(FriendshipAction::Reject))}>
                        {"Reject"}
                    </button>
                </>
            },
            FriendshipStatus::Accepted => html! {},
        };

        html! {
            <div class="friend">
                <span class="friend-name">{props.user.username.clone()}</span>
                {buttons}
            </div>
        }
    }
}
