pub use self::load_all::{AggregateLoader, LoadAll};
pub use self::load_friend::FriendFetcher;
pub use self::save_friendship::FriendshipMutator;

mod load_all;
mod load_friend;
mod save_friendship;

#[cfg(test)]
pub(crate) mod stub;
