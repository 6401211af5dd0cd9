use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize, Serializer};
use yew::AttrValue;

pub const STATUS_ACCEPTED: &str = "A";
pub const STATUS_PENDING: &str = "P";

/// which of the three lists a user belongs to
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FriendshipStatus {
    Accepted,
    Pending,
    /// discoverable users, also the bucket for every unrecognized status
    #[default]
    Unknown,
}

impl FriendshipStatus {
    /// value of the `status` query parameter, `None` means the parameter is omitted
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            FriendshipStatus::Accepted => Some(STATUS_ACCEPTED),
            FriendshipStatus::Pending => Some(STATUS_PENDING),
            FriendshipStatus::Unknown => None,
        }
    }
}

impl From<&str> for FriendshipStatus {
    fn from(value: &str) -> Self {
        match value {
            STATUS_ACCEPTED => FriendshipStatus::Accepted,
            STATUS_PENDING => FriendshipStatus::Pending,
            _ => FriendshipStatus::Unknown,
        }
    }
}

impl From<Option<&str>> for FriendshipStatus {
    fn from(value: Option<&str>) -> Self {
        value.map(FriendshipStatus::from).unwrap_or_default()
    }
}

/// action posted to the friendship endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FriendshipAction {
    Request,
    Accept,
    Reject,
    /// anything the client does not know, sent as-is and ignored locally
    Other(String),
}

impl FriendshipAction {
    pub fn as_str(&self) -> &str {
        match self {
            FriendshipAction::Request => "request",
            FriendshipAction::Accept => "accept",
            FriendshipAction::Reject => "reject",
            FriendshipAction::Other(tag) => tag,
        }
    }
}

impl From<&str> for FriendshipAction {
    fn from(value: &str) -> Self {
        match value {
            "request" => FriendshipAction::Request,
            "accept" => FriendshipAction::Accept,
            "reject" => FriendshipAction::Reject,
            other => FriendshipAction::Other(other.to_string()),
        }
    }
}

impl Display for FriendshipAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for FriendshipAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// body of `POST friendships/friendship/`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FriendshipRequest {
    pub username: AttrValue,
    pub action: FriendshipAction,
}

/// the relation changed by a write.
/// the backend answers `{}` to an action it does not handle, so every field is optional on the wire
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ActionDelta {
    pub sender: AttrValue,
    pub receiver: AttrValue,
    /// P, A or R after the write
    pub status: Option<AttrValue>,
}

impl ActionDelta {
    pub fn new(sender: impl Into<AttrValue>, receiver: impl Into<AttrValue>) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
            status: None,
        }
    }

    /// whichever side of the relation is not `me`
    pub fn other_user(&self, me: &str) -> &AttrValue {
        if self.sender == me {
            &self.receiver
        } else {
            &self.sender
        }
    }
}
