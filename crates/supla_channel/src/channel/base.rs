use serde::Deserialize;
use serde::Serialize;

/// Fields shared by every kind of channel (single channels and groups).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChannelBase {
    pub id: i32,
    pub location_id: i32,

    /// Numeric function code, see [`crate::function::ChannelFunction`].
    pub function: i32,

    pub online: bool,
    pub caption: String,
    pub alt_icon: i32,
    pub user_icon: i32,
    pub flags: u32,
}

/// Access to the shared base of a channel variant.
pub trait HasChannelBase {
    fn base(&self) -> &ChannelBase;

    fn base_mut(&mut self) -> &mut ChannelBase;

    fn id(&self) -> i32 {
        self.base().id
    }

    fn is_online(&self) -> bool {
        self.base().online
    }
}

impl HasChannelBase for ChannelBase {
    fn base(&self) -> &ChannelBase {
        self
    }

    fn base_mut(&mut self) -> &mut ChannelBase {
        self
    }
}
