use serde::Deserialize;
use serde::Serialize;

/// Size in bytes of both the value and the sub-value buffers.
pub const CHANNEL_VALUE_SIZE: usize = 8;

/// Current runtime value of a channel.
///
/// The bytes are opaque here; their meaning depends on the channel function
/// (see [`crate::state::ChannelState::of`] and [`crate::thermostat`]).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChannelValue {
    pub value: [u8; CHANNEL_VALUE_SIZE],
    pub sub_value: [u8; CHANNEL_VALUE_SIZE],
    pub sub_value_type: u8,
}

impl ChannelValue {
    pub fn new(value: [u8; CHANNEL_VALUE_SIZE]) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    /// Whether the paired sensor reports the "closed" position.
    pub fn hi(&self) -> bool {
        self.sub_value[0] != 0
    }

    pub fn is_on(&self) -> bool {
        self.value[0] != 0
    }

    /// First value byte read as a signed percentage (roller shutters, dimmers).
    pub fn percent(&self) -> i8 {
        self.value[0] as i8
    }
}
