use serde::Deserialize;
use serde::Serialize;

use super::base::ChannelBase;
use super::base::HasChannelBase;
use super::value::ChannelValue;

/// A single input/output endpoint exposed by a remote device.
///
/// This is a transparent container: every field is public and nothing is
/// validated. Instances start zeroed and are filled in either field by field
/// or by [`crate::wire::decode_channel`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Channel {
    #[serde(flatten)]
    pub base: ChannelBase,

    /// Channels this one is paired with; `0` means no parent.
    pub parent_channel_1_id: i32,
    pub parent_channel_2_id: i32,

    /// Numeric channel type, interpreted by consumers.
    pub channel_type: i32,

    pub protocol_version: i32,
    pub manufacturer_id: i16,
    pub product_id: i16,

    /// Owning device.
    pub device_id: i32,

    /// Current runtime value, unset until assigned.
    pub value: Option<ChannelValue>,
}

impl Channel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new value and hand back the previous one.
    pub fn replace_value(&mut self, value: ChannelValue) -> Option<ChannelValue> {
        self.value.replace(value)
    }
}

impl HasChannelBase for Channel {
    fn base(&self) -> &ChannelBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ChannelBase {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(byte: u8) -> ChannelValue {
        ChannelValue::new([byte, 0, 0, 0, 0, 0, 0, 0])
    }

    #[test]
    fn test_new_is_zeroed() {
        let channel = Channel::new();
        assert_eq!(channel.parent_channel_1_id, 0);
        assert_eq!(channel.parent_channel_2_id, 0);
        assert_eq!(channel.channel_type, 0);
        assert_eq!(channel.protocol_version, 0);
        assert_eq!(channel.manufacturer_id, 0);
        assert_eq!(channel.product_id, 0);
        assert_eq!(channel.device_id, 0);
        assert_eq!(channel.value, None);
        assert_eq!(channel.base, ChannelBase::default());
    }

    #[test]
    fn test_fields_store_values_verbatim() {
        let mut channel = Channel::new();
        channel.parent_channel_1_id = -5;
        channel.parent_channel_2_id = i32::MAX;
        channel.channel_type = i32::MIN;
        channel.protocol_version = 1000;
        channel.manufacturer_id = i16::MIN;
        channel.product_id = -1;
        channel.device_id = -42;

        assert_eq!(channel.parent_channel_1_id, -5);
        assert_eq!(channel.parent_channel_2_id, i32::MAX);
        assert_eq!(channel.channel_type, i32::MIN);
        assert_eq!(channel.protocol_version, 1000);
        assert_eq!(channel.manufacturer_id, i16::MIN);
        assert_eq!(channel.product_id, -1);
        assert_eq!(channel.device_id, -42);
    }

    #[test]
    fn test_fields_are_independent() {
        let setters: [fn(&mut Channel); 7] = [
            |c| c.parent_channel_1_id = 11,
            |c| c.parent_channel_2_id = 12,
            |c| c.channel_type = 13,
            |c| c.protocol_version = 14,
            |c| c.manufacturer_id = 15,
            |c| c.product_id = 16,
            |c| c.device_id = 17,
        ];

        for (i, set) in setters.iter().enumerate() {
            let mut channel = Channel::new();
            set(&mut channel);

            let fields = [
                channel.parent_channel_1_id,
                channel.parent_channel_2_id,
                channel.channel_type,
                channel.protocol_version,
                channel.manufacturer_id as i32,
                channel.product_id as i32,
                channel.device_id,
            ];
            for (j, field) in fields.iter().enumerate() {
                let expected = if i == j { 11 + i as i32 } else { 0 };
                assert_eq!(*field, expected, "setter {} touched field {}", i, j);
            }
            assert_eq!(channel.value, None);
        }
    }

    #[test]
    fn test_replace_value_detaches_old() {
        let mut channel = Channel::new();
        assert_eq!(channel.replace_value(value_of(1)), None);

        let old = channel.replace_value(value_of(2));
        assert_eq!(old, Some(value_of(1)));
        assert_eq!(channel.value, Some(value_of(2)));
    }

    #[test]
    fn test_base_access() {
        let mut channel = Channel::new();
        channel.base_mut().id = 7;
        channel.base_mut().online = true;
        assert_eq!(channel.id(), 7);
        assert!(channel.is_online());
    }

    #[test]
    fn test_json_field_names() {
        let mut channel = Channel::new();
        channel.base.id = 3;
        channel.device_id = 42;

        let json = serde_json::to_value(&channel).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["device_id"], 42);
        assert_eq!(json["parent_channel_1_id"], 0);
        assert!(json["value"].is_null());

        let back: Channel = serde_json::from_value(json).unwrap();
        assert_eq!(back, channel);
    }
}
