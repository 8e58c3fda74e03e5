use serde::Deserialize;
use serde::Serialize;

/// Known channel function codes.
///
/// A channel's function tells what it controls or measures. Codes not listed
/// here are kept as plain integers on [`crate::ChannelBase::function`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::FromRepr,
)]
#[repr(i32)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ChannelFunction {
    None = 0,
    ControllingTheGatewayLock = 10,
    ControllingTheGate = 20,
    ControllingTheGarageDoor = 30,
    Thermometer = 40,
    ControllingTheDoorLock = 50,
    OpeningSensorGateway = 60,
    OpeningSensorGate = 70,
    OpeningSensorGarageDoor = 80,
    OpeningSensorDoor = 100,
    ControllingTheRollerShutter = 110,
    OpeningSensorRollerShutter = 120,
    PowerSwitch = 130,
    LightSwitch = 140,
    Dimmer = 180,
    RgbLighting = 190,
    DimmerAndRgbLighting = 200,
    OpeningSensorWindow = 220,
    HvacThermostat = 420,
    HvacThermostatHeatCool = 422,
    StaircaseTimer = 2000,
}

impl ChannelFunction {
    pub fn from_code(code: i32) -> Option<Self> {
        Self::from_repr(code)
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn is_thermostat(self) -> bool {
        matches!(
            self,
            ChannelFunction::HvacThermostat | ChannelFunction::HvacThermostatHeatCool
        )
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for function in ChannelFunction::iter() {
            assert_eq!(ChannelFunction::from_code(function.code()), Some(function));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(ChannelFunction::from_code(12345), None);
        assert_eq!(ChannelFunction::from_code(-1), None);
    }

    #[test]
    fn test_is_thermostat() {
        assert!(ChannelFunction::HvacThermostat.is_thermostat());
        assert!(ChannelFunction::HvacThermostatHeatCool.is_thermostat());
        assert!(!ChannelFunction::Thermometer.is_thermostat());
    }

    #[test]
    fn test_display() {
        assert_eq!(ChannelFunction::PowerSwitch.to_string(), "power_switch");
        assert_eq!(
            ChannelFunction::ControllingTheRollerShutter.to_string(),
            "controlling_the_roller_shutter"
        );
    }
}
