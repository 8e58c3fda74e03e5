use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::channel::Channel;
use crate::function::ChannelFunction;
use crate::thermostat::Subfunction;
use crate::thermostat::ThermostatValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StateValue {
    // active states
    Open,
    On,
    Transparent,

    // inactive states
    PartiallyOpened,
    Closed,
    Off,
    Opaque,

    // thermostat
    Heat,
    Cool,

    NotUsed,
    Complex,
}

/// State of a channel as presented to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelState {
    pub value: StateValue,

    /// Per-part states when `value` is [`StateValue::Complex`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complex: Option<Vec<StateValue>>,
}

impl ChannelState {
    pub fn new(value: StateValue) -> Self {
        Self {
            value,
            complex: None,
        }
    }

    pub fn complex(parts: Vec<StateValue>) -> Self {
        Self {
            value: StateValue::Complex,
            complex: Some(parts),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(
            self.value,
            StateValue::Closed | StateValue::On | StateValue::Transparent
        )
    }

    /// Derive the state of a channel from its function and current value.
    pub fn of(channel: &Channel) -> Self {
        let Some(value) = &channel.value else {
            return Self::new(StateValue::NotUsed);
        };
        let Some(function) = ChannelFunction::from_code(channel.base.function) else {
            return Self::new(StateValue::NotUsed);
        };

        let on_off = |on: bool| if on { StateValue::On } else { StateValue::Off };

        match function {
            ChannelFunction::ControllingTheGatewayLock
            | ChannelFunction::ControllingTheGate
            | ChannelFunction::ControllingTheGarageDoor
            | ChannelFunction::ControllingTheDoorLock
            | ChannelFunction::OpeningSensorGateway
            | ChannelFunction::OpeningSensorGate
            | ChannelFunction::OpeningSensorGarageDoor
            | ChannelFunction::OpeningSensorDoor
            | ChannelFunction::OpeningSensorRollerShutter
            | ChannelFunction::OpeningSensorWindow => Self::new(if value.hi() {
                StateValue::Closed
            } else {
                StateValue::Open
            }),

            ChannelFunction::ControllingTheRollerShutter => {
                let percent = value.percent();
                Self::new(if percent >= 100 {
                    StateValue::Closed
                } else if percent > 0 {
                    StateValue::PartiallyOpened
                } else {
                    StateValue::Open
                })
            }

            ChannelFunction::PowerSwitch
            | ChannelFunction::LightSwitch
            | ChannelFunction::StaircaseTimer
            | ChannelFunction::Dimmer
            | ChannelFunction::RgbLighting => Self::new(on_off(value.is_on())),

            ChannelFunction::DimmerAndRgbLighting => Self::complex(vec![
                on_off(value.value[0] != 0),
                on_off(value.value[1] != 0),
            ]),

            ChannelFunction::HvacThermostat | ChannelFunction::HvacThermostatHeatCool => {
                match ThermostatValue::from_bytes(channel.base.online, &value.value) {
                    Ok(thermostat) if thermostat.state.is_off() => Self::new(StateValue::Off),
                    Ok(thermostat) => Self::new(match thermostat.subfunction() {
                        Subfunction::Heat => StateValue::Heat,
                        Subfunction::Cool => StateValue::Cool,
                    }),
                    Err(e) => {
                        debug!(id = channel.base.id, "unreadable thermostat value: {}", e);
                        Self::new(StateValue::NotUsed)
                    }
                }
            }

            ChannelFunction::None | ChannelFunction::Thermometer => {
                Self::new(StateValue::NotUsed)
            }
        }
    }
}
