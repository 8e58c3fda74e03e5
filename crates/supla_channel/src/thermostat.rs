//! HVAC thermostat values.
//!
//! A thermostat packs its state into the first eight value bytes:
//! state, mode, heat setpoint (i16 LE), cool setpoint (i16 LE), flags (u16 LE).
//! Setpoints are in hundredths of a degree Celsius.

use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;

const THERMOSTAT_VALUE_SIZE: usize = 8;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ThermostatError {
    #[error("Thermostat value needs {size} bytes, got {0}", size = THERMOSTAT_VALUE_SIZE)]
    TooShort(usize),
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::FromRepr,
)]
#[repr(u8)]
#[serde(rename_all = "snake_case")]
pub enum HvacMode {
    #[default]
    NotSet = 0,
    Off = 1,
    Heat = 2,
    Cool = 3,
    HeatCool = 4,
    FanOnly = 6,
    Dry = 7,
    CmdTurnOn = 8,
    CmdWeeklySchedule = 9,
    CmdSwitchToManual = 10,
}

impl HvacMode {
    /// Unknown mode bytes read as `NotSet`.
    pub fn from_byte(byte: u8) -> Self {
        Self::from_repr(byte).unwrap_or_default()
    }
}

/// Flags reported by a thermostat, one per bit of the flags word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum ThermostatFlag {
    SetpointTempHeatSet,
    SetpointTempCoolSet,
    Heating,
    Cooling,
    WeeklySchedule,
    CountdownTimer,
    FanEnabled,
    ThermometerError,
    ClockError,
    ForcedOffBySensor,
    HeatOrCool,
    WeeklyScheduleTemporalOverride,
    BatteryCoverOpen,
}

impl ThermostatFlag {
    pub fn bit(self) -> u16 {
        1 << (self as u16)
    }

    pub fn from_bits(bits: u16) -> Vec<ThermostatFlag> {
        ThermostatFlag::iter()
            .filter(|flag| bits & flag.bit() != 0)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThermostatState(pub i16);

impl ThermostatState {
    pub fn is_on(self) -> bool {
        self.0 > 0
    }

    pub fn is_off(self) -> bool {
        self.0 == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subfunction {
    Heat,
    Cool,
}

/// What a thermostat is doing right now, for list indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    SensorAlert,
    Cooling,
    Heating,
    Standby,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum ThermostatIssue {
    #[strum(to_string = "Thermometer error")]
    ThermometerError,
    #[strum(to_string = "Clock error")]
    ClockError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermostatValue {
    pub online: bool,
    pub state: ThermostatState,
    pub mode: HvacMode,
    pub setpoint_temperature_heat: f32,
    pub setpoint_temperature_cool: f32,
    pub flags: Vec<ThermostatFlag>,
}

fn temperature(lo: u8, hi: u8) -> f32 {
    i16::from_le_bytes([lo, hi]) as f32 / 100.0
}

fn format_temperature(value: f32) -> String {
    format!("{:.1}°", value)
}

impl ThermostatValue {
    pub fn from_bytes(online: bool, bytes: &[u8]) -> Result<Self, ThermostatError> {
        if bytes.len() < THERMOSTAT_VALUE_SIZE {
            return Err(ThermostatError::TooShort(bytes.len()));
        }

        Ok(Self {
            online,
            state: ThermostatState((bytes[0] as i8).into()),
            mode: HvacMode::from_byte(bytes[1]),
            setpoint_temperature_heat: temperature(bytes[2], bytes[3]),
            setpoint_temperature_cool: temperature(bytes[4], bytes[5]),
            flags: ThermostatFlag::from_bits(u16::from_le_bytes([bytes[6], bytes[7]])),
        })
    }

    pub fn has_flag(&self, flag: ThermostatFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn subfunction(&self) -> Subfunction {
        if self.has_flag(ThermostatFlag::HeatOrCool) {
            Subfunction::Cool
        } else {
            Subfunction::Heat
        }
    }

    pub fn indicator(&self) -> Option<Indicator> {
        if !self.online {
            return None;
        }
        if self.has_flag(ThermostatFlag::ForcedOffBySensor) {
            Some(Indicator::SensorAlert)
        } else if self.has_flag(ThermostatFlag::Cooling) {
            Some(Indicator::Cooling)
        } else if self.has_flag(ThermostatFlag::Heating) {
            Some(Indicator::Heating)
        } else if self.mode != HvacMode::Off {
            Some(Indicator::Standby)
        } else {
            None
        }
    }

    pub fn issue_kind(&self) -> Option<IssueKind> {
        if !self.online {
            return None;
        }
        if self.has_flag(ThermostatFlag::ThermometerError) {
            Some(IssueKind::Error)
        } else if self.has_flag(ThermostatFlag::ClockError) {
            Some(IssueKind::Warning)
        } else {
            None
        }
    }

    /// Reported regardless of connectivity.
    pub fn issue(&self) -> Option<ThermostatIssue> {
        if self.has_flag(ThermostatFlag::ThermometerError) {
            Some(ThermostatIssue::ThermometerError)
        } else if self.has_flag(ThermostatFlag::ClockError) {
            Some(ThermostatIssue::ClockError)
        } else {
            None
        }
    }

    pub fn setpoint_text(&self) -> String {
        if !self.online {
            return String::new();
        }
        let heat = format_temperature(self.setpoint_temperature_heat);
        let cool = format_temperature(self.setpoint_temperature_cool);
        match self.mode {
            HvacMode::Cool => cool,
            HvacMode::HeatCool => format!("{} - {}", heat, cool),
            HvacMode::Heat => heat,
            HvacMode::Off => "Off".to_string(),
            _ => String::new(),
        }
    }
}
