pub mod channel;
pub mod config;
pub mod function;
pub mod state;
pub mod store;
pub mod thermostat;
pub mod wire;

pub use channel::Channel;
pub use channel::ChannelBase;
pub use channel::ChannelEntity;
pub use channel::ChannelGroup;
pub use channel::ChannelValue;
pub use channel::HasChannelBase;
pub use config::Config;
pub use config::LogLevel;
pub use function::ChannelFunction;
pub use state::ChannelState;
pub use state::StateValue;
pub use store::ChannelStore;
pub use thermostat::ThermostatValue;
