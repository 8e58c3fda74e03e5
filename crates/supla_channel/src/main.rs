use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use supla_channel::Channel;
use supla_channel::ChannelFunction;
use supla_channel::ChannelState;
use supla_channel::ChannelStore;
use supla_channel::Config;
use supla_channel::wire;

#[derive(Debug, Parser)]
#[command(version, about = "Inspect and produce binary channel frames")]
struct Cli {
    /// Optional TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode a file of channel frames and print them as JSON
    Decode { input: PathBuf },

    /// Encode a JSON array of channels into a file of frames
    Encode { input: PathBuf, output: PathBuf },

    /// Decode a file of channel frames and print the state of each channel
    State { input: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(config.logging.env_filter())
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Decode { input } => {
            let channels = load_channels(&input)?;
            println!("{}", serde_json::to_string_pretty(&channels)?);
        }
        Command::Encode { input, output } => {
            let json = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let channels: Vec<Channel> = serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse channels from {}", input.display()))?;

            let mut file = std::fs::File::create(&output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
            for channel in &channels {
                let frame = wire::encode_channel(channel)
                    .with_context(|| format!("Failed to encode channel {}", channel.base.id))?;
                file.write_all(&frame)?;
            }
            tracing::info!("Wrote {} channels to {}", channels.len(), output.display());
        }
        Command::State { input } => {
            let store: ChannelStore = load_channels(&input)?.into_iter().collect();
            for channel in store.iter() {
                println!("{}", state_line(channel));
            }
        }
    }

    Ok(())
}

/// Every frame in the file, in file order.
fn load_channels(path: &Path) -> anyhow::Result<Vec<Channel>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let channels = wire::decode_channels(&bytes)
        .with_context(|| format!("Failed to decode frames from {}", path.display()))?;
    tracing::info!("Decoded {} channels from {}", channels.len(), path.display());
    Ok(channels)
}

fn state_line(channel: &Channel) -> String {
    let function = ChannelFunction::from_code(channel.base.function)
        .map(|f| f.to_string())
        .unwrap_or_else(|| format!("function_{}", channel.base.function));
    let state = ChannelState::of(channel);

    let mut line = format!("{} {} {}", channel.base.id, function, state.value);
    if let Some(parts) = &state.complex {
        let parts: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
        line.push_str(&format!("({})", parts.join(",")));
    }
    if state.is_active() {
        line.push_str(" active");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use supla_channel::ChannelValue;

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["supla-channel", "--config", "c.toml", "state", "f.bin"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert!(matches!(cli.command, Command::State { .. }));
    }

    #[test]
    fn test_load_channels_keeps_every_frame() {
        let frame = |id: i32, caption: &str| {
            let mut channel = Channel::new();
            channel.base.id = id;
            channel.base.caption = caption.to_string();
            wire::encode_channel(&channel).unwrap()
        };

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("channels.bin");
        let mut bytes = frame(9, "first");
        bytes.extend(frame(9, "second"));
        bytes.extend(frame(1, ""));
        std::fs::write(&path, &bytes).unwrap();

        let channels = load_channels(&path).unwrap();
        let decoded: Vec<(i32, &str)> = channels
            .iter()
            .map(|c| (c.base.id, c.base.caption.as_str()))
            .collect();
        assert_eq!(decoded, vec![(9, "first"), (9, "second"), (1, "")]);
    }

    #[test]
    fn test_state_line() {
        let mut channel = Channel::new();
        channel.base.id = 4;
        channel.base.function = ChannelFunction::PowerSwitch.code();
        channel.value = Some(ChannelValue::new([1, 0, 0, 0, 0, 0, 0, 0]));
        insta::assert_snapshot!(state_line(&channel), @"4 power_switch on active");

        channel.base.function = ChannelFunction::DimmerAndRgbLighting.code();
        insta::assert_snapshot!(state_line(&channel), @"4 dimmer_and_rgb_lighting complex(on,off)");

        channel.base.function = 77;
        insta::assert_snapshot!(state_line(&channel), @"4 function_77 not_used");
    }
}
