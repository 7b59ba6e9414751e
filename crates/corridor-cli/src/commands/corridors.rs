//! Corridors command handler for emergency-corridor presets.

use anyhow::{anyhow, Result};

use corridor_lib::{RoadNetwork, RouteMode};

use crate::commands::route::{handle_route_command, RouteCommandArgs};
use crate::output::{render_presets, OutputFormat};
use crate::terminal::ColorPalette;

/// Handle the corridors subcommand.
///
/// Without `run` the presets are listed. With `run` the 1-based preset is
/// routed as a relief mission: the goal hub declares SOS and the shortcut
/// route is put in focus.
pub fn handle_corridors_command(
    network: &RoadNetwork,
    run: Option<usize>,
    rainfall: f64,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<String> {
    let presets = network.emergency_corridors();
    let Some(number) = run else {
        return render_presets(presets, format);
    };

    let preset = number
        .checked_sub(1)
        .and_then(|index| presets.get(index))
        .ok_or_else(|| {
            anyhow!(
                "emergency corridor {number} does not exist; {} presets are defined",
                presets.len()
            )
        })?;

    let mut args = RouteCommandArgs::new(preset.start.as_str(), preset.end.as_str());
    args.rainfall = rainfall;
    args.sos_goal = true;
    args.focus = RouteMode::Shortcut;
    handle_route_command(network, &args, format, palette)
}
