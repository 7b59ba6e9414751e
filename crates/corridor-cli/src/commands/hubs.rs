//! Hubs command handler reporting per-hub accessibility.

use anyhow::{Context, Result};

use corridor_lib::{hub_accessibility, RoadNetwork, WeatherSnapshot};

use crate::output::{render_hubs, OutputFormat};
use crate::terminal::ColorPalette;

/// Handle the hubs subcommand.
pub fn handle_hubs_command(
    network: &RoadNetwork,
    rainfall: f64,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<String> {
    let weather = WeatherSnapshot::from_rainfall(rainfall);
    weather.validate().context("invalid weather options")?;
    let rows = hub_accessibility(network, &weather);
    render_hubs(&rows, &weather, format, palette)
}
