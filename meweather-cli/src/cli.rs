use std::{process::ExitCode, sync::Arc};

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Password;
use meweather_core::{
    Config, Coordinates, PresentError, WeatherPresenter, WeatherService, WeatherViewModel,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meweather", version, about = "Current weather for a place or a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show weather for a city name.
    City {
        /// City name, e.g. "Izmir".
        name: String,
    },

    /// Show weather for a location in decimal degrees.
    Coords {
        #[arg(allow_negative_numbers = true, value_parser = parse_latitude)]
        latitude: f64,

        #[arg(allow_negative_numbers = true, value_parser = parse_longitude)]
        longitude: f64,
    },

    /// Print the config file location.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => {
                configure()?;
                Ok(ExitCode::SUCCESS)
            }
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(ExitCode::SUCCESS)
            }
            Command::City { name } => {
                let presenter = presenter()?;
                Ok(render(presenter.on_search_submitted(&name).await))
            }
            Command::Coords { latitude, longitude } => {
                let presenter = presenter()?;
                let here = Coordinates::new(latitude, longitude)?;
                Ok(render(presenter.on_location_update(&[here]).await))
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim();
    anyhow::ensure!(!api_key.is_empty(), "API key must not be empty");

    cfg.set_api_key(api_key.to_string());
    let path = cfg.save()?;

    println!("Saved configuration to {}", path.display());
    Ok(())
}

fn presenter() -> anyhow::Result<WeatherPresenter<WeatherService>> {
    let cfg = Config::load()?.with_env_overrides();
    tracing::debug!(config = ?cfg, "loaded configuration");
    Ok(WeatherPresenter::new(Arc::new(cfg.weather_service()?)))
}

fn render(result: Result<WeatherViewModel, PresentError>) -> ExitCode {
    match result {
        Ok(vm) => {
            println!("{}", vm.city_name());
            println!("{}  {} ({})", vm.temperature_label(), vm.status_tag(), vm.icon_name());
            ExitCode::SUCCESS
        }
        Err(e) => {
            let alert = e.alert();
            eprintln!("{}: {}", alert.title, alert.message);
            ExitCode::FAILURE
        }
    }
}

fn parse_latitude(s: &str) -> Result<f64, String> {
    parse_degrees(s, 90.0)
}

fn parse_longitude(s: &str) -> Result<f64, String> {
    parse_degrees(s, 180.0)
}

fn parse_degrees(s: &str, limit: f64) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if (-limit..=limit).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is outside -{limit}..={limit}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coords_subcommand_with_negative_values() {
        let cli = Cli::try_parse_from(["meweather", "coords", "-33.9", "-70.6"]).unwrap();
        match cli.command {
            Command::Coords { latitude, longitude } => {
                assert_eq!(latitude, -33.9);
                assert_eq!(longitude, -70.6);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        assert!(Cli::try_parse_from(["meweather", "coords", "91", "0"]).is_err());
        assert!(Cli::try_parse_from(["meweather", "coords", "0", "181"]).is_err());
    }

    #[test]
    fn parses_city_subcommand() {
        let cli = Cli::try_parse_from(["meweather", "city", "New York"]).unwrap();
        assert!(matches!(cli.command, Command::City { name } if name == "New York"));
    }

    #[test]
    fn degree_parser_messages() {
        assert_eq!(parse_latitude("41.0"), Ok(41.0));
        assert!(parse_latitude("north").unwrap_err().contains("not a number"));
        assert!(parse_longitude("-180.5").unwrap_err().contains("outside"));
    }
}
