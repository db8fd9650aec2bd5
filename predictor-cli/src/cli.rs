use std::{
    io::Write,
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use predictor_core::{Config, WeatherProvider, provider_from_config, run_lookup};

use crate::{routes, templates::Templates};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "predictor", version, about = "Real-time weather predictor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key in the config file.
    Configure,

    /// Show current weather, verdict and the mock trend for a city.
    Show {
        /// City name; prompted for when absent.
        city: Option<String>,

        /// Also write the trend chart as SVG to this path.
        #[arg(long)]
        chart: Option<PathBuf>,
    },

    /// Serve the interactive weather page.
    Serve {
        /// Listen address, e.g. 127.0.0.1:8080.
        #[arg(long)]
        bind: Option<String>,
    },
}

impl Cli {
    pub fn default_log_level(&self) -> &'static str {
        match self.command {
            Command::Serve { .. } => "info",
            _ => "warn",
        }
    }

    pub async fn run(self) -> Result<()> {
        let mut config = Config::load()?;
        config.apply_env_overrides()?;
        config.log_config();

        match self.command {
            Command::Configure => configure(config),
            Command::Show { city, chart } => show(&config, city, chart).await,
            Command::Serve { bind } => serve(&config, bind).await,
        }
    }
}

fn configure(mut config: Config) -> Result<()> {
    let api_key = Password::new("OpenWeatherMap API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Get a free key at https://openweathermap.org/")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    let path = config.save()?;
    println!("Saved API key to {}", path.display());

    Ok(())
}

async fn show(config: &Config, city: Option<String>, chart: Option<PathBuf>) -> Result<()> {
    let city = match city {
        Some(city) => city,
        None => Text::new("Enter City Name")
            .with_default(&config.default_city)
            .prompt()
            .context("Failed to read city name")?,
    };

    let provider = provider_from_config(config)?;
    let templates = Templates::new().context("Failed to load templates")?;

    show_lookup(
        provider.as_ref(),
        &templates,
        &city,
        chart.as_deref(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await
}

/// Run one lookup and print it. Lookup failures are user-facing states,
/// written to `err`, and still return `Ok`.
async fn show_lookup(
    provider: &dyn WeatherProvider,
    templates: &Templates,
    city: &str,
    chart: Option<&Path>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    match run_lookup(provider, city, chrono::Utc::now()).await {
        Ok(report) => {
            let text = templates
                .render_report(&report)
                .context("Failed to render report")?;
            write!(out, "{text}")?;

            if let Some(path) = chart {
                std::fs::write(path, &report.chart_svg)
                    .with_context(|| format!("Failed to write chart: {}", path.display()))?;
                writeln!(out, "Chart written to {}", path.display())?;
            }
        }
        Err(lookup_err) => {
            let text = templates
                .render_error(&lookup_err)
                .context("Failed to render error")?;
            write!(err, "{text}")?;
        }
    }

    Ok(())
}

async fn serve(config: &Config, bind: Option<String>) -> Result<()> {
    let provider = Arc::from(provider_from_config(config)?);
    let bind = bind.unwrap_or_else(|| config.bind_addr.clone());
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("Invalid bind address: {bind}"))?;

    let templates = Templates::new().context("Failed to load templates")?;
    let app = routes::router(routes::AppState::new(
        provider,
        templates,
        config.default_city.clone(),
    ));

    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
