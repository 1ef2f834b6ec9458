use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::Parser;
use std::path::PathBuf;

use urania::chart::ChartRequest;
use urania::config::ChartConfig;
use urania::ephemeris::{HouseSystem, SwissEphemerisAdapter};
use urania::location::Hemisphere;
use urania::generate_chart;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cast a natal chart and render it as SVG")]
struct Args {
    /// Subject name, used as the page title.
    #[arg(long)]
    name: String,

    /// Birth date, YYYY-MM-DD.
    #[arg(long)]
    date: String,

    /// Local birth time, HH:MM.
    #[arg(long)]
    time: String,

    /// Latitude in degrees. Sign is forced by --hemisphere when given.
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude in degrees, negative west of Greenwich.
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// N or S.
    #[arg(long)]
    hemisphere: Option<Hemisphere>,

    /// IANA timezone, e.g. America/Sao_Paulo.
    #[arg(long, conflicts_with = "region")]
    timezone: Option<String>,

    /// Region label from the config's [regions] table, e.g. Brasil.
    #[arg(long)]
    region: Option<String>,

    /// House system name or code (default from config: Placidus).
    #[arg(long)]
    house_system: Option<HouseSystem>,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output SVG path (default: chart_<name>.svg).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also write the chart, aspects and artifact as JSON next to the SVG.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ChartConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ChartConfig::default(),
    };

    let date = NaiveDate::parse_from_str(&args.date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date {} (expected YYYY-MM-DD)", args.date))?;
    let time = NaiveTime::parse_from_str(&args.time, "%H:%M")
        .with_context(|| format!("Invalid time {} (expected HH:MM)", args.time))?;

    let timezone = match (&args.timezone, &args.region) {
        (Some(tz), _) => tz.clone(),
        (None, Some(region)) => config.timezone_for_region(region)?.to_string(),
        (None, None) => config.chart.timezone.clone(),
    };
    let house_system = match args.house_system {
        Some(system) => system,
        None => config.house_system()?,
    };
    let latitude = match args.hemisphere {
        Some(hemisphere) => hemisphere.apply(args.lat),
        None => args.lat,
    };

    let request = ChartRequest {
        local_datetime: NaiveDateTime::new(date, time),
        latitude,
        longitude: args.lon,
        timezone,
        house_system,
    };
    log::info!(
        "Casting chart for {} at {} ({}, {}) in {}",
        args.name,
        request.local_datetime,
        request.latitude,
        request.longitude,
        request.timezone
    );

    let ephemeris = SwissEphemerisAdapter::new(Some(config.ephemeris.resolved_path()))
        .context("Failed to initialise Swiss Ephemeris")?;
    let (chart, aspects, artifact) = generate_chart(ephemeris, &request, &args.name, &config)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.name));
    std::fs::write(&output, artifact.to_svg())
        .with_context(|| format!("Failed to write {}", output.display()))?;
    log::info!(
        "{} points, {} aspects -> {}",
        chart.points.len(),
        aspects.len(),
        output.display()
    );

    if args.json {
        let json_path = output.with_extension("json");
        std::fs::write(&json_path, artifact.to_json()?)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
        log::info!("artifact JSON -> {}", json_path.display());
    }

    Ok(())
}

/// `chart_<name>.svg` in the working directory, spaces and separators as `_`.
fn default_output(name: &str) -> PathBuf {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            _ => c,
        })
        .collect();
    PathBuf::from(format!("chart_{}.svg", stem))
}
