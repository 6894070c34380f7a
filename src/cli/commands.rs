//! Command execution for the swetest-bridge CLI
//!
//! Loads configuration, translates arguments into a [`CommandBuilder`], runs
//! the request and renders the result frame.

use crate::builder::CommandBuilder;
use crate::cli::args::{Args, OutputFormat};
use crate::client::Swisseph;
use crate::config::SwissephConfig;
use crate::error::Result;
use crate::models::{PropertyValue, ResultFrame};
use anyhow::Context;
use colored::*;
use tracing::{debug, info};

/// Main entry point for the CLI
pub async fn run(args: Args) -> anyhow::Result<()> {
    setup_logging(&args)?;

    let config = SwissephConfig::load_layered(args.config_file.as_deref())
        .context("Failed to load configuration")?;
    let client = Swisseph::new(config);
    let builder = apply_args(client.builder(), &args).context("Invalid request")?;

    if args.dry_run {
        println!("{}", client.cli_command(&builder));
        return Ok(());
    }

    let frame = client
        .get(&builder)
        .await
        .context("swetest calculation failed")?;
    info!(
        "Calculated {} planets and {} houses",
        frame.planets.len(),
        frame.houses.len()
    );

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&frame)?),
        OutputFormat::Table => print_table(&frame),
    }

    Ok(())
}

/// Apply CLI arguments to a builder
pub fn apply_args(mut builder: CommandBuilder, args: &Args) -> Result<CommandBuilder> {
    if let Some(date) = &args.date {
        builder = builder.set_date_time_str(date, &args.tz)?;
    }

    let current = builder.location().clone();
    builder = builder.set_location(
        args.longitude.unwrap_or(current.longitude),
        args.latitude.unwrap_or(current.latitude),
        args.place.as_deref(),
        args.elevation,
    );

    let bodies = args.body_selections()?;
    if !bodies.is_empty() {
        builder = builder.select_bodies(bodies);
    }

    builder = builder
        .with_property_codes(&args.properties)?
        .with_eph_option_codes(&args.eph_options)?;

    if let Some(system) = args.house_system()? {
        builder = builder.with_houses(system);
    }

    if let Some((position, body)) = args.observer_position()? {
        builder = builder.set_observer_position(position, body)?;
    }

    if let Some(mode) = args.sidereal_mode()? {
        builder = builder.with_sidereal(mode, args.projection.into());
    }

    debug!("Applied CLI arguments to request builder");
    Ok(builder)
}

/// Set up structured logging
pub fn setup_logging(args: &Args) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("swetest_bridge={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("Failed to initialise logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

fn format_properties(properties: &[PropertyValue]) -> String {
    properties
        .iter()
        .map(|entry| {
            format!(
                "{}={}",
                entry.property.name().dimmed(),
                entry.value.columns().join("/")
            )
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn print_table(frame: &ResultFrame) {
    println!(
        "{} {} ({}, {})",
        frame.place.bold(),
        frame.date.format("%Y-%m-%d %H:%M:%S UTC"),
        frame.longitude,
        frame.latitude
    );

    if !frame.planets.is_empty() {
        println!("\n{}", "Planets".cyan().bold());
        for planet in &frame.planets {
            println!(
                "  {:>3} {:<24} {}",
                planet.body.code(),
                planet.body.name().green(),
                format_properties(&planet.properties)
            );
        }
    }

    if !frame.houses.is_empty() {
        let system = frame
            .house_system
            .map(|system| system.label())
            .unwrap_or_default();
        println!("\n{} {}", "Houses".cyan().bold(), system.dimmed());
        for house in &frame.houses {
            println!(
                "  {:>3} {:<32} {}",
                house.house.code(),
                house.house.name().yellow(),
                format_properties(&house.properties)
            );
        }
    }
}
