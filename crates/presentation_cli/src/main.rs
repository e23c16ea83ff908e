//! SmartWeather CLI
//!
//! Host stand-in for the binary sensor platform: loads configuration, sets
//! up the sensors and runs their refresh cycle.

#![allow(clippy::print_stdout)]

mod cli;
mod host;

use std::future::Future;
use std::time::Duration;

use anyhow::Context;
use application::ports::EntitySnapshot;
use clap::Parser;
use domain::{Condition, descriptor_for};
use infrastructure::{AppConfig, init_telemetry};
use tracing::{info, warn};

use crate::cli::{Cli, Commands, log_filter_from_verbosity};
use crate::host::Host;

/// Format one entity as a status line
fn status_line(snapshot: &EntitySnapshot) -> String {
    format!(
        "{}: {} ({})",
        snapshot.entity_id, snapshot.state, snapshot.icon
    )
}

/// Format the condition registry as a table
fn conditions_table() -> String {
    let mut out = format!(
        "{:<10} {:<10} {:<10} {:<12} {}\n",
        "CONDITION", "NAME", "CLASS", "ICON ON", "ICON OFF"
    );
    for condition in Condition::all() {
        let d = descriptor_for(condition);
        out.push_str(&format!(
            "{:<10} {:<10} {:<10} {:<12} {}\n",
            d.id(),
            d.display_name,
            d.device_class,
            d.icon_on,
            d.icon_off
        ));
    }
    out
}

/// Refresh and print every sensor each period
///
/// Stops when `shutdown` resolves or after `cycles` cycles. Returns the
/// number of completed cycles.
async fn watch(
    host: &Host,
    period: Duration,
    cycles: Option<u64>,
    shutdown: impl Future<Output = ()>,
) -> u64 {
    let mut ticker = tokio::time::interval(period);
    let mut completed = 0u64;
    tokio::pin!(shutdown);

    info!(period_secs = period.as_secs(), "Watching sensors");
    while cycles.is_none_or(|max| completed < max) {
        tokio::select! {
            biased;
            () = &mut shutdown => {
                info!("Interrupted");
                break;
            },
            _ = ticker.tick() => {},
        }

        // The first tick fires immediately and the sensors were
        // refreshed during setup.
        if completed > 0 {
            host.registry.refresh_all().await;
        }
        for snapshot in host.registry.snapshots() {
            println!("{}", status_line(&snapshot));
        }
        completed += 1;
    }
    completed
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    config.validate()?;

    let mut telemetry = config.telemetry.clone();
    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        telemetry = telemetry.with_log_filter(filter);
    }
    init_telemetry(&telemetry)?;

    match cli.command {
        Commands::Conditions => {
            print!("{}", conditions_table());
        },

        Commands::Status { observation } => {
            let host = Host::start(&config, observation).await?;
            if host.registered == 0 {
                println!("No sensors registered (station has not reported yet)");
                return Ok(());
            }
            println!("{}", serde_json::to_string_pretty(&host.registry.snapshots())?);
        },

        Commands::Watch {
            observation,
            interval,
            cycles,
        } => {
            let host = Host::start(&config, observation).await?;
            let period = Duration::from_secs(
                interval.unwrap_or(config.binary_sensor.scan_interval_secs).max(1),
            );
            let shutdown = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    warn!(error = %e, "Failed to listen for Ctrl-C");
                    std::future::pending::<()>().await;
                }
            };
            watch(&host, period, cycles, shutdown).await;
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use domain::{BinaryState, DeviceClass};

    use super::*;

    #[test]
    fn log_filter_verbosity_zero_keeps_config() {
        assert_eq!(log_filter_from_verbosity(0), None);
    }

    #[test]
    fn log_filter_verbosity_levels() {
        assert_eq!(log_filter_from_verbosity(1), Some("info"));
        assert_eq!(log_filter_from_verbosity(2), Some("debug"));
        assert_eq!(log_filter_from_verbosity(3), Some("trace"));
        assert_eq!(log_filter_from_verbosity(255), Some("trace"));
    }

    #[test]
    fn status_line_format() {
        let snapshot = EntitySnapshot {
            entity_id: "binary_sensor.home_raining".into(),
            name: "Home Raining".into(),
            state: BinaryState::On,
            icon: "mdi:water",
            device_class: DeviceClass::Moisture,
            attributes: BTreeMap::new(),
        };
        assert_eq!(
            status_line(&snapshot),
            "binary_sensor.home_raining: on (mdi:water)"
        );
    }

    #[test]
    fn conditions_table_lists_every_condition() {
        let table = conditions_table();
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("raining"));
        assert!(table.contains("mdi:fridge-outline"));
    }

    #[tokio::test]
    async fn host_requires_observation_source() {
        let err = Host::start(&AppConfig::default(), None).await.unwrap_err();
        assert!(err.to_string().contains("no observation file configured"));
    }

    #[tokio::test]
    async fn host_registers_sensors_from_observation_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            r#"{"timestamp":"2024-01-15T12:00:00Z","raining":true,"freezing":false}"#,
        )
        .unwrap();

        let host = Host::start(&AppConfig::default(), Some(file.path().to_path_buf()))
            .await
            .unwrap();
        assert_eq!(host.registered, 2);

        let lines: Vec<String> = host.registry.snapshots().iter().map(status_line).collect();
        assert_eq!(
            lines,
            vec![
                "binary_sensor.smartweather_raining: on (mdi:water)",
                "binary_sensor.smartweather_freezing: off (mdi:fridge-outline)",
            ]
        );
    }

    async fn started_host() -> (Host, tempfile::NamedTempFile) {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            r#"{"timestamp":"2024-01-15T12:00:00Z","raining":true,"freezing":false}"#,
        )
        .unwrap();
        let host = Host::start(&AppConfig::default(), Some(file.path().to_path_buf()))
            .await
            .unwrap();
        (host, file)
    }

    #[tokio::test]
    async fn watch_stops_after_cycle_limit() {
        let (host, _file) = started_host().await;
        let completed = watch(
            &host,
            Duration::from_millis(5),
            Some(3),
            std::future::pending(),
        )
        .await;
        assert_eq!(completed, 3);
    }

    #[tokio::test]
    async fn watch_stops_on_shutdown() {
        let (host, _file) = started_host().await;
        let completed = watch(&host, Duration::from_millis(5), None, async {}).await;
        assert_eq!(completed, 0);
    }

    #[tokio::test]
    async fn watch_observes_shutdown_raised_between_cycles() {
        let (host, _file) = started_host().await;
        let completed = watch(
            &host,
            Duration::from_millis(5),
            None,
            tokio::time::sleep(Duration::from_millis(30)),
        )
        .await;
        assert!(completed >= 1);
    }

    #[tokio::test]
    async fn host_without_reading_registers_nothing() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "{}").unwrap();

        let host = Host::start(&AppConfig::default(), Some(file.path().to_path_buf()))
            .await
            .unwrap();
        assert_eq!(host.registered, 0);
        assert!(host.registry.is_empty());
    }
}
