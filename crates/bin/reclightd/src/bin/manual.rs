//! # reclight-manual — manual override CLI
//!
//! Drives the same roster and fan-out as the daemon, but from stdin
//! commands instead of MIDI. Useful to test the lights without a DAW,
//! or to force them into a known state.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use reclight_adapter_virtual::{VirtualDiscovery, VirtualLights};
use reclight_app::SharedRoster;
use reclight_app::fanout::LightFanout;
use reclight_app::services::roster_service::RosterService;

use reclightd::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    let roster = config.roster()?;
    let discovery = VirtualDiscovery::for_roster(&roster);
    let roster: SharedRoster = Arc::new(tokio::sync::RwLock::new(roster));
    let roster_service = RosterService::new(discovery, Arc::clone(&roster));
    roster_service.refresh().await?;

    let lights = Arc::new(VirtualLights::new());
    let fanout = LightFanout::new(lights, Arc::clone(&roster), config.command_timeout());

    println!("commands: on, off, list, exit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "on" => {
                let outcomes = fanout.apply(true).await;
                report(&outcomes);
            }
            "off" => {
                let outcomes = fanout.apply(false).await;
                report(&outcomes);
            }
            "list" => {
                for device in roster.read().await.entries() {
                    match device.addr {
                        Some(addr) => println!(
                            "{} ({}, {}) at {addr}",
                            device.label, device.location, device.kind
                        ),
                        None => println!(
                            "{} ({}, {}) not found",
                            device.label, device.location, device.kind
                        ),
                    }
                }
            }
            "exit" | "quit" => break,
            "" => {}
            other => println!("unknown command: {other}"),
        }
    }

    Ok(())
}

fn report(outcomes: &[reclight_app::fanout::DeviceOutcome]) {
    for outcome in outcomes {
        match &outcome.result {
            Ok(()) => println!("{}: ok", outcome.label),
            Err(err) => println!("{}: {err}", outcome.label),
        }
    }
}
