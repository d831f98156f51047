//! # reclightd — recording lights daemon
//!
//! Composition root that wires the adapters together and runs the loop.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Build the device roster and resolve it through discovery
//! - Construct the fan-out, debounce scheduler, and signal interpreter
//! - Open the MIDI input port and feed the controller
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use reclight_adapter_midi::MidiListener;
use reclight_adapter_virtual::{VirtualDiscovery, VirtualLights};
use reclight_app::SharedRoster;
use reclight_app::controller::Controller;
use reclight_app::debounce::DebounceScheduler;
use reclight_app::fanout::LightFanout;
use reclight_app::interpreter::SignalInterpreter;
use reclight_app::services::roster_service::RosterService;

use reclightd::config::Config;
use reclightd::runtime::run_until_shutdown;

fn open_listener(
    config: &Config,
) -> Result<(MidiListener, mpsc::UnboundedReceiver<Vec<u8>>), reclight_adapter_midi::MidiError> {
    #[cfg(unix)]
    if config.midi.virtual_port {
        return MidiListener::open_virtual(&config.midi.port_name);
    }
    MidiListener::connect_by_name(&config.midi.port_name)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Roster and discovery
    let roster = config.roster()?;
    let discovery = VirtualDiscovery::for_roster(&roster);
    let roster: SharedRoster = Arc::new(tokio::sync::RwLock::new(roster));
    let roster_service = RosterService::new(discovery, Arc::clone(&roster));
    let summary = roster_service.refresh().await?;
    if summary.matched == 0 {
        return Err("no configured device was found on the network".into());
    }

    // Actuation pipeline
    let lights = Arc::new(VirtualLights::new());
    let fanout = LightFanout::new(Arc::clone(&lights), roster, config.command_timeout());
    let scheduler = DebounceScheduler::new(Arc::new(fanout), config.debounce());
    let interpreter = SignalInterpreter::new(config.midi.cc_play, config.midi.cc_record);
    let mut controller = Controller::new(interpreter, scheduler);

    // First open is fatal on failure; later failures retry with backoff.
    let (listener, events) = open_listener(&config)?;
    tracing::info!(port = listener.port_name(), "listening for control changes");

    let reconnect = || {
        let (listener, rx) = open_listener(&config)?;
        tracing::info!(port = listener.port_name(), "reconnected to MIDI input");
        Ok::<_, reclight_adapter_midi::MidiError>((listener, rx))
    };
    run_until_shutdown(&mut controller, listener, events, reconnect, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await;

    Ok(())
}
