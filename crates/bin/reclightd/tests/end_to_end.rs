//! End-to-end flow through the wired pipeline: raw MIDI bytes in,
//! virtual lights switching after the debounce window.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use reclight_adapter_virtual::{VirtualDiscovery, VirtualLights};
use reclight_app::SharedRoster;
use reclight_app::controller::Controller;
use reclight_app::debounce::DebounceScheduler;
use reclight_app::fanout::LightFanout;
use reclight_app::interpreter::SignalInterpreter;
use reclight_app::services::roster_service::RosterService;
use reclight_domain::device::{Device, DeviceKind};
use reclight_domain::roster::Roster;

const CC_PLAY: u8 = 117;
const CC_RECORD: u8 = 118;

struct Harness {
    controller: Controller<LightFanout<Arc<VirtualLights>>>,
    lights: Arc<VirtualLights>,
}

async fn wire_up() -> Harness {
    let roster = Roster::new(vec![
        Device::new("A1", "Live Room Lamp", "live room", DeviceKind::Bulb),
        Device::new("B2", "Booth Sign", "vocal booth", DeviceKind::Outlet),
    ])
    .unwrap();
    let discovery = VirtualDiscovery::for_roster(&roster);
    let roster: SharedRoster = Arc::new(tokio::sync::RwLock::new(roster));

    let summary = RosterService::new(discovery, Arc::clone(&roster))
        .refresh()
        .await
        .unwrap();
    assert_eq!(summary.matched, 2);

    let lights = Arc::new(VirtualLights::new());
    let fanout = LightFanout::new(Arc::clone(&lights), roster, Duration::from_secs(3));
    let scheduler = DebounceScheduler::new(Arc::new(fanout), Duration::from_millis(250));
    let interpreter = SignalInterpreter::new(CC_PLAY, CC_RECORD);

    Harness {
        controller: Controller::new(interpreter, scheduler),
        lights,
    }
}

fn addr(last: u8) -> IpAddr {
    IpAddr::from([10, 0, 0, last])
}

#[tokio::test(start_paused = true)]
async fn should_drive_both_lights_through_a_recording_session() {
    let mut harness = wire_up().await;

    // Arming record while stopped must not switch anything.
    harness.controller.handle_message(&[0xB0, CC_RECORD, 127]);
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(harness.lights.commanded_count(), 0);

    // Pressing play with record armed turns both lights on after the
    // debounce window.
    harness.controller.handle_message(&[0xB0, CC_PLAY, 127]);
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(harness.lights.is_on(addr(1)), Some(true));
    assert_eq!(harness.lights.is_on(addr(2)), Some(true));

    // Stopping playback turns them back off.
    harness.controller.handle_message(&[0xB0, CC_PLAY, 0]);
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(harness.lights.is_on(addr(1)), Some(false));
    assert_eq!(harness.lights.is_on(addr(2)), Some(false));
}

#[tokio::test(start_paused = true)]
async fn should_coalesce_a_rapid_stop_start_into_no_change() {
    let mut harness = wire_up().await;

    harness.controller.handle_message(&[0xB0, CC_RECORD, 127]);
    harness.controller.handle_message(&[0xB0, CC_PLAY, 127]);
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(harness.lights.is_on(addr(1)), Some(true));

    // Stop then restart within the debounce window; only the final state
    // is dispatched, so both lights see exactly one more command.
    harness.controller.handle_message(&[0xB0, CC_PLAY, 0]);
    tokio::time::sleep(Duration::from_millis(100)).await;
    harness.controller.handle_message(&[0xB0, CC_PLAY, 127]);
    tokio::time::sleep(Duration::from_millis(300)).await;

    assert_eq!(harness.lights.is_on(addr(1)), Some(true));
    assert_eq!(harness.lights.is_on(addr(2)), Some(true));
}

#[tokio::test(start_paused = true)]
async fn should_keep_working_lights_on_when_one_refuses() {
    let mut harness = wire_up().await;
    harness.lights.refuse_at(addr(2));

    harness.controller.handle_message(&[0xB0, CC_RECORD, 127]);
    harness.controller.handle_message(&[0xB0, CC_PLAY, 127]);
    tokio::time::sleep(Duration::from_millis(300)).await;

    assert_eq!(harness.lights.is_on(addr(1)), Some(true));
    assert_eq!(harness.lights.is_on(addr(2)), None);
}
