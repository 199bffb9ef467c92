use std::thread;

use pad_pilot_core::pose::{MarkerId, RawObservation};
use pad_pilot_core::traits::ObservationSource;
use pad_pilot_host::ObservationRegister;

fn obs(marker: u8, z: f32) -> RawObservation {
    RawObservation::new(MarkerId(marker), 0.0, 0.0, z)
}

#[test]
fn empty_register_has_no_observation() {
    let register = ObservationRegister::new();
    assert!(register.latest().is_none());
}

#[test]
fn publish_overwrites_previous_sighting() {
    let register = ObservationRegister::new();
    register.publish(obs(0, 0.1));
    register.publish(obs(4, 0.2));

    // Last write wins, no backlog
    assert_eq!(register.latest(), Some(obs(4, 0.2)));
    assert_eq!(register.latest(), Some(obs(4, 0.2)));
}

#[test]
fn clear_empties_the_slot() {
    let register = ObservationRegister::new();
    register.publish(obs(4, 0.2));
    register.clear();
    assert!(register.latest().is_none());
}

#[test]
fn clones_share_the_slot() {
    let register = ObservationRegister::new();
    let writer = register.clone();

    writer.publish(obs(4, 0.2));
    assert_eq!(register.latest(), Some(obs(4, 0.2)));

    writer.clear();
    assert!(register.latest().is_none());
}

#[test]
fn cross_thread_writer_is_visible_to_reader() {
    let register = ObservationRegister::new();
    let writer = register.clone();

    let handle = thread::spawn(move || {
        for i in 0..100u8 {
            writer.publish(obs(4, f32::from(i)));
        }
    });
    handle.join().unwrap();

    assert_eq!(register.latest(), Some(obs(4, 99.0)));
}
