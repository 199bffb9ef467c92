use std::time::Duration;

use pad_pilot_core::guidance::{Annunciator, Cue, GuidanceMachine, ZoneId, ZoneTable};
use pad_pilot_core::pose::{MarkerId, MarkerTable, RawObservation};
use pad_pilot_host::{GuidanceRunner, HostError, ScriptedSource};

/// Annunciator that records cues and skips all delays.
struct RecordingAnnunciator {
    cues: Vec<Cue>,
}

impl RecordingAnnunciator {
    fn new() -> Self {
        Self { cues: Vec::new() }
    }
}

impl Annunciator for RecordingAnnunciator {
    fn announce(&mut self, cue: Cue) -> Result<(), &'static str> {
        self.cues.push(cue);
        Ok(())
    }

    fn settle(&mut self, _duration_ms: u32) {}
}

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn standard_machine(plan: &[ZoneId]) -> GuidanceMachine {
    GuidanceMachine::new(MarkerTable::standard(), &ZoneTable::standard(), plan).unwrap()
}

/// Center-marker frame resolving to pad position (x, y) at height z.
fn frame(x: f32, y: f32, z: f32) -> Option<RawObservation> {
    Some(RawObservation::new(MarkerId(4), -x, y, z))
}

fn runner_with_script(
    plan: &[ZoneId],
    frames: Vec<Option<RawObservation>>,
) -> GuidanceRunner<ScriptedSource> {
    GuidanceRunner::with_period(
        standard_machine(plan),
        ScriptedSource::new(frames),
        Duration::ZERO,
    )
}

#[test]
fn scripted_flight_lands_single_zone() {
    init_logs();

    // Zone A target is (-0.05715, 0). The script hovers over the center
    // marker, steps onto the target as the cues demand, and rides the
    // descent cycle through touchdown.
    let frames = vec![
        frame(0.0, 0.0, 0.2),       // Start -> SelectZone
        frame(0.0, 0.0, 0.2),       // SelectZone -> Ascend
        frame(0.0, 0.0, 0.2),       // Ascend -> CorrectX
        frame(-0.05715, 0.05, 0.2), // on x -> CorrectY
        frame(-0.05715, 0.0, 0.2),  // on y -> Descend
        None,                       // descent pulse -> CorrectX, second pass
        frame(-0.05715, 0.0, 0.1),  // touchdown -> SelectZone
        frame(-0.05715, 0.0, 0.1),  // plan exhausted -> Landed
    ];
    let mut runner = runner_with_script(&[ZoneId::A], frames);
    let mut out = RecordingAnnunciator::new();

    runner.run(&mut out).unwrap();

    assert!(runner.machine().state().is_terminal());
    assert_eq!(runner.machine().next_zone_index(), 1);
    assert_eq!(
        out.cues,
        vec![
            Cue::MoveLeft,      // x tie on target goes left
            Cue::MoveBackwards, // y tie on target goes backwards
            Cue::MoveDown,
            Cue::Stop,
            Cue::MoveDown,
            Cue::Landed,
            Cue::Finished,
        ]
    );
}

#[test]
fn scripted_flight_visits_zones_in_order() {
    init_logs();

    let frames = vec![
        frame(0.0, 0.0, 0.2),       // Start -> SelectZone
        frame(0.0, 0.0, 0.2),       // SelectZone -> Ascend (first zone)
        frame(0.0, 0.0, 0.2),       // Ascend -> CorrectX
        frame(-0.05715, 0.0, 0.2),  // on x -> CorrectY
        frame(-0.05715, 0.0, 0.2),  // on y -> Descend
        None,                       // descent pulse
        frame(-0.05715, 0.0, 0.1),  // touchdown -> SelectZone
        frame(-0.05715, 0.0, 0.1),  // SelectZone -> Ascend (second zone)
        frame(0.0, -0.0508, 0.2),   // Ascend -> CorrectX
        frame(0.0, -0.0508, 0.2),   // on x -> CorrectY
        frame(0.0, -0.0508, 0.2),   // on y -> Descend
        None,                       // descent pulse
        frame(0.0, -0.0508, 0.1),   // touchdown -> SelectZone
        frame(0.0, -0.0508, 0.1),   // plan exhausted -> Landed
    ];
    let mut runner = runner_with_script(&[ZoneId::A, ZoneId::D], frames);
    let mut out = RecordingAnnunciator::new();

    runner.run(&mut out).unwrap();

    assert!(runner.machine().state().is_terminal());
    assert_eq!(runner.machine().next_zone_index(), 2);

    let touchdowns = out.cues.iter().filter(|c| **c == Cue::Landed).count();
    assert_eq!(touchdowns, 2);
    let finishes = out.cues.iter().filter(|c| **c == Cue::Finished).count();
    assert_eq!(finishes, 1);
    assert_eq!(out.cues.last(), Some(&Cue::Finished));
}

#[test]
fn pose_dropouts_are_absorbed() {
    init_logs();

    let frames = vec![
        None,                       // Start blind: "No tags"
        frame(0.0, 0.0, 0.2),       // Start -> SelectZone
        frame(0.0, 0.0, 0.2),       // SelectZone -> Ascend
        None,                       // Ascend blind: "Move up"
        frame(0.0, 0.0, 0.2),       // Ascend -> CorrectX
        frame(-0.05715, 0.05, 0.2), // on x -> CorrectY
        None,                       // CorrectY blind: repeat last cue
        frame(-0.05715, 0.0, 0.2),  // on y -> Descend
        None,                       // descent pulse
        None,                       // CorrectX blind: hold before touchdown
        frame(-0.05715, 0.0, 0.1),  // touchdown -> SelectZone
        frame(-0.05715, 0.0, 0.1),  // plan exhausted -> Landed
    ];
    let mut runner = runner_with_script(&[ZoneId::A], frames);
    let mut out = RecordingAnnunciator::new();

    runner.run(&mut out).unwrap();

    assert!(runner.machine().state().is_terminal());
    assert_eq!(
        out.cues,
        vec![
            Cue::NoTags,
            Cue::MoveUp,
            Cue::MoveLeft,
            Cue::MoveLeft, // repeated while blind
            Cue::MoveBackwards,
            Cue::MoveDown,
            Cue::Stop,
            Cue::Stop, // repeated while blind
            Cue::MoveDown,
            Cue::Landed,
            Cue::Finished,
        ]
    );
}

#[test]
fn unknown_marker_aborts_the_run() {
    let frames = vec![Some(RawObservation::new(MarkerId(9), 0.0, 0.0, 0.2))];
    let mut runner = runner_with_script(&[ZoneId::A], frames);
    let mut out = RecordingAnnunciator::new();

    let err = runner.run(&mut out).unwrap_err();
    assert!(matches!(err, HostError::Pose(_)));
    assert!(!runner.machine().state().is_terminal());
    assert!(out.cues.is_empty());
}

#[test]
fn empty_plan_finishes_after_first_sighting() {
    let frames = vec![frame(0.0, 0.0, 0.2), frame(0.0, 0.0, 0.2)];
    let mut runner = runner_with_script(&[], frames);
    let mut out = RecordingAnnunciator::new();

    runner.run(&mut out).unwrap();

    assert!(runner.machine().state().is_terminal());
    assert_eq!(out.cues, vec![Cue::Finished]);
}
