use voyager::simulation::engine::{reached_orbit_of, Termination};
use voyager::simulation::scenario::probe_launch_state;
use voyager::visualization::{ovito, series};
use std::path::Path;

use voyager::{BodyKind, NVec2, PhysicalConstants, Scenario, ScenarioConfig, SimError, SystemState};

const REFERENCE: &str = r#"
parameters:
  dt: 3600.0
  years: 0.001

bodies:
  - kind: sun
    x: [ 0.0, 0.0 ]
    v: [ 0.0, 0.0 ]
  - kind: earth
    x: [ 1.443e11, -4.130e10 ]
    v: [ 7.66e3, 2.86e4 ]
  - kind: jupiter
    x: [ 3.0e11, 7.2e11 ]
    v: [ -1.25e4, 5.2e3 ]
  - kind: saturn
    x: [ -1.05e12, 9.7e11 ]
    v: [ -6.6e3, -7.1e3 ]

probe:
  launch_from: earth
"#;

fn reference_scenario() -> Scenario {
    let cfg = ScenarioConfig::from_yaml_str(REFERENCE).unwrap();
    Scenario::build_scenario(cfg, PhysicalConstants::default()).unwrap()
}

// ==================================================================================
// Scenario building
// ==================================================================================

#[test]
fn reference_scenario_has_five_bodies_with_kind_masses() {
    let scenario = reference_scenario();
    let constants = PhysicalConstants::default();
    let kinds: Vec<BodyKind> = scenario.system.bodies().iter().map(|b| b.kind).collect();

    assert_eq!(
        kinds,
        vec![BodyKind::Sun, BodyKind::Earth, BodyKind::Jupiter, BodyKind::Saturn, BodyKind::Ship]
    );
    for body in scenario.system.bodies() {
        assert_eq!(body.m, constants.mass_of(body.kind));
    }
    assert_eq!(scenario.parameters.g, constants.g);
    assert!((scenario.parameters.t_end - 0.001 * constants.saturnian_year).abs() < 1e-6);
    assert_eq!(scenario.termination.reach_orbit_of, None);
}

#[test]
fn ship_launches_from_earth() {
    let scenario = reference_scenario();
    let constants = PhysicalConstants::default();
    let sun = scenario.system.body(BodyKind::Sun).unwrap();
    let earth = scenario.system.body(BodyKind::Earth).unwrap();
    let ship = scenario.system.body(BodyKind::Ship).unwrap();

    let expected = earth.x.norm() + constants.earth_radius + constants.ship_altitude;
    assert!((ship.x.metric_distance(&sun.x) - expected).abs() < 1e-3);

    // Same ray from the Sun as the Earth
    let (e, s) = (earth.x - sun.x, ship.x - sun.x);
    assert!((e.x * s.y - e.y * s.x).abs() <= 1e-12 * e.norm() * s.norm());
    assert!(e.dot(&s) > 0.0);

    let speed = earth.v.norm() + constants.ship_launch_speed;
    assert!((ship.v.norm() - speed).abs() < 1e-9);
    assert!(ship.v.dot(&earth.v) > 0.0);
}

#[test]
fn probe_launch_state_is_radial_and_prograde() {
    let (x, v) = probe_launch_state(
        NVec2::new(1.0, 1.0),
        NVec2::new(4.0, 5.0),
        NVec2::new(0.0, 2.0),
        0.5,
        0.5,
        3.0,
    )
    .unwrap();

    // |planet - sun| = 5, plus radius and altitude
    assert!((x - NVec2::new(1.0 + 3.0 * 6.0 / 5.0, 1.0 + 4.0 * 6.0 / 5.0)).norm() < 1e-12);
    assert!((v - NVec2::new(0.0, 5.0)).norm() < 1e-12);
}

#[test]
fn probe_needs_a_launch_velocity() {
    let result = probe_launch_state(NVec2::zeros(), NVec2::new(1.0, 0.0), NVec2::zeros(), 0.1, 0.1, 1.0);
    assert!(matches!(result, Err(SimError::Config(_))));
}

#[test]
fn config_rejects_duplicates_and_bad_vectors() {
    let duplicate = REFERENCE.replace("kind: saturn", "kind: jupiter");
    let cfg = ScenarioConfig::from_yaml_str(&duplicate).unwrap();
    assert!(matches!(
        Scenario::build_scenario(cfg, PhysicalConstants::default()),
        Err(SimError::DuplicateBody(BodyKind::Jupiter))
    ));

    let short = REFERENCE.replace("x: [ 3.0e11, 7.2e11 ]", "x: [ 3.0e11 ]");
    let cfg = ScenarioConfig::from_yaml_str(&short).unwrap();
    assert!(matches!(
        Scenario::build_scenario(cfg, PhysicalConstants::default()),
        Err(SimError::InvalidVector { kind: BodyKind::Jupiter, field: "x", len: 1 })
    ));

    let no_launch = REFERENCE.replace("launch_from: earth", "launch_from: mars");
    let cfg = ScenarioConfig::from_yaml_str(&no_launch).unwrap();
    assert!(matches!(
        Scenario::build_scenario(cfg, PhysicalConstants::default()),
        Err(SimError::UnknownBody(BodyKind::Mars))
    ));

    assert!(matches!(
        ScenarioConfig::from_yaml_str("parameters: [1, 2]"),
        Err(SimError::Yaml(_))
    ));
}

#[test]
fn config_rejects_stop_targets_the_ship_cannot_reach() {
    let with_stop = |target: &str| {
        let yaml = format!("{REFERENCE}\nstop:\n  reach_orbit_of: {target}\n");
        let cfg = ScenarioConfig::from_yaml_str(&yaml).unwrap();
        Scenario::build_scenario(cfg, PhysicalConstants::default())
    };

    for target in ["sun", "ship", "mars"] {
        assert!(matches!(with_stop(target), Err(SimError::Config(_))), "{target}");
    }
    let scenario = with_stop("saturn").unwrap();
    assert_eq!(scenario.termination.reach_orbit_of, Some(BodyKind::Saturn));

    let no_probe = REFERENCE.replace("probe:\n  launch_from: earth\n", "stop:\n  reach_orbit_of: saturn\n");
    let cfg = ScenarioConfig::from_yaml_str(&no_probe).unwrap();
    assert!(matches!(
        Scenario::build_scenario(cfg, PhysicalConstants::default()),
        Err(SimError::Config(_))
    ));
}

#[test]
fn shipped_scenario_runs_for_its_full_duration() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/voyager.yaml");
    let cfg = ScenarioConfig::from_path(&path).unwrap();
    assert!(cfg.stop.reach_orbit_of.is_none());

    let scenario = Scenario::build_scenario(cfg, PhysicalConstants::default()).unwrap();
    assert_eq!(scenario.termination.reach_orbit_of, None);
    assert_eq!(scenario.termination.t_end, PhysicalConstants::default().saturnian_year);
    assert!(scenario.system.body(BodyKind::Ship).is_ok());
}

#[test]
fn config_overrides_mass_and_g() {
    let yaml = REFERENCE
        .replace("years: 0.001", "years: 0.001\n  G: 1.0e-10")
        .replace("kind: saturn\n", "kind: saturn\n    m: 1.0e20\n");
    let cfg = ScenarioConfig::from_yaml_str(&yaml).unwrap();
    let scenario = Scenario::build_scenario(cfg, PhysicalConstants::default()).unwrap();

    assert_eq!(scenario.parameters.g, 1.0e-10);
    assert_eq!(scenario.system.g(), 1.0e-10);
    assert_eq!(scenario.system.body(BodyKind::Saturn).unwrap().m, 1.0e20);
}

// ==================================================================================
// Full runs
// ==================================================================================

#[test]
fn reference_run_stops_on_duration_and_is_deterministic() {
    let run = || {
        let (mut engine, termination, _) = reference_scenario().into_engine();
        engine.simulate(termination.predicate()).unwrap();
        engine.into_results()
    };
    let first = run();

    let constants = PhysicalConstants::default();
    let t_end = 0.001 * constants.saturnian_year;
    let last = first.last().unwrap();
    assert!(last.t >= t_end && last.t < t_end + 3600.0);
    assert_eq!(first, run());
}

#[test]
fn orbit_rule_only_fires_once_the_ship_is_out_there() {
    let scenario = reference_scenario();
    assert!(!reached_orbit_of(BodyKind::Saturn)(&scenario.system));
    assert!(reached_orbit_of(BodyKind::Earth)(&scenario.system));

    // Missing target never fires
    assert!(!reached_orbit_of(BodyKind::Mars)(&scenario.system));

    // Earth pulls the ship back inside its orbit after launch, so the rule
    // fires on the first snapshot where the ship is out again
    let termination = Termination {
        t_end: 1.0e8,
        reach_orbit_of: Some(BodyKind::Earth),
    };
    let (mut engine, _, _) = reference_scenario().into_engine();
    engine.simulate(termination.predicate()).unwrap();
    let results = engine.results();

    let out_there = |state: &SystemState| {
        let sun = state.body(BodyKind::Sun).unwrap();
        let ship = state.body(BodyKind::Ship).unwrap();
        let earth = state.body(BodyKind::Earth).unwrap();
        ship.distance_to(sun) >= earth.distance_to(sun)
    };
    let (last, earlier) = results.split_last().unwrap();
    assert!(out_there(last));
    assert!(earlier.iter().all(|s| !out_there(s)));
    assert!(last.t < termination.t_end);
}

#[test]
fn restart_restores_the_reference_scenario() {
    let (mut engine, _, _) = reference_scenario().into_engine();
    let initial = engine.system().output_state();

    for _ in 0..50 {
        engine.system_mut().update().unwrap();
    }
    assert_ne!(engine.system().output_state(), initial);

    engine.system_mut().restart();
    assert_eq!(engine.system().output_state(), initial);
}

// ==================================================================================
// Output formats
// ==================================================================================

#[test]
fn ovito_frame_lists_every_body_with_its_own_colour() {
    let (mut engine, _, _) = reference_scenario().into_engine();
    engine.simulate(|s| s.time() >= 7200.0).unwrap();

    let mut buf = Vec::new();
    ovito::write_ovito(&mut buf, engine.results()).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2 * 7);
    assert_eq!(lines[0], "5");
    assert_eq!(lines[1], "0");
    assert_eq!(lines[7], "5");
    assert_eq!(lines[8], "1");

    let ship = engine.results()[0].body(BodyKind::Ship).unwrap();
    let ship_line: Vec<&str> = lines[6].split(' ').collect();
    assert_eq!(ship_line.len(), 7);
    assert_eq!(ship_line[0].parse::<f64>().unwrap(), ship.x.x);
    assert_eq!(ship_line[3].parse::<f64>().unwrap(), ship.v.y);
    assert_eq!(&ship_line[4..], &["192", "192", "192"]);
    assert!(lines[2].ends_with(" 255 255 0"));
}

#[test]
fn series_are_bracketed_arrays() {
    let (mut engine, _, _) = reference_scenario().into_engine();
    engine.simulate(|s| s.time() >= 3.0 * 3600.0).unwrap();
    let results = engine.results();

    let mut buf = Vec::new();
    series::write_distances(&mut buf, results, 3600.0, 10800.0).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("distanceToSun = ["));
    assert!(lines[1].starts_with("distanceToEarth = ["));
    assert!(lines[3].starts_with("distanceToSaturn = ["));
    assert_eq!(lines[4], "dt = 3600;");
    assert_eq!(lines[5], "totalTime = 10800;");

    let values: Vec<f64> = lines[0]
        .trim_start_matches("distanceToSun = [")
        .trim_end_matches("];")
        .split(", ")
        .map(|v| v.parse().unwrap())
        .collect();
    assert_eq!(values.len(), 3);
    let first = &results[0];
    let expected = first.body(BodyKind::Ship).unwrap().distance_to(first.body(BodyKind::Sun).unwrap());
    assert_eq!(values[0], expected);

    let mut buf = Vec::new();
    series::write_speed(&mut buf, results).unwrap();
    series::write_trajectory(&mut buf, results).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("shipSpeed = ["));
    assert!(lines[1].starts_with("x = ["));
    assert!(lines[2].starts_with("y = ["));
    assert!(lines.iter().all(|l| l.ends_with("];")));
}
