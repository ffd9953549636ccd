//! End-to-end bridge tests: worker-pool submission, the per-step pass,
//! clock telemetry, and shutdown.

use std::sync::Arc;
use std::thread;

use glam::DVec3;

use tether_bridge::{Bridge, BridgeConfig, SubmitError};
use tether_core::math::Wrench;
use tether_core::request::Request;
use tether_core::time::{SimDuration, SimTime};
use tether_test_utils::{MockBody, MockJoint, MockModel, MockWorld};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn small_config() -> BridgeConfig {
    BridgeConfig {
        worker_count: Some(2),
        ..Default::default()
    }
}

fn world_with_joint(joint_name: &str) -> (Arc<MockWorld>, Arc<MockJoint>) {
    let world = MockWorld::new();
    let model = MockModel::new("robot");
    let joint = MockJoint::new(joint_name);
    model.add_joint(Arc::clone(&joint));
    world.add_model(model);
    (world, joint)
}

#[test]
fn submitted_effort_is_applied_on_step() {
    init_logging();
    let (world, joint) = world_with_joint("elbow");
    let mut bridge = Bridge::new(Arc::clone(&world) as _, small_config()).unwrap();

    let response = bridge
        .handle()
        .submit(Request::ApplyJointEffort {
            joint_name: "elbow".into(),
            effort: 2.5,
            start_time: SimTime::ZERO,
            duration: SimDuration::new(1.0),
        })
        .unwrap();
    assert!(response.success, "{}", response.status);
    assert_eq!(bridge.scheduled_jobs(), (1, 0));

    bridge.on_step();
    assert_eq!(joint.applied_efforts(), vec![(0, 2.5)]);
}

#[test]
fn unknown_joint_is_rejected_without_scheduling() {
    init_logging();
    let (world, _joint) = world_with_joint("elbow");
    let mut bridge = Bridge::new(Arc::clone(&world) as _, small_config()).unwrap();

    let response = bridge
        .handle()
        .submit(Request::ApplyJointEffort {
            joint_name: "wrist".into(),
            effort: 1.0,
            start_time: SimTime::ZERO,
            duration: SimDuration::new(1.0),
        })
        .unwrap();
    assert!(!response.success);
    assert!(response.status.contains("wrist"));
    assert_eq!(bridge.scheduled_jobs(), (0, 0));
    bridge.on_step();
}

#[test]
fn concurrent_submitters_all_get_responses() {
    init_logging();
    let (world, joint) = world_with_joint("elbow");
    let mut bridge = Bridge::new(Arc::clone(&world) as _, small_config()).unwrap();

    let mut submitters = Vec::new();
    for _ in 0..8 {
        let handle = bridge.handle();
        submitters.push(thread::spawn(move || {
            handle.submit(Request::ApplyJointEffort {
                joint_name: "elbow".into(),
                effort: 1.0,
                start_time: SimTime::ZERO,
                duration: SimDuration::INDEFINITE,
            })
        }));
    }
    for submitter in submitters {
        let response = submitter.join().unwrap().unwrap();
        assert!(response.success);
    }
    assert_eq!(bridge.scheduled_jobs(), (8, 0));

    // All eight indefinite jobs fire every pass until cleared.
    bridge.on_step();
    assert_eq!(joint.applied_efforts().len(), 8);

    let response = bridge
        .handle()
        .submit(Request::ClearJointForces {
            joint_name: "elbow".into(),
        })
        .unwrap();
    assert!(response.success);
    assert_eq!(bridge.scheduled_jobs(), (0, 0));
}

#[test]
fn wrench_lifecycle_across_steps() {
    init_logging();
    let world = MockWorld::new();
    let body = MockBody::new("base_link");
    world.add_body(Arc::clone(&body));
    let mut bridge = Bridge::new(Arc::clone(&world) as _, small_config()).unwrap();

    let response = bridge
        .handle()
        .submit(Request::ApplyBodyWrench {
            body_name: "base_link".into(),
            reference_frame: String::new(),
            reference_point: DVec3::ZERO,
            wrench: Wrench::new(DVec3::new(1.0, 0.0, 0.0), DVec3::ZERO),
            start_time: SimTime::ZERO,
            duration: SimDuration::new(0.15),
        })
        .unwrap();
    assert!(response.success, "{}", response.status);

    // Active at t = 0.0 and 0.1; expired at 0.2.
    for step in 0..3 {
        world.set_time(SimTime::new(step as f64 * 0.1));
        bridge.on_step();
    }
    assert_eq!(body.applied_forces().len(), 2);
    assert_eq!(bridge.scheduled_jobs(), (0, 0));
}

#[test]
fn vanished_body_is_dropped_silently() {
    init_logging();
    let world = MockWorld::new();
    world.add_body(MockBody::new("doomed"));
    let mut bridge = Bridge::new(Arc::clone(&world) as _, small_config()).unwrap();

    bridge
        .handle()
        .submit(Request::ApplyBodyWrench {
            body_name: "doomed".into(),
            reference_frame: "world".into(),
            reference_point: DVec3::ZERO,
            wrench: Wrench::new(DVec3::X, DVec3::ZERO),
            start_time: SimTime::ZERO,
            duration: SimDuration::INDEFINITE,
        })
        .unwrap();
    assert_eq!(bridge.scheduled_jobs(), (0, 1));

    assert!(world.remove_body("doomed"));
    bridge.on_step();
    assert_eq!(bridge.scheduled_jobs(), (0, 0));
}

#[test]
fn model_configuration_round_trips_through_workers() {
    init_logging();
    let world = MockWorld::new();
    let model = MockModel::new("robot");
    world.add_model(Arc::clone(&model));
    let bridge = Bridge::new(Arc::clone(&world) as _, small_config()).unwrap();

    let response = bridge
        .handle()
        .submit(Request::SetModelConfiguration {
            model_name: "robot".into(),
            joint_names: vec!["a".into(), "b".into()],
            joint_positions: vec![0.5, -0.5],
        })
        .unwrap();
    assert!(response.success, "{}", response.status);
    assert_eq!(model.configurations().len(), 1);
    assert_eq!(world.pause_log(), vec![true, false]);
}

#[test]
fn clock_telemetry_is_throttled() {
    init_logging();
    let world = MockWorld::new();
    let config = BridgeConfig {
        worker_count: Some(1),
        clock_frequency_hz: 2.0,
        ..Default::default()
    };
    let mut bridge = Bridge::new(Arc::clone(&world) as _, config).unwrap();
    let events = bridge.clock_events();

    for step in 1..=100 {
        world.set_time(SimTime::new(step as f64 * 0.01));
        bridge.on_step();
    }

    let published: Vec<SimTime> = events.try_iter().collect();
    assert_eq!(published, vec![SimTime::new(0.5), SimTime::new(1.0)]);
}

#[test]
fn clock_publishes_every_step_by_default() {
    init_logging();
    let world = MockWorld::new();
    let mut bridge = Bridge::new(Arc::clone(&world) as _, small_config()).unwrap();
    let events = bridge.clock_events();

    for step in 1..=5 {
        world.set_time(SimTime::new(step as f64));
        bridge.on_step();
    }
    assert_eq!(events.try_iter().count(), 5);
}

#[test]
fn submit_after_shutdown_fails() {
    init_logging();
    let (world, _joint) = world_with_joint("elbow");
    let mut bridge = Bridge::new(Arc::clone(&world) as _, small_config()).unwrap();
    let handle = bridge.handle();

    bridge.shutdown();

    let err = handle
        .submit(Request::ClearJointForces {
            joint_name: "elbow".into(),
        })
        .unwrap_err();
    assert_eq!(err, SubmitError::Shutdown);
}

#[test]
fn invalid_config_is_rejected() {
    init_logging();
    let world = MockWorld::new();
    let config = BridgeConfig {
        request_queue_capacity: 0,
        ..Default::default()
    };
    assert!(Bridge::new(world as _, config).is_err());
}
