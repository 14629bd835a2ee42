//! End-to-end tests: scripted sensor streams through the full pipeline

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use compass_rose::{
    CompassApp, HeadingSample, LocationOptions, LocationSample, Permission, RecordingSurface,
    ReplaySource, SensorSource,
};

const FRAME: f32 = 1.0 / 60.0;

fn heading_sample(degrees: f32) -> HeadingSample {
    HeadingSample {
        true_heading: degrees,
        magnetic_heading: degrees,
        accuracy: 1.0,
    }
}

/// Drive a scripted source and app together on one cooperative loop,
/// advancing in frame-sized steps like the platform's animation driver.
fn run_scenario(source: &mut ReplaySource, app: &Rc<RefCell<CompassApp>>, total: Duration) {
    let mut elapsed = Duration::ZERO;
    let step = Duration::from_micros((FRAME * 1_000_000.0) as u64);
    while elapsed <= total {
        source.poll(elapsed);
        app.borrow_mut().advance_frame(FRAME);
        elapsed += step;
    }
}

#[test_log::test]
fn scripted_heading_stream_settles_on_last_sample() {
    let mut source = ReplaySource::new();
    source.push_heading(Duration::from_millis(100), heading_sample(40.0));
    source.push_heading(Duration::from_millis(600), heading_sample(80.0));
    source.push_heading(Duration::from_millis(1100), heading_sample(120.0));

    let app = Rc::new(RefCell::new(CompassApp::new()));
    let sink = app.clone();
    let _heading_sub = source
        .subscribe_heading(Box::new(move |sample| {
            sink.borrow_mut().on_heading_sample(&sample)
        }))
        .unwrap();

    run_scenario(&mut source, &app, Duration::from_secs(4));

    let app = app.borrow();
    assert!(source.exhausted());
    assert_eq!(app.heading(), 120.0);
    assert!(
        (app.rotation() - 120.0).abs() < 0.05,
        "dial settled at {} instead of 120",
        app.rotation()
    );
    assert_eq!(app.readout().direction, "SE");
}

#[test_log::test]
fn location_stream_updates_readout() {
    let mut source = ReplaySource::new();
    source.push_location(
        Duration::from_millis(1000),
        LocationSample {
            latitude: 41.1496,
            longitude: -8.6109,
            altitude: 104.6,
            speed: 1.5,
        },
    );

    let app = Rc::new(RefCell::new(CompassApp::new()));
    assert_eq!(source.request_permission(), Permission::Granted);

    let sink = app.clone();
    let _location_sub = source
        .subscribe_location(
            LocationOptions::default(),
            Box::new(move |sample| sink.borrow_mut().on_location_sample(&sample)),
        )
        .unwrap();

    run_scenario(&mut source, &app, Duration::from_secs(2));

    let readout = app.borrow().readout();
    assert_eq!(readout.coordinates, "41.150, -8.611");
    assert_eq!(readout.altitude, "105m");
}

#[test_log::test]
fn denied_permission_keeps_heading_working() {
    let mut source = ReplaySource::with_permission(Permission::Denied);
    source.push_heading(Duration::from_millis(100), heading_sample(200.0));

    let app = Rc::new(RefCell::new(CompassApp::new()));
    let permission = source.request_permission();
    let alert = app.borrow_mut().on_permission(permission);
    assert_eq!(alert, Some("Permission to access location was denied"));

    // Per the permission gate, no location subscription is made; the
    // heading stream still runs.
    let sink = app.clone();
    let _heading_sub = source
        .subscribe_heading(Box::new(move |sample| {
            sink.borrow_mut().on_heading_sample(&sample)
        }))
        .unwrap();

    run_scenario(&mut source, &app, Duration::from_secs(1));

    let app = app.borrow();
    assert_eq!(app.heading(), 200.0);
    assert!(!app.location_enabled());
    assert_eq!(app.readout().coordinates, "0.000, 0.000");
}

#[test_log::test]
fn teardown_mid_stream_discards_later_samples() {
    let mut source = ReplaySource::new();
    source.push_heading(Duration::from_millis(100), heading_sample(10.0));
    source.push_heading(Duration::from_millis(900), heading_sample(300.0));

    let app = Rc::new(RefCell::new(CompassApp::new()));
    let sink = app.clone();
    let mut heading_sub = source
        .subscribe_heading(Box::new(move |sample| {
            sink.borrow_mut().on_heading_sample(&sample)
        }))
        .unwrap();

    source.poll(Duration::from_millis(500));
    heading_sub.unsubscribe();
    heading_sub.unsubscribe(); // teardown paths may run twice
    source.poll(Duration::from_millis(1500));

    assert_eq!(app.borrow().heading(), 10.0);
}

#[test]
fn draw_defers_until_surface_ready_then_renders() {
    let mut app = CompassApp::new();
    app.on_heading_sample(&heading_sample(90.0));

    let mut surface = RecordingSurface::not_ready();
    app.draw(&mut surface);
    app.draw(&mut surface);
    assert!(surface.ops().is_empty());

    // Surface context arrives; the very next frame draws
    surface.set_ready(true);
    app.draw(&mut surface);
    assert!(!surface.ops().is_empty());
}

#[test]
fn stale_samples_are_overwritten_not_queued() {
    let mut app = CompassApp::new();
    app.on_heading_sample(&heading_sample(0.0));

    // A burst of samples between frames: only the last one matters
    for degrees in [10.0, 20.0, 30.0, 355.0] {
        app.on_heading_sample(&heading_sample(degrees));
    }

    while app.advance_frame(FRAME) {}
    assert!(
        (app.rotation() - 355.0).abs() < 0.05,
        "dial should land on the newest sample, got {}",
        app.rotation()
    );
}
