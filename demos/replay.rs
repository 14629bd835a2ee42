//! Scripted heading replay with smoothing diagnostics
//!
//! Loads a recorded heading trace from CSV, runs it through the full
//! pipeline at a 60 fps animation rate, and plots the raw samples against
//! the spring-smoothed dial rotation. The wrap-around at the 0°/360° seam
//! is where the smoothed trace shows the shortest-path behavior.
//!
//! Run with: `cargo run --example replay`

use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;
use std::time::Duration;

use compass_rose::{CompassApp, HeadingSample, ReplaySource, SensorSource};
use log::info;
use plotters::prelude::*;
use serde::Deserialize;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Debug, Deserialize)]
struct HeadingRecord {
    #[serde(rename = "Time (s)")]
    time: f32,
    #[serde(rename = "True Heading (deg)")]
    true_heading: f32,
    #[serde(rename = "Magnetic Heading (deg)")]
    magnetic_heading: f32,
    #[serde(rename = "Accuracy (deg)")]
    accuracy: f32,
}

const FRAME: f32 = 1.0 / 60.0;

fn main() -> Result<(), Box<dyn Error>> {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    // Load the recorded heading trace
    let mut reader = csv::Reader::from_path("testdata/headings.csv")?;
    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: HeadingRecord = result?;
        records.push(record);
    }
    info!("loaded {} heading samples", records.len());

    // Script the trace into a replay source
    let mut source = ReplaySource::new();
    let end_time = records.last().map(|record| record.time).unwrap_or(0.0);
    for record in &records {
        source.push_heading(
            Duration::from_secs_f32(record.time),
            HeadingSample {
                true_heading: record.true_heading,
                magnetic_heading: record.magnetic_heading,
                accuracy: record.accuracy,
            },
        );
    }

    let app = Rc::new(RefCell::new(CompassApp::new()));
    let sink = app.clone();
    let _subscription = source
        .subscribe_heading(Box::new(move |sample| {
            sink.borrow_mut().on_heading_sample(&sample)
        }))?;

    // Run the cooperative loop: poll sensors, advance the spring, record
    // both traces per frame
    let mut raw_trace = Vec::new();
    let mut smoothed_trace = Vec::new();
    let mut elapsed = 0.0f32;
    while elapsed <= end_time + 2.0 {
        source.poll(Duration::from_secs_f32(elapsed));
        app.borrow_mut().advance_frame(FRAME);

        let app = app.borrow();
        raw_trace.push((elapsed, app.heading()));
        smoothed_trace.push((elapsed, app.rotation()));
        elapsed += FRAME;
    }

    let readout = app.borrow().readout();
    info!(
        "final heading {} {} after {:.1}s of replay",
        readout.heading, readout.direction, elapsed
    );

    create_plot(&raw_trace, &smoothed_trace, end_time + 2.0)?;
    println!("✓ Plot saved to heading_replay.png");
    Ok(())
}

/// Raw samples as a stepped scatter, smoothed rotation as a line
fn create_plot(
    raw: &[(f32, f32)],
    smoothed: &[(f32, f32)],
    end_time: f32,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new("heading_replay.png", (1000, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Raw heading vs. smoothed dial rotation", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f32..end_time, 0f32..360f32)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Degrees")
        .draw()?;

    chart
        .draw_series(LineSeries::new(raw.iter().copied(), &RED))?
        .label("Raw heading")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], RED));

    chart
        .draw_series(LineSeries::new(smoothed.iter().copied(), &BLUE))?
        .label("Smoothed rotation")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], BLUE));

    chart.configure_series_labels().draw()?;
    root.present()?;
    Ok(())
}
