use compass_rose::{CompassApp, HeadingSample};

const FRAME: f32 = 1.0 / 60.0; // 60 fps animation driver

fn main() {
    let mut app = CompassApp::new();

    // this loop should repeat each time the heading sensor delivers a sample
    for raw_heading in [0.0, 45.0, 170.0, 359.0, 1.0, -10.0] {
        let sample = HeadingSample {
            true_heading: raw_heading, // replace this with actual sensor data in degrees
            magnetic_heading: raw_heading,
            accuracy: 2.0,
        };
        app.on_heading_sample(&sample);

        let mut frames = 0;
        while app.advance_frame(FRAME) {
            frames += 1;
        }

        let readout = app.readout();
        println!(
            "raw {:>7.1}° -> heading {:>4} {:<2} dial settled at {:.2}° after {} frames",
            raw_heading,
            readout.heading,
            readout.direction,
            app.rotation(),
            frames
        );
    }
}
