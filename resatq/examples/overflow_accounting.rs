//! Push a synthetic ramp through the gain operation and watch the clip
//! accounting work.
//!
//! Run with: cargo run --example overflow_accounting

use resatq::{process, Operation, ProcessOptions};
use std::io::Cursor;

fn main() {
    // a ramp that spends its last quarter near full scale
    let samples: Vec<i16> = (0..640)
        .map(|i| ((i as i32 * 32767) / 480).min(32767) as i16)
        .collect();
    let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();

    let op = Operation::Gain {
        gain: 24576, // 0.75 in Q15
        post_shift: 1,
    };
    let opts = ProcessOptions::default();

    let mut input = Cursor::new(bytes);
    let mut output = Cursor::new(Vec::new());
    let report = process(&mut input, &mut output, &op, &opts).expect("process");

    println!("{}", serde_json::to_string_pretty(&report).expect("report"));
    println!(
        "gain 1.5x clipped {} of {} samples",
        report.clipped_samples, report.samples_in
    );
}
