//! Print the registry contents: ordinal, byte length, frame count, peak level.

use kick_samples::registry;

fn main() {
    println!("{} built-in samples:", registry::count());
    for (i, sample) in registry::iter().enumerate() {
        let peak = sample.frames().map(|f| f.unsigned_abs()).max().unwrap_or(0);
        println!(
            "  [{}] {:>5} bytes  {:>4} frames  peak {:>5}",
            i,
            sample.len_bytes(),
            sample.len_frames(),
            peak
        );
    }
}
