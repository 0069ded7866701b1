#![no_main]
use libfuzzer_sys::fuzz_target;

use ratsss::{reveal, Point};

fuzz_target!(|shares: Vec<Point>| {
    let _secret = reveal(&shares);
});
