#![no_main]
use core::convert::TryFrom;
use libfuzzer_sys::fuzz_target;
use ratsss::Point;

fuzz_target!(|data: &[u8]| {
    if let Ok(point) = Point::try_from(data) {
        let _data: Vec<u8> = (&point).into();
    }
});
