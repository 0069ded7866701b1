#![no_main]
use core::convert::TryFrom;
use libfuzzer_sys::fuzz_target;

use ratsss::Point;

fuzz_target!(|point: Point| {
    let data: Vec<u8> = (&point).into();
    assert_eq!(Point::try_from(data.as_slice()).unwrap(), point);
});
