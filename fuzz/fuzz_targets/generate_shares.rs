#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use ratsss::{reveal_padded, SecretSharing};

#[derive(Debug, Arbitrary)]
struct Parameters {
    pub threshold: u8,
    pub secret: Vec<u8>,
    pub n_shares: u8,
}

fuzz_target!(|params: Parameters| {
    let sss = SecretSharing(params.threshold as usize);
    let shares = sss.split(&params.secret, params.n_shares as usize).unwrap();

    if params.threshold > 0 && params.n_shares >= params.threshold {
        let secret = reveal_padded(&shares, params.secret.len()).unwrap();
        assert_eq!(secret, params.secret);
    }
});
