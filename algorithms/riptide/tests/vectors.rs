//! Official Test Vectors for riptide
//!
//! Verifies the derivation against the RFC 7914 section 12 scrypt vectors,
//! carried in `test_vectors.json`. Vectors marked `slow` (the 2^20 one needs
//! about 1 GiB of scratch) only run when `RIPTIDE_SLOW_TESTS` is set.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use riptide::{derive, Params, Prf};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

#[derive(Deserialize)]
struct Vector {
    name: String,
    password: String,
    salt: String,
    n: u32,
    r: u32,
    p: u32,
    dk_len: usize,
    derived: String,
    slow: bool,
}

#[derive(Deserialize)]
struct TestVectors {
    vectors: Vec<Vector>,
}

#[test]
fn test_rfc7914_vectors() {
    let file = File::open("tests/test_vectors.json").expect("Failed to open test_vectors.json");
    let reader = BufReader::new(file);
    let data: TestVectors = serde_json::from_reader(reader).expect("Failed to parse JSON");

    let run_slow = std::env::var_os("RIPTIDE_SLOW_TESTS").is_some();

    for vector in data.vectors {
        if vector.slow && !run_slow {
            println!("skipped (slow): {}", vector.name);
            continue;
        }

        let params = Params::new(vector.n, vector.r, vector.p, vector.dk_len, Prf::Sha256)
            .expect("vector parameters must validate");
        let key = derive(vector.password.as_bytes(), vector.salt.as_bytes(), &params)
            .expect("vector derivation must succeed");

        assert_eq!(
            hex::encode(key),
            vector.derived,
            "Vector mismatched: {}",
            vector.name
        );
        println!("ok: {}", vector.name);
    }
}
