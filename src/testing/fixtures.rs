use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use tempfile::NamedTempFile;

/// First hundred decimals of √2, wrapped the way published tables are.
pub const SQRT_TWO_DIGITS: &str = "1.41421356237309504880168872420969807856967187537694\n\
                                   80731766797379907324784621070388503875343276415727\n";

/// Temporary reference file holding `contents`; removed on drop.
pub fn reference_file(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("create temp reference file");
    f.write_all(contents.as_bytes())
        .expect("write temp reference file");
    f.flush().expect("flush temp reference file");
    f
}

/// Log-uniform positive targets in `[1e-6, 1e6)`, reproducible per seed.
pub fn random_targets(seed: u64, count: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| 10f64.powf(rng.random_range(-6.0..6.0)))
        .collect()
}
