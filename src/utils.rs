use rand::prelude::IndexedRandom;
use std::time::Duration;

const DELAYS_MS: [u64; 3] = [1000, 1500, 2000];

pub fn random_delay() {
    let delay = DELAYS_MS.choose(&mut rand::rng()).copied().unwrap_or(1000);
    std::thread::sleep(Duration::from_millis(delay));
}
