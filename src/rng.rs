/// Deterministic 32-bit generator — algorithm "xor" from p. 4 of Marsaglia,
/// "Xorshift RNGs". Drives respawn columns and shooter selection; the same
/// seed reproduces an identical run, which the tests rely on.
#[derive(Clone, Copy, Debug)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// `seed` must be nonzero: zero is a fixed point of the transform and
    /// pins the generator to an all-zero orbit.
    pub fn new(seed: u32) -> Self {
        debug_assert!(seed != 0, "xorshift32 seed must be nonzero");
        Self { state: seed }
    }

    pub fn next(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform value in [0, 1). The divisor is 2^32 rather than `u32::MAX`
    /// so the result stays strictly below one even when `next` yields
    /// all-ones, keeping `(n as f64 * unit()) as usize` in range.
    pub fn unit(&mut self) -> f64 {
        f64::from(self.next()) / (f64::from(u32::MAX) + 1.0)
    }
}
