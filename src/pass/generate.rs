//! Password generation.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};

use super::{GenerationRequest, Password};

/// Generate a password of `length` characters from lowercase letters plus the
/// enabled classes, drawn from the operating system CSPRNG. A zero length
/// gives an empty password.
pub fn generate(
    length: usize,
    include_upper: bool,
    include_numbers: bool,
    include_symbols: bool,
) -> Password {
    let request = GenerationRequest::new(length, include_upper, include_numbers, include_symbols);
    generate_with(&mut OsRng, &request)
}

/// Generate from a request with a caller-supplied secure RNG.
pub fn generate_with<R>(rng: &mut R, request: &GenerationRequest) -> Password
where
    R: Rng + CryptoRng,
{
    let pool = request.pool();
    // Exact capacity: the pool is ASCII, so the buffer never reallocates and
    // leaves no stale copies behind.
    let mut buf = String::with_capacity(request.length);
    for _ in 0..request.length {
        buf.push(pool.pick(rng));
    }
    Password::from(buf)
}
