//! Generation of fixed-length random passwords.

use rand::rngs::{OsRng, StdRng};
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore, SeedableRng};

use crate::{GeneratorError, GeneratorErrorRepr, Password};

pub static LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub static NUMBERS: &str = "0123456789";
pub static SYMBOLS: &str = "!@#$%^&*()";

/// Length, in characters, of every generated password.
pub const PASSWORD_LENGTH: usize = 16;

/// The alphabet generated passwords are drawn from: letters, then numbers,
/// then symbols, in that order.
pub fn password_alphabet() -> Vec<char> {
    let mut alphabet = Vec::new();
    alphabet.extend(LETTERS.chars());
    alphabet.extend(NUMBERS.chars());
    alphabet.extend(SYMBOLS.chars());
    alphabet
}

/// Generate one password of [`PASSWORD_LENGTH`] characters, each drawn
/// uniformly and independently from [`password_alphabet`].
///
/// Every call seeds its own generator from the operating system, so there is
/// no state shared between calls (or between threads), and a previously
/// returned [`Password`] is never touched again. If the OS can't supply
/// entropy the call fails; it never falls back to a weaker seed.
pub fn generate_password() -> Result<Password, GeneratorError> {
    let mut rng = os_seeded_rng()?;
    let alphabet = password_alphabet();
    Ok(sample_password(&mut rng, &alphabet, PASSWORD_LENGTH))
}

/// Build a password by uniformly sampling `len` characters from `alphabet`,
/// which must be non-empty.
///
/// `rand`'s uniform sampler re-samples rather than taking a biased modulus
/// when the alphabet size doesn't evenly divide the generator's output range,
/// so every alphabet member is equally likely at every position.
pub fn sample_password<R>(rng: &mut R, alphabet: &[char], len: usize) -> Password
where
    R: Rng + CryptoRng,
{
    let mut password = Password(String::with_capacity(len));
    for _ in 0..len {
        let ch = alphabet.choose(rng).unwrap();
        password.0.push(*ch);
    }
    password
}

fn os_seeded_rng() -> Result<StdRng, GeneratorError> {
    let mut seed = <StdRng as SeedableRng>::Seed::default();
    OsRng
        .try_fill_bytes(&mut seed)
        .map_err(GeneratorErrorRepr::EntropyUnavailable)?;
    Ok(StdRng::from_seed(seed))
}
