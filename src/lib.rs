pub mod password_generation;

pub use password_generation::{generate_password, password_alphabet, PASSWORD_LENGTH};

/// A freshly generated password, owned by the caller.
///
/// The `Debug` implementation deliberately hides the contents, so a password
/// can't end up in logs or panic messages through debug formatting.
#[derive(Clone, Eq, PartialEq)]
pub struct Password(String);

opaque_debug::implement!(Password);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Password {
    fn from(s: String) -> Password {
        Password(s)
    }
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct GeneratorError(GeneratorErrorRepr);

impl From<GeneratorErrorRepr> for GeneratorError {
    fn from(err: GeneratorErrorRepr) -> GeneratorError {
        GeneratorError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum GeneratorErrorRepr {
    #[error("the operating system did not provide entropy to seed the generator: {0}")]
    EntropyUnavailable(rand::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_does_not_contain_the_password() {
        let password = Password::from(String::from("aB3!kL9@pQ2#xZ7$"));
        let debugged = format!("{:?}", password);
        assert!(
            !debugged.contains("aB3!"),
            "Debug output leaked the password: {}",
            debugged
        );
    }
}
