//! Success-or-failure results for fallible constructors.
//!
//! An [`Outcome`] is a plain `Result` whose error side is a [`Failure`]
//! message. Callers that want to handle the failure match on it; callers that
//! treat a failure as a bug use [`GetValue::get_value`], which panics with the
//! stored message.

use thiserror::Error;

/// Failure variant carrying a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Failure {
    message: String,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result of a fallible constructor.
pub type Outcome<T> = Result<T, Failure>;

/// Shorthand for `Err(Failure::new(message))`.
pub fn failure<T>(message: impl Into<String>) -> Outcome<T> {
    Err(Failure::new(message))
}

/// Value access that treats an unhandled failure as a programmer error.
pub trait GetValue<T> {
    /// The success value; panics with the failure message otherwise.
    fn get_value(&self) -> &T;

    fn get_value_mut(&mut self) -> &mut T;
}

impl<T> GetValue<T> for Outcome<T> {
    #[track_caller]
    fn get_value(&self) -> &T {
        match self {
            Ok(v) => v,
            Err(f) => unhandled(f),
        }
    }

    #[track_caller]
    fn get_value_mut(&mut self) -> &mut T {
        match self {
            Ok(v) => v,
            Err(f) => unhandled(f),
        }
    }
}

#[cold]
#[track_caller]
fn unhandled(f: &Failure) -> ! {
    panic!("{}", f.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_value_is_reachable() {
        let mut ok: Outcome<u32> = Ok(3);
        *ok.get_value_mut() += 1;
        assert_eq!(*ok.get_value(), 4);
    }

    #[test]
    fn failure_keeps_message() {
        let f: Outcome<u32> = failure("nope");
        assert_eq!(f.as_ref().unwrap_err().message(), "nope");
        assert_eq!(f.unwrap_err().to_string(), "nope");
    }

    #[test]
    #[should_panic(expected = "nope")]
    fn get_value_on_failure_panics_with_message() {
        let f: Outcome<u32> = failure("nope");
        let _ = f.get_value();
    }
}
