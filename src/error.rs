/// Error returned when a signal length cannot be transformed.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct InvalidLengthError {
    /// The offending signal length.
    pub len: usize,
}

impl core::fmt::Display for InvalidLengthError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "signal length {} is not a power of two", self.len)
    }
}

impl core::fmt::Debug for InvalidLengthError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self, f)
    }
}

impl std::error::Error for InvalidLengthError {}

/// Checks a signal length before any partitioning or permutation happens.
///
/// `usize::is_power_of_two` classifies zero as invalid, so the empty
/// signal is rejected here as well.
pub(crate) fn validate_length(len: usize) -> Result<(), InvalidLengthError> {
    if len.is_power_of_two() {
        Ok(())
    } else {
        Err(InvalidLengthError { len })
    }
}
