use crate::common::RegisterGroup;
use embedded_hal::i2c as hal_i2c;

/// Failure of a composite configuration transfer.
///
/// The groups are transferred in the order mode, output, polarity.  Groups before `group` were
/// transferred successfully, `group` failed and the remaining ones were not attempted.  There is
/// no rollback, the chip is left in whatever mixed state this produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigError<E> {
    /// The group whose transfer failed.
    pub group: RegisterGroup,
    /// The transport error of that transfer.
    pub error: E,
}

impl<E> ConfigError<E> {
    pub(crate) fn new(group: RegisterGroup, error: E) -> Self {
        Self { group, error }
    }

    /// Drop the group information and return the transport error.
    pub fn into_inner(self) -> E {
        self.error
    }
}

impl<E: hal_i2c::Error> hal_i2c::Error for ConfigError<E> {
    fn kind(&self) -> hal_i2c::ErrorKind {
        self.error.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigError;
    use crate::RegisterGroup;
    use embedded_hal::i2c::{Error, ErrorKind, NoAcknowledgeSource};

    #[test]
    fn kind_is_forwarded() {
        let nack = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address);
        let err = ConfigError::new(RegisterGroup::Output, nack);
        assert_eq!(err.kind(), nack);
        assert_eq!(err.group, RegisterGroup::Output);
        assert_eq!(err.into_inner(), nack);
    }
}
