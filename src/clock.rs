use std::fmt::Debug;
use time::{OffsetDateTime, UtcOffset, error::IndeterminateOffset};
use tracing::{debug, instrument, warn};

/// a source of the current instant
pub trait Clock: Send + Sync + Debug {
    /// current instant, in any offset
    fn now(&self) -> OffsetDateTime;

    /// current instant converted to local broken-down time
    fn local_now(&self) -> OffsetDateTime {
        to_local(self.now())
    }
}

/// the platform wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        now()
    }
}

/// a clock frozen at one instant, already in the offset to report
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }

    fn local_now(&self) -> OffsetDateTime {
        self.0
    }
}

/// read the system clock, in UTC
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Convert an instant to local time using the platform timezone.
///
/// When the platform offset cannot be determined the instant is kept in UTC
/// and a warning is logged.
#[instrument(level = "trace")]
pub fn to_local(instant: OffsetDateTime) -> OffsetDateTime {
    with_offset(instant, UtcOffset::local_offset_at(instant))
}

/// move `instant` to `offset`, or to UTC when the offset lookup failed
pub fn with_offset(
    instant: OffsetDateTime,
    offset: Result<UtcOffset, IndeterminateOffset>,
) -> OffsetDateTime {
    match offset {
        Ok(offset) => {
            debug!(%offset, "local offset");
            instant.to_offset(offset)
        }
        Err(e) => {
            warn!("failed to get local offset, using UTC: {e}");
            instant.to_offset(UtcOffset::UTC)
        }
    }
}

/// current local time
pub fn local_now() -> OffsetDateTime {
    to_local(now())
}
