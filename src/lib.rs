pub mod clock;
pub mod error;
pub mod format;

pub use clock::{Clock, FixedClock, SystemClock, local_now, now, to_local, with_offset};
pub use error::Error;
pub use format::{
    BUFFER_CAPACITY, CONVENTIONAL, FormatBuffer, format_conventional, parse_conventional, strftime,
};

pub mod prelude {
    pub use super::{Clock, SystemClock, format_conventional};
}

/// literal text printed before the formatted time
pub const PREFIX: &str = "%c in the current locale: ";

/// Build the output line for `clock`, without the trailing newline.
///
/// Formatting failures are not reported: the line then ends right after
/// [`PREFIX`].
///
/// # Examples
///
/// ```
/// use easy_localtime::{FixedClock, report_line};
/// use time::macros::datetime;
///
/// let clock = FixedClock(datetime!(2026-10-18 14:03:07 UTC));
/// assert_eq!(
///     report_line(&clock),
///     "%c in the current locale: Sun Oct 18 14:03:07 2026"
/// );
/// ```
pub fn report_line<C: Clock + ?Sized>(clock: &C) -> String {
    let local = clock.local_now();
    let buf = format_conventional(&local);
    format!("{PREFIX}{buf}")
}
