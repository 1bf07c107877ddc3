use crate::error::Error;
use std::{fmt, io};
use time::{
    OffsetDateTime, PrimitiveDateTime, format_description::BorrowedFormatItem,
    formatting::Formattable, macros::format_description,
};
use tracing::{debug, instrument};

/// capacity of the output buffer, one byte of which is kept for a terminator
pub const BUFFER_CAPACITY: usize = 100;

/// The C locale's `%c` representation, `%a %b %e %H:%M:%S %Y`.
///
/// The program never selects a locale, so this is the only conventional
/// representation it produces.
pub const CONVENTIONAL: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short] [month repr:short] [day padding:space] [hour]:[minute]:[second] [year]"
);

/// a fixed-capacity text buffer
#[derive(Clone)]
pub struct FormatBuffer {
    bytes: [u8; BUFFER_CAPACITY],
    len: usize,
}

impl Default for FormatBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatBuffer {
    pub fn new() -> Self {
        Self {
            bytes: [0; BUFFER_CAPACITY],
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        BUFFER_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn as_str(&self) -> &str {
        // cleared on any failed write, so never holds a partial character
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }
}

impl io::Write for FormatBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let end = self.len + buf.len();
        if end >= BUFFER_CAPACITY {
            return Err(io::ErrorKind::WriteZero.into());
        }
        self.bytes[self.len..end].copy_from_slice(buf);
        self.len = end;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Display for FormatBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for FormatBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatBuffer")
            .field("text", &self.as_str())
            .field("len", &self.len)
            .finish()
    }
}

/// Render `datetime` with `format` into `buf`.
///
/// Returns the number of bytes written. `0` means the text did not fit in
/// `BUFFER_CAPACITY - 1` bytes (or was empty); the buffer is left empty then.
///
/// # Examples
///
/// ```
/// use easy_localtime::{CONVENTIONAL, FormatBuffer, strftime};
/// use time::macros::datetime;
///
/// let mut buf = FormatBuffer::new();
/// let n = strftime(&mut buf, CONVENTIONAL, &datetime!(2024-01-05 09:03:07 UTC));
/// assert_eq!(n, 24);
/// assert_eq!(buf.as_str(), "Fri Jan  5 09:03:07 2024");
/// ```
#[instrument(level = "trace", skip(buf, format))]
pub fn strftime<F>(buf: &mut FormatBuffer, format: &F, datetime: &OffsetDateTime) -> usize
where
    F: Formattable + ?Sized,
{
    buf.clear();
    match datetime.format_into(buf, format) {
        Ok(n) => n,
        Err(e) => {
            debug!("failed to format into {BUFFER_CAPACITY} bytes: {e}");
            buf.clear();
            0
        }
    }
}

/// format `datetime` with the conventional representation
pub fn format_conventional(datetime: &OffsetDateTime) -> FormatBuffer {
    let mut buf = FormatBuffer::new();
    strftime(&mut buf, CONVENTIONAL, datetime);
    buf
}

/// Parse text in the conventional representation back into a local time.
///
/// The representation carries no offset, so the result is a
/// [`PrimitiveDateTime`].
///
/// # Examples
///
/// ```
/// use easy_localtime::parse_conventional;
/// use time::macros::datetime;
///
/// let parsed = parse_conventional("Fri Jan  5 09:03:07 2024").unwrap();
/// assert_eq!(parsed, datetime!(2024-01-05 09:03:07));
/// ```
pub fn parse_conventional(input: &str) -> Result<PrimitiveDateTime, Error> {
    PrimitiveDateTime::parse(input, CONVENTIONAL).map_err(|source| Error::Parse {
        input: input.to_string(),
        source,
    })
}
