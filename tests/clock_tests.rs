use easy_localtime::{
    Clock, FixedClock, PREFIX, SystemClock, local_now, now, report_line, with_offset,
};
use time::{
    UtcOffset,
    error::IndeterminateOffset,
    macros::{datetime, offset},
};

#[test]
fn test_now_is_utc() {
    let instant = now();
    assert!(instant.offset().is_utc());
    assert!(instant.year() >= 2024);
}

#[test]
fn test_with_offset_moves_fields() {
    let instant = datetime!(2026-10-18 20:31:30 UTC);
    let local = with_offset(instant, Ok(offset!(+9)));
    assert_eq!(local.offset(), offset!(+9));
    assert_eq!(local.date(), datetime!(2026-10-19 00:00:00).date());
    assert_eq!(local.hour(), 5);
    assert_eq!(local.minute(), 31);
    assert_eq!(local.unix_timestamp(), instant.unix_timestamp());

    let local = with_offset(instant, Ok(offset!(-3:30)));
    assert_eq!(local.offset(), offset!(-3:30));
    assert_eq!((local.hour(), local.minute()), (17, 1));
}

#[test]
fn test_with_offset_falls_back_to_utc() {
    let instant = datetime!(2026-10-19 05:31:30 +9);
    let local = with_offset(instant, Err(IndeterminateOffset));
    assert_eq!(local.offset(), UtcOffset::UTC);
    assert_eq!(local.hour(), 20);
    assert_eq!(local.day(), 18);
}

#[test]
fn test_local_now_is_not_before_now() {
    let before = now();
    let after = local_now();
    assert!(after >= before);

    let after_system = SystemClock.local_now();
    assert!(after_system >= after);
}

#[test]
fn test_fixed_clock() {
    let fixed = datetime!(2024-01-05 09:03:07 +8);
    let clock = FixedClock(fixed);
    assert_eq!(clock.now(), fixed);

    let local = clock.local_now();
    assert_eq!(local.offset(), offset!(+8));
    assert_eq!(local.hour(), 9);
}

#[test]
fn test_report_line_fixed_clock() {
    let clock = FixedClock(datetime!(2024-01-05 09:03:07 UTC));
    assert_eq!(
        report_line(&clock),
        "%c in the current locale: Fri Jan  5 09:03:07 2024"
    );

    let clock = FixedClock(datetime!(2026-10-19 05:31:30 +9));
    assert_eq!(
        report_line(&clock),
        "%c in the current locale: Mon Oct 19 05:31:30 2026"
    );
}

#[test]
fn test_report_line_system_clock() {
    let line = report_line(&SystemClock);
    let rest = line.strip_prefix(PREFIX).unwrap();
    assert!(!rest.is_empty());
    assert!(!line.contains('\n'));

    let dyn_clock: &dyn Clock = &SystemClock;
    assert!(report_line(dyn_clock).starts_with(PREFIX));
}
