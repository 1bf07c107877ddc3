use easy_localtime::prelude::*;

fn main() {
    let local_time = SystemClock.local_now();

    println!("year: {}", local_time.year());
    println!("month: {}", local_time.month());
    println!("day: {}", local_time.day());
    println!("hour: {}", local_time.hour());
    println!("minute: {}", local_time.minute());
    println!("second: {}", local_time.second());
    println!("weekday: {}", local_time.weekday());
    println!("offset: {}", local_time.offset());

    let text = format_conventional(&local_time);
    println!("%c: {text} ({} bytes)", text.len());
}
