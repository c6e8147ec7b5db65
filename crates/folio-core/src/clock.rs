const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Broken-down local time. `month` is 1-based, `weekday` 0 = Sunday.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

pub fn format_time(p: &ClockParts, twelve_hour: bool) -> String {
    if twelve_hour {
        let suffix = if p.hour < 12 { "AM" } else { "PM" };
        let h = match p.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", h, p.minute, suffix)
    } else {
        format!("{:02}:{:02}:{:02}", p.hour, p.minute, p.second)
    }
}

pub fn format_date(p: &ClockParts) -> String {
    let wd = WEEKDAYS[(p.weekday % 7) as usize];
    let mon = MONTHS[(p.month.clamp(1, 12) - 1) as usize];
    format!("{} {} {} {}", wd, p.day, mon, p.year)
}

/// Delay that lands the next tick just after a second boundary.
#[inline]
pub fn ms_until_next_second(epoch_ms: f64) -> u32 {
    let rem = epoch_ms.rem_euclid(1000.0);
    (1000.0 - rem).ceil().clamp(1.0, 1000.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(hour: u32, minute: u32, second: u32) -> ClockParts {
        ClockParts {
            year: 2026,
            month: 10,
            day: 18,
            weekday: 0,
            hour,
            minute,
            second,
        }
    }

    #[test]
    fn twenty_four_hour_is_zero_padded() {
        assert_eq!(format_time(&parts(9, 5, 3), false), "09:05:03");
        assert_eq!(format_time(&parts(23, 59, 59), false), "23:59:59");
    }

    #[test]
    fn twelve_hour_handles_midnight_and_noon() {
        assert_eq!(format_time(&parts(0, 0, 0), true), "12:00 AM");
        assert_eq!(format_time(&parts(12, 30, 0), true), "12:30 PM");
        assert_eq!(format_time(&parts(21, 7, 0), true), "9:07 PM");
    }

    #[test]
    fn date_format() {
        assert_eq!(format_date(&parts(0, 0, 0)), "SUN 18 OCT 2026");
    }

    #[test]
    fn next_second_delay() {
        assert_eq!(ms_until_next_second(1_000.0), 1000);
        assert_eq!(ms_until_next_second(1_250.0), 750);
        assert_eq!(ms_until_next_second(1_999.5), 1);
    }
}
