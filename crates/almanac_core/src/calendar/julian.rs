//! Gregorian to Julian day conversion.

/// Converts a proleptic Gregorian date to a fractional Julian day number.
///
/// `year` uses whatever numbering the caller settled on; no BC adjustment is
/// made here. Month must be 1..=12 and day 1..=31, which the date assembly
/// step guarantees. Integer divisions truncate toward zero, which is what
/// the classic formula expects for years after -4800.
pub fn gregorian_to_julian_day(year: i32, month: u32, day: u32) -> f64 {
    let year = i64::from(year);
    let month = i64::from(month);
    let day = i64::from(day);

    let i = (month - 14) / 12;
    let jdn = day - 32_075 + 1_461 * (year + 4_800 + i) / 4 + 367 * (month - 2 - 12 * i) / 12
        - 3 * ((year + 4_900 + i) / 100) / 4;

    jdn as f64 - 0.5
}

#[cfg(test)]
mod tests {
    use super::gregorian_to_julian_day;

    #[test]
    fn matches_reference_epochs() {
        assert_eq!(gregorian_to_julian_day(2000, 1, 1), 2_451_544.5);
        assert_eq!(gregorian_to_julian_day(1858, 11, 17), 2_400_000.5);
        assert_eq!(gregorian_to_julian_day(1970, 1, 1), 2_440_587.5);
    }

    #[test]
    fn consecutive_days_differ_by_one() {
        assert_eq!(
            gregorian_to_julian_day(2000, 3, 1) - gregorian_to_julian_day(2000, 2, 29),
            1.0
        );
        assert_eq!(
            gregorian_to_julian_day(1900, 3, 1) - gregorian_to_julian_day(1900, 2, 28),
            1.0
        );
        assert_eq!(
            gregorian_to_julian_day(2021, 1, 1) - gregorian_to_julian_day(2020, 12, 31),
            1.0
        );
    }

    #[test]
    fn monotonic_in_year_for_fixed_month_and_day() {
        for (month, day) in [(1, 1), (2, 28), (3, 15), (7, 20), (12, 31)] {
            let mut previous = gregorian_to_julian_day(-3_000, month, day);
            for year in -2_999..=2_100 {
                let current = gregorian_to_julian_day(year, month, day);
                assert!(
                    current > previous,
                    "julian day must increase at {year}-{month}-{day}"
                );
                previous = current;
            }
        }
    }

    #[test]
    fn results_are_half_integers() {
        let jd = gregorian_to_julian_day(-44, 3, 15);
        assert_eq!(jd.fract().abs(), 0.5);
    }
}
