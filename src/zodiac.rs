//! Western zodiac lookup.
//!
//! Each sign covers an inclusive (month, day) range. The ranges are
//! contiguous over the whole year, with Capricorn wrapping from December
//! into January, so every valid month/day lands on exactly one sign.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ZodiacSign {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

/// (sign, start month/day, end month/day), both ends inclusive, ordered by
/// start within the calendar year.
const SIGN_RANGES: [(ZodiacSign, (u32, u32), (u32, u32)); 12] = [
    (ZodiacSign::Aquarius, (1, 20), (2, 18)),
    (ZodiacSign::Pisces, (2, 19), (3, 20)),
    (ZodiacSign::Aries, (3, 21), (4, 19)),
    (ZodiacSign::Taurus, (4, 20), (5, 20)),
    (ZodiacSign::Gemini, (5, 21), (6, 20)),
    (ZodiacSign::Cancer, (6, 21), (7, 22)),
    (ZodiacSign::Leo, (7, 23), (8, 22)),
    (ZodiacSign::Virgo, (8, 23), (9, 22)),
    (ZodiacSign::Libra, (9, 23), (10, 22)),
    (ZodiacSign::Scorpio, (10, 23), (11, 21)),
    (ZodiacSign::Sagittarius, (11, 22), (12, 21)),
    (ZodiacSign::Capricorn, (12, 22), (1, 19)),
];

impl ZodiacSign {
    /// Sign whose range contains the month and day of `date`.
    pub fn for_date(date: NaiveDate) -> ZodiacSign {
        let key = (date.month(), date.day());
        let after = SIGN_RANGES.partition_point(|(_, start, _)| *start <= key);
        // after == 0 is Jan 1-19, still inside the range that opened Dec 22
        let index = (after + SIGN_RANGES.len() - 1) % SIGN_RANGES.len();
        SIGN_RANGES[index].0
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            ZodiacSign::Capricorn => '♑',
            ZodiacSign::Aquarius => '♒',
            ZodiacSign::Pisces => '♓',
            ZodiacSign::Aries => '♈',
            ZodiacSign::Taurus => '♉',
            ZodiacSign::Gemini => '♊',
            ZodiacSign::Cancer => '♋',
            ZodiacSign::Leo => '♌',
            ZodiacSign::Virgo => '♍',
            ZodiacSign::Libra => '♎',
            ZodiacSign::Scorpio => '♏',
            ZodiacSign::Sagittarius => '♐',
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn range_contains(start: (u32, u32), end: (u32, u32), key: (u32, u32)) -> bool {
        if start <= end {
            start <= key && key <= end
        } else {
            key >= start || key <= end
        }
    }

    #[rstest]
    #[case(12, 22, ZodiacSign::Capricorn)]
    #[case(12, 31, ZodiacSign::Capricorn)]
    #[case(1, 1, ZodiacSign::Capricorn)]
    #[case(1, 19, ZodiacSign::Capricorn)]
    #[case(1, 20, ZodiacSign::Aquarius)]
    #[case(2, 18, ZodiacSign::Aquarius)]
    #[case(2, 19, ZodiacSign::Pisces)]
    #[case(2, 29, ZodiacSign::Pisces)]
    #[case(3, 20, ZodiacSign::Pisces)]
    #[case(3, 21, ZodiacSign::Aries)]
    #[case(4, 20, ZodiacSign::Taurus)]
    #[case(5, 21, ZodiacSign::Gemini)]
    #[case(6, 21, ZodiacSign::Cancer)]
    #[case(7, 22, ZodiacSign::Cancer)]
    #[case(7, 23, ZodiacSign::Leo)]
    #[case(8, 23, ZodiacSign::Virgo)]
    #[case(9, 23, ZodiacSign::Libra)]
    #[case(10, 23, ZodiacSign::Scorpio)]
    #[case(11, 21, ZodiacSign::Scorpio)]
    #[case(11, 22, ZodiacSign::Sagittarius)]
    #[case(12, 21, ZodiacSign::Sagittarius)]
    fn boundary_dates(#[case] month: u32, #[case] day: u32, #[case] expected: ZodiacSign) {
        let date = NaiveDate::from_ymd_opt(2024, month, day).unwrap();
        assert_eq!(ZodiacSign::for_date(date), expected);
    }

    #[test]
    fn every_day_of_a_leap_year_matches_exactly_one_range() {
        let mut day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

        while day <= end {
            let key = (day.month(), day.day());
            let matching: Vec<ZodiacSign> = SIGN_RANGES
                .iter()
                .filter(|(_, start, stop)| range_contains(*start, *stop, key))
                .map(|(sign, _, _)| *sign)
                .collect();
            assert_eq!(matching.len(), 1, "{day} matched {matching:?}");
            assert_eq!(ZodiacSign::for_date(day), matching[0], "{day}");
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn display_includes_symbol() {
        assert_eq!(ZodiacSign::Capricorn.to_string(), "♑ Capricorn");
        assert_eq!(ZodiacSign::Leo.to_string(), "♌ Leo");
    }
}
