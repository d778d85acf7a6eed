//! Day-of-week value type.
//!
//! Days are plain enumerated values with a fixed ordering
//! (Monday first). Courses restrict their placements to a subset of
//! days; schedules carry exactly one.

use serde::{Deserialize, Serialize};

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All seven days, Monday first.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Monday through Friday.
    pub const WEEKDAYS: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_ordering() {
        assert!(Day::Monday < Day::Tuesday);
        assert!(Day::Saturday < Day::Sunday);
        assert_eq!(Day::ALL.len(), 7);
        assert_eq!(Day::ALL[0], Day::Monday);
        assert_eq!(Day::WEEKDAYS.len(), 5);
        assert!(!Day::WEEKDAYS.contains(&Day::Sunday));
    }

    #[test]
    fn test_day_display() {
        assert_eq!(Day::Tuesday.to_string(), "Tuesday");
        assert_eq!(Day::Sunday.to_string(), "Sunday");
    }
}
