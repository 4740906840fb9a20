//! Semaine de référence : alignement sur le lundi et libellés des 7 jours.

use chrono::{Datelike, Days, NaiveDate};
use tracing::warn;

pub const DAYS_PER_WEEK: usize = 7;

/// Lundi de la semaine ISO contenant `date`, `None` hors de la plage de chrono.
pub fn monday_of(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
}

/// Début de semaine retenu pour une date choisie par l'utilisateur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekStart {
    pub reference: NaiveDate,
    pub monday: NaiveDate,
    days: [NaiveDate; DAYS_PER_WEEK],
}

impl WeekStart {
    /// Une date hors lundi est ramenée au lundi précédent (avertissement, pas d'erreur).
    ///
    /// `None` si la semaine déborde de la plage de dates représentable.
    pub fn from_reference(reference: NaiveDate) -> Option<Self> {
        let monday = monday_of(reference)?;
        let days = week_days(monday)?;
        let week = Self {
            reference,
            monday,
            days,
        };
        if week.adjusted() {
            warn!(%reference, %monday, "reference date is not a Monday, adjusted");
        }
        Some(week)
    }

    pub fn adjusted(&self) -> bool {
        self.reference != self.monday
    }

    pub fn days(&self) -> [NaiveDate; DAYS_PER_WEEK] {
        self.days
    }

    pub fn labels(&self) -> [String; DAYS_PER_WEEK] {
        self.days.map(day_label)
    }
}

pub fn week_days(monday: NaiveDate) -> Option<[NaiveDate; DAYS_PER_WEEK]> {
    let mut days = [monday; DAYS_PER_WEEK];
    for (i, day) in days.iter_mut().enumerate().skip(1) {
        *day = monday.checked_add_days(Days::new(i as u64))?;
    }
    Some(days)
}

/// Libellé sur deux lignes : `2024-06-03\nMonday`.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%Y-%m-%d\n%A").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn monday_is_kept() {
        let week = WeekStart::from_reference(d(2024, 6, 3)).unwrap();
        assert_eq!(week.monday, d(2024, 6, 3));
        assert!(!week.adjusted());
    }

    #[test]
    fn sunday_goes_back_six_days() {
        assert_eq!(monday_of(d(2024, 6, 9)), Some(d(2024, 6, 3)));
    }

    #[test]
    fn crossing_month_and_year() {
        // 2025-01-01 est un mercredi
        assert_eq!(monday_of(d(2025, 1, 1)), Some(d(2024, 12, 30)));
        assert_eq!(monday_of(d(2024, 3, 2)), Some(d(2024, 2, 26)));
    }

    #[test]
    fn every_date_of_a_year_maps_to_a_preceding_monday() {
        let mut date = d(2024, 1, 1);
        while date.year() == 2024 {
            let week = WeekStart::from_reference(date).unwrap();
            let days = week.days();
            assert_eq!(days[0].weekday(), Weekday::Mon);
            assert!(days[0] <= date && date <= days[6]);
            for pair in days.windows(2) {
                assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
            }
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn edges_of_the_date_range_are_refused() {
        assert!(WeekStart::from_reference(NaiveDate::MAX).is_none());
        let first = WeekStart::from_reference(NaiveDate::MIN);
        assert_eq!(first.is_some(), NaiveDate::MIN.weekday() == Weekday::Mon);
        // dernière semaine complète représentable
        let last_monday = monday_of(NaiveDate::MAX).unwrap();
        let last_full = last_monday.checked_sub_days(Days::new(7)).unwrap();
        let week = WeekStart::from_reference(last_full).unwrap();
        assert_eq!(week.days()[6].weekday(), Weekday::Sun);
    }

    #[test]
    fn labels_for_a_wednesday_reference() {
        let labels = WeekStart::from_reference(d(2024, 6, 5)).unwrap().labels();
        insta::assert_debug_snapshot!(labels, @r###"
        [
            "2024-06-03\nMonday",
            "2024-06-04\nTuesday",
            "2024-06-05\nWednesday",
            "2024-06-06\nThursday",
            "2024-06-07\nFriday",
            "2024-06-08\nSaturday",
            "2024-06-09\nSunday",
        ]
        "###);
    }
}
