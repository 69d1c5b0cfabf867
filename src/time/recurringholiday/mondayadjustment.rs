use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};
use log::trace;

use crate::calendarerror::CalendarError;
use crate::holiday::holidayidentity::HolidayIdentity;
use crate::time::period::Period;
use crate::time::utility::{check_year, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR};

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun
];

static LAW_139_97: LazyLock<MondayAdjustmentRule> = LazyLock::new(MondayAdjustmentRule::law_139_97);
static LABOR_DAY: LazyLock<MondayAdjustmentRule> = LazyLock::new(MondayAdjustmentRule::labor_day);

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum MondayAdjustment {
    Unadjusted,
    /// Monday of the same week.
    PrecedingMonday,
    /// Monday of the following week, never the closer preceding one.
    FollowingWeekMonday,
    NextDay
}

impl MondayAdjustment {
    fn shift_days(&self, weekday: Weekday) -> i32 {
        let from_monday = weekday.num_days_from_monday() as i32;
        match self {
            MondayAdjustment::Unadjusted => 0,
            MondayAdjustment::PrecedingMonday => -from_monday,
            MondayAdjustment::FollowingWeekMonday => 7 - from_monday,
            MondayAdjustment::NextDay => 1
        }
    }
}

/// Array-based relocation rule indexed by `Weekday::num_days_from_monday()`.
///
/// `None` means a holiday falling on that weekday is observed on its own date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MondayAdjustmentRule {
    adjustments: [MondayAdjustment; 7],
    rule: [Option<Period>; 7]
}

impl MondayAdjustmentRule {
    /// Builds the rule from a weekday map. Weekdays absent from the map are unadjusted.
    pub fn new(adjustment_map: &HashMap<Weekday, MondayAdjustment>) -> MondayAdjustmentRule {
        let mut adjustments = [MondayAdjustment::Unadjusted; 7];
        let mut rule: [Option<Period>; 7] = [None; 7];

        for (&weekday, &adj) in adjustment_map {
            if adj == MondayAdjustment::Unadjusted {
                continue;
            }

            let idx = weekday.num_days_from_monday() as usize;
            adjustments[idx] = adj;
            rule[idx] = Some(Period::days(adj.shift_days(weekday)));
        }

        MondayAdjustmentRule { adjustments, rule }
    }

    /// Law 139-97: Tuesday and Wednesday go back to Monday, Thursday and Friday go
    /// forward to the next Monday. Saturday, Sunday and Monday stay.
    pub fn law_139_97() -> MondayAdjustmentRule {
        MondayAdjustmentRule::new(&law_139_97_map())
    }

    /// Labor Day follows Law 139-97 and additionally moves from Sunday to Monday.
    pub fn labor_day() -> MondayAdjustmentRule {
        let mut adjustment_map = law_139_97_map();
        adjustment_map.insert(Weekday::Sun, MondayAdjustment::NextDay);
        MondayAdjustmentRule::new(&adjustment_map)
    }

    /// Shared rule applying to a movable holiday.
    pub fn for_identity(identity: HolidayIdentity) -> &'static MondayAdjustmentRule {
        match identity {
            HolidayIdentity::DiaDelTrabajo => &*LABOR_DAY,
            _ => &*LAW_139_97
        }
    }

    /// Reconstructs the adjustment map, omitting unadjusted weekdays.
    pub fn adjustment_map(&self) -> HashMap<Weekday, MondayAdjustment> {
        WEEK.iter()
            .zip(self.adjustments.iter())
            .filter(|(_, adj)| **adj != MondayAdjustment::Unadjusted)
            .map(|(&weekday, &adj)| (weekday, adj))
            .collect()
    }

    pub fn shift_for(&self, weekday: Weekday) -> Option<Period> {
        self.rule[weekday.num_days_from_monday() as usize]
    }

    /// `None` when the shift runs past the limits of `NaiveDate`.
    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> Option<NaiveDate> {
        match self.shift_for(d.weekday()) {
            Some(period) => period.checked_add_to(d),
            None => Some(d)
        }
    }
}

fn law_139_97_map() -> HashMap<Weekday, MondayAdjustment> {
    HashMap::from([
        (Weekday::Tue, MondayAdjustment::PrecedingMonday),
        (Weekday::Wed, MondayAdjustment::PrecedingMonday),
        (Weekday::Thu, MondayAdjustment::FollowingWeekMonday),
        (Weekday::Fri, MondayAdjustment::FollowingWeekMonday)
    ])
}

/// Date on which a movable holiday is observed.
pub fn resolve_effective_date(identity: HolidayIdentity, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
    let year = check_year(date.year())?;
    let effective_date = MondayAdjustmentRule::for_identity(identity)
        .adjust(date)
        .ok_or(CalendarError::YearOutOfRange {
            year,
            min_year: MIN_SUPPORTED_YEAR,
            max_year: MAX_SUPPORTED_YEAR
        })?;
    if effective_date != date {
        trace!("{:?} relocated from {} to {}", identity, date, effective_date);
    }
    Ok(effective_date)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_law_139_97_by_weekday() {
        let rule = MondayAdjustmentRule::law_139_97();
        // 2024-11-04 is a Monday.
        assert_eq!(rule.adjust(date(2024, 11, 4)), Some(date(2024, 11, 4)));
        assert_eq!(rule.adjust(date(2024, 11, 5)), Some(date(2024, 11, 4)));
        assert_eq!(rule.adjust(date(2024, 11, 6)), Some(date(2024, 11, 4)));
        assert_eq!(rule.adjust(date(2024, 11, 7)), Some(date(2024, 11, 11)));
        assert_eq!(rule.adjust(date(2024, 11, 8)), Some(date(2024, 11, 11)));
        assert_eq!(rule.adjust(date(2024, 11, 9)), Some(date(2024, 11, 9)));
        assert_eq!(rule.adjust(date(2024, 11, 10)), Some(date(2024, 11, 10)));
    }

    #[test]
    fn test_thursday_moves_forward_not_to_nearest_monday() {
        let rule = MondayAdjustmentRule::law_139_97();
        assert_eq!(rule.shift_for(Weekday::Thu), Some(Period::days(4)));
        assert_eq!(rule.shift_for(Weekday::Fri), Some(Period::days(3)));
        assert_eq!(rule.shift_for(Weekday::Tue), Some(Period::days(-1)));
        assert_eq!(rule.shift_for(Weekday::Wed), Some(Period::days(-2)));
        assert_eq!(rule.shift_for(Weekday::Sun), None);
    }

    #[test]
    fn test_labor_day_sunday() {
        assert_eq!(resolve_effective_date(HolidayIdentity::DiaDelTrabajo, date(2022, 5, 1)).unwrap(), date(2022, 5, 2));
        assert_eq!(resolve_effective_date(HolidayIdentity::DiaDeLaConstitucion, date(2022, 11, 6)).unwrap(), date(2022, 11, 6));
        // Wednesday crosses back into April.
        assert_eq!(resolve_effective_date(HolidayIdentity::DiaDelTrabajo, date(2024, 5, 1)).unwrap(), date(2024, 4, 29));
        assert_eq!(resolve_effective_date(HolidayIdentity::DiaDelTrabajo, date(2021, 5, 1)).unwrap(), date(2021, 5, 1));
    }

    #[test]
    fn test_adjustment_map_round_trip() {
        let labor_day = MondayAdjustmentRule::labor_day();
        let map = labor_day.adjustment_map();
        assert_eq!(map.len(), 5);
        assert_eq!(map.get(&Weekday::Sun), Some(&MondayAdjustment::NextDay));
        assert_eq!(map.get(&Weekday::Thu), Some(&MondayAdjustment::FollowingWeekMonday));
        assert_eq!(MondayAdjustmentRule::new(&map), labor_day);
    }

    #[test]
    fn test_unadjusted_entries_are_ignored() {
        let map = HashMap::from([(Weekday::Tue, MondayAdjustment::Unadjusted)]);
        let rule = MondayAdjustmentRule::new(&map);
        assert!(rule.adjustment_map().is_empty());
        assert_eq!(rule.adjust(date(2024, 11, 5)), Some(date(2024, 11, 5)));
    }

    #[test]
    fn test_adjustment_past_last_representable_date() {
        let last = NaiveDate::MAX;
        let rule = MondayAdjustmentRule::new(&HashMap::from([(last.weekday(), MondayAdjustment::NextDay)]));
        assert_eq!(rule.adjust(last), None);

        assert!(matches!(
            resolve_effective_date(HolidayIdentity::DiaDeLaConstitucion, last),
            Err(CalendarError::YearOutOfRange { min_year: 1583, max_year: 9999, .. })
        ));
        assert!(matches!(
            resolve_effective_date(HolidayIdentity::DiaDelTrabajo, date(1582, 5, 1)),
            Err(CalendarError::YearOutOfRange { year: 1582, .. })
        ));
    }
}
