use chrono::{
    Datelike,
    Days,
    NaiveDate
};

/// Inclusive range of calendar dates. The bounds are reordered if given backwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(d1: NaiveDate, d2: NaiveDate) -> RangeOfDates {
        if d1 > d2 {
            RangeOfDates {start_date: d2, end_date: d1}
        } else {
            RangeOfDates {start_date: d1, end_date: d2}
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn len(&self) -> usize {
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    /// Calendar years touched by the range, in ascending order.
    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.start_date.year()..=self.end_date.year()
    }

    pub fn iter(&self) -> RangeOfDatesIterator<'_> {
        RangeOfDatesIterator {
            range_of_dates: self,
            index: 0,
        }
    }
}

pub struct RangeOfDatesIterator<'a> {
    range_of_dates: &'a RangeOfDates,
    index: usize,
}

impl<'a> Iterator for RangeOfDatesIterator<'a> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.range_of_dates.len() {
            let d = self.range_of_dates.start_date + Days::new(self.index as u64);
            self.index += 1;
            Some(d)
        } else {
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_is_inclusive_and_ordered() {
        let range = RangeOfDates::new(date(2024, 1, 3), date(2023, 12, 30));
        assert_eq!(range.start_date(), date(2023, 12, 30));
        assert_eq!(range.len(), 5);
        assert!(range.contain(date(2024, 1, 3)));
        assert!(!range.contain(date(2024, 1, 4)));
        assert_eq!(range.years(), 2023..=2024);

        let dates: Vec<NaiveDate> = range.iter().collect();
        assert_eq!(dates.first(), Some(&date(2023, 12, 30)));
        assert_eq!(dates.last(), Some(&date(2024, 1, 3)));
    }
}
