use chrono::{Datelike, NaiveDate};

use super::holidayidentity::HolidayIdentity;

/// Whether `year` starts a new constitutional government.
///
/// Approximated as every fourth year, which matches the election cycle since 1996
/// but not the full history.
#[inline]
pub fn is_government_change_year(year: i32) -> bool {
    year % 4 == 0
}

/// Law 139-97 art. 2: holidays that keep their calendar date.
///
/// Restoration Day is immovable only in government-change years.
pub fn is_immovable(identity: HolidayIdentity, date: NaiveDate) -> bool {
    match identity {
        HolidayIdentity::NewYear
        | HolidayIdentity::NuestraSenoraDeLaAltagracia
        | HolidayIdentity::DiaDeLaIndependenciaNacional
        | HolidayIdentity::NuestraSenoraDeLasMercedes
        | HolidayIdentity::ViernesSanto
        | HolidayIdentity::CorpusChristi
        | HolidayIdentity::DiaDeNavidad => true,
        HolidayIdentity::DiaDeLaRestauracion => is_government_change_year(date.year()),
        HolidayIdentity::SantosReyes
        | HolidayIdentity::NatalicioDeJuanPabloDuarte
        | HolidayIdentity::DiaDelTrabajo
        | HolidayIdentity::DiaDeLaConstitucion => false
    }
}
