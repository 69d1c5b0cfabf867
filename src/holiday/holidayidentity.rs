use std::fmt;

use serde::{
    Serialize,
    Deserialize
};

use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;

static NEW_YEAR: FixedDateHoliday = FixedDateHoliday::new(1, 1);
static SANTOS_REYES: FixedDateHoliday = FixedDateHoliday::new(1, 6);
static ALTAGRACIA: FixedDateHoliday = FixedDateHoliday::new(1, 21);
static DUARTE: FixedDateHoliday = FixedDateHoliday::new(1, 26);
static INDEPENDENCIA: FixedDateHoliday = FixedDateHoliday::new(2, 27);
static TRABAJO: FixedDateHoliday = FixedDateHoliday::new(5, 1);
static VIERNES_SANTO: EasterRelatedHoliday = EasterRelatedHoliday::new(-2);
static CORPUS_CHRISTI: EasterRelatedHoliday = EasterRelatedHoliday::new(60);
static RESTAURACION: FixedDateHoliday = FixedDateHoliday::new(8, 16);
static MERCEDES: FixedDateHoliday = FixedDateHoliday::new(9, 24);
static CONSTITUCION: FixedDateHoliday = FixedDateHoliday::new(11, 6);
static NAVIDAD: FixedDateHoliday = FixedDateHoliday::new(12, 25);

/// The public holidays of the Dominican Republic, in catalog order.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum HolidayIdentity {
    NewYear,
    SantosReyes,
    NuestraSenoraDeLaAltagracia,
    NatalicioDeJuanPabloDuarte,
    DiaDeLaIndependenciaNacional,
    DiaDelTrabajo,
    ViernesSanto,
    CorpusChristi,
    DiaDeLaRestauracion,
    NuestraSenoraDeLasMercedes,
    DiaDeLaConstitucion,
    DiaDeNavidad
}

impl HolidayIdentity {
    pub const COUNT: usize = 12;

    pub const ALL: [HolidayIdentity; HolidayIdentity::COUNT] = [
        HolidayIdentity::NewYear,
        HolidayIdentity::SantosReyes,
        HolidayIdentity::NuestraSenoraDeLaAltagracia,
        HolidayIdentity::NatalicioDeJuanPabloDuarte,
        HolidayIdentity::DiaDeLaIndependenciaNacional,
        HolidayIdentity::DiaDelTrabajo,
        HolidayIdentity::ViernesSanto,
        HolidayIdentity::CorpusChristi,
        HolidayIdentity::DiaDeLaRestauracion,
        HolidayIdentity::NuestraSenoraDeLasMercedes,
        HolidayIdentity::DiaDeLaConstitucion,
        HolidayIdentity::DiaDeNavidad
    ];

    /// Spanish display name.
    pub fn description(&self) -> &'static str {
        match self {
            HolidayIdentity::NewYear                      => "Año Nuevo",
            HolidayIdentity::SantosReyes                  => "Santos Reyes",
            HolidayIdentity::NuestraSenoraDeLaAltagracia  => "Nuestra Señora de la Altagracia",
            HolidayIdentity::NatalicioDeJuanPabloDuarte   => "Natalicio de Juan Pablo Duarte",
            HolidayIdentity::DiaDeLaIndependenciaNacional => "Día de la Independencia Nacional",
            HolidayIdentity::DiaDelTrabajo                => "Día del Trabajo",
            HolidayIdentity::ViernesSanto                 => "Viernes Santo",
            HolidayIdentity::CorpusChristi                => "Corpus Christi",
            HolidayIdentity::DiaDeLaRestauracion          => "Día de la Restauración",
            HolidayIdentity::NuestraSenoraDeLasMercedes   => "Nuestra Señora de las Mercedes",
            HolidayIdentity::DiaDeLaConstitucion          => "Día de la Constitución",
            HolidayIdentity::DiaDeNavidad                 => "Día de Navidad"
        }
    }

    /// Rule giving the nominal (unrelocated) date of this holiday.
    pub fn recurrence(&self) -> &'static dyn RecurringHoliday {
        match self {
            HolidayIdentity::NewYear                      => &NEW_YEAR,
            HolidayIdentity::SantosReyes                  => &SANTOS_REYES,
            HolidayIdentity::NuestraSenoraDeLaAltagracia  => &ALTAGRACIA,
            HolidayIdentity::NatalicioDeJuanPabloDuarte   => &DUARTE,
            HolidayIdentity::DiaDeLaIndependenciaNacional => &INDEPENDENCIA,
            HolidayIdentity::DiaDelTrabajo                => &TRABAJO,
            HolidayIdentity::ViernesSanto                 => &VIERNES_SANTO,
            HolidayIdentity::CorpusChristi                => &CORPUS_CHRISTI,
            HolidayIdentity::DiaDeLaRestauracion          => &RESTAURACION,
            HolidayIdentity::NuestraSenoraDeLasMercedes   => &MERCEDES,
            HolidayIdentity::DiaDeLaConstitucion          => &CONSTITUCION,
            HolidayIdentity::DiaDeNavidad                 => &NAVIDAD
        }
    }
}

impl fmt::Display for HolidayIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
