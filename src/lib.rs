pub mod calendarerror;

pub mod configuration;

pub mod holiday {
    pub mod holidayidentity;
    pub mod immovability;
    pub mod holiday;
}

pub mod time {
    pub mod utility;
    pub mod period;
    pub mod rangeofdates;
    pub mod relativeday;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
        pub mod mondayadjustment;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod dominicancalendar;
        pub mod precomputeddominicancalendar;
    }
}
