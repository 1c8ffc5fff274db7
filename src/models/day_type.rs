use std::fmt;

/// Category of a calendar day, governing which balance rule applies and
/// whether check times may be present.
///
/// `Unknown` keeps an unrecognized code verbatim: loading a ledger never
/// fails on a bad type, `DayRecord::validate` reports it instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayType {
    /// Normal working day ("NOR").
    Normal,
    /// Weekend ("WE").
    Weekend,
    /// Public holiday ("HOL").
    Holiday,
    /// Vacation ("VAC").
    Vacation,
    /// Absence ("ABS").
    Absence,
    /// Day off due to compensation ("COM").
    Compensation,
    /// Other ("Z").
    Other,
    /// Unrecognized code, kept as written in the ledger.
    Unknown(String),
}

impl DayType {
    /// Parse a ledger code, keeping unrecognized codes as `Unknown`.
    pub fn from_code(code: &str) -> Self {
        Self::known_from_code(code).unwrap_or_else(|| DayType::Unknown(code.to_string()))
    }

    /// Strict variant used where a bad code must be rejected (direct entry).
    pub fn known_from_code(code: &str) -> Option<Self> {
        match code {
            "NOR" => Some(DayType::Normal),
            "WE" => Some(DayType::Weekend),
            "HOL" => Some(DayType::Holiday),
            "VAC" => Some(DayType::Vacation),
            "ABS" => Some(DayType::Absence),
            "COM" => Some(DayType::Compensation),
            "Z" => Some(DayType::Other),
            _ => None,
        }
    }

    /// Ledger code as written in CSV files.
    pub fn code(&self) -> &str {
        match self {
            DayType::Normal => "NOR",
            DayType::Weekend => "WE",
            DayType::Holiday => "HOL",
            DayType::Vacation => "VAC",
            DayType::Absence => "ABS",
            DayType::Compensation => "COM",
            DayType::Other => "Z",
            DayType::Unknown(code) => code,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, DayType::Unknown(_))
    }

    /// Types which must not carry checkin/checkout times.
    pub fn forbids_check_times(&self) -> bool {
        matches!(self, DayType::Vacation | DayType::Other | DayType::Absence)
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
