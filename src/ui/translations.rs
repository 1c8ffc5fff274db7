//! Report localization tables.

use crate::errors::{AppError, AppResult};

type Table = &'static [(&'static str, &'static str)];

const PT_BR: Table = &[
    ("Worked", "Trabalhado"),
    ("Balance", "Saldo"),
    ("day", "dia"),
    ("type", "tipo"),
    ("in", "entrada"),
    ("out", "saída"),
    ("worked", "trabalhado"),
    ("balance", "saldo"),
    ("NOR", "NORMAL"),
    ("WE", "FDS"),
    ("HOL", "FERIADO"),
    ("VAC", "FERIAS"),
    ("ABS", "FALTA"),
    ("COM", "COMPENSACAO"),
    ("Z", "OUTRO"),
];

const EN_US: Table = &[];

/// Lookup table for report labels and day-type codes. A key with no entry
/// translates to itself, so the empty `en-us` table is the identity.
#[derive(Debug, Clone, Copy)]
pub struct Translations {
    entries: Table,
}

impl Translations {
    pub fn lookup<'a>(&self, key: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(key, |(_, v)| *v)
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self { entries: EN_US }
    }
}

/// Resolve a language code, case-insensitive and accepting `_` for `-`
/// ("pt-br", "pt-BR", "pt_BR"). An unknown code is a configuration error
/// and fails immediately.
pub fn get_translations(lang: Option<&str>) -> AppResult<Translations> {
    let Some(lang) = lang else {
        return Ok(Translations::default());
    };

    let normalized = lang.to_lowercase().replace('_', "-");
    let entries = match normalized.as_str() {
        "pt-br" => PT_BR,
        "en-us" => EN_US,
        _ => return Err(AppError::UnknownLanguage(normalized)),
    };

    Ok(Translations { entries })
}
