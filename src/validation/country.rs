//! Country-scoped format checks for phone and passport numbers.
//!
//! These are the two-field constraints: the DTO stores a phone number in
//! national format (no dialing prefix) plus an ISO 3166-1 alpha-2 country
//! code in a sibling field. Validation prepends the country's dialing prefix
//! and checks the concatenation against the country's full-number rule, so
//! the same number can be valid for one country value and invalid after the
//! sibling changes.

use regex::Regex;
use std::sync::LazyLock;

struct CountryFormat {
    /// ISO 3166-1 alpha-2 code.
    code: &'static str,
    /// International dialing prefix including the `+`.
    dialing: &'static str,
    /// Full-number pattern matched against `dialing + national`.
    phone: &'static str,
    /// Passport-number pattern.
    passport: &'static str,
}

// National mobile formats are accepted with or without the leading trunk
// zero, matching how users type them.
const FORMATS: &[CountryFormat] = &[
    CountryFormat {
        code: "KR",
        dialing: "+82",
        phone: r"^\+820?1[016789][0-9]{7,8}$",
        passport: r"^[A-Z][0-9]{8}$",
    },
    CountryFormat {
        code: "JP",
        dialing: "+81",
        phone: r"^\+810?[789]0[0-9]{8}$",
        passport: r"^[A-Z]{2}[0-9]{7}$",
    },
    CountryFormat {
        code: "US",
        dialing: "+1",
        phone: r"^\+1[2-9][0-9]{2}[2-9][0-9]{6}$",
        passport: r"^[0-9]{9}$",
    },
    CountryFormat {
        code: "CA",
        dialing: "+1",
        phone: r"^\+1[2-9][0-9]{2}[2-9][0-9]{6}$",
        passport: r"^[A-Z]{2}[0-9]{6}$",
    },
    CountryFormat {
        code: "GB",
        dialing: "+44",
        phone: r"^\+440?7[0-9]{9}$",
        passport: r"^[0-9]{9}$",
    },
    CountryFormat {
        code: "FR",
        dialing: "+33",
        phone: r"^\+330?[67][0-9]{8}$",
        passport: r"^[0-9]{2}[A-Z]{2}[0-9]{5}$",
    },
    CountryFormat {
        code: "DE",
        dialing: "+49",
        phone: r"^\+490?1[5-7][0-9]{8,9}$",
        passport: r"^[CFGHJKLMNPRTVWXYZ0-9]{9}$",
    },
    CountryFormat {
        code: "ES",
        dialing: "+34",
        phone: r"^\+34[67][0-9]{8}$",
        passport: r"^[A-Z]{3}[0-9]{6}$",
    },
    CountryFormat {
        code: "AU",
        dialing: "+61",
        phone: r"^\+610?4[0-9]{8}$",
        passport: r"^[A-Z][0-9]{7}$",
    },
    CountryFormat {
        code: "TW",
        dialing: "+886",
        phone: r"^\+8860?9[0-9]{8}$",
        passport: r"^[0-9]{9}$",
    },
];

static PHONE_RES: LazyLock<Vec<Regex>> =
    LazyLock::new(|| FORMATS.iter().map(|f| Regex::new(f.phone).unwrap()).collect());

static PASSPORT_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FORMATS
        .iter()
        .map(|f| Regex::new(f.passport).unwrap())
        .collect()
});

fn format_index(country_code: &str) -> Option<usize> {
    FORMATS
        .iter()
        .position(|f| f.code.eq_ignore_ascii_case(country_code))
}

/// Checks a national-format phone number against a country's full-number
/// rule. Unknown countries fail.
pub fn phone_matches_country(country_code: &str, national_number: &str) -> bool {
    let Some(i) = format_index(country_code) else {
        return false;
    };
    let full = format!("{}{}", FORMATS[i].dialing, national_number);
    PHONE_RES[i].is_match(&full)
}

/// Checks a passport number against a country's pattern. Unknown countries
/// fail.
pub fn passport_matches_country(country_code: &str, passport_number: &str) -> bool {
    let Some(i) = format_index(country_code) else {
        return false;
    };
    PASSPORT_RES[i].is_match(passport_number)
}
