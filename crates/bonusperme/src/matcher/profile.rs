use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ProfileConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Sposato,
    Convivente,
    Separato,
    Divorziato,
    Vedovo,
    #[default]
    #[serde(other)]
    Altro,
}

impl FromStr for MaritalStatus {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value.trim().to_ascii_lowercase().as_str() {
            "single" => Self::Single,
            "sposato" | "sposata" => Self::Sposato,
            "convivente" => Self::Convivente,
            "separato" | "separata" => Self::Separato,
            "divorziato" | "divorziata" => Self::Divorziato,
            "vedovo" | "vedova" => Self::Vedovo,
            _ => Self::Altro,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Employment {
    Dipendente,
    Autonomo,
    Disoccupato,
    Inoccupato,
    Pensionato,
    Studente,
    #[default]
    #[serde(other)]
    Altro,
}

impl Employment {
    pub fn is_jobless(self) -> bool {
        matches!(self, Employment::Disoccupato | Employment::Inoccupato)
    }
}

impl FromStr for Employment {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value.trim().to_ascii_lowercase().as_str() {
            "dipendente" => Self::Dipendente,
            "autonomo" => Self::Autonomo,
            "disoccupato" => Self::Disoccupato,
            "inoccupato" => Self::Inoccupato,
            "pensionato" => Self::Pensionato,
            "studente" => Self::Studente,
            _ => Self::Altro,
        })
    }
}

/// Questionnaire answers for one household. `isee == 0.0` means the value was not provided.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(rename = "eta")]
    pub age: u32,
    #[serde(rename = "residenza")]
    pub region: String,
    #[serde(rename = "comune")]
    pub municipality: String,
    #[serde(rename = "stato_civile")]
    pub marital_status: MaritalStatus,
    #[serde(rename = "occupazione")]
    pub employment: Employment,
    #[serde(rename = "numero_figli")]
    pub children: u32,
    #[serde(rename = "figli_minorenni")]
    pub minor_children: u32,
    #[serde(rename = "figli_under3")]
    pub children_under_3: u32,
    #[serde(rename = "disabilita")]
    pub disability: bool,
    #[serde(rename = "over65")]
    pub over_65: u32,
    pub isee: f64,
    #[serde(rename = "reddito_annuo")]
    pub annual_income: f64,
    #[serde(rename = "affittuario")]
    pub renter: bool,
    #[serde(rename = "prima_abitazione")]
    pub first_home: bool,
    #[serde(rename = "ristrutturaz_casa")]
    pub renovating: bool,
    #[serde(rename = "studente")]
    pub student: bool,
    #[serde(rename = "nuovo_nato_2025")]
    pub newborn_2025: bool,
    #[serde(rename = "isee_simulato", skip_serializing_if = "Option::is_none")]
    pub simulated_isee: Option<f64>,
}

impl UserProfile {
    pub(crate) fn has_isee(&self) -> bool {
        self.isee > 0.0
    }

    pub(crate) fn isee_within(&self, ceiling: f64) -> bool {
        self.has_isee() && self.isee <= ceiling
    }

    /// Same household, evaluated as if it declared `isee`.
    pub fn with_isee(&self, isee: f64) -> Self {
        Self {
            isee,
            ..self.clone()
        }
    }
}

/// Validation errors raised before a profile reaches the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileViolation {
    #[error("eta non valida (ammessa {min}-{max}, ricevuta {found})")]
    AgeOutOfRange { min: u32, max: u32, found: u32 },
    #[error("{field} non valido (ammesso 0-{max})")]
    AmountOutOfRange { field: &'static str, max: f64 },
    #[error("{field} non valido (ammesso 0-{max}, ricevuto {found})")]
    CountOutOfRange {
        field: &'static str,
        max: u32,
        found: u32,
    },
}

/// Accepted input ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileLimits {
    pub min_age: u32,
    pub max_age: u32,
    pub max_isee: f64,
    pub max_income: f64,
    pub max_children: u32,
    pub max_over_65: u32,
}

impl Default for ProfileLimits {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_age: 120,
            max_isee: 500_000.0,
            max_income: 1_000_000.0,
            max_children: 20,
            max_over_65: 10,
        }
    }
}

impl From<&ProfileConfig> for ProfileLimits {
    fn from(config: &ProfileConfig) -> Self {
        Self {
            min_age: config.min_age,
            ..Self::default()
        }
    }
}

/// Guard responsible for admitting questionnaire submissions into the engine.
#[derive(Debug, Clone, Default)]
pub struct ProfileGuard {
    limits: ProfileLimits,
}

impl ProfileGuard {
    pub fn with_limits(limits: ProfileLimits) -> Self {
        Self { limits }
    }

    pub fn from_config(config: &ProfileConfig) -> Self {
        Self::with_limits(ProfileLimits::from(config))
    }

    pub fn limits(&self) -> &ProfileLimits {
        &self.limits
    }

    /// Reject out-of-range submissions; the first violation wins.
    pub fn admit(&self, mut profile: UserProfile) -> Result<UserProfile, ProfileViolation> {
        let limits = &self.limits;

        if profile.age < limits.min_age || profile.age > limits.max_age {
            return Err(ProfileViolation::AgeOutOfRange {
                min: limits.min_age,
                max: limits.max_age,
                found: profile.age,
            });
        }

        check_amount("isee", profile.isee, limits.max_isee)?;
        check_amount("reddito annuo", profile.annual_income, limits.max_income)?;
        check_count("numero figli", profile.children, limits.max_children)?;
        check_count("figli minorenni", profile.minor_children, limits.max_children)?;
        check_count("figli under 3", profile.children_under_3, limits.max_children)?;
        check_count("over 65", profile.over_65, limits.max_over_65)?;

        if let Some(simulated) = profile.simulated_isee {
            check_amount("isee simulato", simulated, limits.max_isee)?;
        }

        profile.region = profile.region.trim().to_string();
        profile.municipality = profile.municipality.trim().to_string();
        Ok(profile)
    }
}

fn check_amount(field: &'static str, value: f64, max: f64) -> Result<(), ProfileViolation> {
    if value.is_finite() && (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(ProfileViolation::AmountOutOfRange { field, max })
    }
}

fn check_count(field: &'static str, value: u32, max: u32) -> Result<(), ProfileViolation> {
    if value <= max {
        Ok(())
    } else {
        Err(ProfileViolation::CountOutOfRange {
            field,
            max,
            found: value,
        })
    }
}
