use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound accepted for a life expectancy figure, in years.
pub const MAX_LIFE_EXPECTANCY_YEARS: f64 = 100.0;

/// Gender category, only used to pick a default life expectancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Reasons a profile is refused at the input boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("life expectancy must be greater than zero (got {0})")]
    NonPositiveLifeExpectancy(f64),
    #[error("life expectancy of {0} years is above the 100 year limit")]
    LifeExpectancyTooLarge(f64),
    #[error("life expectancy is not a number")]
    NonFiniteLifeExpectancy,
    #[error("could not parse birth date '{0}'")]
    UnparseableBirthDate(String),
    #[error("country must not be empty")]
    EmptyCountry,
}

/// The single input record handed to the calendar once per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub birth_date: NaiveDate,
    /// Expected lifespan in years; may be fractional.
    pub life_expectancy: f64,
    pub gender: Gender,
    pub country: String,
}

impl UserProfile {
    pub fn new(
        birth_date: NaiveDate,
        life_expectancy: f64,
        gender: Gender,
        country: impl Into<String>,
    ) -> Self {
        Self {
            birth_date,
            life_expectancy,
            gender,
            country: country.into(),
        }
    }

    /// Check the profile against the input boundary rules.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let years = self.life_expectancy;
        if !years.is_finite() {
            return Err(ProfileError::NonFiniteLifeExpectancy);
        }
        if years <= 0.0 {
            return Err(ProfileError::NonPositiveLifeExpectancy(years));
        }
        if years > MAX_LIFE_EXPECTANCY_YEARS {
            return Err(ProfileError::LifeExpectancyTooLarge(years));
        }
        if self.country.trim().is_empty() {
            return Err(ProfileError::EmptyCountry);
        }
        Ok(())
    }

    /// Consume the profile, returning it only if it passes validation.
    pub fn validated(self) -> Result<Self, ProfileError> {
        self.validate()?;
        Ok(self)
    }
}

/// Parse a birth date typed by hand. ISO first, then common day-first layouts.
pub fn parse_birth_date(s: &str) -> Result<NaiveDate, ProfileError> {
    let trimmed = s.trim();
    for fmt in &["%Y-%m-%d", "%d/%m/%Y", "%d.%m.%Y", "%d-%m-%Y", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Ok(d);
        }
    }
    Err(ProfileError::UnparseableBirthDate(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(years: f64) -> UserProfile {
        UserProfile::new(
            NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            years,
            Gender::Female,
            "Japan",
        )
    }

    #[test]
    fn accepts_fractional_life_expectancy() {
        assert_eq!(profile(87.7).validate(), Ok(()));
        assert_eq!(profile(100.0).validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_life_expectancy() {
        assert_eq!(
            profile(0.0).validate(),
            Err(ProfileError::NonPositiveLifeExpectancy(0.0))
        );
        assert_eq!(
            profile(-3.0).validate(),
            Err(ProfileError::NonPositiveLifeExpectancy(-3.0))
        );
        assert_eq!(
            profile(120.0).validate(),
            Err(ProfileError::LifeExpectancyTooLarge(120.0))
        );
        assert_eq!(
            profile(f64::NAN).validate(),
            Err(ProfileError::NonFiniteLifeExpectancy)
        );
    }

    #[test]
    fn rejects_blank_country() {
        let mut p = profile(80.0);
        p.country = "   ".into();
        assert_eq!(p.validated(), Err(ProfileError::EmptyCountry));
    }

    #[test]
    fn parses_common_date_layouts() {
        let expected = NaiveDate::from_ymd_opt(2000, 1, 31).unwrap();
        assert_eq!(parse_birth_date("2000-01-31"), Ok(expected));
        assert_eq!(parse_birth_date(" 31/01/2000 "), Ok(expected));
        assert_eq!(parse_birth_date("31.01.2000"), Ok(expected));
        assert!(matches!(
            parse_birth_date("yesterday"),
            Err(ProfileError::UnparseableBirthDate(_))
        ));
    }

    #[test]
    fn serializes_as_camel_case_with_iso_date() {
        let json = serde_json::to_value(profile(80.0)).unwrap();
        assert_eq!(json["birthDate"], "1990-06-15");
        assert_eq!(json["lifeExpectancy"], 80.0);
        assert_eq!(json["gender"], "female");
        assert_eq!(json["country"], "Japan");
    }
}
