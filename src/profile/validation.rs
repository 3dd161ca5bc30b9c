//! Form validation for onboarding and profile edits.
//!
//! Pure functions with no access to the manager or the store. Callers run
//! them before handing typed data to [`ProfileManager`](super::ProfileManager).

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::model::{BloodGroup, OnboardingData, ProfileUpdate};

pub const AGE_RANGE: RangeInclusive<u32> = 1..=120;
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 20.0..=300.0;
pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 50.0..=250.0;

const NAME_REQUIRED: &str = "Name is required";
const INVALID_AGE: &str = "Enter a valid age";
const INVALID_WEIGHT: &str = "Enter a valid weight";
const INVALID_HEIGHT: &str = "Enter a valid height";
const SELECT_BLOOD_GROUP: &str = "Select blood group";

/// Raw onboarding form input, exactly as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub name: String,
    pub age: String,
    pub weight: String,
    pub height: String,
    pub blood_group: String,
    pub is_veg: bool,
}

/// Raw input of the profile edit dialog (name and diet are not editable there).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileEditForm {
    pub age: String,
    pub weight: String,
    pub height: String,
    pub blood_group: String,
}

/// Field-level validation failures, keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    fn add(&mut self, field: &str, message: &str) {
        self.errors.insert(field.to_string(), message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message for a field, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let described: Vec<String> = self
            .fields()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        write!(f, "invalid profile input: {}", described.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate an onboarding form and produce the data to complete onboarding with.
pub fn validate_onboarding(form: &ProfileForm) -> Result<OnboardingData, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = form.name.trim();
    if name.is_empty() {
        errors.add("name", NAME_REQUIRED);
    }
    let age = check_age(&form.age, &mut errors);
    let weight = check_decimal(&form.weight, WEIGHT_RANGE_KG, "weight", INVALID_WEIGHT, &mut errors);
    let height = check_decimal(&form.height, HEIGHT_RANGE_CM, "height", INVALID_HEIGHT, &mut errors);
    let blood_group = check_blood_group(&form.blood_group, &mut errors);

    match (age, weight, height, blood_group) {
        (Some(age), Some(weight), Some(height), Some(blood_group)) if errors.is_empty() => {
            Ok(OnboardingData {
                name: name.to_string(),
                age,
                weight,
                height,
                blood_group,
                is_veg: form.is_veg,
            })
        }
        _ => Err(errors),
    }
}

/// Validate the profile edit dialog and produce a partial update.
pub fn validate_edit(form: &ProfileEditForm) -> Result<ProfileUpdate, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let age = check_age(&form.age, &mut errors);
    let weight = check_decimal(&form.weight, WEIGHT_RANGE_KG, "weight", INVALID_WEIGHT, &mut errors);
    let height = check_decimal(&form.height, HEIGHT_RANGE_CM, "height", INVALID_HEIGHT, &mut errors);
    let blood_group = check_blood_group(&form.blood_group, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ProfileUpdate {
        age,
        weight,
        height,
        blood_group,
        ..Default::default()
    })
}

fn check_age(raw: &str, errors: &mut ValidationErrors) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(age) if AGE_RANGE.contains(&age) => Some(age),
        _ => {
            errors.add("age", INVALID_AGE);
            None
        }
    }
}

fn check_decimal(
    raw: &str,
    range: RangeInclusive<f64>,
    field: &str,
    message: &str,
    errors: &mut ValidationErrors,
) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && range.contains(&value) => Some(value),
        _ => {
            errors.add(field, message);
            None
        }
    }
}

fn check_blood_group(raw: &str, errors: &mut ValidationErrors) -> Option<BloodGroup> {
    match raw.trim().parse::<BloodGroup>() {
        Ok(group) => Some(group),
        Err(_) => {
            errors.add("bloodGroup", SELECT_BLOOD_GROUP);
            None
        }
    }
}
