//! User profile data models.

use serde::{Deserialize, Serialize};

/// The eight accepted ABO/Rh blood group codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    /// All codes, in the order forms list them.
    pub const ALL: [BloodGroup; 8] = [
        Self::APositive,
        Self::ANegative,
        Self::BPositive,
        Self::BNegative,
        Self::AbPositive,
        Self::AbNegative,
        Self::OPositive,
        Self::ONegative,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
        }
    }
}

impl std::fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for BloodGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.code() == s)
            .ok_or_else(|| format!("unknown blood group: {s}"))
    }
}

/// Serde adapter storing an unset blood group as `""`.
mod blood_group_field {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::BloodGroup;

    pub fn serialize<S: Serializer>(
        value: &Option<BloodGroup>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.map(|g| g.code()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<BloodGroup>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(serde::de::Error::custom)
    }
}

/// Self-reported health attributes of one person.
///
/// Serialized as the durable profile record, e.g.
/// `{"name":"Ana","age":30,"weight":65.0,"height":170.0,"bloodGroup":"O+","isVeg":true,"onboardingComplete":true}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    /// Years.
    pub age: u32,
    /// Kilograms.
    pub weight: f64,
    /// Centimeters.
    pub height: f64,
    #[serde(with = "blood_group_field")]
    pub blood_group: Option<BloodGroup>,
    pub is_veg: bool,
    pub onboarding_complete: bool,
}

impl UserProfile {
    /// Body-mass index derived from weight and height (0 when unknown).
    pub fn bmi(&self) -> f64 {
        crate::health::calculate_bmi(self.weight, self.height)
    }

    /// Name to greet the user with, falling back to a generic label.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { "User" } else { &self.name }
    }
}

/// A partial profile. Fields left as `None` keep their current value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<BloodGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_veg: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onboarding_complete: Option<bool>,
}

impl ProfileUpdate {
    pub fn weight(weight: f64) -> Self {
        Self {
            weight: Some(weight),
            ..Default::default()
        }
    }

    pub fn is_veg(is_veg: bool) -> Self {
        Self {
            is_veg: Some(is_veg),
            ..Default::default()
        }
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the provided fields into `profile`.
    pub fn apply_to(self, profile: &mut UserProfile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(age) = self.age {
            profile.age = age;
        }
        if let Some(weight) = self.weight {
            profile.weight = weight;
        }
        if let Some(height) = self.height {
            profile.height = height;
        }
        if let Some(group) = self.blood_group {
            profile.blood_group = Some(group);
        }
        if let Some(is_veg) = self.is_veg {
            profile.is_veg = is_veg;
        }
        if let Some(done) = self.onboarding_complete {
            profile.onboarding_complete = done;
        }
    }
}

/// Everything onboarding collects: a full profile minus the completion flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingData {
    pub name: String,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub blood_group: BloodGroup,
    pub is_veg: bool,
}

impl OnboardingData {
    /// The completed profile this data produces.
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            name: self.name,
            age: self.age,
            weight: self.weight,
            height: self.height,
            blood_group: Some(self.blood_group),
            is_veg: self.is_veg,
            onboarding_complete: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> OnboardingData {
        OnboardingData {
            name: "Ana".to_string(),
            age: 30,
            weight: 65.0,
            height: 170.0,
            blood_group: BloodGroup::OPositive,
            is_veg: true,
        }
    }

    #[test]
    fn default_profile_is_zero_valued() {
        let p = UserProfile::default();
        assert!(p.name.is_empty());
        assert_eq!(p.age, 0);
        assert_eq!(p.weight, 0.0);
        assert_eq!(p.height, 0.0);
        assert!(p.blood_group.is_none());
        assert!(!p.is_veg);
        assert!(!p.onboarding_complete);
    }

    #[test]
    fn record_uses_camel_case_keys() {
        let profile = ana().into_profile();
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["name"], "Ana");
        assert_eq!(value["age"], 30);
        assert_eq!(value["weight"], 65.0);
        assert_eq!(value["height"], 170.0);
        assert_eq!(value["bloodGroup"], "O+");
        assert_eq!(value["isVeg"], true);
        assert_eq!(value["onboardingComplete"], true);
    }

    #[test]
    fn default_record_has_empty_blood_group() {
        let value = serde_json::to_value(UserProfile::default()).unwrap();
        assert_eq!(value["bloodGroup"], "");

        let parsed: UserProfile = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, UserProfile::default());
    }

    #[test]
    fn unknown_blood_group_fails_to_parse() {
        let raw = r#"{"name":"X","age":1,"weight":50,"height":150,"bloodGroup":"C+","isVeg":false,"onboardingComplete":true}"#;
        assert!(serde_json::from_str::<UserProfile>(raw).is_err());
    }

    #[test]
    fn integer_numbers_parse_as_decimals() {
        let raw = r#"{"name":"X","age":40,"weight":80,"height":180,"bloodGroup":"AB-","isVeg":false,"onboardingComplete":true}"#;
        let p: UserProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(p.weight, 80.0);
        assert_eq!(p.blood_group, Some(BloodGroup::AbNegative));
    }

    #[test]
    fn blood_group_codes_roundtrip_through_from_str() {
        for group in BloodGroup::ALL {
            assert_eq!(group.code().parse::<BloodGroup>().unwrap(), group);
            assert_eq!(
                serde_json::to_string(&group).unwrap(),
                format!("\"{}\"", group.code())
            );
        }
        assert!("".parse::<BloodGroup>().is_err());
        assert!("o+".parse::<BloodGroup>().is_err());
    }

    #[test]
    fn update_touches_only_provided_fields() {
        let mut profile = ana().into_profile();
        ProfileUpdate::weight(64.0).apply_to(&mut profile);

        let mut expected = ana().into_profile();
        expected.weight = 64.0;
        assert_eq!(profile, expected);
    }

    #[test]
    fn update_deserializes_from_partial_json() {
        let update: ProfileUpdate = serde_json::from_str(r#"{"weight":64,"isVeg":false}"#).unwrap();
        assert_eq!(update.weight, Some(64.0));
        assert_eq!(update.is_veg, Some(false));
        assert!(update.name.is_none());
        assert!(update.onboarding_complete.is_none());
        assert!(!update.is_empty());
        assert!(ProfileUpdate::default().is_empty());
    }

    #[test]
    fn onboarding_data_sets_completion_flag() {
        let profile = ana().into_profile();
        assert!(profile.onboarding_complete);
        assert_eq!(profile.blood_group, Some(BloodGroup::OPositive));
    }

    #[test]
    fn display_name_falls_back() {
        assert_eq!(UserProfile::default().display_name(), "User");
        assert_eq!(ana().into_profile().display_name(), "Ana");
    }
}
