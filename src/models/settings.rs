use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Which automatic activation mode is in effect.
///
/// Stored as a single discriminant so the time and sunset modes can never
/// both be active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Automation {
    #[default]
    Off,
    Time,
    Sunset,
}

impl Automation {
    pub fn as_str(self) -> &'static str {
        match self {
            Automation::Off => "",
            Automation::Time => "time",
            Automation::Sunset => "sunset",
        }
    }

    /// Unknown discriminants are treated as "no automation".
    pub fn from_discriminant(value: &str) -> Self {
        match value {
            "time" => Automation::Time,
            "sunset" => Automation::Sunset,
            _ => Automation::Off,
        }
    }
}

impl Serialize for Automation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Automation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Automation::from_discriminant(&value))
    }
}

/// Active hours for the time based mode, as `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSettings {
    pub activation: String,
    pub deactivation: String,
}

impl Default for TimeSettings {
    fn default() -> Self {
        Self {
            activation: "18:00".to_string(),
            deactivation: "9:00".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationSettings {
    /// Degrees, -90 to 90. `None` when not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Degrees, -180 to 180. `None` when not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub automation: Automation,
    #[serde(default)]
    pub time: TimeSettings,
    #[serde(default)]
    pub location: LocationSettings,
}

/// A partial update. Every key that is present replaces the matching key of
/// the stored settings; absent keys are left alone.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsPatch {
    pub automation: Option<Automation>,
    pub time: Option<TimeSettings>,
    pub location: Option<LocationSettings>,
}

impl SettingsPatch {
    pub fn automation(automation: Automation) -> Self {
        Self { automation: Some(automation), ..Default::default() }
    }

    pub fn time(activation: String, deactivation: String) -> Self {
        Self { time: Some(TimeSettings { activation, deactivation }), ..Default::default() }
    }

    pub fn location(location: LocationSettings) -> Self {
        Self { location: Some(location), ..Default::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.automation.is_none() && self.time.is_none() && self.location.is_none()
    }
}

impl UserSettings {
    /// Merges a patch key by key.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(automation) = patch.automation {
            self.automation = automation;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
    }
}
