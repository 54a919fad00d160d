//! Tea records: the immutable input of a calculation.
//!
//! Every field is optional. Scorers substitute neutral defaults for missing
//! data, so a completely empty record is valid input.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeaRecord {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub tea_type: Option<String>,
    pub sub_type: Option<String>,
    /// Free-text origin, carried for renderers.
    pub origin: Option<String>,
    pub processing: Option<ProcessingInfo>,
    pub flavors: Vec<FlavorNote>,
    pub geography: Option<Geography>,
    pub age_years: Option<f64>,
    pub compounds: Option<CompoundLevels>,
}

impl TeaRecord {
    pub fn of_type(tea_type: impl Into<String>) -> Self {
        Self {
            tea_type: Some(tea_type.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.sub_type = Some(sub_type.into());
        self
    }

    pub fn with_flavor(mut self, note: impl Into<FlavorNote>) -> Self {
        self.flavors.push(note.into());
        self
    }

    pub fn with_processing(mut self, processing: ProcessingInfo) -> Self {
        self.processing = Some(processing);
        self
    }

    pub fn with_geography(mut self, geography: Geography) -> Self {
        self.geography = Some(geography);
        self
    }

    pub fn with_age(mut self, years: f64) -> Self {
        self.age_years = Some(years);
        self
    }

    /// Read a record from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        toml::from_str(&contents).map_err(|e| Error::parse(path.display().to_string(), e))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingInfo {
    /// Oxidation percentage, 0-100.
    pub oxidation: Option<f64>,
    /// Roast or firing descriptor, e.g. "light", "charcoal".
    pub roast: Option<String>,
    /// Other method tags, e.g. "steamed", "sun-dried".
    pub methods: Vec<String>,
}

impl ProcessingInfo {
    pub fn with_oxidation(mut self, oxidation: f64) -> Self {
        self.oxidation = Some(oxidation);
        self
    }

    pub fn with_roast(mut self, roast: impl Into<String>) -> Self {
        self.roast = Some(roast.into());
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.methods.push(method.into());
        self
    }
}

/// A flavor tag with optional perceived intensity on a 0-10 scale.
///
/// Deserializes from either a bare string (`"floral"`) or a table
/// (`{ tag = "floral", intensity = 7 }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FlavorNoteRepr")]
pub struct FlavorNote {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
}

impl FlavorNote {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            intensity: None,
        }
    }

    pub fn with_intensity(mut self, intensity: f64) -> Self {
        self.intensity = Some(intensity);
        self
    }
}

impl From<&str> for FlavorNote {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlavorNoteRepr {
    Tag(String),
    Detailed {
        tag: String,
        #[serde(default)]
        intensity: Option<f64>,
    },
}

impl From<FlavorNoteRepr> for FlavorNote {
    fn from(repr: FlavorNoteRepr) -> Self {
        match repr {
            FlavorNoteRepr::Tag(tag) => Self::new(tag),
            FlavorNoteRepr::Detailed { tag, intensity } => Self { tag, intensity },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geography {
    /// Metres above sea level.
    pub altitude: Option<f64>,
    /// Degrees; the sign (hemisphere) is ignored during derivation.
    pub latitude: Option<f64>,
    /// Relative humidity percentage.
    pub humidity: Option<f64>,
    pub soil: Option<String>,
    pub climate: Option<String>,
}

impl Geography {
    pub fn is_empty(&self) -> bool {
        self.altitude.is_none()
            && self.latitude.is_none()
            && self.humidity.is_none()
            && self.soil.is_none()
            && self.climate.is_none()
    }
}

/// Measured compound levels (mg per cup). Carried through for renderers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompoundLevels {
    pub caffeine: Option<f64>,
    pub l_theanine: Option<f64>,
    pub catechins: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn deserializes_partial_record_from_toml() {
        let tea: TeaRecord = toml::from_str(indoc! {r#"
            name = "Dong Ding"
            type = "Oolong"
            flavors = ["roasted", { tag = "honey", intensity = 7 }]

            [processing]
            oxidation = 35
            roast = "medium"
        "#})
        .unwrap();

        assert_eq!(tea.tea_type.as_deref(), Some("Oolong"));
        assert_eq!(tea.flavors.len(), 2);
        assert_eq!(tea.flavors[0], FlavorNote::new("roasted"));
        assert_eq!(tea.flavors[1].intensity, Some(7.0));
        assert_eq!(tea.processing.as_ref().unwrap().oxidation, Some(35.0));
        assert!(tea.geography.is_none());
    }

    #[test]
    fn reads_record_from_file() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "type = \"white\"\nage_years = 6\n").unwrap();
        let tea = TeaRecord::from_path(temp.path()).unwrap();
        assert_eq!(tea.tea_type.as_deref(), Some("white"));
        assert_eq!(tea.age_years, Some(6.0));
    }

    #[test]
    fn unreadable_record_is_an_io_error() {
        let err = TeaRecord::from_path(Path::new("/nonexistent/tea.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn empty_document_is_an_empty_record() {
        let tea: TeaRecord = toml::from_str("").unwrap();
        assert_eq!(tea, TeaRecord::default());
    }

    #[test]
    fn geography_is_empty_only_without_any_field() {
        assert!(Geography::default().is_empty());
        let geography = Geography {
            soil: Some("clay".into()),
            ..Geography::default()
        };
        assert!(!geography.is_empty());
    }
}
