use std::collections::HashMap;

/// The body-name → description mapping behind the hover tooltip.
///
/// Starts empty ("absent"); the host fetches the JSON document once and
/// pushes the whole parsed map in a single call, so readers only ever see
/// the dataset absent or fully present — never half-loaded. If the fetch
/// fails the dataset simply stays empty and tooltips show bare names.
#[derive(Debug, Default)]
pub struct LabelDataset {
    descriptions: HashMap<String, String>,
}

impl LabelDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dataset from a JSON object of name → description strings.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let descriptions: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { descriptions })
    }

    /// Replace the whole mapping at once.
    pub fn replace(&mut self, other: LabelDataset) {
        self.descriptions = other.descriptions;
    }

    /// Description for a body, or the empty string when the dataset has not
    /// loaded yet or the name is absent.
    pub fn describe(&self, name: &str) -> &str {
        self.descriptions
            .get(name)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_lookup() {
        let json = r#"{
            "Earth": "The only known harbor of life.",
            "Mars": "The red planet."
        }"#;
        let labels = LabelDataset::from_json(json).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.describe("Earth"), "The only known harbor of life.");
    }

    #[test]
    fn missing_name_falls_back_to_empty() {
        let labels = LabelDataset::from_json(r#"{"Earth": "home"}"#).unwrap();
        assert_eq!(labels.describe("Neptune"), "");
    }

    #[test]
    fn unloaded_dataset_is_all_empty() {
        let labels = LabelDataset::new();
        assert!(labels.is_empty());
        assert_eq!(labels.describe("Earth"), "");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(LabelDataset::from_json("not json").is_err());
        // Old contents survive a failed reload attempt.
        let mut labels = LabelDataset::from_json(r#"{"Earth": "home"}"#).unwrap();
        if let Ok(parsed) = LabelDataset::from_json("{{bad") {
            labels.replace(parsed);
        }
        assert_eq!(labels.describe("Earth"), "home");
    }

    #[test]
    fn replace_swaps_whole_mapping() {
        let mut labels = LabelDataset::from_json(r#"{"Earth": "old"}"#).unwrap();
        labels.replace(LabelDataset::from_json(r#"{"Mars": "new"}"#).unwrap());
        assert_eq!(labels.describe("Earth"), "");
        assert_eq!(labels.describe("Mars"), "new");
    }
}
