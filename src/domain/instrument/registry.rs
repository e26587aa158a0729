//! InstrumentRegistry - the validated catalog of instruments.

use std::collections::HashSet;

use super::{catalog, ConfigurationError, InstrumentDefinition, InstrumentSpec};
use crate::domain::foundation::{DomainError, ErrorCode, TestType};

/// Immutable set of instrument definitions, in catalog order.
///
/// Every definition is validated when the registry is built, so lookups
/// never observe a malformed instrument.
#[derive(Debug, Clone)]
pub struct InstrumentRegistry {
    instruments: Vec<InstrumentDefinition>,
}

impl InstrumentRegistry {
    /// Loads the built-in catalog.
    pub fn builtin() -> Result<Self, ConfigurationError> {
        Self::from_specs(catalog::builtin_specs()?)
    }

    /// Validates each spec and builds a registry.
    pub fn from_specs(specs: Vec<InstrumentSpec>) -> Result<Self, ConfigurationError> {
        let definitions = specs
            .into_iter()
            .map(InstrumentDefinition::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_definitions(definitions)
    }

    /// Builds a registry from already-validated definitions.
    ///
    /// # Errors
    ///
    /// - `DuplicateInstrument` if two definitions share an id
    pub fn from_definitions(
        definitions: Vec<InstrumentDefinition>,
    ) -> Result<Self, ConfigurationError> {
        let mut seen = HashSet::new();
        for definition in &definitions {
            if !seen.insert(definition.id().clone()) {
                return Err(ConfigurationError::DuplicateInstrument {
                    instrument: definition.id().to_string(),
                });
            }
        }
        Ok(Self {
            instruments: definitions,
        })
    }

    /// Parses a YAML list of instrument specs.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigurationError> {
        let specs: Vec<InstrumentSpec> =
            serde_yaml::from_str(text).map_err(|e| ConfigurationError::Parse(e.to_string()))?;
        Self::from_specs(specs)
    }

    /// Looks up an instrument.
    pub fn get(&self, test_type: &TestType) -> Option<&InstrumentDefinition> {
        self.instruments.iter().find(|i| i.id() == test_type)
    }

    /// Looks up an instrument, failing with `InstrumentNotFound`.
    pub fn require(&self, test_type: &TestType) -> Result<&InstrumentDefinition, DomainError> {
        self.get(test_type).ok_or_else(|| {
            DomainError::new(
                ErrorCode::InstrumentNotFound,
                format!("Unknown instrument: {}", test_type),
            )
            .with_detail("test_type", test_type.as_str())
        })
    }

    pub fn contains(&self, test_type: &TestType) -> bool {
        self.get(test_type).is_some()
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &TestType> {
        self.instruments.iter().map(|i| i.id())
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstrumentDefinition> {
        self.instruments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::instrument::catalog::{DEPRESSION_PHQ9, INDUSTRIOUSNESS};

    const CUSTOM_YAML: &str = r#"
- id: mood-check
  name: Mood check
  scale_min: 0
  scale_max: 4
  items:
    - id: m1
    - id: m2
      reverse: true
  classification:
    strategy: levels
    bands:
      - { upper_bound: 50.0, tag: low, label: Low }
      - { upper_bound: 100.0, tag: high, label: High }
"#;

    #[test]
    fn builtin_registry_loads_seven_instruments() {
        let registry = InstrumentRegistry::builtin().unwrap();
        assert_eq!(registry.len(), 7);
        assert!(registry.contains(&TestType::new(DEPRESSION_PHQ9).unwrap()));
        assert!(registry.contains(&TestType::new(INDUSTRIOUSNESS).unwrap()));
    }

    #[test]
    fn require_reports_unknown_instrument() {
        let registry = InstrumentRegistry::builtin().unwrap();
        let err = registry.require(&TestType::new("nope").unwrap()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InstrumentNotFound);
        assert_eq!(err.details.get("test_type"), Some(&"nope".to_string()));
    }

    #[test]
    fn rejects_duplicate_instrument_ids() {
        let mut specs = catalog::builtin_specs().unwrap();
        specs.push(specs[0].clone());
        assert!(matches!(
            InstrumentRegistry::from_specs(specs),
            Err(ConfigurationError::DuplicateInstrument { .. })
        ));
    }

    #[test]
    fn loads_custom_catalog_from_yaml() {
        let registry = InstrumentRegistry::from_yaml(CUSTOM_YAML).unwrap();
        let def = registry.require(&TestType::new("mood-check").unwrap()).unwrap();
        assert_eq!(def.item_count(), 2);
        assert!(def.items()[1].reverse);
        assert_eq!(def.raw_score_bounds().max(), 8);
    }

    #[test]
    fn yaml_with_non_exhaustive_bands_fails_to_load() {
        let yaml = CUSTOM_YAML.replace("upper_bound: 100.0", "upper_bound: 90.0");
        assert!(matches!(
            InstrumentRegistry::from_yaml(&yaml),
            Err(ConfigurationError::Parse(_))
        ));
    }

    #[test]
    fn yaml_with_inverted_scale_fails_to_load() {
        let yaml = CUSTOM_YAML.replace("scale_max: 4", "scale_max: 0");
        assert!(matches!(
            InstrumentRegistry::from_yaml(&yaml),
            Err(ConfigurationError::InvalidScaleBounds { .. })
        ));
    }

    #[test]
    fn yaml_with_overflowing_scale_fails_to_load() {
        let yaml = CUSTOM_YAML.replace("scale_max: 4", "scale_max: 2147483647");
        assert!(matches!(
            InstrumentRegistry::from_yaml(&yaml),
            Err(ConfigurationError::ScoreOverflow { ref instrument, item_count: 2, .. })
                if instrument == "mood-check"
        ));
    }

    #[test]
    fn ids_preserve_catalog_order() {
        let registry = InstrumentRegistry::builtin().unwrap();
        let ids: Vec<&str> = registry.ids().map(|id| id.as_str()).collect();
        assert_eq!(ids.first(), Some(&"rses"));
        assert_eq!(ids.last(), Some(&"industriousness"));
    }
}
