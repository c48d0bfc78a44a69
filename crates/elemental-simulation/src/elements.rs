//! Element definitions and catalog

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Built-in element IDs
pub struct ElementId;

impl ElementId {
    pub const HYDROGEN: u8 = 0;
    pub const CARBON: u8 = 1;
    pub const IRON: u8 = 2;
    pub const HELIUM: u8 = 3;
    pub const OXYGEN: u8 = 4;
    pub const LIQUID_NITROGEN: u8 = 5;
}

/// How an element moves through the level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionStyle {
    /// Runs and jumps (most elements)
    Walking,
    /// Gravity pulls upward; the jump curve still applies
    Rising,
    /// Up/down input steers vertical velocity directly, no jump curve
    Hovering,
}

/// Definition of a playable element's movement stats and hazard behavior
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElementDef {
    pub id: u8,
    pub name: String,

    /// Horizontal speed multiplier applied to digital movement input
    pub speed: f32,
    /// Jump-power multiplier fed into the ascent curve
    pub jump: f32,

    /// Level index past which this element unlocks automatically
    pub unlock_level: u32,
    pub unlocked: bool,

    // Hazard interaction flags; any combination is valid
    /// Destroyed by fire
    pub flammable: bool,
    /// Destroyed by heat
    pub gaseous: bool,
    /// Survives water
    pub buoyant: bool,
    /// Neutralizes fire, immune to ice and water
    pub cryogenic: bool,

    pub motion: MotionStyle,
}

impl Default for ElementDef {
    fn default() -> Self {
        Self {
            id: 0,
            name: "unknown".to_string(),
            speed: 1.0,
            jump: 1.0,
            unlock_level: 0,
            unlocked: false,
            flammable: false,
            gaseous: false,
            buoyant: false,
            cryogenic: false,
            motion: MotionStyle::Walking,
        }
    }
}

/// Errors surfaced while loading or validating an element catalog.
///
/// These are fatal at load time; the simulation never starts with a
/// malformed catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("element catalog is empty")]
    Empty,
    #[error("element ids must run contiguously from 0, found id {found} at position {position}")]
    NonContiguousIds { position: usize, found: u8 },
    #[error("element {0} has a blank name")]
    BlankName(u8),
    #[error("element {id} ({name}) has non-positive speed {speed}")]
    NonPositiveSpeed { id: u8, name: String, speed: f32 },
    #[error("element {id} ({name}) has non-positive jump power {jump}")]
    NonPositiveJump { id: u8, name: String, jump: f32 },
    #[error("the base element must start unlocked")]
    LockedBaseElement,
    #[error("malformed element catalog: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Ordered registry of all playable elements
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElementCatalog {
    elements: Vec<ElementDef>,
}

impl ElementCatalog {
    /// Catalog with the built-in element roster
    pub fn new() -> Self {
        let mut catalog = Self {
            elements: Vec::new(),
        };
        catalog.register_defaults();
        catalog
    }

    /// Parse a catalog from RON and validate it
    pub fn from_ron_str(source: &str) -> Result<Self, CatalogError> {
        let elements: Vec<ElementDef> = ron::from_str(source)?;
        let catalog = Self { elements };
        catalog.validate()?;
        Ok(catalog)
    }

    fn register_defaults(&mut self) {
        // The base form; burns, but always available
        self.register(ElementDef {
            id: ElementId::HYDROGEN,
            name: "Hydrogen".to_string(),
            speed: 1.0,
            jump: 1.0,
            unlock_level: 0,
            unlocked: true,
            flammable: true,
            ..Default::default()
        });

        // Floats on water, burns
        self.register(ElementDef {
            id: ElementId::CARBON,
            name: "Carbon".to_string(),
            speed: 0.9,
            jump: 0.8,
            unlock_level: 1,
            flammable: true,
            buoyant: true,
            ..Default::default()
        });

        // Heavy and slow, shrugs off fire and heat
        self.register(ElementDef {
            id: ElementId::IRON,
            name: "Iron".to_string(),
            speed: 0.7,
            jump: 0.6,
            unlock_level: 2,
            ..Default::default()
        });

        // Lighter than air
        self.register(ElementDef {
            id: ElementId::HELIUM,
            name: "Helium".to_string(),
            speed: 1.1,
            jump: 1.2,
            unlock_level: 3,
            gaseous: true,
            motion: MotionStyle::Rising,
            ..Default::default()
        });

        // Free vertical movement instead of jumping
        self.register(ElementDef {
            id: ElementId::OXYGEN,
            name: "Oxygen".to_string(),
            speed: 1.0,
            jump: 1.0,
            unlock_level: 4,
            flammable: true,
            gaseous: true,
            motion: MotionStyle::Hovering,
            ..Default::default()
        });

        // Puts out fire, walks over ice and water
        self.register(ElementDef {
            id: ElementId::LIQUID_NITROGEN,
            name: "Liquid Nitrogen".to_string(),
            speed: 0.8,
            jump: 0.9,
            unlock_level: 5,
            cryogenic: true,
            ..Default::default()
        });
    }

    fn register(&mut self, element: ElementDef) {
        debug_assert_eq!(element.id as usize, self.elements.len());
        self.elements.push(element);
    }

    /// Check the catalog invariants the simulation relies on
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.elements.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (position, element) in self.elements.iter().enumerate() {
            if element.id as usize != position {
                return Err(CatalogError::NonContiguousIds {
                    position,
                    found: element.id,
                });
            }
            if element.name.trim().is_empty() {
                return Err(CatalogError::BlankName(element.id));
            }
            if element.speed <= 0.0 {
                return Err(CatalogError::NonPositiveSpeed {
                    id: element.id,
                    name: element.name.clone(),
                    speed: element.speed,
                });
            }
            if element.jump <= 0.0 {
                return Err(CatalogError::NonPositiveJump {
                    id: element.id,
                    name: element.name.clone(),
                    jump: element.jump,
                });
            }
        }
        if !self.elements[0].unlocked {
            return Err(CatalogError::LockedBaseElement);
        }
        Ok(())
    }

    /// Get an element definition by id.
    ///
    /// Panics on an out-of-catalog id; ids come from the catalog itself or
    /// from level data validated against it.
    pub fn get(&self, id: u8) -> &ElementDef {
        self.elements
            .get(id as usize)
            .unwrap_or_else(|| panic!("element id {id} outside catalog of {}", self.elements.len()))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementDef> {
        self.elements.iter()
    }

    pub fn is_unlocked(&self, id: u8) -> bool {
        self.get(id).unlocked
    }

    /// Unlock an element. Unlocks are permanent; re-unlocking is a no-op.
    pub fn unlock(&mut self, id: u8) {
        let len = self.elements.len();
        let element = self
            .elements
            .get_mut(id as usize)
            .unwrap_or_else(|| panic!("element id {id} outside catalog of {len}"));
        if !element.unlocked {
            element.unlocked = true;
            log::debug!("element {} ({}) unlocked", element.id, element.name);
        }
    }

    /// Unlock every element whose threshold the given level index exceeds
    pub fn unlock_for_level(&mut self, level_index: u32) {
        for element in &mut self.elements {
            if level_index > element.unlock_level && !element.unlocked {
                element.unlocked = true;
                log::debug!(
                    "element {} ({}) unlocked by reaching level {}",
                    element.id,
                    element.name,
                    level_index
                );
            }
        }
    }
}

impl Default for ElementCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = ElementCatalog::new();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.len(), 6);

        // Only the base element starts unlocked
        assert!(catalog.is_unlocked(ElementId::HYDROGEN));
        for element in catalog.iter().skip(1) {
            assert!(!element.unlocked, "{} should start locked", element.name);
        }
    }

    #[test]
    fn test_default_flag_matrix() {
        let catalog = ElementCatalog::new();

        let carbon = catalog.get(ElementId::CARBON);
        assert!(carbon.buoyant && carbon.flammable);

        let iron = catalog.get(ElementId::IRON);
        assert!(!iron.flammable && !iron.gaseous && !iron.buoyant && !iron.cryogenic);

        let helium = catalog.get(ElementId::HELIUM);
        assert!(helium.gaseous);
        assert_eq!(helium.motion, MotionStyle::Rising);

        let oxygen = catalog.get(ElementId::OXYGEN);
        assert_eq!(oxygen.motion, MotionStyle::Hovering);

        let ln = catalog.get(ElementId::LIQUID_NITROGEN);
        assert!(ln.cryogenic && !ln.flammable);
    }

    #[test]
    fn test_unlock_is_permanent_and_idempotent() {
        let mut catalog = ElementCatalog::new();
        assert!(!catalog.is_unlocked(ElementId::IRON));

        catalog.unlock(ElementId::IRON);
        assert!(catalog.is_unlocked(ElementId::IRON));

        catalog.unlock(ElementId::IRON);
        assert!(catalog.is_unlocked(ElementId::IRON));
    }

    #[test]
    fn test_unlock_for_level_uses_strict_threshold() {
        let mut catalog = ElementCatalog::new();

        // Carbon unlocks past level 1, not at it
        catalog.unlock_for_level(1);
        assert!(!catalog.is_unlocked(ElementId::CARBON));

        catalog.unlock_for_level(2);
        assert!(catalog.is_unlocked(ElementId::CARBON));
        assert!(!catalog.is_unlocked(ElementId::HELIUM));

        // Later levels never re-lock anything
        catalog.unlock_for_level(0);
        assert!(catalog.is_unlocked(ElementId::CARBON));
    }

    #[test]
    #[should_panic(expected = "outside catalog")]
    fn test_get_out_of_catalog_panics() {
        let catalog = ElementCatalog::new();
        catalog.get(99);
    }

    #[test]
    fn test_from_ron_str() {
        let source = r#"[
            (
                id: 0,
                name: "Hydrogen",
                speed: 1.0,
                jump: 1.0,
                unlock_level: 0,
                unlocked: true,
                flammable: true,
                gaseous: true,
                buoyant: false,
                cryogenic: false,
                motion: Walking,
            ),
            (
                id: 1,
                name: "Carbon",
                speed: 0.9,
                jump: 0.8,
                unlock_level: 1,
                unlocked: false,
                flammable: true,
                gaseous: false,
                buoyant: true,
                cryogenic: false,
                motion: Walking,
            ),
        ]"#;

        let catalog = ElementCatalog::from_ron_str(source).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).name, "Carbon");
        assert!(catalog.get(1).buoyant);
    }

    #[test]
    fn test_from_ron_str_rejects_garbage() {
        let err = ElementCatalog::from_ron_str("not ron at all").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_bad_catalogs() {
        let empty = ElementCatalog { elements: vec![] };
        assert!(matches!(empty.validate(), Err(CatalogError::Empty)));

        let gap = ElementCatalog {
            elements: vec![
                ElementDef {
                    unlocked: true,
                    name: "A".into(),
                    ..Default::default()
                },
                ElementDef {
                    id: 5,
                    name: "B".into(),
                    ..Default::default()
                },
            ],
        };
        assert!(matches!(
            gap.validate(),
            Err(CatalogError::NonContiguousIds {
                position: 1,
                found: 5
            })
        ));

        let blank = ElementCatalog {
            elements: vec![ElementDef {
                unlocked: true,
                name: "  ".into(),
                ..Default::default()
            }],
        };
        assert!(matches!(blank.validate(), Err(CatalogError::BlankName(0))));

        let slow = ElementCatalog {
            elements: vec![ElementDef {
                unlocked: true,
                name: "A".into(),
                speed: 0.0,
                ..Default::default()
            }],
        };
        assert!(matches!(
            slow.validate(),
            Err(CatalogError::NonPositiveSpeed { .. })
        ));

        let weak = ElementCatalog {
            elements: vec![ElementDef {
                unlocked: true,
                name: "A".into(),
                jump: -1.0,
                ..Default::default()
            }],
        };
        assert!(matches!(
            weak.validate(),
            Err(CatalogError::NonPositiveJump { .. })
        ));

        let locked = ElementCatalog {
            elements: vec![ElementDef {
                name: "A".into(),
                ..Default::default()
            }],
        };
        assert!(matches!(
            locked.validate(),
            Err(CatalogError::LockedBaseElement)
        ));
    }
}
