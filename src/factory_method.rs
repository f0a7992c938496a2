//! Factory Method: from per-vehicle branching to a runtime registry.
//!
//! Four steps, each fixing what the previous one made awkward:
//!
//! 1. `legacy`: every vehicle has its own delivery method, so the caller has
//!    to branch on the vehicle kind.
//! 2. [`Transport`]: a shared interface removes the branching.
//! 3. [`TransportFactory`]: creators hide which product gets constructed.
//! 4. [`TransportRegistry`]: one creation entry point keyed by tag, extensible
//!    at runtime through [`TransportRegistry::register`].

use crate::error::PatternError;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Step 1: No shared interface (bad)
// ============================================================================

pub mod legacy {
    /// The first vehicle the company had. Ships goods.
    pub struct LegacyTruck;

    impl LegacyTruck {
        pub fn ship(&self, goods: &str) -> String {
            format!("Truck is delivering goods {}.", goods)
        }
    }

    /// Added later, with its own method name.
    pub struct LegacyAirplane;

    impl LegacyAirplane {
        pub fn cargo(&self, goods: &str) -> String {
            format!("Airplane is delivering {}", goods)
        }
    }

    pub enum LegacyVehicle {
        Truck(LegacyTruck),
        Airplane(LegacyAirplane),
    }

    /// Every new vehicle means another arm here, and in every other place
    /// that delivers goods.
    pub fn deliver_goods_by_kind(vehicle: &LegacyVehicle, goods: &str) -> String {
        match vehicle {
            LegacyVehicle::Truck(truck) => truck.ship(goods),
            LegacyVehicle::Airplane(airplane) => airplane.cargo(goods),
        }
    }
}

// ============================================================================
// Step 2: Shared product interface (good)
// ============================================================================

pub trait Transport {
    fn name(&self) -> &str;
    fn deliver(&self, goods: &str) -> String;
}

#[derive(Debug, Default)]
pub struct Truck;

impl Transport for Truck {
    fn name(&self) -> &str {
        "truck"
    }

    fn deliver(&self, goods: &str) -> String {
        format!("Truck is delivering {}.", goods)
    }
}

#[derive(Debug, Default)]
pub struct Airplane;

impl Transport for Airplane {
    fn name(&self) -> &str {
        "airplane"
    }

    fn deliver(&self, goods: &str) -> String {
        format!("Airplane is delivering {}.", goods)
    }
}

#[derive(Debug, Default)]
pub struct Train;

impl Transport for Train {
    fn name(&self) -> &str {
        "train"
    }

    fn deliver(&self, goods: &str) -> String {
        format!("Train is delivering {}.", goods)
    }
}

pub fn deliver_goods(transport: &dyn Transport, goods: &str) -> String {
    transport.deliver(goods)
}

// ============================================================================
// Step 3: Creator traits (better)
// ============================================================================

pub trait TransportFactory {
    fn create_transport(&self) -> Box<dyn Transport>;

    fn deliver_goods(&self, goods: &str) -> String {
        let transport = self.create_transport();
        transport.deliver(goods)
    }
}

pub struct TruckFactory;

impl TransportFactory for TruckFactory {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Truck)
    }
}

pub struct AirplaneFactory;

impl TransportFactory for AirplaneFactory {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Airplane)
    }
}

pub struct TrainFactory;

impl TransportFactory for TrainFactory {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Train)
    }
}

// ============================================================================
// Step 4: Registry keyed by tag
// ============================================================================

/// Closed set of built-in products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportType {
    Truck,
    Airplane,
    Train,
}

impl TransportType {
    pub const ALL: [TransportType; 3] = [
        TransportType::Truck,
        TransportType::Airplane,
        TransportType::Train,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Truck => "truck",
            TransportType::Airplane => "airplane",
            TransportType::Train => "train",
        }
    }

    pub fn construct(&self) -> Box<dyn Transport> {
        match self {
            TransportType::Truck => Box::new(Truck),
            TransportType::Airplane => Box::new(Airplane),
            TransportType::Train => Box::new(Train),
        }
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportType {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "truck" => Ok(TransportType::Truck),
            "airplane" => Ok(TransportType::Airplane),
            "train" => Ok(TransportType::Train),
            _ => Err(PatternError::unsupported("transportation", s)),
        }
    }
}

pub type TransportConstructor = Box<dyn Fn() -> Box<dyn Transport>>;

/// Tag -> constructor map; the only thing `create_transport` consults.
pub struct TransportRegistry {
    constructors: HashMap<String, TransportConstructor>,
}

impl TransportRegistry {
    /// A registry that knows nothing yet.
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Truck, airplane and train pre-registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        for kind in TransportType::ALL {
            registry.register(kind.as_str(), move || kind.construct());
        }
        registry
    }

    /// Last write wins: re-registering a tag replaces its constructor.
    pub fn register<F>(&mut self, tag: &str, constructor: F)
    where
        F: Fn() -> Box<dyn Transport> + 'static,
    {
        let tag = normalize_tag(tag);
        let replaced = self
            .constructors
            .insert(tag.clone(), Box::new(constructor))
            .is_some();
        tracing::debug!(%tag, replaced, "registered transport constructor");
    }

    /// Registers `alias` so it builds whatever `target` builds today.
    pub fn register_alias(&mut self, alias: &str, target: &str) -> Result<(), PatternError> {
        let kind: TransportType = target.parse()?;
        self.register(alias, move || kind.construct());
        Ok(())
    }

    pub fn create_transport(&self, tag: &str) -> Result<Box<dyn Transport>, PatternError> {
        self.constructors
            .get(&normalize_tag(tag))
            .map(|constructor| constructor())
            .ok_or_else(|| PatternError::unsupported("transportation", tag))
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.constructors.contains_key(&normalize_tag(tag))
    }

    pub fn registered_types(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

impl Default for TransportRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_ascii_lowercase()
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    fn spelled(tag: &'static str) -> impl Strategy<Value = String> {
        (
            prop::collection::vec(any::<bool>(), tag.len()),
            "[ \t]{0,3}",
            "[ \t]{0,3}",
        )
            .prop_map(move |(upper, lead, trail)| {
                let body: String = tag
                    .chars()
                    .zip(upper)
                    .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                    .collect();
                format!("{}{}{}", lead, body, trail)
            })
    }

    proptest! {
        #[test]
        fn test_any_spelling_of_builtin_tag_resolves(raw in spelled("airplane")) {
            let registry = TransportRegistry::with_defaults();
            let product = registry.create_transport(&raw);
            prop_assert!(product.is_ok());
            if let Ok(transport) = product {
                prop_assert_eq!(transport.name(), "airplane");
            }
        }

        #[test]
        fn test_unknown_tags_are_rejected(tag in "[a-z]{1,12}") {
            let registry = TransportRegistry::with_defaults();
            let known = TransportType::ALL.iter().any(|kind| kind.as_str() == tag);
            prop_assert_eq!(registry.create_transport(&tag).is_ok(), known);
        }
    }
}
