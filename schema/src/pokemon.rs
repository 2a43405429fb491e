use serde::{Deserialize, Serialize};

/// A single named statistic attached to a Pokemon (e.g. "attack": 55).
///
/// Stat names are free-form strings. A record may carry duplicate names;
/// lookups scan in order and the first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub value: i32,
}

impl Stat {
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Stat {
            name: name.into(),
            value,
        }
    }
}

/// One catalog entry: identity, descriptive fields, type tags, and stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    // Unique per catalog by caller discipline; nothing enforces it.
    pub id: u32,
    pub name: String,
    pub description: String,
    pub height: i32,
    pub weight: i32,
    pub base_experience: u32,
    pub abilities: Vec<String>,
    // Ordered type tags; the first entry is the main type. May be empty.
    pub types: Vec<String>,
    // Image URI, opaque to the catalog.
    pub sprite: String,
    pub stats: Vec<Stat>,
}

impl Pokemon {
    /// Create a new record. `types` and `stats` start empty; use
    /// `with_types` / `with_stats` to fill them in.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        height: i32,
        weight: i32,
        base_experience: u32,
        abilities: Vec<String>,
        sprite: impl Into<String>,
    ) -> Self {
        Pokemon {
            id,
            name: name.into(),
            description: description.into(),
            height,
            weight,
            base_experience,
            abilities,
            types: Vec::new(),
            sprite: sprite.into(),
            stats: Vec::new(),
        }
    }

    pub fn with_types(mut self, types: Vec<String>) -> Self {
        self.types = types;
        self
    }

    pub fn with_stats(mut self, stats: Vec<Stat>) -> Self {
        self.stats = stats;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// No bounds checking: zero and negative weights are accepted as-is.
    pub fn set_weight(&mut self, weight: i32) {
        self.weight = weight;
    }

    /// The first type tag, or `None` when the record has no types.
    pub fn main_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    /// Replace the main type, or append it when the type list is empty.
    pub fn set_main_type(&mut self, main_type: impl Into<String>) {
        let main_type = main_type.into();
        match self.types.first_mut() {
            Some(first) => *first = main_type,
            None => self.types.push(main_type),
        }
    }

    /// Attack value read from stats. Linear scan, first entry named
    /// "attack" wins; `None` when the record carries no such stat.
    pub fn attack(&self) -> Option<i32> {
        self.stats
            .iter()
            .find(|stat| stat.name == "attack")
            .map(|stat| stat.value)
    }
}
