//! Static reference catalogs: token stat-lines and counter names.
//!
//! Both catalogs are read-only lookup data shipped as JSON. The core
//! consumes only the fields needed to seed a new stack; the type line
//! and counter color tags are presentation data carried along for
//! search and display.

use crate::color::ColorSet;
use crate::stack::TokenStack;

/// One token stat-line from the token catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TokenDefinition {
    pub name: String,
    pub abilities: String,
    /// Power/toughness text, e.g. "2/2" or "*/*"; empty for non-creatures.
    #[cfg_attr(feature = "serialization", serde(rename = "pt"))]
    pub power_toughness: String,
    /// Raw WUBRG color identity text as it appears in the catalog file.
    pub colors: String,
    /// Type line, e.g. "Token Creature — Zombie".
    #[cfg_attr(feature = "serialization", serde(rename = "type"))]
    pub type_line: String,
}

/// Coarse token categories used for catalog filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Creature,
    Artifact,
    Enchantment,
    Emblem,
    Dungeon,
    Counter,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Creature,
        Category::Artifact,
        Category::Enchantment,
        Category::Emblem,
        Category::Dungeon,
        Category::Counter,
        Category::Other,
    ];

    pub const fn display_name(self) -> &'static str {
        match self {
            Category::Creature => "Creature",
            Category::Artifact => "Artifact",
            Category::Enchantment => "Enchantment",
            Category::Emblem => "Emblem",
            Category::Dungeon => "Dungeon",
            Category::Counter => "Counter",
            Category::Other => "Other",
        }
    }
}

impl TokenDefinition {
    /// True if this token has a power/toughness line.
    pub fn is_creature(&self) -> bool {
        !self.power_toughness.is_empty()
    }

    /// The primary category, derived from the type line. Emblem, dungeon,
    /// and counter markers win over the card types they decorate.
    pub fn category(&self) -> Category {
        let type_line = self.type_line.to_lowercase();
        if type_line.contains("emblem") {
            Category::Emblem
        } else if type_line.contains("dungeon") {
            Category::Dungeon
        } else if type_line.contains("counter") {
            Category::Counter
        } else if type_line.contains("creature") {
            Category::Creature
        } else if type_line.contains("artifact") {
            Category::Artifact
        } else if type_line.contains("enchantment") {
            Category::Enchantment
        } else {
            Category::Other
        }
    }

    /// Type line with the "Token " prefix stripped for display.
    pub fn clean_type(&self) -> &str {
        self.type_line.strip_prefix("Token ").unwrap_or(&self.type_line)
    }

    /// True if this definition matches a search query. An empty query
    /// matches everything; otherwise the query is matched
    /// case-insensitively against every text field.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.searchable_text().contains(&query)
    }

    fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.name, self.abilities, self.type_line, self.colors, self.power_toughness
        )
        .to_lowercase()
    }

    /// Seeds a new stack from this stat-line. The catalog's `type` field
    /// and color tags are presentation-only and are not carried over.
    pub fn to_stack(&self, amount: i64, enter_tapped: bool) -> TokenStack {
        TokenStack::new(
            self.name.clone(),
            self.abilities.clone(),
            self.power_toughness.clone(),
            ColorSet::parse(&self.colors),
            amount,
            enter_tapped,
            true,
        )
    }
}

/// One counter name from the counter catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CounterDefinition {
    pub name: String,
    /// Presentation color tag, e.g. "green" or "default".
    #[cfg_attr(feature = "serialization", serde(default = "default_counter_color"))]
    pub color: String,
}

fn default_counter_color() -> String {
    "default".to_string()
}

impl CounterDefinition {
    /// A user-typed counter not present in the catalog.
    pub fn custom(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: default_counter_color(),
        }
    }
}

/// Failure to load a catalog file. Catalog loading is the one place a
/// decode failure is surfaced to the caller; per-deck decode failures
/// still degrade silently.
#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    #[cfg(feature = "serialization")]
    Decode(serde_json::Error),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "Failed to read catalog: {err}"),
            #[cfg(feature = "serialization")]
            CatalogError::Decode(err) => write!(f, "Failed to parse catalog: {err}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            #[cfg(feature = "serialization")]
            CatalogError::Decode(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err)
    }
}

#[cfg(feature = "serialization")]
impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err)
    }
}

/// The token reference catalog.
#[derive(Debug, Clone, Default)]
pub struct TokenCatalog {
    tokens: Vec<TokenDefinition>,
}

impl TokenCatalog {
    pub fn new(tokens: Vec<TokenDefinition>) -> Self {
        Self { tokens }
    }

    /// Loads the catalog from a JSON array of token definitions.
    #[cfg(feature = "serialization")]
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, CatalogError> {
        let tokens = serde_json::from_reader(std::io::BufReader::new(reader))?;
        Ok(Self { tokens })
    }

    /// Loads the catalog from a JSON file on disk.
    #[cfg(feature = "serialization")]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, CatalogError> {
        Self::from_reader(std::fs::File::open(path)?)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn all(&self) -> impl Iterator<Item = &TokenDefinition> {
        self.tokens.iter()
    }

    /// Definitions matching a query and optional category filter, in
    /// catalog order.
    pub fn search(&self, query: &str, category: Option<Category>) -> Vec<&TokenDefinition> {
        self.tokens
            .iter()
            .filter(|token| token.matches(query))
            .filter(|token| category.is_none_or(|wanted| token.category() == wanted))
            .collect()
    }
}

/// The counter-name reference catalog.
#[derive(Debug, Clone, Default)]
pub struct CounterCatalog {
    counters: Vec<CounterDefinition>,
}

impl CounterCatalog {
    pub fn new(counters: Vec<CounterDefinition>) -> Self {
        Self { counters }
    }

    /// Loads the catalog from a JSON array of counter definitions.
    #[cfg(feature = "serialization")]
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, CatalogError> {
        let counters = serde_json::from_reader(std::io::BufReader::new(reader))?;
        Ok(Self { counters })
    }

    /// Loads the catalog from a JSON file on disk.
    #[cfg(feature = "serialization")]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, CatalogError> {
        Self::from_reader(std::fs::File::open(path)?)
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    pub fn all(&self) -> impl Iterator<Item = &CounterDefinition> {
        self.counters.iter()
    }

    /// Counter names containing the query, case-insensitive.
    pub fn search(&self, query: &str) -> Vec<&CounterDefinition> {
        let query = query.to_lowercase();
        self.counters
            .iter()
            .filter(|counter| query.is_empty() || counter.name.to_lowercase().contains(&query))
            .collect()
    }
}
