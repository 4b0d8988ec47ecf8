use std::fmt;

use serde::{Deserialize, Serialize};

/// The four mutually exclusive archetypes of the categorical axis.
///
/// Variants are declared in the fixed tie-break order, steady/collective
/// archetypes first and bold/individual ones last, so the derived `Ord`
/// matches [`Category::ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "African Dog")]
    AfricanDog,
    #[serde(rename = "Lion")]
    Lion,
    #[serde(rename = "Killer Whale")]
    KillerWhale,
    #[serde(rename = "Tiger")]
    Tiger,
}

impl Category {
    /// Circular order walked by the move-up tie-break rule.
    pub const ORDER: [Category; 4] = [
        Category::AfricanDog,
        Category::Lion,
        Category::KillerWhale,
        Category::Tiger,
    ];

    /// Stable key used to join against display content and persisted reports.
    pub fn name(self) -> &'static str {
        match self {
            Category::AfricanDog => "African Dog",
            Category::Lion => "Lion",
            Category::KillerWhale => "Killer Whale",
            Category::Tiger => "Tiger",
        }
    }

    /// Resolve a stored category name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ORDER
            .into_iter()
            .find(|category| category.name() == name.trim())
    }

    pub fn position(self) -> usize {
        match self {
            Category::AfricanDog => 0,
            Category::Lion => 1,
            Category::KillerWhale => 2,
            Category::Tiger => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
