//! Questionnaire subscale configuration.
//!
//! The 27 items are split into three disjoint groups of nine. Each item is
//! paired with its weight, so a group encodes a 9-bit response pattern.

use serde::Serialize;

/// Constant subtracted from every weighted sum.
pub const SEQUENCE_OFFSET: i64 = 510;

/// Weights shared by all three groups, lowest bit first.
pub const SEQUENCE_WEIGHTS: [i64; 9] = [1, 2, 4, 8, 16, 32, 64, 128, 256];

/// Name of the geometric-mean column written for surviving rows.
pub const K_GEO_FIELD: &str = "k_geo";

/// Name of the base-10 logarithm of `k_geo`.
pub const LOG10_K_GEO_FIELD: &str = "log10_k_geo";

/// A questionnaire item paired with its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemWeight {
    pub field: &'static str,
    pub weight: i64,
}

const fn item(field: &'static str, weight: i64) -> ItemWeight {
    ItemWeight { field, weight }
}

/// The three questionnaire subscales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Subscale {
    Small,
    Medium,
    Large,
}

impl Subscale {
    pub const ALL: [Subscale; 3] = [Subscale::Small, Subscale::Medium, Subscale::Large];

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    /// Column receiving the sequence score.
    pub fn sequence_field(self) -> &'static str {
        match self {
            Self::Small => "SmlSeq",
            Self::Medium => "MedSeq",
            Self::Large => "LrgSeq",
        }
    }

    /// Completeness counter gating inclusion.
    pub fn completeness_field(self) -> &'static str {
        match self {
            Self::Small => "SmlCon",
            Self::Medium => "MedCon",
            Self::Large => "LrgCon",
        }
    }

    /// Magnitude combined into `k_geo`.
    pub fn magnitude_field(self) -> &'static str {
        match self {
            Self::Small => "SmlK",
            Self::Medium => "MedK",
            Self::Large => "LrgK",
        }
    }

    pub fn items(self) -> &'static [ItemWeight; 9] {
        match self {
            Self::Small => &SMALL_ITEMS,
            Self::Medium => &MEDIUM_ITEMS,
            Self::Large => &LARGE_ITEMS,
        }
    }
}

static SMALL_ITEMS: [ItemWeight; 9] = [
    item("MCQ13", 1),
    item("MCQ20", 2),
    item("MCQ26", 4),
    item("MCQ22", 8),
    item("MCQ3", 16),
    item("MCQ18", 32),
    item("MCQ5", 64),
    item("MCQ7", 128),
    item("MCQ11", 256),
];

static MEDIUM_ITEMS: [ItemWeight; 9] = [
    item("MCQ1", 1),
    item("MCQ6", 2),
    item("MCQ24", 4),
    item("MCQ16", 8),
    item("MCQ10", 16),
    item("MCQ21", 32),
    item("MCQ14", 64),
    item("MCQ8", 128),
    item("MCQ27", 256),
];

static LARGE_ITEMS: [ItemWeight; 9] = [
    item("MCQ9", 1),
    item("MCQ17", 2),
    item("MCQ12", 4),
    item("MCQ15", 8),
    item("MCQ2", 16),
    item("MCQ25", 32),
    item("MCQ23", 64),
    item("MCQ19", 128),
    item("MCQ4", 256),
];
