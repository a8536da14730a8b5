//! Stimulus exclusion lists
//!
//! Some stimuli of the traffic light task turned out to carry a wrong ground
//! truth after the experiment. Two lists describe them:
//!
//! - **mislabeled**: the ground truth cannot be trusted, so the recorded
//!   response is replaced by a sentinel before classification
//! - **opposite annotation**: the ground truth polarity is flipped, so the
//!   correctness of the response is inverted
//!
//! The defaults are the lists of the 2022-03 study. A JSON file with the same
//! shape replaces them:
//!
//! ```json
//! {
//!   "mislabeled": ["3_3_96tl"],
//!   "opposite_annotation": ["3_16_259tl"]
//! }
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

const DEFAULT_MISLABELED: [&str; 30] = [
    "3_3_96tl",
    "3_3_102tl",
    "3_4_107tl",
    "3_4_108tl",
    "3_5_112tl",
    "3_5_113tl",
    "3_5_116tl",
    "3_5_117tl",
    "3_5_118tl",
    "3_5_119tl",
    "3_5_122tl",
    "3_5_123tl",
    "3_5_126tl",
    "3_5_127tl",
    "3_6_128tl",
    "3_6_137tl",
    "3_7_142tl",
    "3_8_153tl",
    "3_8_160tl",
    "3_9_173tl",
    "3_9_174tl",
    "3_9_179tl",
    "3_10_185tl",
    "3_10_188tl",
    "3_11_205tl",
    "3_12_218tl",
    "3_12_221tl",
    "3_15_241tl",
    "3_16_256tl",
    "3_16_257tl",
];

const DEFAULT_OPPOSITE_ANNOTATION: [&str; 3] = ["3_16_259tl", "3_16_258tl", "3_16_249tl"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionLists {
    /// Stimuli whose ground truth is wrong
    #[serde(default)]
    pub mislabeled: BTreeSet<String>,
    /// Stimuli whose ground truth polarity is flipped
    #[serde(default)]
    pub opposite_annotation: BTreeSet<String>,
}

impl Default for ExclusionLists {
    fn default() -> Self {
        Self {
            mislabeled: DEFAULT_MISLABELED.into_iter().map(String::from).collect(),
            opposite_annotation: DEFAULT_OPPOSITE_ANNOTATION
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ExclusionLists {
    /// Lists with no entries; every row is classified as recorded.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            mislabeled: BTreeSet::new(),
            opposite_annotation: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn is_mislabeled(&self, id: &str) -> bool {
        self.mislabeled.contains(id)
    }

    #[must_use]
    pub fn is_opposite_annotation(&self, id: &str) -> bool {
        self.opposite_annotation.contains(id)
    }
}
