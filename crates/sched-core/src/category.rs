//! Category rollup: study-type labels grouped by modality and region.
//!
//! Rules are an explicit ordered list evaluated top to bottom with
//! first-match-wins semantics, so the priority ("CT Neuro" before plain
//! "CT") is an auditable contract rather than map iteration order.
//!
//! Short modality codes ("ct", "mr", "us", ...) match whole tokens of
//! the label, not raw substrings; a bare substring check would file
//! "Fluoroscopy" under Ultrasound ("us") and "October Review" under CT.
//! Full words keep substring matching.

/// One way a needle can hit a case-folded label.
#[derive(Debug, Clone, Copy)]
enum Needle {
    /// Equals one whitespace/punctuation-delimited token.
    Token(&'static str),
    /// Appears anywhere in the label.
    Substr(&'static str),
}

impl Needle {
    fn matches(self, lower: &str, tokens: &[&str]) -> bool {
        match self {
            Self::Token(code) => tokens.contains(&code),
            Self::Substr(word) => lower.contains(word),
        }
    }
}

/// A modality rule: any needle hit selects the rule; labels with a
/// neuro/body refinement split further on those substrings.
#[derive(Debug)]
struct CategoryRule {
    any_of: &'static [Needle],
    base: &'static str,
    neuro: Option<&'static str>,
    body: Option<&'static str>,
}

pub const OTHER_CATEGORY: &str = "Other";

const RULES: &[CategoryRule] = &[
    CategoryRule {
        any_of: &[Needle::Token("ct")],
        base: "CT",
        neuro: Some("CT Neuro"),
        body: Some("CT Body"),
    },
    CategoryRule {
        any_of: &[Needle::Token("mr"), Needle::Token("mri")],
        base: "MRI",
        neuro: Some("MRI Neuro"),
        body: Some("MRI Body"),
    },
    CategoryRule {
        any_of: &[Needle::Token("us"), Needle::Substr("ultrasound")],
        base: "Ultrasound",
        neuro: None,
        body: None,
    },
    CategoryRule {
        any_of: &[
            Needle::Token("dx"),
            Needle::Substr("x-ray"),
            Needle::Substr("xray"),
        ],
        base: "X-Ray",
        neuro: None,
        body: None,
    },
    CategoryRule {
        any_of: &[Needle::Token("nm"), Needle::Substr("nuclear")],
        base: "Nuclear Medicine",
        neuro: None,
        body: None,
    },
    CategoryRule {
        any_of: &[Needle::Substr("fluoro")],
        base: "Fluoroscopy",
        neuro: None,
        body: None,
    },
    CategoryRule {
        any_of: &[Needle::Token("pet")],
        base: "PET",
        neuro: None,
        body: None,
    },
];

/// Classify one study-type label into its category.
pub fn category_for(study_type: &str) -> &'static str {
    let lower = study_type.to_lowercase();
    let tokens: Vec<&str> = lower
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect();
    for rule in RULES {
        if rule.any_of.iter().any(|needle| needle.matches(&lower, &tokens)) {
            if let Some(label) = rule.neuro
                && lower.contains("neuro")
            {
                return label;
            }
            if let Some(label) = rule.body
                && lower.contains("body")
            {
                return label;
            }
            return rule.base;
        }
    }
    OTHER_CATEGORY
}
