//! Product family catalog and string matcher
//!
//! Families are kept in insertion order; the list only grows at runtime.
//! Matching is plain case-insensitive containment with a constant confidence.

use crate::contract::{
    NewProduct, ProductMatch, ProductSearchHit, ProductVerification, VerificationDetails,
    VerificationInput,
};
use parking_lot::RwLock;

/// Confidence reported for every match
pub const MATCH_CONFIDENCE: f64 = 1.0;

/// Words of this many characters or fewer are ignored by keyword matching
const MIN_KEYWORD_CHARS: usize = 2;

pub const DEFAULT_FAMILIES: &[&str] = &[
    "PET Extra 30 CL",
    "PET Ramy 1,25 L",
    "PET Extra 1,25 L",
    "PET Ramy Jus 2 L",
    "PET Extra Jus 2 L",
    "PET Frutty Jus 2 L",
    "PET Boisson Maltée 33 CL",
    "PET Boisson Energétique 33 CL",
    "Canette Jus 24 CL",
    "Canette Gazeifie 33 CL",
    "Canette Maltée 33 CL",
    "Water Fruits 33 CL",
    "Ramy Gazéifié 33 CL",
    "Ramy Kids 125 ML",
    "Pack Ramy 20 CL",
    "Pack Ramy 1 L",
    "Pack Ramy 2 L",
    "Pack Frutty Kids 20 CL",
    "Pack Frutty 20 CL",
    "Pack Frutty 1 L",
    "Pack Frutty 2 L",
    "Frutty Pack 1L * 6 PCS",
    "Ramy UP 125 ML",
    "Ramy UP 20 CL",
    "Water Fruits 1L",
    "Water Fruits 1.25L",
    "PET Milky 30CL",
    "PET Frutty 1.25L",
    "Ramy Extreme PET 25CL",
    "Pack Taiba 2 L",
    "Ramy Milk 1 L",
    "Ramy Kids 110 ML",
    "Pack Milky 20CL",
    "Ramy Duo 20 CL",
    "Ramy L'ben 1 kg",
    "Ramy Raîb 1kg",
    "Yaourt 1kg",
    "PET Taiba 1L",
    "Canette Pulpe 24 CL",
    "PET Milky 1L",
    "Pack Milky 1L",
    "Pack Premium 1L",
    "Canette Boisson Energetique 240ML",
    "Pack Premium 2L",
];

#[derive(Debug)]
pub struct ProductCatalog {
    families: RwLock<Vec<String>>,
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::with_families(DEFAULT_FAMILIES.iter().map(|f| f.to_string()).collect())
    }
}

impl ProductCatalog {
    pub fn with_families(families: Vec<String>) -> Self {
        Self {
            families: RwLock::new(families),
        }
    }

    pub fn families(&self) -> Vec<String> {
        self.families.read().clone()
    }

    /// Classify `product_name` into the first family it matches.
    ///
    /// A family matches when its lowercased name is contained in the
    /// normalized input, or when every family word longer than two
    /// characters is.
    pub fn find_product_family(&self, product_name: &str) -> Option<ProductMatch> {
        let input = normalize(product_name);
        let families = self.families.read();
        families
            .iter()
            .find(|family| family_matches(family, &input))
            .map(|family| ProductMatch {
                product_name: product_name.to_string(),
                family: family.clone(),
                confidence: MATCH_CONFIDENCE,
            })
    }

    /// Every family containing `description`, case-insensitively.
    ///
    /// An empty description matches the whole catalog.
    pub fn search_product(&self, description: &str) -> Vec<ProductSearchHit> {
        let needle = description.to_lowercase();
        self.families
            .read()
            .iter()
            .filter(|family| family.to_lowercase().contains(&needle))
            .map(|family| ProductSearchHit {
                name: family.clone(),
                family: family.clone(),
                confidence: MATCH_CONFIDENCE,
            })
            .collect()
    }

    /// Echo the input back as verified, filling defaults for missing fields.
    ///
    /// Does not consult the catalog.
    pub fn verify_product(&self, input: VerificationInput) -> ProductVerification {
        ProductVerification {
            id: input.id,
            name: input.name,
            verified: true,
            details: VerificationDetails {
                quantity: input.quantity.filter(|q| *q != 0).unwrap_or(1),
                size: input.size.unwrap_or_default(),
                flavor: input.flavor.unwrap_or_default(),
                brand: input.brand.unwrap_or_default(),
                match_confidence: MATCH_CONFIDENCE,
            },
        }
    }

    /// Append the product's category as a new family; returns the new length.
    ///
    /// No dedup. A product without a category appends an empty family name,
    /// which is listed and searchable but never matched by
    /// [`find_product_family`](Self::find_product_family).
    pub fn add_product(&self, product: NewProduct) -> usize {
        let mut families = self.families.write();
        families.push(product.category.unwrap_or_default());
        families.len()
    }
}

fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn family_matches(family: &str, normalized_input: &str) -> bool {
    // A blank family would be contained in every input
    if family.trim().is_empty() {
        return false;
    }
    let family = family.to_lowercase();
    if normalized_input.contains(&family) {
        return true;
    }
    let keywords: Vec<&str> = family
        .split(' ')
        .filter(|word| word.chars().count() > MIN_KEYWORD_CHARS)
        .collect();
    !keywords.is_empty() && keywords.iter().all(|word| normalized_input.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::EchoValue;

    #[test]
    fn test_keyword_subset_match() {
        let catalog = ProductCatalog::default();
        let m = catalog.find_product_family("PET Extra Peche 30 CL").unwrap();
        assert_eq!(m.family, "PET Extra 30 CL");
        assert_eq!(m.product_name, "PET Extra Peche 30 CL");
        assert_eq!(m.confidence, 1.0);
    }

    #[test]
    fn test_input_is_normalized() {
        let catalog = ProductCatalog::default();
        // "20" and "cl" are too short to count, so the earlier 20 CL pack wins
        let m = catalog.find_product_family("  pack   RAMY 2 l ").unwrap();
        assert_eq!(m.family, "Pack Ramy 20 CL");
        assert_eq!(m.product_name, "  pack   RAMY 2 l ");
    }

    #[test]
    fn test_no_match() {
        let catalog = ProductCatalog::default();
        assert!(catalog.find_product_family("nonexistent item xyz").is_none());
        assert!(catalog.find_product_family("").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let catalog = ProductCatalog::with_families(vec![
            "Ramy Juice".to_string(),
            "Ramy Juice 1 L".to_string(),
        ]);
        let m = catalog.find_product_family("ramy juice 1 l").unwrap();
        assert_eq!(m.family, "Ramy Juice");
    }

    #[test]
    fn test_search_empty_returns_all() {
        let catalog = ProductCatalog::default();
        let hits = catalog.search_product("");
        assert_eq!(hits.len(), DEFAULT_FAMILIES.len());
        assert_eq!(hits[0].name, DEFAULT_FAMILIES[0]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = ProductCatalog::default();
        let hits = catalog.search_product("RAMY");
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|h| h.family.to_lowercase().contains("ramy")));
        let expected = DEFAULT_FAMILIES
            .iter()
            .filter(|f| f.to_lowercase().contains("ramy"))
            .count();
        assert_eq!(hits.len(), expected);
    }

    #[test]
    fn test_verify_fills_defaults() {
        let catalog = ProductCatalog::default();
        let v = catalog.verify_product(VerificationInput {
            id: Some("p-1".into()),
            quantity: Some(0),
            brand: Some("Ramy".into()),
            ..Default::default()
        });
        assert!(v.verified);
        assert_eq!(v.id, Some(EchoValue::from("p-1")));
        assert_eq!(v.name, None);
        assert_eq!(v.details.quantity, 1);
        assert_eq!(v.details.size, "");
        assert_eq!(v.details.brand, "Ramy");
        assert_eq!(v.details.match_confidence, 1.0);
    }

    #[test]
    fn test_blank_family_never_matches() {
        let catalog = ProductCatalog::default();
        catalog.add_product(NewProduct::default());
        catalog.add_product(NewProduct {
            category: Some("   ".into()),
            ..Default::default()
        });
        assert!(catalog.find_product_family("nonexistent item xyz").is_none());
        assert!(catalog.find_product_family("").is_none());
        assert_eq!(
            catalog.find_product_family("PET Extra Peche 30 CL").map(|m| m.family),
            Some("PET Extra 30 CL".to_string())
        );
    }

    #[test]
    fn test_short_word_family_needs_literal_match() {
        let catalog = ProductCatalog::with_families(vec!["1 L".to_string()]);
        assert!(catalog.find_product_family("ramy orange").is_none());
        assert!(catalog.find_product_family("ramy 1 l").is_some());
    }

    #[test]
    fn test_add_product_appends_category() {
        let catalog = ProductCatalog::default();
        let before = catalog.families();
        let len = catalog.add_product(NewProduct {
            category: Some("X".into()),
            ..Default::default()
        });
        let after = catalog.families();
        assert_eq!(len, before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.last().map(String::as_str), Some("X"));
    }
}
