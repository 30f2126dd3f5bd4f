use serde::{Deserialize, Serialize};

const UNKNOWN: &str = "Unknown";
const NO_DESCRIPTION: &str = "No description";

/// Number of description characters kept when rendering a product entry.
const DESCRIPTION_PREVIEW_CHARS: usize = 200;

/// Raw product record as returned by the catalog search service.
///
/// The catalog makes no completeness guarantees: every field may be missing
/// or explicitly null. Deserialization must never fail on sparse records,
/// so everything is optional here and defaults are substituted in
/// [`ProductCard`] right after lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<u64>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub specifications: Option<Specifications>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Nested specification block of a [`ProductRecord`].
///
/// Only `rating` is consumed when rendering; the remaining keys are carried
/// through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Specifications {
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Product normalized for prompt rendering: every field is concrete, with
/// missing catalog data replaced by fixed defaults (name/brand/category
/// "Unknown", price 0, rating 0, description "No description").
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    name: String,
    price: u64,
    brand: String,
    category: String,
    rating: f64,
    description: String,
}

impl From<ProductRecord> for ProductCard {
    fn from(record: ProductRecord) -> Self {
        Self {
            name: record.name.unwrap_or_else(|| UNKNOWN.to_string()),
            price: record.price.unwrap_or(0),
            brand: record.brand.unwrap_or_else(|| UNKNOWN.to_string()),
            category: record.category.unwrap_or_else(|| UNKNOWN.to_string()),
            rating: record
                .specifications
                .and_then(|s| s.rating)
                .unwrap_or(0.0),
            description: record
                .description
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        }
    }
}

impl ProductCard {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Render one numbered entry for the prompt context.
    ///
    /// The description is cut to its first 200 characters and always gets a
    /// trailing `...`, even when it was short enough to fit.
    pub fn display_block(&self, index: usize) -> String {
        let preview: String = self
            .description
            .chars()
            .take(DESCRIPTION_PREVIEW_CHARS)
            .collect();

        format!(
            "{}. {}\n   Price: Rp {}\n   Brand: {}\n   Category: {}\n   Rating: {}/5\n   Description: {}...\n",
            index,
            self.name,
            format_thousands(self.price),
            self.brand,
            self.category,
            self.rating,
            preview,
        )
    }
}

/// Group digits with comma separators (15000000 -> "15,000,000").
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> ProductRecord {
        ProductRecord {
            name: Some("Asus ROG Zephyrus".to_string()),
            price: Some(15_000_000),
            brand: Some("Asus".to_string()),
            category: Some("laptop".to_string()),
            specifications: Some(Specifications {
                rating: Some(4.5),
                extra: serde_json::Map::new(),
            }),
            description: Some("Gaming laptop with RTX graphics".to_string()),
        }
    }

    #[test]
    fn test_card_keeps_present_fields() {
        let card = ProductCard::from(full_record());

        assert_eq!(card.name(), "Asus ROG Zephyrus");
        assert_eq!(card.price(), 15_000_000);
        assert_eq!(card.brand(), "Asus");
        assert_eq!(card.category(), "laptop");
        assert_eq!(card.rating(), 4.5);
    }

    #[test]
    fn test_card_substitutes_defaults_for_missing_fields() {
        let card = ProductCard::from(ProductRecord::default());

        assert_eq!(card.name(), "Unknown");
        assert_eq!(card.price(), 0);
        assert_eq!(card.brand(), "Unknown");
        assert_eq!(card.category(), "Unknown");
        assert_eq!(card.rating(), 0.0);
        assert_eq!(card.description(), "No description");
    }

    #[test]
    fn test_missing_rating_inside_specifications_defaults_to_zero() {
        let record = ProductRecord {
            specifications: Some(Specifications::default()),
            ..full_record()
        };

        assert_eq!(ProductCard::from(record).rating(), 0.0);
    }

    #[test]
    fn test_short_description_still_gets_ellipsis() {
        let block = ProductCard::from(full_record()).display_block(1);

        assert!(block.contains("Description: Gaming laptop with RTX graphics...\n"));
    }

    #[test]
    fn test_long_description_is_cut_to_200_chars() {
        let record = ProductRecord {
            description: Some("x".repeat(450)),
            ..full_record()
        };
        let block = ProductCard::from(record).display_block(1);

        let expected = format!("Description: {}...", "x".repeat(200));
        assert!(block.contains(&expected));
        assert!(!block.contains(&"x".repeat(201)));
    }

    #[test]
    fn test_display_block_layout() {
        let block = ProductCard::from(full_record()).display_block(3);

        assert!(block.starts_with("3. Asus ROG Zephyrus\n"));
        assert!(block.contains("   Price: Rp 15,000,000\n"));
        assert!(block.contains("   Brand: Asus\n"));
        assert!(block.contains("   Category: laptop\n"));
        assert!(block.contains("   Rating: 4.5/5\n"));
    }

    #[test]
    fn test_zero_rating_renders_plain_zero() {
        let block = ProductCard::from(ProductRecord::default()).display_block(1);

        assert!(block.contains("Rating: 0/5"));
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(5_000_000), "5,000,000");
        assert_eq!(format_thousands(15_000_000), "15,000,000");
    }

    #[test]
    fn test_record_deserializes_with_null_fields() {
        let record: ProductRecord = serde_json::from_str(
            r#"{"name": null, "price": null, "specifications": {"rating": null, "cpu": "i7"}}"#,
        )
        .unwrap();

        let card = ProductCard::from(record);
        assert_eq!(card.name(), "Unknown");
        assert_eq!(card.rating(), 0.0);
    }
}
