use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A single canned style recommendation shown as a result card.
///
/// The same shape travels over the dormant `/api/analyze-style` interface,
/// hence the serde derives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Recommendation {
    fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Catalog used by Guided mode; 4 of these are sampled per run.
pub static STUDIO_CATALOG: Lazy<Vec<Recommendation>> = Lazy::new(|| {
    vec![
        Recommendation::new(
            "👔",
            "Professional Elegance",
            "A tailored navy blazer with crisp white shirt creates a sophisticated silhouette. \
             The structured shoulders complement your frame while the classic color palette \
             exudes confidence and professionalism.",
        ),
        Recommendation::new(
            "👗",
            "Casual Sophistication",
            "A flowing midi dress in warm earth tones would beautifully enhance your natural \
             glow. The relaxed fit offers comfort while maintaining an effortlessly polished \
             appearance perfect for any occasion.",
        ),
        Recommendation::new(
            "🧥",
            "Seasonal Statement",
            "A luxurious cashmere sweater in rich jewel tones paired with perfectly fitted dark \
             jeans. This combination balances comfort with style, ideal for your body type and \
             the current season.",
        ),
        Recommendation::new(
            "👠",
            "Accessory Harmony",
            "Delicate gold jewelry and a structured leather handbag would frame your features \
             beautifully. These carefully chosen accessories add sophistication without \
             overwhelming your natural elegance.",
        ),
        Recommendation::new(
            "🎨",
            "Perfect Color Palette",
            "Based on your unique skin undertones, deep jewel tones like emerald, sapphire, and \
             burgundy will make you radiate confidence. These colors enhance your natural \
             beauty and create stunning visual impact.",
        ),
        Recommendation::new(
            "✨",
            "Signature Style",
            "For special occasions, consider a classic A-line silhouette in luxurious fabrics. \
             This timeless cut flatters your figure while the rich textures add depth and \
             sophistication to your overall look.",
        ),
    ]
});

/// Catalog used by Instant mode; shown whole and unshuffled.
pub static CLASSIC_CATALOG: Lazy<Vec<Recommendation>> = Lazy::new(|| {
    vec![
        Recommendation::new(
            "👔",
            "Perfect Outfit Match",
            "Based on your body type and style, we recommend a tailored blazer in navy blue \
             with well-fitted chinos. This combination enhances your natural proportions and \
             creates a sophisticated look.",
        ),
        Recommendation::new(
            "💇",
            "Ideal Hairstyle",
            "Your face shape would be perfectly complemented by a modern textured cut with a \
             slight fade on the sides. This style will highlight your best features and give \
             you a contemporary look.",
        ),
        Recommendation::new(
            "🎨",
            "Your Color Palette",
            "Your skin tone works beautifully with jewel tones - emerald green, sapphire blue, \
             and deep burgundy. These colors will make your complexion glow and enhance your \
             natural radiance.",
        ),
        Recommendation::new(
            "💍",
            "Accessory Recommendations",
            "Complete your look with a classic leather watch, minimalist silver jewelry, and a \
             structured leather bag. These accessories will add sophistication without \
             overwhelming your style.",
        ),
        Recommendation::new(
            "👓",
            "Eyewear Suggestions",
            "Your face shape is ideal for rectangular or square-framed glasses. Consider frames \
             in tortoiseshell or classic black for a timeless, intellectual appearance.",
        ),
        Recommendation::new(
            "✨",
            "Style Transformation Tips",
            "To elevate your overall style, focus on fit over trends. Invest in quality basics \
             in your recommended colors, and don't be afraid to add one statement piece to \
             each outfit.",
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_have_six_entries() {
        assert_eq!(STUDIO_CATALOG.len(), 6);
        assert_eq!(CLASSIC_CATALOG.len(), 6);
    }

    #[test]
    fn entries_are_fully_populated() {
        for rec in STUDIO_CATALOG.iter().chain(CLASSIC_CATALOG.iter()) {
            assert!(!rec.icon.is_empty());
            assert!(!rec.title.is_empty());
            assert!(!rec.description.is_empty());
        }
    }

    #[test]
    fn recommendation_round_trips_through_json() {
        let rec = &STUDIO_CATALOG[0];
        let json = serde_json::to_string(rec).unwrap();
        let back: Recommendation = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, rec);
    }
}
