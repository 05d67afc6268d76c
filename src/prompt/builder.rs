//! Prompt templates for the generation flows.
//!
//! Rendering is pure and deterministic: the same fields always produce the
//! same string. Optional fields fall back to fixed defaults. Field values are
//! interpolated verbatim; no sanitization is attempted before the text
//! reaches the downstream model.

pub const DEFAULT_TONE: &str = "professional";
pub const DEFAULT_AUDIENCE: &str = "general";
pub const DEFAULT_STYLE: &str = "modern";
pub const DEFAULT_BEDROOMS: &str = "3";
pub const DEFAULT_BATHROOMS: &str = "2";
pub const DEFAULT_SQUARE_FOOTAGE: &str = "2000";
pub const DEFAULT_LISTING_FEATURES: &str = "spacious living area";

/// Studio product shot for the single fixed product; only the label text
/// varies.
pub fn marketing_image_prompt(product_name: &str) -> String {
    format!(
        "High-resolution studio product shot of a sleek energy-drink can. \
         Label reads '{product_name}' in bold modern font. \
         Vibrant colors, white background."
    )
}

/// Short animated advertisement for a product.
pub fn marketing_video_prompt(
    product_name: &str,
    features: &str,
    tone: Option<&str>,
    audience: Option<&str>,
    style: Option<&str>,
) -> String {
    let tone = tone.unwrap_or(DEFAULT_TONE);
    let audience = audience.unwrap_or(DEFAULT_AUDIENCE);
    let style = style.unwrap_or(DEFAULT_STYLE);
    format!(
        "Create a {tone} marketing video for {product_name} that highlights: {features}. \
         The video should be in a {style} style and target {audience}. \
         Focus on showing the product in use and its benefits."
    )
}

/// Guided property tour with a fixed shot list.
pub fn real_estate_video_prompt(
    address: &str,
    price: &str,
    bedrooms: Option<&str>,
    bathrooms: Option<&str>,
    square_footage: Option<&str>,
    features: Option<&str>,
    style: Option<&str>,
) -> String {
    let bedrooms = bedrooms.unwrap_or(DEFAULT_BEDROOMS);
    let bathrooms = bathrooms.unwrap_or(DEFAULT_BATHROOMS);
    let square_footage = square_footage.unwrap_or(DEFAULT_SQUARE_FOOTAGE);
    let features = features.unwrap_or(DEFAULT_LISTING_FEATURES);
    let style = style.unwrap_or(DEFAULT_STYLE);
    format!(
        "Create a {style} virtual tour video for the property at {address} \
         priced at {price}. It has {bedrooms} bedrooms, {bathrooms} bathrooms \
         and {square_footage} sq ft. Highlight these features: {features}. \
         Open with an exterior establishing shot, walk through the main living \
         spaces, and close on the most striking feature."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_prompt_carries_label_text() {
        let p = marketing_image_prompt("Suplimax");
        assert!(p.contains("'Suplimax'"));
        assert!(p.contains("energy-drink can"));
    }

    #[test]
    fn marketing_prompt_is_deterministic() {
        let a = marketing_video_prompt("Suplimax", "zero sugar", None, None, None);
        let b = marketing_video_prompt("Suplimax", "zero sugar", None, None, None);
        assert_eq!(a, b);
    }

    #[test]
    fn marketing_prompt_applies_defaults() {
        let p = marketing_video_prompt("Suplimax", "zero sugar", None, None, None);
        assert!(p.contains("professional marketing video"));
        assert!(p.contains("modern style"));
        assert!(p.contains("target general"));
    }

    #[test]
    fn marketing_prompt_prefers_explicit_fields() {
        let p = marketing_video_prompt(
            "Suplimax",
            "zero sugar",
            Some("playful"),
            Some("athletes"),
            Some("retro"),
        );
        assert!(p.contains("playful marketing video"));
        assert!(p.contains("retro style"));
        assert!(p.contains("target athletes"));
        assert!(!p.contains(DEFAULT_TONE));
    }

    #[test]
    fn tour_prompt_interpolates_listing_fields() {
        let p = real_estate_video_prompt(
            "12012 Crest Ct, Beverly Hills, CA 90210",
            "$10,183,985",
            Some("9"),
            Some("7"),
            Some("6100"),
            Some("rooftop deck"),
            None,
        );
        assert!(p.contains("12012 Crest Ct, Beverly Hills, CA 90210"));
        assert!(p.contains("$10,183,985"));
        assert!(p.contains("9 bedrooms"));
        assert!(p.contains("7 bathrooms"));
        assert!(p.contains("6100 sq ft"));
        assert!(p.contains("rooftop deck"));
    }

    #[test]
    fn tour_prompt_defaults_every_optional_field() {
        let p = real_estate_video_prompt("1 Main St", "$500,000", None, None, None, None, None);
        assert!(p.contains("3 bedrooms"));
        assert!(p.contains("2 bathrooms"));
        assert!(p.contains("2000 sq ft"));
        assert!(p.contains("spacious living area"));
        assert!(p.contains("modern virtual tour"));
    }

    #[test]
    fn fields_pass_through_verbatim() {
        // Injection into the downstream prompt is an accepted limitation.
        let p = marketing_video_prompt("X \"quoted\"", "a\nb", None, None, None);
        assert!(p.contains("X \"quoted\""));
        assert!(p.contains("a\nb"));
    }
}
