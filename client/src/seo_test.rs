use super::*;
use crate::content::room::SAMPLE_ROOM;

fn bare() -> SeoFields {
    SeoFields::new("Phòng đẹp", "Mô tả ngắn")
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn image_falls_back_to_placeholder() {
    assert_eq!(bare().image(), DEFAULT_IMAGE);
    let fields = SeoFields { image: Some("/a.jpg".into()), ..bare() };
    assert_eq!(fields.image(), "/a.jpg");
}

#[test]
fn currency_defaults_to_vnd() {
    assert_eq!(bare().currency(), "VND");
}

#[test]
fn canonical_prefers_explicit_then_current_url_then_placeholder() {
    let explicit = SeoFields { canonical: Some("https://site.vn/x".into()), ..bare() };
    assert_eq!(explicit.canonical(Some("https://site.vn/y")), "https://site.vn/x");
    assert_eq!(bare().canonical(Some("https://site.vn/y")), "https://site.vn/y");
    assert_eq!(bare().canonical(None), DEFAULT_CANONICAL);
}

#[test]
fn keywords_content_joins_or_omits() {
    assert_eq!(bare().keywords_content(), None);
    let fields = SeoFields { keywords: vec!["a".into(), "b c".into()], ..bare() };
    assert_eq!(fields.keywords_content().as_deref(), Some("a, b c"));
}

// =============================================================
// Structured data
// =============================================================

#[test]
fn structured_data_has_place_header() {
    let doc = structured_data(&bare(), "https://site.vn/p");
    assert_eq!(doc["@context"], "https://schema.org");
    assert_eq!(doc["@type"], "Place");
    assert_eq!(doc["name"], "Phòng đẹp");
    assert_eq!(doc["description"], "Mô tả ngắn");
    assert_eq!(doc["image"], DEFAULT_IMAGE);
    assert_eq!(doc["url"], "https://site.vn/p");
}

#[test]
fn offers_omitted_without_price() {
    let doc = structured_data(&bare(), DEFAULT_CANONICAL);
    assert!(doc.get("offers").is_none());
}

#[test]
fn offers_use_default_currency_when_price_given() {
    let fields = SeoFields { price: Some(3_000_000), ..bare() };
    let doc = structured_data(&fields, DEFAULT_CANONICAL);
    assert_eq!(doc["offers"]["@type"], "Offer");
    assert_eq!(doc["offers"]["price"], 3_000_000);
    assert_eq!(doc["offers"]["priceCurrency"], "VND");
}

#[test]
fn offers_use_supplied_currency() {
    let fields = SeoFields { price: Some(250), currency: Some("USD".into()), ..bare() };
    let doc = structured_data(&fields, DEFAULT_CANONICAL);
    assert_eq!(doc["offers"]["priceCurrency"], "USD");
}

#[test]
fn amenity_feature_has_one_true_entry_per_amenity() {
    let fields = SeoFields { amenities: vec!["Wi-Fi".into(), "Máy lạnh".into(), "Ban công".into()], ..bare() };
    let doc = structured_data(&fields, DEFAULT_CANONICAL);
    let list = doc["amenityFeature"].as_array().cloned().unwrap_or_default();
    assert_eq!(list.len(), 3);
    for (entry, name) in list.iter().zip(&fields.amenities) {
        assert_eq!(entry["@type"], "LocationFeatureSpecification");
        assert_eq!(entry["name"], name.as_str());
        assert_eq!(entry["value"], true);
    }
}

#[test]
fn amenity_feature_is_empty_array_without_amenities() {
    let doc = structured_data(&bare(), DEFAULT_CANONICAL);
    assert_eq!(doc["amenityFeature"], serde_json::json!([]));
}

#[test]
fn address_geo_and_area_branches_follow_inputs() {
    let doc = structured_data(&bare(), DEFAULT_CANONICAL);
    assert!(doc.get("address").is_none());
    assert!(doc.get("geo").is_none());
    assert!(doc.get("floorSize").is_none());

    let fields = SeoFields::from(&SAMPLE_ROOM);
    let doc = structured_data(&fields, DEFAULT_CANONICAL);
    assert_eq!(doc["address"]["@type"], "PostalAddress");
    assert_eq!(doc["address"]["addressLocality"], "Quận 3");
    assert_eq!(doc["geo"]["@type"], "GeoCoordinates");
    assert_eq!(doc["geo"]["latitude"], SAMPLE_ROOM.coordinates.latitude);
    assert_eq!(doc["floorSize"]["unitCode"], "MTK");
    assert_eq!(doc["floorSize"]["value"], 28.0);
}

#[test]
fn room_fields_carry_price_and_first_image() {
    let fields = SeoFields::from(&SAMPLE_ROOM);
    assert_eq!(fields.price, Some(SAMPLE_ROOM.price));
    assert_eq!(fields.image(), SAMPLE_ROOM.images[0]);
    assert_eq!(fields.amenities.len(), SAMPLE_ROOM.amenities.len());
}

#[test]
fn script_body_escapes_markup_characters() {
    let fields = SeoFields::new("A & B </script>", "x");
    let body = to_script_body(&structured_data(&fields, DEFAULT_CANONICAL));
    assert!(!body.contains('<'));
    assert!(!body.contains('&'));
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap_or_default();
    assert_eq!(parsed["name"], "A & B </script>");
}

// =============================================================
// Head tag set
// =============================================================

fn content_of(tags: &HeadTags, key: MetaKey) -> Option<&str> {
    tags.meta.iter().find(|t| t.key == key).map(|t| t.content.as_str())
}

#[test]
fn head_tags_carry_every_required_meta_key() {
    let tags = head_tags(&SeoFields::from(&SAMPLE_ROOM), Some("https://phongtot.vn/rooms/x"));
    let expected = [
        MetaKey::Name("description"),
        MetaKey::Name("keywords"),
        MetaKey::Property("og:type"),
        MetaKey::Property("og:site_name"),
        MetaKey::Property("og:locale"),
        MetaKey::Property("og:title"),
        MetaKey::Property("og:description"),
        MetaKey::Property("og:image"),
        MetaKey::Property("og:url"),
        MetaKey::Name("twitter:card"),
        MetaKey::Name("twitter:title"),
        MetaKey::Name("twitter:description"),
        MetaKey::Name("twitter:image"),
    ];
    let keys: Vec<MetaKey> = tags.meta.iter().map(|t| t.key).collect();
    assert_eq!(keys, expected);
}

#[test]
fn open_graph_uses_property_and_twitter_uses_name() {
    let tags = head_tags(&bare(), None);
    for tag in &tags.meta {
        match tag.key {
            MetaKey::Property(key) => assert!(key.starts_with("og:"), "{key}"),
            MetaKey::Name(key) => assert!(!key.starts_with("og:"), "{key}"),
        }
    }
}

#[test]
fn head_tags_share_canonical_between_link_og_url_and_json_ld() {
    let tags = head_tags(&bare(), Some("https://phongtot.vn/about"));
    assert_eq!(tags.canonical, "https://phongtot.vn/about");
    assert_eq!(content_of(&tags, MetaKey::Property("og:url")), Some("https://phongtot.vn/about"));
    let doc: serde_json::Value = serde_json::from_str(&tags.json_ld).unwrap();
    assert_eq!(doc["url"], "https://phongtot.vn/about");
}

#[test]
fn head_tags_fill_defaults_and_omit_keywords() {
    let tags = head_tags(&bare(), None);
    assert_eq!(tags.title, "Phòng đẹp");
    assert_eq!(tags.canonical, DEFAULT_CANONICAL);
    assert_eq!(content_of(&tags, MetaKey::Name("keywords")), None);
    assert_eq!(content_of(&tags, MetaKey::Property("og:image")), Some(DEFAULT_IMAGE));
    assert_eq!(content_of(&tags, MetaKey::Name("twitter:image")), Some(DEFAULT_IMAGE));
    assert_eq!(content_of(&tags, MetaKey::Name("twitter:card")), Some("summary_large_image"));
}

#[test]
fn json_ld_script_type_is_application_ld_json() {
    assert_eq!(JSON_LD_TYPE, "application/ld+json");
}
