//! Search-engine metadata derivation.
//!
//! DESIGN
//! ======
//! Everything the `SeoHead` component renders is computed here from a plain
//! `SeoFields` value, so tag contents and the JSON-LD document can be checked
//! without a renderer. Missing optional fields never fail; they either fall
//! back to a default or drop the matching structured-data branch.

#[cfg(test)]
#[path = "seo_test.rs"]
mod seo_test;

use serde_json::{Map, Value, json};

use crate::content::SITE_NAME;
use crate::content::room::{GeoPoint, PostalAddress, Room};

/// Image used for social previews when a page supplies none.
pub const DEFAULT_IMAGE: &str = "/placeholder.svg";
/// Canonical URL used when neither an explicit value nor the page URL is known.
pub const DEFAULT_CANONICAL: &str = "https://example.com";
pub const DEFAULT_CURRENCY: &str = "VND";
pub const DEFAULT_LOCALE: &str = "vi_VN";
/// `type` attribute of the structured-data `<script>`.
pub const JSON_LD_TYPE: &str = "application/ld+json";
pub const TWITTER_CARD: &str = "summary_large_image";

/// Attribute that identifies a `<meta>` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaKey {
    /// `<meta name=...>` (description, keywords, Twitter card).
    Name(&'static str),
    /// `<meta property=...>` (Open Graph).
    Property(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: String,
}

/// Everything `SeoHead` places in the document head, in render order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadTags {
    pub title: String,
    /// `href` of `<link rel="canonical">`.
    pub canonical: String,
    pub meta: Vec<MetaTag>,
    /// Body of the `<script type="application/ld+json">` element.
    pub json_ld: String,
}

/// Descriptive input for the head tags and structured data of one page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeoFields {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub image: Option<String>,
    pub canonical: Option<String>,
    pub price: Option<u64>,
    pub currency: Option<String>,
    /// Floor area in square metres.
    pub area: Option<f64>,
    pub amenities: Vec<String>,
    pub address: Option<PostalAddress>,
    pub coordinates: Option<GeoPoint>,
}

impl SeoFields {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), ..Self::default() }
    }

    /// Preview image, falling back to the static placeholder.
    pub fn image(&self) -> &str {
        self.image.as_deref().unwrap_or(DEFAULT_IMAGE)
    }

    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    /// Canonical URL: explicit value, else the current page URL, else the
    /// fixed placeholder.
    pub fn canonical(&self, current_url: Option<&str>) -> String {
        self.canonical
            .as_deref()
            .or(current_url)
            .unwrap_or(DEFAULT_CANONICAL)
            .to_owned()
    }

    /// Content of the `keywords` meta tag, `None` when no keywords were given.
    pub fn keywords_content(&self) -> Option<String> {
        if self.keywords.is_empty() {
            None
        } else {
            Some(self.keywords.join(", "))
        }
    }
}

impl From<&Room> for SeoFields {
    fn from(room: &Room) -> Self {
        Self {
            title: room.title.to_owned(),
            description: room.description.to_owned(),
            keywords: vec!["thuê phòng".to_owned(), room.address.locality.to_owned(), room.address.region.to_owned()],
            image: room.images.first().map(|s| (*s).to_owned()),
            canonical: None,
            price: Some(room.price),
            currency: Some(room.currency.to_owned()),
            area: Some(room.area),
            amenities: room.amenities.iter().map(|a| (*a).to_owned()).collect(),
            address: Some(room.address),
            coordinates: Some(room.coordinates),
        }
    }
}

/// Resolve defaults and derive the full head tag set for a page.
pub fn head_tags(fields: &SeoFields, current_url: Option<&str>) -> HeadTags {
    let canonical = fields.canonical(current_url);
    let json_ld = to_script_body(&structured_data(fields, &canonical));
    let image = fields.image();

    let mut meta = vec![name("description", &fields.description)];
    if let Some(keywords) = fields.keywords_content() {
        meta.push(name("keywords", &keywords));
    }
    meta.extend([
        property("og:type", "website"),
        property("og:site_name", SITE_NAME),
        property("og:locale", DEFAULT_LOCALE),
        property("og:title", &fields.title),
        property("og:description", &fields.description),
        property("og:image", image),
        property("og:url", &canonical),
        name("twitter:card", TWITTER_CARD),
        name("twitter:title", &fields.title),
        name("twitter:description", &fields.description),
        name("twitter:image", image),
    ]);

    HeadTags { title: fields.title.clone(), canonical, meta, json_ld }
}

fn name(key: &'static str, content: &str) -> MetaTag {
    MetaTag { key: MetaKey::Name(key), content: content.to_owned() }
}

fn property(key: &'static str, content: &str) -> MetaTag {
    MetaTag { key: MetaKey::Property(key), content: content.to_owned() }
}

/// Build the schema.org `Place` document for a page.
pub fn structured_data(fields: &SeoFields, canonical: &str) -> Value {
    let mut doc = Map::new();
    doc.insert("@context".into(), json!("https://schema.org"));
    doc.insert("@type".into(), json!("Place"));
    doc.insert("name".into(), json!(fields.title));
    doc.insert("description".into(), json!(fields.description));
    doc.insert("image".into(), json!(fields.image()));
    doc.insert("url".into(), json!(canonical));

    if let Some(address) = fields.address {
        doc.insert(
            "address".into(),
            json!({
                "@type": "PostalAddress",
                "streetAddress": address.street,
                "addressLocality": address.locality,
                "addressRegion": address.region,
                "addressCountry": address.country,
            }),
        );
    }
    if let Some(geo) = fields.coordinates {
        doc.insert(
            "geo".into(),
            json!({
                "@type": "GeoCoordinates",
                "latitude": geo.latitude,
                "longitude": geo.longitude,
            }),
        );
    }
    if let Some(price) = fields.price {
        doc.insert(
            "offers".into(),
            json!({
                "@type": "Offer",
                "price": price,
                "priceCurrency": fields.currency(),
                "availability": "https://schema.org/InStock",
            }),
        );
    }

    let amenities: Vec<Value> = fields
        .amenities
        .iter()
        .map(|name| {
            json!({
                "@type": "LocationFeatureSpecification",
                "name": name,
                "value": true,
            })
        })
        .collect();
    doc.insert("amenityFeature".into(), Value::Array(amenities));

    if let Some(area) = fields.area {
        doc.insert(
            "floorSize".into(),
            json!({
                "@type": "QuantitativeValue",
                "value": area,
                "unitCode": "MTK",
            }),
        );
    }

    Value::Object(doc)
}

/// Serialize a JSON-LD document for embedding in a `<script>` element.
///
/// `<`, `>` and `&` are emitted as `\u` escapes so the payload can never close
/// the element early and needs no HTML escaping.
pub fn to_script_body(doc: &Value) -> String {
    doc.to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}
