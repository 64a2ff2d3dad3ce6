use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collection::Record;

// ============================================================================
// Enumerations
// ============================================================================

/// Kind of listing. Serialized with the Portuguese labels the catalog uses
/// everywhere (data set, filter chips, form selects).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "Apartamento")]
    Apartment,
    #[serde(rename = "Casa")]
    House,
    #[serde(rename = "Loft")]
    Loft,
    #[serde(rename = "Lote")]
    Lot,
    #[serde(rename = "Pousada")]
    Inn,
    #[serde(rename = "Terreno")]
    Land,
    #[serde(rename = "Sítio")]
    SmallFarm,
    #[serde(rename = "Fazenda")]
    Farm,
}

impl PropertyType {
    pub const ALL: [PropertyType; 8] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Loft,
        PropertyType::Lot,
        PropertyType::Inn,
        PropertyType::Land,
        PropertyType::SmallFarm,
        PropertyType::Farm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartamento",
            PropertyType::House => "Casa",
            PropertyType::Loft => "Loft",
            PropertyType::Lot => "Lote",
            PropertyType::Inn => "Pousada",
            PropertyType::Land => "Terreno",
            PropertyType::SmallFarm => "Sítio",
            PropertyType::Farm => "Fazenda",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.label() == label)
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Urban vs. rural zoning of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyCategory {
    #[serde(rename = "Urbano")]
    Urban,
    #[serde(rename = "Rural")]
    Rural,
}

impl PropertyCategory {
    pub const ALL: [PropertyCategory; 2] = [PropertyCategory::Urban, PropertyCategory::Rural];

    pub fn label(&self) -> &'static str {
        match self {
            PropertyCategory::Urban => "Urbano",
            PropertyCategory::Rural => "Rural",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// A real-estate listing. `broker_id`/`owner_id` are soft references: they
/// are never enforced against the broker/owner collections, and dangling
/// values are resolved to "N/A" at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub category: PropertyCategory,
    pub address: Address,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Square meters.
    pub area: f64,
    /// Image URLs, either remote or self-contained `data:` URLs produced by
    /// the upload widget. Order is whatever ingestion produced.
    pub images: Vec<String>,
    pub broker_id: String,
    pub owner_id: String,
    pub features: Vec<String>,
    pub is_featured: bool,
}

impl Default for Property {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            price: 0.0,
            property_type: PropertyType::Apartment,
            category: PropertyCategory::Urban,
            address: Address::default(),
            bedrooms: 0,
            bathrooms: 0,
            area: 0.0,
            images: Vec::new(),
            broker_id: String::new(),
            owner_id: String::new(),
            features: Vec::new(),
            is_featured: false,
        }
    }
}

impl Record for Property {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn fresh_id() -> String {
        format!("prop-{}", Uuid::new_v4())
    }
}

// ============================================================================
// Read projections
// ============================================================================

/// Home-page projection: featured listings narrowed by an optional type and
/// a free-text term matched case-insensitively against title, city and
/// state. An empty term matches everything. Input order is preserved.
pub fn featured_matching<'a, I>(
    items: I,
    type_filter: Option<PropertyType>,
    term: &str,
) -> Vec<&'a Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    let needle = term.trim().to_lowercase();
    items
        .into_iter()
        .filter(|p| p.is_featured)
        .filter(|p| type_filter.map_or(true, |t| p.property_type == t))
        .filter(|p| {
            needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.address.city.to_lowercase().contains(&needle)
                || p.address.state.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn type_labels_round_trip() {
        for t in PropertyType::ALL {
            assert_eq!(PropertyType::from_label(t.label()), Some(t));
        }
        assert_eq!(PropertyType::from_label("Castelo"), None);
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let json = serde_json::to_value(&seed::properties()[0]).unwrap();
        assert_eq!(json["type"], "Apartamento");
        assert_eq!(json["category"], "Urbano");
        assert_eq!(json["brokerId"], "broker-1");
        assert_eq!(json["address"]["zipCode"], "01310-100");
        assert_eq!(json["isFeatured"], true);
    }

    #[test]
    fn featured_with_no_filters_is_exactly_the_featured_subset() {
        let props = seed::properties();
        let hits = featured_matching(&props, None, "");
        let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["prop-1", "prop-2", "prop-4", "prop-6"]);
    }

    #[test]
    fn term_matches_title_city_and_state_case_insensitively() {
        let props = seed::properties();

        let by_city = featured_matching(&props, None, "sÃO PAULO");
        assert!(by_city.iter().all(|p| p.address.city == "São Paulo"));
        assert_eq!(by_city.len(), 2);

        let by_state = featured_matching(&props, None, "mg");
        assert_eq!(by_state.len(), 1);
        assert_eq!(by_state[0].id, "prop-6");

        let by_title = featured_matching(&props, None, "loft industrial");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "prop-4");
    }

    #[test]
    fn type_filter_excludes_other_types_and_unfeatured() {
        let props = seed::properties();
        // prop-3 is a Sítio but not featured, so the filter finds nothing.
        assert!(featured_matching(&props, Some(PropertyType::SmallFarm), "").is_empty());

        let houses = featured_matching(&props, Some(PropertyType::House), "");
        assert_eq!(houses.len(), 1);
        assert_eq!(houses[0].id, "prop-2");
    }

    #[test]
    fn term_that_matches_nothing_yields_empty() {
        let props = seed::properties();
        assert!(featured_matching(&props, None, "xyzzy").is_empty());
    }
}
