use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static HEX_COLOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").ok());

/// One band of a colour map.
///
/// A band with `limit: Some(l)` applies to values below `l`; the band with
/// `limit: None` is the default for values not covered by any limit.
/// The `limit` key must be present in documents, as `null` for the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorMapItem {
    #[serde(deserialize_with = "Option::deserialize")]
    pub limit: Option<f64>,
    pub color: String,
    pub label: String,
}

/// A named set of colour bands for speed profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorMap {
    pub name: String,
    pub items: Vec<ColorMapItem>,
}

fn item(limit: Option<f64>, color: &str, label: &str) -> ColorMapItem {
    ColorMapItem {
        limit,
        color: color.to_owned(),
        label: label.to_owned(),
    }
}

impl ColorMap {
    /// Bands for high-speed rail, in km/h.
    #[must_use]
    pub fn high_speed_train() -> Self {
        Self {
            name: "High-speed train".to_owned(),
            items: vec![
                item(None, "#9C59FF", "400+"),
                item(Some(400.0), "#009B33", "350+"),
                item(Some(350.0), "#00D219", "300+"),
                item(Some(300.0), "#A1FC00", "250+"),
                item(Some(250.0), "#FFFF00", "200+"),
                item(Some(200.0), "#FF9500", "160+"),
                item(Some(160.0), "#FF0000", "<160"),
            ],
        }
    }

    /// Bands for conventional rail, in km/h.
    #[must_use]
    pub fn low_speed_train() -> Self {
        Self {
            name: "Low-speed train".to_owned(),
            items: vec![
                item(None, "#9C59FF", "200+"),
                item(Some(200.0), "#009B33", "160+"),
                item(Some(160.0), "#00D219", "120+"),
                item(Some(120.0), "#A1FC00", "100+"),
                item(Some(100.0), "#FFFF00", "80+"),
                item(Some(80.0), "#FF9500", "60+"),
                item(Some(60.0), "#FF0000", "<60"),
            ],
        }
    }

    /// The built-in colour maps.
    #[must_use]
    pub fn builtin() -> Vec<Self> {
        vec![Self::high_speed_train(), Self::low_speed_train()]
    }

    /// Returns the band a value falls into: the tightest limit the value is
    /// below, or the default band.
    #[must_use]
    pub fn classify(&self, value: f64) -> Option<&ColorMapItem> {
        self.items
            .iter()
            .filter_map(|i| i.limit.filter(|&l| value < l).map(|l| (l, i)))
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, i)| i)
            .or_else(|| self.items.iter().find(|i| i.limit.is_none()))
    }
}

/// Checks for a `#rrggbb` colour.
#[must_use]
pub fn is_hex_color(color: &str) -> bool {
    HEX_COLOR.as_ref().is_some_and(|re| re.is_match(color))
}
