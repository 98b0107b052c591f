//! Property listing record.

use serde::{Deserialize, Serialize};

/// A single property listing.
///
/// `Property` is immutable: build instances with [`Property::new`] and the
/// `with_*` methods, or deserialize them from the listings document. Every
/// text field is opaque display/search text except `price` and `features`,
/// whose numeric parts are exposed through [`Property::price_value`] and
/// [`Property::room_count`].
///
/// Both the English keys and the agency's original Spanish keys are accepted
/// on input (`titulo`, `precio`, `tipo`, `ubicacion`, `caracteristicas`,
/// `descripcion`, `imgUrl`). Output always uses the English names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    id: u32,
    #[serde(alias = "titulo")]
    title: String,
    #[serde(default, alias = "descripcion")]
    description: String,
    #[serde(alias = "ubicacion")]
    location: String,
    #[serde(alias = "precio")]
    price: String,
    #[serde(rename = "type", alias = "tipo")]
    kind: String,
    #[serde(default, alias = "caracteristicas")]
    features: String,
    #[serde(default, alias = "imgUrl")]
    image_url: String,
}

impl Property {
    /// Creates a listing with the given id and title; every other field is empty.
    #[must_use]
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            location: String::new(),
            price: String::new(),
            kind: String::new(),
            features: String::new(),
            image_url: String::new(),
        }
    }

    #[must_use]
    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_location(self, location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..self
        }
    }

    /// Sets the display price, e.g. `"450.000"`.
    #[must_use]
    pub fn with_price(self, price: impl Into<String>) -> Self {
        Self {
            price: price.into(),
            ..self
        }
    }

    /// Sets the listing type, e.g. `"Venta"` or `"Alquiler"`.
    #[must_use]
    pub fn with_kind(self, kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..self
        }
    }

    /// Sets the pipe-delimited feature summary, e.g. `"3 amb. | 120m² | 2 baños"`.
    #[must_use]
    pub fn with_features(self, features: impl Into<String>) -> Self {
        Self {
            features: features.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_image_url(self, image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            ..self
        }
    }

    /// Unique identifier within the listing store.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Raw location text, e.g. `"Palermo, Buenos Aires"`.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Raw price text with `.` thousands separators.
    #[must_use]
    pub fn price(&self) -> &str {
        &self.price
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn features(&self) -> &str {
        &self.features
    }

    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// The first comma-separated segment of the location, trimmed.
    ///
    /// `"Palermo, Buenos Aires"` yields `"Palermo"`.
    #[must_use]
    pub fn neighbourhood(&self) -> &str {
        self.location.split(',').next().unwrap_or_default().trim()
    }

    /// The leading integer of the price, with `.` separators removed.
    ///
    /// `"450.000 USD"` and `"450.000,00"` both yield `Some(450_000)`. Returns
    /// `None` when the price does not start with a digit.
    #[must_use]
    pub fn price_value(&self) -> Option<u64> {
        let digits: String = self.price.chars().filter(|c| *c != '.').collect();
        leading_integer(digits.trim_start())
    }

    /// The room count leading the first `|` segment of `features`.
    ///
    /// `"3 amb. | 120m²"` yields `Some(3)`. Returns `None` when the segment
    /// does not start with a digit.
    #[must_use]
    pub fn room_count(&self) -> Option<u32> {
        let segment = self.features.split('|').next().unwrap_or_default().trim();
        leading_integer(segment)
    }
}

fn leading_integer<T: std::str::FromStr>(s: &str) -> Option<T> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}
