#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street  : Option<String>,
    pub zip     : Option<String>,
    pub city    : Option<String>,
    pub country : Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.street.is_none() && self.zip.is_none() && self.city.is_none() && self.country.is_none()
    }

    /// Fills every missing field from `fallback`.
    ///
    /// Used when a reverse geocoding result omits parts of the address
    /// and the previously known values should be kept.
    pub fn filled_with(self, fallback: &Address) -> Address {
        Address {
            street: self.street.or_else(|| fallback.street.clone()),
            zip: self.zip.or_else(|| fallback.zip.clone()),
            city: self.city.or_else(|| fallback.city.clone()),
            country: self.country.or_else(|| fallback.country.clone()),
        }
    }
}
