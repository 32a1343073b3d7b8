use thiserror::Error;

use crate::entities::{Address, MapPoint};

/// Failures of a geocoding lookup.
///
/// The display strings are user-facing and shown verbatim in forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The address has no non-blank parts to build a query from.
    #[error("Bitte geben Sie eine Adresse an")]
    EmptyQuery,

    /// A reverse lookup was requested without coordinates.
    #[error("Bitte geben Sie Breiten- und Längengrad an")]
    MissingCoordinates,

    /// The service answered, but found nothing for the query.
    #[error("Adresse nicht gefunden")]
    NotFound,

    /// The service could not be reached or answered with an error.
    #[error("{0}")]
    Service(String),
}

pub trait GeoCodingGateway {
    /// Forward lookup of a postal address to a map point.
    ///
    /// Implementations must answer [`GeocodeError::EmptyQuery`] for an
    /// address without usable parts, without contacting the service.
    fn resolve_coordinates(&self, addr: &Address) -> Result<MapPoint, GeocodeError>;

    /// Reverse lookup of a map point to a postal address.
    ///
    /// Fields the service does not know are returned as `None`; callers
    /// decide what to fall back to (see `Address::filled_with`).
    fn resolve_address(&self, pos: MapPoint) -> Result<Address, GeocodeError>;
}
