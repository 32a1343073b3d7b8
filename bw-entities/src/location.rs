use crate::{
    address::Address, danger::DangerLevel, geo::MapPoint, id::Id, time::Timestamp,
    time_category::TimeCategory,
};

/// Fallback image shown for records without an uploaded photo.
pub const DEFAULT_IMAGE_URL: &str =
    "https://res.cloudinary.com/dnqms2vje/image/upload/v1768855945/berlin-wandel/No-Image.png";

/// A reported location.
///
/// `created_by` holds the username of the reporter and never changes after
/// creation, no matter who edits the record later.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id            : Id,
    pub title         : String,
    pub pos           : MapPoint,
    pub date          : Timestamp,
    pub category      : String,
    pub description   : String,
    pub address       : Address,
    pub created_by    : String,
    pub danger        : DangerLevel,
    pub time_category : TimeCategory,
    pub tags          : Vec<String>,
    pub images        : Vec<String>,
}

impl Location {
    pub fn is_created_by(&self, username: &str) -> bool {
        self.created_by == username
    }
}

/// Splits a comma separated tag list as it arrives from the form,
/// dropping surrounding whitespace and empty items.
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_comma_separated_tags() {
        assert_eq!(
            split_tags("park, baustelle ,,  , radweg"),
            vec!["park".to_string(), "baustelle".into(), "radweg".into()]
        );
        assert!(split_tags("").is_empty());
        assert!(split_tags(" , ").is_empty());
    }
}
