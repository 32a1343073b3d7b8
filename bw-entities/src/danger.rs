use std::fmt;

use strum::{EnumCount, EnumIter, EnumString};

/// Danger assessment of a reported location.
///
/// The string representations below are the wire and storage format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum DangerLevel {
    #[strum(serialize = "All good!")]
    AllGood,
    Warning,
    High,
    Unknown,
}

impl DangerLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllGood => "All good!",
            Self::Warning => "Warning",
            Self::High => "High",
            Self::Unknown => "Unknown",
        }
    }
}

impl Default for DangerLevel {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parse_wire_strings() {
        assert_eq!("All good!".parse(), Ok(DangerLevel::AllGood));
        assert_eq!("Warning".parse(), Ok(DangerLevel::Warning));
        assert!("severe".parse::<DangerLevel>().is_err());
    }

    #[test]
    fn display_round_trip() {
        for level in DangerLevel::iter() {
            assert_eq!(level.as_str().parse(), Ok(level));
        }
    }
}
