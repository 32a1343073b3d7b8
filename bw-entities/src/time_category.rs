use std::fmt;

use strum::{EnumCount, EnumIter, EnumString};

/// How long a reported change is expected to last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum TimeCategory {
    #[strum(serialize = "permanent")]
    Permanent,
    #[strum(serialize = "semi-permanent")]
    SemiPermanent,
    #[strum(serialize = "temporary")]
    Temporary,
}

impl TimeCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Permanent => "permanent",
            Self::SemiPermanent => "semi-permanent",
            Self::Temporary => "temporary",
        }
    }
}

impl Default for TimeCategory {
    fn default() -> Self {
        Self::Permanent
    }
}

impl fmt::Display for TimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_wire_strings() {
        assert_eq!("semi-permanent".parse(), Ok(TimeCategory::SemiPermanent));
        assert_eq!("temporary".parse(), Ok(TimeCategory::Temporary));
        assert!("forever".parse::<TimeCategory>().is_err());
    }
}
