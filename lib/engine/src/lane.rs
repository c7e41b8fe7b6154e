use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use herodex_core::{Error, normalize};

/// A gameplay lane. Closed enumeration: the lane-to-roles table is fixed
/// and not derived from the dataset's role values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Gold,
    Mid,
    Roam,
    Jungle,
    Exp,
}

impl Lane {
    pub const ALL: [Lane; 5] = [Lane::Gold, Lane::Mid, Lane::Roam, Lane::Jungle, Lane::Exp];

    /// Hero roles eligible for this lane.
    #[must_use]
    pub fn roles(&self) -> &'static [&'static str] {
        match self {
            Lane::Gold => &["marksman"],
            Lane::Mid => &["mage", "support"],
            Lane::Roam => &["tank", "support"],
            Lane::Jungle => &["assassin", "fighter"],
            Lane::Exp => &["fighter", "tank"],
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Lane::Gold => "gold",
            Lane::Mid => "mid",
            Lane::Roam => "roam",
            Lane::Jungle => "jungle",
            Lane::Exp => "exp",
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lane {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "gold" => Ok(Lane::Gold),
            "mid" => Ok(Lane::Mid),
            "roam" => Ok(Lane::Roam),
            "jungle" => Ok(Lane::Jungle),
            "exp" => Ok(Lane::Exp),
            other => Err(Error::InvalidLane(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" Gold ".parse::<Lane>().unwrap(), Lane::Gold);
        assert_eq!("JUNGLE".parse::<Lane>().unwrap(), Lane::Jungle);
    }

    #[test]
    fn test_unknown_lane_is_rejected() {
        assert!(matches!(
            "top".parse::<Lane>(),
            Err(Error::InvalidLane(l)) if l == "top"
        ));
    }

    #[test]
    fn test_role_table() {
        assert_eq!(Lane::Gold.roles(), ["marksman"]);
        assert_eq!(Lane::Mid.roles(), ["mage", "support"]);
        assert_eq!(Lane::Roam.roles(), ["tank", "support"]);
        assert_eq!(Lane::Jungle.roles(), ["assassin", "fighter"]);
        assert_eq!(Lane::Exp.roles(), ["fighter", "tank"]);
    }

    #[test]
    fn test_display_round_trips() {
        for lane in Lane::ALL {
            assert_eq!(lane.as_str().parse::<Lane>().unwrap(), lane);
        }
    }
}
