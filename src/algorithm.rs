use std::fmt;
use std::str::FromStr;

use crate::error::DistanceError;

/// Formula used to compute the great-circle distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Haversine,
    /// Spherical special case of Vincenty's formula. Better conditioned than
    /// `Haversine` for points less than a meter apart.
    Vincenty,
}

pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::Haversine;

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Haversine, Algorithm::Vincenty];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Haversine => "haversine",
            Algorithm::Vincenty => "vincenty",
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        DEFAULT_ALGORITHM
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Algorithm::ALL.iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| DistanceError::UnsupportedAlgorithm(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("haversine".parse::<Algorithm>(), Ok(Algorithm::Haversine));
        assert_eq!(" Vincenty\n".parse::<Algorithm>(), Ok(Algorithm::Vincenty));
        assert_eq!("HAVERSINE".parse::<Algorithm>(), Ok(Algorithm::Haversine));
    }

    #[test]
    fn rejects_unknown_names() {
        let result = "karney".parse::<Algorithm>();
        assert_eq!(result, Err(DistanceError::UnsupportedAlgorithm("karney".to_string())));
        assert_eq!(result.unwrap_err().to_string(), "Algorithm not implemented: karney");
    }

    #[test]
    fn display_round_trips() {
        for algorithm in Algorithm::ALL.iter() {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(*algorithm));
        }
    }

    #[test]
    fn defaults_to_haversine() {
        assert_eq!(Algorithm::default(), Algorithm::Haversine);
    }
}
