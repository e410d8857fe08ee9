//! Built-in digest algorithms

use crate::Error;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A digest algorithm a node can be bound to
///
/// `Sha256` is the default, used whenever a caller does not pick one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Sha256,
    Sha1,
    Sha512,
    Blake3,
}

impl Algorithm {
    /// All supported algorithms
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Sha256,
        Algorithm::Sha1,
        Algorithm::Sha512,
        Algorithm::Blake3,
    ];

    /// Lowercase name, as accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha512 => "sha512",
            Algorithm::Blake3 => "blake3",
        }
    }

    /// Length in bytes of the digests this algorithm produces
    pub fn output_len(&self) -> usize {
        match self {
            Algorithm::Sha256 => 32,
            Algorithm::Sha1 => 20,
            Algorithm::Sha512 => 64,
            Algorithm::Blake3 => blake3::OUT_LEN,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "");
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.name() == wanted)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sha256() {
        assert_eq!(Algorithm::default(), Algorithm::Sha256);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("sha256".parse::<Algorithm>().unwrap(), Algorithm::Sha256);
        assert_eq!("SHA-1".parse::<Algorithm>().unwrap(), Algorithm::Sha1);
        assert_eq!(" sha512 ".parse::<Algorithm>().unwrap(), Algorithm::Sha512);
        assert_eq!("Blake3".parse::<Algorithm>().unwrap(), Algorithm::Blake3);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "md5".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, Error::UnknownAlgorithm(ref name) if name == "md5"));
    }

    #[test]
    fn test_serializes_as_name() {
        for alg in Algorithm::ALL {
            let json = serde_json::to_string(&alg).unwrap();
            assert_eq!(json, format!("\"{}\"", alg.name()));
        }
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.to_string().parse::<Algorithm>().unwrap(), alg);
        }
    }
}
