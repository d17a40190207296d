//! Dataset identifiers and canonical cache keys.
//!
//! An identifier has exactly four `-`-separated tokens:
//!
//! ```text
//! <distribution>-<alignment>-<measurement>-<sample count>
//! fh95-1D-0.85-10000
//! ```

use anglepdf_core::types::{AlignmentDim, AlignmentRequest, PdfError, PdfResult};
use std::fmt;
use std::str::FromStr;

/// Token separator in dataset identifiers.
pub const IDENTIFIER_SEPARATOR: char = '-';

const TOKEN_COUNT: usize = 4;

/// Canonical key of one dataset.
///
/// The distribution token is lowercased and the measurement is printed in
/// shortest round-trip form, so identifiers that describe the same request
/// map to the same key and file name.
///
/// # Examples
///
/// ```
/// use anglepdf_store::CacheKey;
///
/// let key = CacheKey::parse("FH95-1d-0.850-1000").unwrap();
/// assert_eq!(key.to_string(), "fh95-1D-0.85-1000");
/// assert_eq!(key.request().sample_count(), 1000);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CacheKey {
    request: AlignmentRequest,
}

impl CacheKey {
    /// Parses a dataset identifier.
    ///
    /// # Errors
    ///
    /// - `PdfError::MalformedIdentifier` if there are not exactly four
    ///   tokens, or a token does not parse as its type
    /// - `PdfError::InvalidParameter` if the tokens parse but violate the
    ///   request invariants (measurement outside [0.5, 1.0], zero samples)
    pub fn parse(identifier: &str) -> PdfResult<Self> {
        let tokens: Vec<&str> = identifier.split(IDENTIFIER_SEPARATOR).collect();
        if tokens.len() != TOKEN_COUNT {
            return Err(PdfError::malformed(
                identifier,
                format!("expected {} tokens, found {}", TOKEN_COUNT, tokens.len()),
            ));
        }

        let distribution = tokens[0].trim();
        if distribution.is_empty() {
            return Err(PdfError::malformed(identifier, "empty distribution token"));
        }

        let alignment: AlignmentDim = tokens[1].parse().map_err(|_| {
            PdfError::malformed(
                identifier,
                format!("alignment token '{}' is neither 1D nor 3D", tokens[1]),
            )
        })?;

        let measurement: f64 = tokens[2].trim().parse().map_err(|_| {
            PdfError::malformed(
                identifier,
                format!("measurement token '{}' is not a number", tokens[2]),
            )
        })?;

        let sample_count: usize = tokens[3].trim().parse().map_err(|_| {
            PdfError::malformed(
                identifier,
                format!("sample count token '{}' is not an integer", tokens[3]),
            )
        })?;

        let request = AlignmentRequest::new(
            distribution.to_ascii_lowercase(),
            alignment,
            measurement,
            sample_count,
        )?;
        Ok(Self { request })
    }

    /// Key for an already validated request.
    pub fn from_request(request: AlignmentRequest) -> Self {
        Self { request }
    }

    /// The request this key describes.
    #[inline]
    pub fn request(&self) -> &AlignmentRequest {
        &self.request
    }

    /// File name of the dataset, `<key>.<extension>`.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self, extension)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.request;
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            r.distribution().to_ascii_lowercase(),
            r.alignment(),
            r.measurement(),
            r.sample_count(),
            sep = IDENTIFIER_SEPARATOR
        )
    }
}

impl FromStr for CacheKey {
    type Err = PdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_valid_identifier() {
        let key = CacheKey::parse("fh95-1D-0.85-10000").unwrap();
        let request = key.request();
        assert_eq!(request.distribution(), "fh95");
        assert_eq!(request.alignment(), AlignmentDim::OneD);
        assert_eq!(request.measurement(), 0.85);
        assert_eq!(request.sample_count(), 10000);
    }

    #[test]
    fn test_wrong_token_count_is_malformed() {
        for id in ["fh95-1D-0.85", "fh95-1D-0.85-10-2", "fh95", "", "fh95-1D-0.85--5"] {
            assert!(
                matches!(CacheKey::parse(id), Err(PdfError::MalformedIdentifier { .. })),
                "{:?} should be malformed",
                id
            );
        }
    }

    #[test]
    fn test_bad_token_types_are_malformed() {
        for id in [
            "fh95-2D-0.85-100",
            "fh95--0.85-100",
            "fh95-1D-high-100",
            "fh95-1D-0.85-many",
            "fh95-1D-0.85-1.5",
            "-1D-0.85-100",
        ] {
            match CacheKey::parse(id) {
                Err(PdfError::MalformedIdentifier { identifier, .. }) => assert_eq!(identifier, id),
                other => panic!("Expected MalformedIdentifier for {:?}, got {:?}", id, other),
            }
        }
    }

    #[test]
    fn test_invariant_violations_are_invalid_parameters() {
        assert!(matches!(
            CacheKey::parse("fh95-1D-0.85-0"),
            Err(PdfError::InvalidParameter { name: "sample_count", .. })
        ));
        assert!(matches!(
            CacheKey::parse("fh95-1D-0.3-100"),
            Err(PdfError::InvalidParameter { name: "measurement", .. })
        ));
        assert!(matches!(
            CacheKey::parse("fh95-1D-inf-100"),
            Err(PdfError::InvalidParameter { name: "measurement", .. })
        ));
    }

    #[test]
    fn test_unknown_distribution_still_parses() {
        // resolution happens later, in the selector
        let key = CacheKey::parse("bogus95-1D-0.95-1000").unwrap();
        assert_eq!(key.request().distribution(), "bogus95");
    }

    #[test]
    fn test_canonical_form() {
        let a = CacheKey::parse("fh95-1D-0.850-1000").unwrap();
        let b = CacheKey::parse("FH95-1d-0.85-01000").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "fh95-1D-0.85-1000");
        assert_eq!(a.file_name("bin"), "fh95-1D-0.85-1000.bin");

        let edge = CacheKey::parse("fh95-3D-1.0-5").unwrap();
        assert_eq!(edge.to_string(), "fh95-3D-1-5");
    }

    proptest! {
        #[test]
        fn prop_display_reparses_to_same_key(
            measurement in 0.5f64..=1.0,
            sample_count in 1usize..1_000_000,
            three_d in any::<bool>(),
        ) {
            let alignment = if three_d { AlignmentDim::ThreeD } else { AlignmentDim::OneD };
            let request = AlignmentRequest::new("fh95", alignment, measurement, sample_count).unwrap();
            let key = CacheKey::from_request(request);
            let reparsed = CacheKey::parse(&key.to_string()).unwrap();
            prop_assert_eq!(reparsed, key);
        }
    }
}
