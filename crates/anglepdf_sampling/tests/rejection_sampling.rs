//! End-to-end tests for the rejection sampler.
//!
//! These tests verify that:
//! - Every sampled set has exactly the requested length and valid angle ranges
//! - Sample sets drawn from the bundled table reproduce their measurement
//! - Selection errors surface as distinct error kinds

use anglepdf_core::lookup::{ShapeTable, ShapeTableHandle};
use anglepdf_core::types::{AlignmentDim, AlignmentRequest, PdfError};
use anglepdf_sampling::selector::{resolve, resolve_with};
use anglepdf_sampling::{FriedrichHerschbach, PdfRng, Sampler, SamplerConfig};
use proptest::prelude::*;
use std::f64::consts::{PI, TAU};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("anglepdf_sampling=debug")
        .with_test_writer()
        .try_init();
}

fn draw(measurement: f64, n: usize, seed: u64) -> anglepdf_sampling::AngleSampleSet {
    let sampler = resolve("fh95", &ShapeTableHandle::bundled()).unwrap();
    let request = AlignmentRequest::new("fh95", AlignmentDim::OneD, measurement, n).unwrap();
    sampler
        .sample(&request, &mut PdfRng::from_seed(seed))
        .unwrap()
        .samples
}

#[test]
fn test_samples_reproduce_measurement() {
    init_tracing();
    for (measurement, seed) in [(0.6, 1), (0.75, 2), (0.85, 3), (0.95, 4)] {
        let set = draw(measurement, 40_000, seed);
        let observed = set.projected_cos2_mean().unwrap();
        assert!(
            (observed - measurement).abs() < 0.01,
            "measurement {} reproduced as {}",
            measurement,
            observed
        );
    }
}

#[test]
fn test_alignment_increases_with_measurement() {
    let low = draw(0.6, 20_000, 21).projected_cos2_mean().unwrap();
    let high = draw(0.9, 20_000, 22).projected_cos2_mean().unwrap();
    assert!(high > low);
}

#[test]
fn test_explicit_table_scenario() {
    init_tracing();
    let table = ShapeTable::from_pairs("scenario", &[0.6, 0.85, 0.95], &[0.9, 0.4, 0.2]).unwrap();
    let handle = ShapeTableHandle::from_table(table);
    let config = SamplerConfig::builder().seed(77).batch_size(512).build().unwrap();
    let sampler = resolve_with("fh95", &handle, &config).unwrap();
    let request = AlignmentRequest::new("fh95", AlignmentDim::OneD, 0.85, 1000).unwrap();

    let outcome = sampler.sample(&request, &mut config.rng()).unwrap();
    assert_eq!(outcome.sigma, Some(0.4));
    assert_eq!(outcome.samples.len(), 1000);
    assert!(outcome.samples.theta().iter().all(|t| (0.0..=PI).contains(t)));
}

#[test]
fn test_unknown_distribution() {
    let err = resolve("bogus95", &ShapeTableHandle::bundled()).unwrap_err();
    assert!(matches!(err, PdfError::UnsupportedDistribution(name) if name == "bogus95"));
}

#[test]
fn test_three_d_is_not_implemented() {
    let sampler = resolve("fh95", &ShapeTableHandle::bundled()).unwrap();
    let request = AlignmentRequest::new("fh95", AlignmentDim::ThreeD, 0.85, 10).unwrap();
    let err = sampler
        .sample(&request, &mut PdfRng::from_seed(1))
        .unwrap_err();
    assert!(matches!(err, PdfError::NotImplemented(_)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_length_and_ranges(sigma in 0.05f64..5.0f64, n in 1usize..2_000, seed in any::<u64>()) {
        let sampler = FriedrichHerschbach::new(ShapeTableHandle::bundled());
        let set = sampler.sample_1d(sigma, n, &mut PdfRng::from_seed(seed)).unwrap();

        prop_assert_eq!(set.theta().len(), n);
        prop_assert_eq!(set.phi().len(), n);
        prop_assert_eq!(set.chi().len(), n);
        prop_assert!(set.theta().iter().all(|t| (0.0..=PI).contains(t)));
        prop_assert!(set.phi().iter().all(|p| (0.0..TAU).contains(p)));
        prop_assert!(set.chi().iter().all(|c| (0.0..TAU).contains(c)));
    }
}
