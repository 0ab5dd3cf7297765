//! Transfer-function property tests
//!
//! Round-trip accuracy and monotonicity over seeded random samples, plus
//! the clamp/reject domain behavior contract.

use calprof_core::transfer::{
    PQ_MAX_NITS, code_to_nits, hlg_inverse_oetf, hlg_oetf, nits_to_code, try_code_to_nits,
    try_nits_to_code,
};
use calprof_core::{Eotf, Error, HdrContext};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[test]
fn pq_round_trip_reference_levels() {
    for nits in [0.0, 1.0, 100.0, 400.0, 1000.0, 4000.0, 10000.0] {
        let decoded = code_to_nits(nits_to_code(nits));
        assert!(
            (decoded - nits).abs() <= nits * 1e-4 + 1e-6,
            "nits={nits} decoded={decoded}"
        );
    }
}

#[test]
fn pq_round_trip_random_levels() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5042_5154);
    for _ in 0..10_000 {
        let nits: f64 = rng.gen_range(0.0..=PQ_MAX_NITS);
        let decoded = code_to_nits(nits_to_code(nits));
        assert!(
            (decoded - nits).abs() <= nits * 1e-4 + 1e-6,
            "nits={nits} decoded={decoded}"
        );
    }
}

#[test]
fn pq_is_monotone() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x4d4f_4e4f);
    for _ in 0..10_000 {
        let a: f64 = rng.gen_range(0.0..=PQ_MAX_NITS);
        let b: f64 = rng.gen_range(0.0..=PQ_MAX_NITS);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        assert!(
            nits_to_code(lo) <= nits_to_code(hi),
            "nits_to_code not monotone at ({lo}, {hi})"
        );
    }
}

#[test]
fn pq_output_stays_in_unit_interval() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..1_000 {
        let nits: f64 = rng.gen_range(-100.0..20_000.0);
        let code = nits_to_code(nits);
        assert!((0.0..=1.0).contains(&code), "code {code} for nits {nits}");
    }
}

#[test]
fn pq_clamps_while_checked_variants_reject() {
    assert_eq!(nits_to_code(-1.0), 0.0);
    assert_eq!(code_to_nits(2.0), code_to_nits(1.0));

    assert!(matches!(
        try_nits_to_code(-1.0),
        Err(Error::DomainRange { .. })
    ));
    assert!(matches!(
        try_nits_to_code(PQ_MAX_NITS + 1.0),
        Err(Error::DomainRange { .. })
    ));
    assert!(matches!(
        try_code_to_nits(-0.1),
        Err(Error::DomainRange { .. })
    ));
    assert!((try_nits_to_code(100.0).unwrap() - nits_to_code(100.0)).abs() < 1e-15);
}

#[test]
fn hlg_round_trip_random_levels() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x484c_4752);
    for _ in 0..10_000 {
        let e: f64 = rng.gen_range(0.0..=1.0);
        let decoded = hlg_inverse_oetf(hlg_oetf(e));
        assert!((decoded - e).abs() < 1e-9, "e={e} decoded={decoded}");
    }
}

#[test]
fn hdr_context_quantization_bounds() {
    for ctx in [
        HdrContext::HDR10,
        HdrContext::HDR10_PLUS,
        HdrContext::DOLBY_VISION,
        HdrContext::HLG,
    ] {
        assert_eq!(ctx.code_value(0.0), 0);
        assert_eq!(ctx.code_value(ctx.peak_nits), ctx.max_code());

        let mut rng = ChaCha8Rng::seed_from_u64(ctx.bit_depth as u64);
        for _ in 0..1_000 {
            let nits: f64 = rng.gen_range(0.0..=ctx.peak_nits);
            assert!(ctx.code_value(nits) <= ctx.max_code());
        }
    }
}

#[test]
fn hdr_context_presets() {
    assert_eq!(HdrContext::HDR10.eotf, Eotf::Pq);
    assert_eq!(HdrContext::HDR10.bit_depth, 10);
    assert_eq!(HdrContext::DOLBY_VISION.bit_depth, 12);
    assert_eq!(HdrContext::HLG.eotf, Eotf::Hlg);
    assert_eq!(HdrContext::HLG.peak_nits, 1000.0);
    assert_eq!(HdrContext::HDR10.color_space, "rec2020");
}
