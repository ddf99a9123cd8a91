// tests/properties_test.rs
use bsm_greeks::analytics::{bs_analytic, greeks, OptionType, PricingParameters};
use proptest::prelude::*;

fn valid_inputs() -> impl Strategy<Value = (f64, f64, f64, f64, f64)> {
    (
        20.0f64..200.0,  // S
        0.7f64..1.4,     // K / S
        0.05f64..3.0,    // T
        -0.02f64..0.12,  // r
        0.05f64..0.8,    // vol
    )
        .prop_map(|(s, m, t, r, vol)| (s, s * m, t, r, vol))
}

// |d1| stays below 5 here, so Φ(d1) is strictly inside (0, 1) in f64.
fn moderate_inputs() -> impl Strategy<Value = (f64, f64, f64, f64, f64)> {
    (
        20.0f64..200.0,
        0.8f64..1.25,
        0.25f64..2.0,
        -0.02f64..0.08,
        0.15f64..0.6,
    )
        .prop_map(|(s, m, t, r, vol)| (s, s * m, t, r, vol))
}

proptest! {
    #[test]
    fn put_call_parity_holds((s, k, t, r, vol) in valid_inputs()) {
        let p = PricingParameters::new(s, k, t, r, vol, OptionType::Call).unwrap();
        let pair = bs_analytic::price_pair(&p).unwrap();
        let forward_gap = s - k * (-r * t).exp();
        let scale = s.max(k);
        prop_assert!((pair.call - pair.put - forward_gap).abs() <= 1e-6 * scale,
            "call {} put {} gap {}", pair.call, pair.put, forward_gap);
    }

    #[test]
    fn gamma_and_vega_match_between_types((s, k, t, r, vol) in valid_inputs()) {
        let call = PricingParameters::new(s, k, t, r, vol, OptionType::Call).unwrap();
        let gc = greeks::greeks(&call).unwrap();
        let gp = greeks::greeks(&call.with_option_type(OptionType::Put)).unwrap();
        prop_assert_eq!(gc.gamma, gp.gamma);
        prop_assert_eq!(gc.vega, gp.vega);
    }

    #[test]
    fn delta_within_open_bounds((s, k, t, r, vol) in moderate_inputs()) {
        let call = PricingParameters::new(s, k, t, r, vol, OptionType::Call).unwrap();
        let dc = greeks::greeks(&call).unwrap().delta;
        let dp = greeks::greeks(&call.with_option_type(OptionType::Put)).unwrap().delta;
        prop_assert!(dc > 0.0 && dc < 1.0, "call delta {}", dc);
        prop_assert!(dp > -1.0 && dp < 0.0, "put delta {}", dp);
    }

    #[test]
    fn prices_bounded_by_arbitrage_limits((s, k, t, r, vol) in valid_inputs()) {
        let p = PricingParameters::new(s, k, t, r, vol, OptionType::Call).unwrap();
        let pair = bs_analytic::price_pair(&p).unwrap();
        let df = p.discount_factor();
        let tol = 1e-9 * s.max(k);
        prop_assert!(pair.call >= (s - k * df).max(0.0) - tol);
        prop_assert!(pair.call <= s + tol);
        prop_assert!(pair.put >= (k * df - s).max(0.0) - tol);
        prop_assert!(pair.put <= k * df + tol);
    }

    #[test]
    fn non_positive_inputs_always_rejected(bad in -10.0f64..=0.0, which in 0usize..4) {
        let mut args = [42.0, 40.0, 0.5, 0.2];
        args[which] = bad;
        let result = PricingParameters::new(args[0], args[1], args[2], 0.1, args[3], OptionType::Call);
        prop_assert!(result.unwrap_err().is_invalid_parameter());
    }
}
