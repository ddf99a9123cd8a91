// demos/error_handling_demo.rs
use bsm_greeks::analytics::{bs_analytic, OptionType, PricingParameters};
use bsm_greeks::boundary::OptionRequest;
use bsm_greeks::sweep::{sweep, SweepConfig, SweepTarget};

fn main() {
    println!("Error Handling Demo for bsm-greeks");
    println!("==================================\n");

    // Test 1: Zero time to expiry
    println!("1. Testing zero time to expiry...");
    match PricingParameters::new(42.0, 40.0, 0.0, 0.1, 0.2, OptionType::Call) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Non-finite volatility
    println!("\n2. Testing NaN volatility...");
    match PricingParameters::new(42.0, 40.0, 0.5, 0.1, f64::NAN, OptionType::Put) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Unknown option type from a form
    println!("\n3. Testing unknown option type...");
    let request = OptionRequest {
        stock_price: 42.0,
        strike_price: 40.0,
        time_to_maturity: 0.5,
        risk_free_rate: 10.0,
        volatility: 20.0,
        option_type: "straddle".to_string(),
    };
    match request.to_parameters() {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: Valid inputs whose σ√T underflows
    println!("\n4. Testing degenerate σ√T...");
    match PricingParameters::new(42.0, 40.0, 1e-300, 0.1, 1e-300, OptionType::Call) {
        Ok(params) => match bs_analytic::price(&params) {
            Ok(p) => println!("   Unexpected price: {}", p),
            Err(e) => println!("   ✓ Caught error: {}", e),
        },
        Err(e) => println!("   Rejected earlier than expected: {}", e),
    }

    // Test 5: Invalid sweep configuration
    println!("\n5. Testing inverted sweep range...");
    let cfg = SweepConfig::new(60.0, 20.0, 100);
    match PricingParameters::new(42.0, 40.0, 0.5, 0.1, 0.2, OptionType::Call) {
        Ok(params) => match sweep(&params, &cfg, SweepTarget::Price) {
            Ok(_) => println!("   Unexpected: Should have failed!"),
            Err(e) => println!("   ✓ Caught error: {}", e),
        },
        Err(e) => println!("   Unexpected: {}", e),
    }

    println!("\nAll error cases handled.");
}
