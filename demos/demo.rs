// demos/demo.rs
use bsm_greeks::analytics::{bs_analytic, greeks, Greek, OptionType, PricingParameters};
use bsm_greeks::boundary::{format_price, CalculationRecord};
use bsm_greeks::output;
use bsm_greeks::sweep::{greek_curves, price_curves, SweepConfig};
use bsm_greeks::{GreekSet, PricingResult};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run() {
        eprintln!("demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> PricingResult<()> {
    println!("Running bsm-greeks Demo\n");

    let s = 42.0; // Underlying price
    let k = 40.0; // Strike price
    let t = 0.5; // Time to expiration (years)
    let r = 0.1; // Risk-free rate
    let vol = 0.2; // Volatility

    let call = PricingParameters::new(s, k, t, r, vol, OptionType::Call)?;
    let put = call.with_option_type(OptionType::Put);

    let terms = bs_analytic::intermediate_terms(&call)?;
    println!("The value of d1 is: {:.4}", terms.d1);
    println!("The value of d2 is: {:.4}", terms.d2);
    println!("The price of the call option is: {}", format_price(bs_analytic::price(&call)?));
    println!("The price of the put option is: {}", format_price(bs_analytic::price(&put)?));

    println!("\n{:<8}{:>12}{:>12}", "Greek", "Call", "Put");
    let gc = greeks(&call)?;
    let gp = greeks(&put)?;
    for g in Greek::ALL {
        println!("{:<8}{:>12.6}{:>12.6}", g.name(), gc.get(g), gp.get(g));
    }

    let cfg = SweepConfig::default();
    let prices = price_curves(&call, &cfg)?;
    let charts = greek_curves(&call, &cfg, GreekSet::default_charts())?;

    println!("\n{:>10}{:>12}{:>12}{:>12}{:>12}", "S", "call", "put", "delta", "gamma");
    for i in (0..cfg.samples).step_by(11) {
        println!(
            "{:>10.2}{:>12.4}{:>12.4}{:>12.4}{:>12.4}",
            prices.call.points()[i].underlying,
            prices.call.points()[i].value,
            prices.put.points()[i].value,
            charts[0].points()[i].value,
            charts[1].points()[i].value,
        );
    }

    let record = CalculationRecord::compute(call)?;
    println!("\n{} (recorded {})", record, record.created_at.format("%Y-%m-%d %H:%M:%S UTC"));

    let csv_path = std::env::temp_dir().join("bsm_greeks_demo_curves.csv");
    output::write_curves_to_csv(&csv_path, &[&prices.call, &prices.put, &charts[0], &charts[1]])?;
    println!("Curves written to {}", csv_path.display());

    Ok(())
}
