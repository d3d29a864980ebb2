// Closed-form Black-Scholes kernel for European calls and puts. This is the
// raw formula layer: inputs are not validated here, so volatility <= 0,
// maturity <= 0 or a non-positive spot/strike propagate NaN or infinities to
// the caller. The validated entry points live at the crate root.

use crate::params::OptionKind;

/// Standard normal cumulative distribution function.
pub fn norm_cdf(x: f64) -> f64 {
    // 0.5 * [1 + erf(x / sqrt(2))]
    0.5 * (1.0 + libm::erf(x / (2.0_f64).sqrt()))
}

/// The d1 term of the Black-Scholes formula:
/// `(ln(spot/strike) + (rate + sigma^2/2) * maturity) / (sigma * sqrt(maturity))`
pub fn d1(spot: f64, strike: f64, maturity: f64, volatility: f64, rate: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * volatility.powi(2)) * maturity)
        / (volatility * maturity.sqrt())
}

/// The d2 term: `d1 - sigma * sqrt(maturity)`.
pub fn d2(spot: f64, strike: f64, maturity: f64, volatility: f64, rate: f64) -> f64 {
    d1(spot, strike, maturity, volatility, rate) - volatility * maturity.sqrt()
}

/// Price of a European call option under Black-Scholes assumptions.
pub fn call_price(spot: f64, strike: f64, maturity: f64, volatility: f64, rate: f64) -> f64 {
    let d1 = d1(spot, strike, maturity, volatility, rate);
    let d2 = d1 - volatility * maturity.sqrt();
    spot * norm_cdf(d1) - strike * (-rate * maturity).exp() * norm_cdf(d2)
}

/// Price of a European put option under Black-Scholes assumptions.
pub fn put_price(spot: f64, strike: f64, maturity: f64, volatility: f64, rate: f64) -> f64 {
    let d1 = d1(spot, strike, maturity, volatility, rate);
    let d2 = d1 - volatility * maturity.sqrt();
    strike * (-rate * maturity).exp() * norm_cdf(-d2) - spot * norm_cdf(-d1)
}

/// Dispatch on option kind.
pub fn price(
    kind: OptionKind,
    spot: f64,
    strike: f64,
    maturity: f64,
    volatility: f64,
    rate: f64,
) -> f64 {
    match kind {
        OptionKind::Call => call_price(spot, strike, maturity, volatility, rate),
        OptionKind::Put => put_price(spot, strike, maturity, volatility, rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_prices() {
        // Standard textbook scenario: S=100, K=100, T=1, r=5%, sigma=20%
        let call = call_price(100.0, 100.0, 1.0, 0.2, 0.05);
        let put = put_price(100.0, 100.0, 1.0, 0.2, 0.05);
        assert!((call - 10.45).abs() < 0.01, "call price was {}", call);
        assert!((put - 5.57).abs() < 0.01, "put price was {}", put);
    }

    #[test]
    fn test_d2_relation() {
        let (s, k, t, sigma, r) = (105.0, 100.0, 0.5, 0.3, 0.02);
        let expected = d1(s, k, t, sigma, r) - sigma * t.sqrt();
        assert!((d2(s, k, t, sigma, r) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
        for x in [0.1, 0.7, 1.5, 3.0] {
            assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_degenerate_inputs_propagate_non_finite() {
        // The kernel deliberately does not guard: zero volatility divides by
        // zero, zero spot sends the log to -infinity.
        assert!(d1(100.0, 100.0, 1.0, 0.0, 0.05).is_infinite());
        assert!(d1(100.0, 100.0, 1.0, 0.0, 0.0).is_nan()); // 0 / 0
        assert!(d1(0.0, 100.0, 1.0, 0.2, 0.05).is_infinite());
        assert!(call_price(100.0, 100.0, 0.0, 0.2, 0.05).is_nan());
    }
}
