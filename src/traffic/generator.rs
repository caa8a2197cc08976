//! Poisson arrival series.

use rand::Rng;

/// Below this mean, arrivals are drawn by multiplying uniforms.
const SMALL_MEAN: f64 = 10.0;

/// Per-second arrivals summed over `terminals` independent sources.
///
/// Sample `s` is the sum of one Poisson(`intensity`) draw per terminal. A
/// non-positive or non-finite intensity produces silence.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    intensity: f64,
    duration_seconds: usize,
    terminals: usize,
) -> Vec<f64> {
    if !(intensity.is_finite() && intensity > 0.0) {
        return vec![0.0; duration_seconds];
    }
    (0..duration_seconds)
        .map(|_| {
            (0..terminals)
                .map(|_| poisson(rng, intensity) as f64)
                .sum::<f64>()
        })
        .collect()
}

/// One draw from a Poisson distribution with mean `lambda`.
pub fn poisson<R: Rng + ?Sized>(rng: &mut R, lambda: f64) -> u64 {
    if !(lambda.is_finite() && lambda > 0.0) {
        0
    } else if lambda < SMALL_MEAN {
        poisson_mult(rng, lambda)
    } else {
        poisson_ptrs(rng, lambda)
    }
}

fn poisson_mult<R: Rng + ?Sized>(rng: &mut R, lambda: f64) -> u64 {
    let limit = (-lambda).exp();
    let mut count = 0;
    let mut product: f64 = rng.gen();
    while product > limit {
        count += 1;
        product *= rng.gen::<f64>();
    }
    count
}

/// Transformed rejection with squeeze (Hörmann, 1993).
fn poisson_ptrs<R: Rng + ?Sized>(rng: &mut R, lambda: f64) -> u64 {
    let sqrt_lambda = lambda.sqrt();
    let log_lambda = lambda.ln();
    let b = 0.931 + 2.53 * sqrt_lambda;
    let a = -0.059 + 0.02483 * b;
    let inv_alpha = 1.1239 + 1.1328 / (b - 3.4);
    let v_r = 0.9277 - 3.6224 / (b - 2.0);

    loop {
        let u = rng.gen::<f64>() - 0.5;
        let v: f64 = rng.gen();
        let us = 0.5 - u.abs();
        let k = ((2.0 * a / us + b) * u + lambda + 0.43).floor();

        if us >= 0.07 && v <= v_r {
            return k as u64;
        }
        if k < 0.0 || (us < 0.013 && v > us) {
            continue;
        }
        let accept = v.ln() + inv_alpha.ln() - (a / (us * us) + b).ln();
        if accept <= -lambda + k * log_lambda - log_factorial(k) {
            return k as u64;
        }
    }
}

/// `ln(k!)`, exact for small `k` and by Stirling's series above.
fn log_factorial(k: f64) -> f64 {
    if k < 10.0 {
        let mut acc = 0.0;
        let mut i = 2.0;
        while i <= k {
            acc += f64::ln(i);
            i += 1.0;
        }
        return acc;
    }
    let n = k;
    let n2 = n * n;
    n * n.ln() - n + 0.5 * (std::f64::consts::TAU * n).ln() + 1.0 / (12.0 * n)
        - 1.0 / (360.0 * n2 * n)
        + 1.0 / (1260.0 * n2 * n2 * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mean_and_variance(samples: &[f64]) -> (f64, f64) {
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        (mean, var)
    }

    #[test]
    fn test_small_mean_statistics() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples = generate(&mut rng, 5.0, 20_000, 1);
        let (mean, var) = mean_and_variance(&samples);
        assert!((mean - 5.0).abs() < 0.1, "mean {}", mean);
        assert!((var - 5.0).abs() < 0.4, "variance {}", var);
    }

    #[test]
    fn test_large_mean_statistics() {
        let mut rng = StdRng::seed_from_u64(11);
        let samples = generate(&mut rng, 2140.0, 5_000, 1);
        let (mean, var) = mean_and_variance(&samples);
        // Standard error of the mean is about 0.65.
        assert!((mean - 2140.0).abs() < 4.0, "mean {}", mean);
        assert!((var / 2140.0 - 1.0).abs() < 0.15, "variance {}", var);
        assert!(samples.iter().all(|s| s.fract() == 0.0 && *s >= 0.0));
    }

    #[test]
    fn test_terminals_are_summed() {
        let mut rng = StdRng::seed_from_u64(3);
        let samples = generate(&mut rng, 2.0, 10_000, 3);
        let (mean, _) = mean_and_variance(&samples);
        assert!((mean - 6.0).abs() < 0.15, "mean {}", mean);
    }

    #[test]
    fn test_silence_for_invalid_intensity() {
        let mut rng = StdRng::seed_from_u64(1);
        for intensity in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let samples = generate(&mut rng, intensity, 5, 2);
            assert_eq!(samples, vec![0.0; 5]);
        }
    }

    #[test]
    fn test_same_seed_same_series() {
        let a = generate(&mut StdRng::seed_from_u64(42), 30.0, 100, 2);
        let b = generate(&mut StdRng::seed_from_u64(42), 30.0, 100, 2);
        assert_eq!(a, b);
        assert_eq!(a.len(), 100);
    }

    #[test]
    fn test_log_factorial() {
        assert_eq!(log_factorial(0.0), 0.0);
        assert_eq!(log_factorial(1.0), 0.0);
        assert!((log_factorial(5.0) - 120f64.ln()).abs() < 1e-12);
        let exact: f64 = (2..=20).map(|i| f64::from(i).ln()).sum();
        assert!((log_factorial(20.0) - exact).abs() < 1e-9);
    }
}
