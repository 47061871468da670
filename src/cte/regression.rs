/// Ordinary least-squares fit of `y = slope·x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Slope of the fitted line
    pub slope: f64,
    /// Intercept of the fitted line
    pub intercept: f64,
    /// Pearson correlation coefficient, in [-1, 1]
    pub r_value: f64,
}

impl LinearFit {
    /// Fit with every value undefined
    pub const UNDEFINED: LinearFit = LinearFit {
        slope: f64::NAN,
        intercept: f64::NAN,
        r_value: f64::NAN,
    };

    /// Coefficient of determination
    pub fn r_squared(&self) -> f64 {
        self.r_value * self.r_value
    }
}

/// Fit `y` against `x`.
///
/// Returns [`LinearFit::UNDEFINED`] when there are fewer than two points,
/// the lengths differ, any value is not finite, or every `x` is the same.
/// A constant `y` over distinct `x` gives slope 0 and r 0.
pub fn fit(x: &[f64], y: &[f64]) -> LinearFit {
    let n = x.len();
    if n < 2 || y.len() != n || x.iter().chain(y).any(|v| !v.is_finite()) {
        return LinearFit::UNDEFINED;
    }

    let x_mean = x.iter().sum::<f64>() / n as f64;
    let y_mean = y.iter().sum::<f64>() / n as f64;

    let (mut ssx, mut ssy, mut ssxy) = (0.0, 0.0, 0.0);
    for (xi, yi) in x.iter().zip(y) {
        let (dx, dy) = (xi - x_mean, yi - y_mean);
        ssx += dx * dx;
        ssy += dy * dy;
        ssxy += dx * dy;
    }

    if ssx == 0.0 {
        return LinearFit::UNDEFINED;
    }

    let slope = ssxy / ssx;
    let r_value = if ssy == 0.0 {
        0.0
    } else {
        (ssxy / (ssx * ssy).sqrt()).clamp(-1.0, 1.0)
    };

    LinearFit {
        slope,
        intercept: y_mean - slope * x_mean,
        r_value,
    }
}
