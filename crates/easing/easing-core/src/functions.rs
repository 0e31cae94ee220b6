//! Easing evaluators.
//!
//! Every function maps a normalized progress `x` to an eased value and is
//! pinned to (0,0) and (1,1). Inputs are not clamped; values outside [0,1]
//! extrapolate the polynomial, and circular curves return NaN once their
//! radicand goes negative.

#[inline]
pub fn linear(x: f32) -> f32 {
    x
}

// Exponential

#[inline]
pub fn ease_in(x: f32) -> f32 {
    x.powi(2)
}

#[inline]
pub fn ease_in2(x: f32) -> f32 {
    x.powi(3)
}

#[inline]
pub fn ease_in3(x: f32) -> f32 {
    x.powi(8)
}

#[inline]
pub fn ease_out(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(2)
}

/// Quadratic in practice; the catalog text advertises a cubic.
#[inline]
pub fn ease_out2(x: f32) -> f32 {
    2.0 * x - x.powi(2)
}

#[inline]
pub fn ease_out3(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(8)
}

#[inline]
pub fn ease_in_out(x: f32) -> f32 {
    if x < 0.5 {
        2.0 * x.powi(2)
    } else {
        -2.0 * x.powi(2) + 4.0 * x - 1.0
    }
}

#[inline]
pub fn ease_in_out2(x: f32) -> f32 {
    if x < 0.5 {
        4.0 * x.powi(3)
    } else {
        4.0 * x.powi(3) - 12.0 * x.powi(2) + 12.0 * x - 3.0
    }
}

#[inline]
pub fn ease_in_out3(x: f32) -> f32 {
    if x < 0.5 {
        128.0 * x.powi(8)
    } else {
        0.5 + (1.0 - ((1.0 - x) * 2.0).powi(8)) / 2.0
    }
}

// Circular

#[inline]
pub fn ease_in_circular(x: f32) -> f32 {
    1.0 - (1.0 - x.powi(2)).sqrt()
}

#[inline]
pub fn ease_out_circular(x: f32) -> f32 {
    (-(x - 2.0) * x).sqrt()
}

#[inline]
pub fn ease_in_out_circular(x: f32) -> f32 {
    if x < 0.5 {
        0.5 * (1.0 - (1.0 - 4.0 * x.powi(2)).sqrt())
    } else {
        0.5 * ((-4.0 * (x - 2.0) * x - 3.0).sqrt() + 1.0)
    }
}

// Bounce: offset cubic compositions that dip below 0 (in) or overshoot 1 (out).

#[inline]
pub fn ease_in_bounce(x: f32) -> f32 {
    x.powi(2) * (2.0 * x - 1.0)
}

#[inline]
pub fn ease_in_bounce2(x: f32) -> f32 {
    x.powi(2) * (3.0 * x - 2.0)
}

#[inline]
pub fn ease_in_bounce3(x: f32) -> f32 {
    x.powi(2) * (4.0 * x - 3.0)
}

#[inline]
pub fn ease_out_bounce(x: f32) -> f32 {
    x * (x * (2.0 * x - 5.0) + 4.0)
}

#[inline]
pub fn ease_out_bounce2(x: f32) -> f32 {
    x * (x * (3.0 * x - 7.0) + 5.0)
}

#[inline]
pub fn ease_out_bounce3(x: f32) -> f32 {
    x * (x * (4.0 * x - 9.0) + 6.0)
}

#[inline]
pub fn ease_in_out_bounce(x: f32) -> f32 {
    if x < 0.5 {
        8.0 * x.powi(3) - 2.0 * x.powi(2)
    } else {
        8.0 * x.powi(3) - 22.0 * x.powi(2) + 20.0 * x - 5.0
    }
}

#[inline]
pub fn ease_in_out_bounce2(x: f32) -> f32 {
    if x < 0.5 {
        12.0 * x.powi(3) - 4.0 * x.powi(2)
    } else {
        12.0 * x.powi(3) - 32.0 * x.powi(2) + 28.0 * x - 7.0
    }
}

#[inline]
pub fn ease_in_out_bounce3(x: f32) -> f32 {
    if x < 0.5 {
        16.0 * x.powi(3) - 6.0 * x.powi(2)
    } else {
        16.0 * x.powi(3) - 42.0 * x.powi(2) + 36.0 * x - 9.0
    }
}
