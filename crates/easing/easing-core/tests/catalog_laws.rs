use approx::assert_abs_diff_eq;
use easing_core::{descriptors, evaluate, resolve, EasingFamily, EasingVariant};

const TOL: f32 = 1e-5;

fn dense_inputs() -> impl Iterator<Item = f32> {
    (0..=100).map(|i| i as f32 / 100.0)
}

/// The catalog's unsimplified `formula` text, transcribed by hand and
/// evaluated in f64. `None` where the text does not describe the evaluator.
fn formula_reference(variant: EasingVariant) -> Option<fn(f64) -> f64> {
    use EasingVariant::*;
    let f: fn(f64) -> f64 = match variant {
        Linear => |x| x,
        EaseIn => |x| x.powi(2),
        EaseIn2 => |x| x.powi(3),
        EaseIn3 => |x| x.powi(8),
        EaseOut => |x| 1.0 - (1.0 - x).powi(2),
        // text says 1-(1-x)^3, evaluator is 2x-x^2
        EaseOut2 => return None,
        EaseOut3 => |x| 1.0 - (1.0 - x).powi(8),
        EaseInOut => |x| {
            if x < 0.5 {
                (2.0 * x).powi(2) / 2.0
            } else {
                0.5 + (1.0 - (2.0 * (1.0 - x)).powi(2)) / 2.0
            }
        },
        EaseInOut2 => |x| {
            if x < 0.5 {
                (2.0 * x).powi(3) / 2.0
            } else {
                0.5 + (1.0 - (2.0 * (1.0 - x)).powi(3)) / 2.0
            }
        },
        EaseInOut3 => |x| {
            if x < 0.5 {
                (2.0 * x).powi(8) / 2.0
            } else {
                0.5 + (1.0 - (2.0 * (1.0 - x)).powi(8)) / 2.0
            }
        },
        EaseInCircular => |x| 1.0 - (1.0 - x.powi(2)).sqrt(),
        EaseOutCircular => |x| (1.0 - (1.0 - x).powi(2)).sqrt(),
        EaseInOutCircular => |x| {
            if x < 0.5 {
                (1.0 - (1.0 - (2.0 * x).powi(2)).sqrt()) / 2.0
            } else {
                0.5 + (1.0 - (2.0 * (1.0 - x)).powi(2)).sqrt() / 2.0
            }
        },
        EaseInBounce => |x| 2.0 * x.powi(3) - x.powi(2),
        EaseInBounce2 => |x| 3.0 * x.powi(3) - 2.0 * x.powi(2),
        EaseInBounce3 => |x| 4.0 * x.powi(3) - 3.0 * x.powi(2),
        EaseOutBounce => |x| 1.0 - (2.0 * (1.0 - x).powi(3) - (1.0 - x).powi(2)),
        EaseOutBounce2 => |x| 1.0 - (3.0 * (1.0 - x).powi(3) - 2.0 * (1.0 - x).powi(2)),
        EaseOutBounce3 => |x| 1.0 - (4.0 * (1.0 - x).powi(3) - 3.0 * (1.0 - x).powi(2)),
        EaseInOutBounce => |x| {
            if x < 0.5 {
                (2.0 * (2.0 * x).powi(3) - (2.0 * x).powi(2)) * 0.5
            } else {
                let u = 2.0 * (1.0 - x);
                1.0 - (2.0 * u.powi(3) - u.powi(2)) * 0.5
            }
        },
        // first branch of the text drops the 2 on (2x)^2
        EaseInOutBounce2 => return None,
        EaseInOutBounce3 => |x| {
            if x < 0.5 {
                (4.0 * (2.0 * x).powi(3) - 3.0 * (2.0 * x).powi(2)) * 0.5
            } else {
                let u = 2.0 * (1.0 - x);
                1.0 - (4.0 * u.powi(3) - 3.0 * u.powi(2)) * 0.5
            }
        },
    };
    Some(f)
}

#[test]
fn every_curve_is_pinned_to_unit_corners() {
    for d in descriptors() {
        assert_abs_diff_eq!(d.evaluate(0.0), 0.0, epsilon = TOL);
        assert_abs_diff_eq!(d.evaluate(1.0), 1.0, epsilon = TOL);
    }
}

#[test]
fn linear_is_identity() {
    for x in dense_inputs() {
        assert_eq!(evaluate(x, EasingVariant::Linear), x);
    }
}

#[test]
fn evaluators_match_formula_text() {
    let mut checked = 0;
    for d in descriptors() {
        let Some(reference) = formula_reference(d.variant) else {
            continue;
        };
        checked += 1;
        for x in dense_inputs() {
            let expected = reference(x as f64) as f32;
            assert_abs_diff_eq!(d.evaluate(x), expected, epsilon = TOL);
        }
    }
    assert_eq!(checked, EasingVariant::COUNT - 2);
}

#[test]
fn ease_out2_evaluator_is_quadratic_not_cubic() {
    let d = resolve(EasingVariant::EaseOut2);
    assert_eq!(d.formula, "y = 1-(1-x)^3");
    for x in dense_inputs() {
        assert_abs_diff_eq!(d.evaluate(x), 2.0 * x - x * x, epsilon = TOL);
    }
    // the advertised cubic would give 0.875 here
    assert_abs_diff_eq!(d.evaluate(0.5), 0.75, epsilon = TOL);
}

#[test]
fn ease_in_out_bounce2_follows_simplified_formula() {
    let d = resolve(EasingVariant::EaseInOutBounce2);
    assert_eq!(
        d.simplified_formula,
        "y = (x<0.5) ? 12x^3-4x^2 : 12x^3-32x^2+28x-7"
    );
    for x in dense_inputs() {
        let xf = x as f64;
        let expected = if xf < 0.5 {
            12.0 * xf.powi(3) - 4.0 * xf.powi(2)
        } else {
            12.0 * xf.powi(3) - 32.0 * xf.powi(2) + 28.0 * xf - 7.0
        };
        assert_abs_diff_eq!(d.evaluate(x), expected as f32, epsilon = TOL);
    }
    // lower branch is negative early on; the text's 12x^3-2x^2 would not be
    assert_abs_diff_eq!(d.evaluate(0.25), -0.0625, epsilon = TOL);
}

#[test]
fn piecewise_branches_meet_at_midpoint() {
    const H: f32 = 1e-4;
    let mut checked = 0;
    for v in EasingVariant::ALL {
        if !v.is_piecewise() {
            continue;
        }
        checked += 1;
        // evaluate(0.5) takes the upper branch, 0.5 - H the lower one
        let at = evaluate(0.5, v);
        let left = evaluate(0.5 - H, v);
        // polynomial slopes at 0.5 stay below 8; the circular one is vertical
        let tol = if v.family() == EasingFamily::Circular {
            2.0 * H.sqrt()
        } else {
            10.0 * H
        };
        assert_abs_diff_eq!(at, 0.5, epsilon = TOL);
        assert!(
            (left - at).abs() <= tol,
            "{v}: left limit {left} vs {at} at the split"
        );
        assert!(left <= at, "{v} decreases into the split");
    }
    assert_eq!(checked, 7);
}

#[test]
fn resolve_is_stable() {
    for v in EasingVariant::ALL {
        let a = resolve(v);
        let b = resolve(v);
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.name, b.name);
        assert_eq!(a.description, b.description);
        assert_eq!(a.formula, b.formula);
        assert_eq!(a.simplified_formula, b.simplified_formula);
        for x in dense_inputs() {
            assert_eq!(a.evaluate(x).to_bits(), b.evaluate(x).to_bits());
        }
    }
}

#[test]
fn iteration_yields_22_distinct_variants_in_order() {
    let expected = [
        "Linear",
        "EaseIn",
        "EaseIn2",
        "EaseIn3",
        "EaseOut",
        "EaseOut2",
        "EaseOut3",
        "EaseInOut",
        "EaseInOut2",
        "EaseInOut3",
        "EaseInCircular",
        "EaseOutCircular",
        "EaseInOutCircular",
        "EaseInBounce",
        "EaseInBounce2",
        "EaseInBounce3",
        "EaseOutBounce",
        "EaseOutBounce2",
        "EaseOutBounce3",
        "EaseInOutBounce",
        "EaseInOutBounce2",
        "EaseInOutBounce3",
    ];
    let seen: Vec<String> = descriptors()
        .map(|d| format!("{:?}", d.variant))
        .collect();
    assert_eq!(seen, expected);

    let mut unique = seen.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 22);
}

#[test]
fn concurrent_lookups_agree() {
    let handles: Vec<_> = (0..8)
        .map(|t| {
            std::thread::spawn(move || {
                let v = EasingVariant::ALL[t % EasingVariant::COUNT];
                let by_name = v.identifier().parse::<EasingVariant>().unwrap();
                (v, by_name, evaluate(0.3, v))
            })
        })
        .collect();
    for h in handles {
        let (v, by_name, y) = h.join().unwrap();
        assert_eq!(v, by_name);
        assert_eq!(y, evaluate(0.3, v));
    }
}
