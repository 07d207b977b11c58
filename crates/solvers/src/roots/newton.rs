use ndarray::Array1;
use polyroot_core::{Rectangle, linalg};
use tracing::debug;

use crate::{
    derivatives::PolynomialSystemDerivatives,
    tolerance::{
        CONTAINMENT_TOLERANCE, MAX_NEWTON_STEPS, MAX_STEP_HALVINGS, PERTURBATION_FRACTION,
        SINGULAR_DETERMINANT, ZERO_RESIDUAL,
    },
};

/// Number of step-halving refinements applied after convergence.
const IMPROVING_STEPS: usize = 2;

/// Runs Newton's method from the rectangle's center.
///
/// Returns the converged point if the residual reaches zero inside the
/// rectangle. Returns `None` if an iterate leaves the doubled-length escape
/// rectangle, the residual stops decreasing, or the Jacobian stays singular
/// after perturbing along every axis.
pub(super) fn root_in_rectangle(
    system: &PolynomialSystemDerivatives,
    rectangle: &Rectangle,
) -> Option<Array1<f64>> {
    let escape = rectangle.same_center_double_lengths();
    let mut point = rectangle.center();
    let mut values = system.equation_values(&point);

    for _ in 0..MAX_NEWTON_STEPS {
        if is_zero_residual(&values) {
            return rectangle
                .contains(&point, CONTAINMENT_TOLERANCE)
                .then_some(point);
        }

        let (base, base_values, delta) = step_or_perturb(system, rectangle, &point, &values)?;

        let next = &base + &delta;
        if !escape.contains(&next, 0.0) {
            return None;
        }

        let next_values = system.equation_values(&next);
        if norm_squared(&next_values) >= norm_squared(&base_values) {
            return None;
        }

        point = next;
        values = next_values;
    }

    None
}

/// Sharpens a converged root with damped Newton steps.
///
/// Each step is halved until it strictly lowers the residual; a step that
/// never does is skipped.
pub(super) fn improve(system: &PolynomialSystemDerivatives, root: Array1<f64>) -> Array1<f64> {
    let mut point = root;

    for _ in 0..IMPROVING_STEPS {
        let values = system.equation_values(&point);
        let norm = norm_squared(&values);
        if norm == 0.0 {
            break;
        }
        let Ok(delta) = step(system, &point, &values) else {
            break;
        };

        let mut scale = 1.0;
        for _ in 0..MAX_STEP_HALVINGS {
            let candidate = &point + &(&delta * scale);
            if norm_squared(&system.equation_values(&candidate)) < norm {
                point = candidate;
                break;
            }
            scale *= 0.5;
        }
    }

    point
}

/// Computes the least-squares Newton step `-Jᵀ (J Jᵀ)⁻¹ f`.
fn step(
    system: &PolynomialSystemDerivatives,
    point: &Array1<f64>,
    values: &Array1<f64>,
) -> Result<Array1<f64>, linalg::LinalgError> {
    let jacobian = system.jacobian(point);
    let normal = jacobian.dot(&jacobian.t());
    let inverse = linalg::inverse(&normal, SINGULAR_DETERMINANT)?;
    Ok(-jacobian.t().dot(&inverse.dot(values)))
}

/// Takes a step from `point`, or from a perturbed copy of it if the Newton
/// system is singular there.
///
/// Returns the point the step starts from, the residual there, and the step.
pub(super) fn step_or_perturb(
    system: &PolynomialSystemDerivatives,
    rectangle: &Rectangle,
    point: &Array1<f64>,
    values: &Array1<f64>,
) -> Option<(Array1<f64>, Array1<f64>, Array1<f64>)> {
    match step(system, point, values) {
        Ok(delta) => return Some((point.clone(), values.clone(), delta)),
        Err(error) => debug!(%error, ?point, "singular Newton system, perturbing"),
    }

    for (axis, side) in rectangle.sides().iter().enumerate() {
        let target = if side.upper() > point[axis] {
            side.upper()
        } else {
            side.lower()
        };

        let mut perturbed = point.clone();
        perturbed[axis] += (target - point[axis]) * PERTURBATION_FRACTION;

        let perturbed_values = system.equation_values(&perturbed);
        if let Ok(delta) = step(system, &perturbed, &perturbed_values) {
            return Some((perturbed, perturbed_values, delta));
        }
    }

    debug!(?point, "Newton system singular along every axis");
    None
}

pub(super) fn is_zero_residual(values: &Array1<f64>) -> bool {
    values.iter().all(|v| v.abs() <= ZERO_RESIDUAL)
}

fn norm_squared(values: &Array1<f64>) -> f64 {
    values.dot(values)
}
