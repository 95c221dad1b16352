//! Polynomial long division and gcd.

use crate::dense::Polynomial;
use genfun_core::{GfError, Result};
use genfun_rings::traits::Ring;

/// Divides `a` by `b`, returning `(quotient, remainder)`.
///
/// The leading coefficient of `b` must be invertible.
///
/// # Errors
///
/// [`GfError::NotInvertible`] if `b` is zero or its leading coefficient
/// is not a unit.
pub fn poly_div_rem<T: Ring>(
    a: &Polynomial<T>,
    b: &Polynomial<T>,
) -> Result<(Polynomial<T>, Polynomial<T>)> {
    let lead = b
        .leading_coeff()
        .ok_or_else(|| GfError::not_invertible("division by the zero polynomial"))?;
    let lead_inv = lead.try_inv()?;
    let zero = a.sample().clone();

    if a.degree() < b.degree() {
        return Ok((Polynomial::zero(&zero), a.clone()));
    }

    let divisor = b.coeffs();
    let mut remainder = a.coeffs().to_vec();
    let mut quotient = vec![zero.clone(); remainder.len() - divisor.len() + 1];

    while remainder.len() >= divisor.len() {
        let shift = remainder.len() - divisor.len();
        let Some(top) = remainder.last() else { break };
        let coeff = top.clone() * lead_inv.clone();

        for (i, bc) in divisor.iter().enumerate() {
            remainder[shift + i] = remainder[shift + i].clone() - coeff.clone() * bc.clone();
        }
        quotient[shift] = coeff;

        // the top term cancels exactly; drop it along with any new zeros
        remainder.pop();
        while remainder.last().is_some_and(Ring::is_zero) {
            remainder.pop();
        }
    }

    Ok((
        Polynomial::from_coeffs(&zero, quotient),
        Polynomial::from_coeffs(&zero, remainder),
    ))
}

/// Scales `p` so its leading coefficient is 1.
///
/// # Errors
///
/// [`GfError::NotInvertible`] if the leading coefficient is not a unit.
pub fn make_monic<T: Ring>(p: &Polynomial<T>) -> Result<Polynomial<T>> {
    match p.leading_coeff() {
        None => Ok(p.clone()),
        Some(lead) if lead.is_one() => Ok(p.clone()),
        Some(lead) => Ok(p.scale(&lead.try_inv()?)),
    }
}

/// Monic gcd by the Euclidean algorithm.
///
/// Only meaningful over rings with exact division (fields).
///
/// # Errors
///
/// [`GfError::NotInvertible`] if a remainder's leading coefficient is not
/// a unit, which cannot happen over a field.
pub fn poly_gcd<T: Ring>(a: &Polynomial<T>, b: &Polynomial<T>) -> Result<Polynomial<T>> {
    let mut p = a.clone();
    let mut q = b.clone();

    while !q.is_zero() {
        let (_, r) = poly_div_rem(&p, &q)?;
        p = q;
        q = r;
    }

    make_monic(&p)
}
