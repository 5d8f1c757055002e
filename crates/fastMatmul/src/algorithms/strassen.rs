//! Strassen divide-and-conquer multiplication.
//!
//! ## Purpose
//!
//! Trades the eight recursive products of the classical block decomposition
//! for seven, at the cost of extra quadrant additions. Each recursion level
//! splits both operands into four quadrant copies, computes the seven Strassen
//! products M1..M7, and combines them into the four output quadrants with
//! wrapping adds. At or below `BASE_THRESHOLD` the recursion hands off to the
//! reordered scalar kernel, where the classical algorithm is faster.
//!
//! ## Design notes
//!
//! * **Fork/join**: In parallel mode the seven products of one level run as a
//!   balanced `rayon::join` tree; the joins are the only synchronization
//!   points. Serial mode runs the identical closures in order, so both modes
//!   produce bit-identical results.
//! * **Owned scratch**: Quadrants, sum/difference terms, and products are
//!   freshly allocated matrices dropped when the level that created them
//!   returns. No recursion level touches another level's scratch.
//!
//! ## Invariants
//!
//! * The dimension halves evenly down to the base threshold; the validator
//!   guarantees this before the recursion starts.
//! * All element arithmetic wraps, matching the other strategies.

// Internal dependencies
use crate::algorithms::reordered;
use crate::primitives::errors::MatmulError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Constants
// ============================================================================

/// Dimension at or below which the recursion delegates to the reordered
/// scalar kernel.
pub const BASE_THRESHOLD: usize = 128;

// ============================================================================
// Entry point
// ============================================================================

/// Multiply `a * b` into `c`, accumulating with wrapping adds.
///
/// `c` must arrive zeroed for a plain product. When `parallel` is true the
/// caller is expected to invoke this inside a rayon pool.
pub fn multiply(a: &Matrix, b: &Matrix, c: &mut Matrix, parallel: bool) -> Result<(), MatmulError> {
    let n = a.dimension();
    if n <= BASE_THRESHOLD {
        reordered::multiply_band(a.as_slice(), b.as_slice(), c.as_mut_slice(), n, 0);
        return Ok(());
    }

    let half = n / 2;
    let (a11, a12, a21, a22) = split_quadrants(a)?;
    let (b11, b12, b21, b22) = split_quadrants(b)?;

    let task_m1 = || product(&add(&a11, &a22)?, &add(&b11, &b22)?, parallel);
    let task_m2 = || product(&add(&a21, &a22)?, &b11, parallel);
    let task_m3 = || product(&a11, &sub(&b12, &b22)?, parallel);
    let task_m4 = || product(&a22, &sub(&b21, &b11)?, parallel);
    let task_m5 = || product(&add(&a11, &a12)?, &b22, parallel);
    let task_m6 = || product(&sub(&a21, &a11)?, &add(&b11, &b12)?, parallel);
    let task_m7 = || product(&sub(&a12, &a22)?, &add(&b21, &b22)?, parallel);

    let (m1, m2, m3, m4, m5, m6, m7);
    if parallel {
        let ((r1, r2), ((r3, r4), ((r5, r6), r7))) = rayon::join(
            || rayon::join(task_m1, task_m2),
            || {
                rayon::join(
                    || rayon::join(task_m3, task_m4),
                    || rayon::join(|| rayon::join(task_m5, task_m6), task_m7),
                )
            },
        );
        m1 = r1?;
        m2 = r2?;
        m3 = r3?;
        m4 = r4?;
        m5 = r5?;
        m6 = r6?;
        m7 = r7?;
    } else {
        m1 = task_m1()?;
        m2 = task_m2()?;
        m3 = task_m3()?;
        m4 = task_m4()?;
        m5 = task_m5()?;
        m6 = task_m6()?;
        m7 = task_m7()?;
    }

    combine(c, [&m1, &m2, &m3, &m4, &m5, &m6, &m7], half);
    Ok(())
}

// ============================================================================
// Recursion helpers
// ============================================================================

/// Allocate a fresh product matrix and recurse into it.
fn product(x: &Matrix, y: &Matrix, parallel: bool) -> Result<Matrix, MatmulError> {
    let mut out = Matrix::zeroed(x.dimension())?;
    multiply(x, y, &mut out, parallel)?;
    Ok(out)
}

/// Copy the four quadrants of `src` into freshly allocated half-size matrices.
fn split_quadrants(src: &Matrix) -> Result<(Matrix, Matrix, Matrix, Matrix), MatmulError> {
    let half = src.dimension() / 2;
    let mut q11 = Matrix::zeroed(half)?;
    let mut q12 = Matrix::zeroed(half)?;
    let mut q21 = Matrix::zeroed(half)?;
    let mut q22 = Matrix::zeroed(half)?;
    for i in 0..half {
        let top = src.row(i);
        let bottom = src.row(i + half);
        q11.row_mut(i).copy_from_slice(&top[..half]);
        q12.row_mut(i).copy_from_slice(&top[half..]);
        q21.row_mut(i).copy_from_slice(&bottom[..half]);
        q22.row_mut(i).copy_from_slice(&bottom[half..]);
    }
    Ok((q11, q12, q21, q22))
}

/// Elementwise wrapping sum of two equal-size matrices.
fn add(x: &Matrix, y: &Matrix) -> Result<Matrix, MatmulError> {
    elementwise(x, y, i64::wrapping_add)
}

/// Elementwise wrapping difference of two equal-size matrices.
fn sub(x: &Matrix, y: &Matrix) -> Result<Matrix, MatmulError> {
    elementwise(x, y, i64::wrapping_sub)
}

fn elementwise(x: &Matrix, y: &Matrix, op: fn(i64, i64) -> i64) -> Result<Matrix, MatmulError> {
    let mut out = Matrix::zeroed(x.dimension())?;
    for ((o, &p), &q) in out
        .as_mut_slice()
        .iter_mut()
        .zip(x.as_slice())
        .zip(y.as_slice())
    {
        *o = op(p, q);
    }
    Ok(out)
}

/// Accumulate the seven products into the four quadrants of `c`:
///
/// ```text
/// C11 += M1 + M4 - M5 + M7        C12 += M3 + M5
/// C21 += M2 + M4                  C22 += M1 - M2 + M3 + M6
/// ```
fn combine(c: &mut Matrix, m: [&Matrix; 7], half: usize) {
    let n = c.dimension();
    let out = c.as_mut_slice();
    let [m1, m2, m3, m4, m5, m6, m7] = m.map(Matrix::as_slice);
    for i in 0..half {
        for j in 0..half {
            let q = i * half + j;
            let c11 = i * n + j;
            let c12 = c11 + half;
            let c21 = (i + half) * n + j;
            let c22 = c21 + half;
            out[c11] = out[c11].wrapping_add(
                m1[q]
                    .wrapping_add(m4[q])
                    .wrapping_sub(m5[q])
                    .wrapping_add(m7[q]),
            );
            out[c12] = out[c12].wrapping_add(m3[q].wrapping_add(m5[q]));
            out[c21] = out[c21].wrapping_add(m2[q].wrapping_add(m4[q]));
            out[c22] = out[c22].wrapping_add(
                m1[q]
                    .wrapping_sub(m2[q])
                    .wrapping_add(m3[q])
                    .wrapping_add(m6[q]),
            );
        }
    }
}
