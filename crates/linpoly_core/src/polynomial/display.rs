//! Human-readable rendering for diagnostics.
//!
//! Coefficients above the field midpoint are read as negative residues, so
//! `p - 1` renders as `-1` rather than as a large integer. A zero constant is
//! omitted entirely, and unit coefficients print without a magnitude:
//!
//! ```text
//! 3 + 2·x0 - x1
//! -x1 + x2
//! ```

use linpoly_arithmetic::Coefficient;

use core::fmt;

use super::Polynomial;

/// Renders a field element with an explicit sign for negative residues.
pub(crate) struct Signed<F>(pub(crate) F);

impl<F: Coefficient> fmt::Display for Signed<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_negative() {
            f.write_str("-")?;
        }
        self.0.magnitude().fmt_canonical(f)
    }
}

impl<F: Coefficient> fmt::Display for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut leading = self.constant.is_zero_vartime();
        if !leading {
            fmt::Display::fmt(&Signed(self.constant), f)?;
        }

        for (var, coeff) in &self.terms {
            let separator = match (leading, coeff.is_negative()) {
                (true, false) => "",
                (true, true) => "-",
                (false, false) => " + ",
                (false, true) => " - ",
            };
            f.write_str(separator)?;

            let magnitude = coeff.magnitude();
            if magnitude != F::ONE {
                magnitude.fmt_canonical(f)?;
                f.write_str("·")?;
            }
            write!(f, "{var}")?;
            leading = false;
        }

        Ok(())
    }
}
