//! Term formatting shared by the polynomial `Display` impls and by callers
//! that print sums over other bases.

/// Formats `coeff * monomial`, where `monomial` is empty for a constant term.
///
/// Coefficients whose own rendering is compound (contains a space) are
/// parenthesized so the product reads unambiguously.
#[must_use]
pub fn term(coeff: &str, monomial: &str) -> String {
    if monomial.is_empty() {
        return coeff.to_string();
    }
    match coeff {
        "1" => monomial.to_string(),
        "-1" => format!("-{monomial}"),
        c if c.contains(' ') => format!("({c})*{monomial}"),
        c => format!("{c}*{monomial}"),
    }
}

/// Joins terms with ` + ` / ` - `; the empty sum is `0`.
#[must_use]
pub fn sum(terms: &[String]) -> String {
    let Some((first, rest)) = terms.split_first() else {
        return "0".to_string();
    };

    let mut out = first.clone();
    for t in rest {
        match t.strip_prefix('-') {
            Some(positive) => {
                out.push_str(" - ");
                out.push_str(positive);
            }
            None => {
                out.push_str(" + ");
                out.push_str(t);
            }
        }
    }
    out
}
