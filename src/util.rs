use std::fmt;

// Integral values are written without a decimal point; other finite values use the
// shortest representation that round-trips. inf/NaN use the default float rendering.
pub fn write_number<W: fmt::Write>(f: &mut W, x: f64) -> fmt::Result {
    if x.is_finite() && x == x.floor() {
        // -0 prints as 0
        write!(f, "{:.0}", x + 0.0)
    } else {
        write!(f, "{}", x)
    }
}

pub fn number_to_string(x: f64) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_number(&mut out, x);
    out
}
