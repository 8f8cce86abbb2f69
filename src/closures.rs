//! Function values, anonymous functions and closures.

use std::io::Write;

use anyhow::Result;

/// Signature shared by [`f1`] and [`f2`] so either can sit in one variable.
pub type TextMeasure = fn(&str) -> i64;

/// Length of `a` in bytes.
pub fn f1(a: &str) -> i64 {
    a.len() as i64
}

/// Sum of the code points of `a`.
pub fn f2(a: &str) -> i64 {
    a.chars().fold(0i64, |acc, c| acc.wrapping_add(c as i64))
}

/// Returns a closure that multiplies its argument by `base`.
pub fn make_mult(base: i64) -> impl Fn(i64) -> i64 {
    move |factor| base.wrapping_mul(factor)
}

/// Runs a closure that assigns to the captured `a`. Returns the outer
/// binding after the call.
pub fn closure_assigns_outer<W: Write>(out: &mut W, initial: i64) -> Result<i64> {
    let mut a = initial;
    writeln!(out, "Outside fa(), a = {a}")?;
    let mut fa = |out: &mut W| -> Result<()> {
        writeln!(out, "Inside fa() before assignment, a = {a}")?;
        a = 30;
        writeln!(out, "Inside fa() after assignment, a = {a}")?;
        Ok(())
    };
    fa(out)?;
    writeln!(out, "Outside fa(), a = {a}")?;
    Ok(a)
}

/// Runs a closure that declares its own `b`, shadowing the captured one.
/// Returns the outer binding after the call.
pub fn closure_shadows_outer<W: Write>(out: &mut W, initial: i64) -> Result<i64> {
    let b = initial;
    writeln!(out, "Outside fb(), b = {b}")?;
    let fb = |out: &mut W| -> Result<()> {
        writeln!(out, "Inside fb() before assignment, b = {b}")?;
        let b = 30;
        writeln!(out, "Inside fb() after assignment, b = {b}")?;
        Ok(())
    };
    fb(out)?;
    writeln!(out, "Outside fb(), b = {b}")?;
    Ok(b)
}
