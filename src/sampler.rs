//! The demonstration run: every section in order, each titled and followed
//! by a blank line.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::aliasing::{self, Person2};
use crate::arith::{add_nums, div, divmod, divmod_named};
use crate::calc::Calculator;
use crate::cat::cat_file;
use crate::closures::{self, TextMeasure, f1, f2, make_mult};
use crate::defer::DeferStack;
use crate::records::{self, FuncParams, Person};
use crate::render;

/// Run every section against `out`. `file` is only consulted when the cat
/// section is reached. Actions registered on the run-wide scope (the file
/// close) fire after the last section, or before an error is returned.
pub fn run<W: Write>(out: W, file: Option<&Path>) -> Result<()> {
    let mut scope = DeferStack::new(out);

    banner(scope.out())?;
    calling_a_function(scope.out())?;
    optional_named_params(scope.out())?;
    variadic(scope.out())?;
    multiple_returns(scope.out())?;
    named_returns(scope.out())?;
    function_variable(scope.out())?;
    calculator(scope.out())?;
    anonymous_function(scope.out())?;
    closure(scope.out())?;
    closure_with_shadow(scope.out())?;
    sorting(scope.out())?;
    returning_closure(scope.out())?;

    title(scope.out(), "Example of defer With a cat Command:")?;
    cat_file(&mut scope, file)?;
    writeln!(scope.out())?;

    using_defer(scope.out())?;
    call_by_value(scope.out())?;
    map_slice_modification(scope.out())?;

    scope.finish()?;
    Ok(())
}

fn title<W: Write>(out: &mut W, text: &str) -> Result<()> {
    debug!(section = text.trim_end_matches(':'), "running section");
    writeln!(out, "{text}")?;
    Ok(())
}

fn banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(100))?;
    writeln!(out)?;
    Ok(())
}

fn calling_a_function<W: Write>(out: &mut W) -> Result<()> {
    title(out, "Example of calling a Function:")?;
    let result = div(100, 20);
    writeln!(out, "div(100, 20) = {result}")?;
    writeln!(out)?;
    Ok(())
}

fn optional_named_params<W: Write>(out: &mut W) -> Result<()> {
    title(out, "Example of a Function With Optional and Named Parameters:")?;
    records::my_func(
        out,
        &FuncParams {
            last_name: "Smith".into(),
            age: 50,
            ..Default::default()
        },
    )?;
    records::my_func(
        out,
        &FuncParams {
            first_name: "Mary".into(),
            last_name: "Smith".into(),
            ..Default::default()
        },
    )?;
    writeln!(out)?;
    Ok(())
}

fn variadic<W: Write>(out: &mut W) -> Result<()> {
    title(out, "Example of a Variadic Function:")?;
    let x = add_nums(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    let y = add_nums(&[21, 43, 65]);
    let z = add_nums(&[]);
    let nums = vec![10, 20, 30, 40, 50];
    writeln!(out, "addNums(1, 2, 3, 4, 5, 6, 7, 8, 9) = {x}")?;
    writeln!(out, "addNums(21, 43, 65) = {y}")?;
    writeln!(out, "addNums() = {z}")?;
    writeln!(out, "nums = {}", render::list(&nums))?;
    writeln!(out, "addNums(nums...) = {}", add_nums(&nums))?;
    writeln!(out)?;
    Ok(())
}

fn multiple_returns<W: Write>(out: &mut W) -> Result<()> {
    title(out, "Example of Function With Multiple Return Values:")?;
    let (res_div, res_mod) = divmod(5, 2)?;
    writeln!(out, "divmod(5, 2) => ResDiv = {res_div} ResMod = {res_mod}")?;
    writeln!(out)?;
    Ok(())
}

fn named_returns<W: Write>(out: &mut W) -> Result<()> {
    title(out, "Example of Function With Named Return Values:")?;
    let named = divmod_named(5, 2)?;
    writeln!(
        out,
        "divmodNamed(5, 2) => resX = {} modY = {}",
        named.res, named.modulo
    )?;
    writeln!(out)?;
    Ok(())
}

fn function_variable<W: Write>(out: &mut W) -> Result<()> {
    title(out, "Example of Declaring a Function Variable:")?;
    let mut my_func_var: TextMeasure = f1;
    let res = my_func_var("Hello");
    writeln!(out, "myFuncVar(\"Hello\") using f1: {res}")?;

    my_func_var = f2;
    let res = my_func_var("Hello");
    writeln!(out, "myFuncVar(\"Hello\") using f2: {res}")?;
    writeln!(out)?;
    Ok(())
}

fn calculator<W: Write>(out: &mut W) -> Result<()> {
    title(out, "Example of a Simple Calculator With Functions:")?;
    let calc = Calculator::new();
    let expressions: [&[&str]; 7] = [
        &["2", "+", "3"],
        &["2", "-", "3"],
        &["2", "*", "3"],
        &["2", "/", "3"],
        &["2", "%", "3"],
        &["two", "+", "three"],
        &["5"],
    ];
    for expr in expressions {
        match calc.eval(expr) {
            Ok(result) => writeln!(out, "{} = {result}", render::list(expr))?,
            Err(err) => {
                debug!(error = %err, "skipping expression");
                writeln!(out, "{err}")?;
            }
        }
    }
    writeln!(out)?;
    Ok(())
}

fn anonymous_function<W: Write>(out: &mut W) -> Result<()> {
    title(out, "Example of Anonymous Function:")?;
    for i in 0..5 {
        (|j: i64| writeln!(out, "Printing {j} from inside an anonymous function"))(i)?;
    }
    writeln!(out)?;
    Ok(())
}

fn closure<W: Write>(out: &mut W) -> Result<()> {
    title(out, "Example of Closure:")?;
    closures::closure_assigns_outer(out, 20)?;
    writeln!(out)?;
    Ok(())
}

fn closure_with_shadow<W: Write>(out: &mut W) -> Result<()> {
    title(out, "Example of Closure With Shadow:")?;
    closures::closure_shadows_outer(out, 20)?;
    writeln!(out)?;
    Ok(())
}

fn sorting<W: Write>(out: &mut W) -> Result<()> {
    title(out, "Example of Sorting Slice")?;
    let mut people = vec![
        Person::new("John", "Smith", 37),
        Person::new("Jeremy", "Trye", 18),
        Person::new("Jasmine", "Alter", 20),
    ];
    writeln!(out, "Before Sorting: {}", render::list(&people))?;
    records::sort_by_last_name(&mut people);
    writeln!(out, "After Sorting By Last Name: {}", render::list(&people))?;
    records::sort_by_age(&mut people);
    writeln!(out, "After Sorting By Age: {}", render::list(&people))?;
    writeln!(out)?;
    Ok(())
}

fn returning_closure<W: Write>(out: &mut W) -> Result<()> {
    title(out, "Example of Function That Returns a Closure:")?;
    let base2_mult = make_mult(2);
    let base3_mult = make_mult(3);
    let base5_mult = make_mult(5);
    writeln!(out, "i\tbase2\tbase3\tbase5")?;
    for i in 0..10 {
        writeln!(
            out,
            "{i} \t {} \t {} \t {}",
            base2_mult(i),
            base3_mult(i),
            base5_mult(i)
        )?;
    }
    writeln!(out)?;
    Ok(())
}

/// Two actions registered with the value of `a` at the time, then the body
/// prints the final value. Returns the final value.
pub fn defer_example<W: Write>(out: &mut W) -> Result<i64> {
    let mut scope = DeferStack::new(out);
    let mut a = 10;
    let val = a;
    scope.defer(move |out| writeln!(out, "First value: {val}"));
    a = 20;
    let val = a;
    scope.defer(move |out| writeln!(out, "Second value: {val}"));
    a = 30;
    writeln!(scope.out(), "Exiting deferExample: {a}")?;
    scope.finish()?;
    Ok(a)
}

fn using_defer<W: Write>(out: &mut W) -> Result<()> {
    title(out, "Example of Using defer:")?;
    defer_example(out)?;
    writeln!(out)?;
    Ok(())
}

fn call_by_value<W: Write>(out: &mut W) -> Result<()> {
    title(out, "Example of Call-By-Value:")?;
    let i = 2;
    let s = String::from("Hello");
    let p = Person2::default();
    aliasing::modify_fails(i, s.clone(), p.clone());
    writeln!(out, "{i} {s} {p}")?;
    writeln!(out)?;
    Ok(())
}

fn map_slice_modification<W: Write>(out: &mut W) -> Result<()> {
    title(out, "Example of Map-Slice Modification Calls:")?;
    let mut map_mod = BTreeMap::from([(1, "first".to_string()), (2, "second".to_string())]);
    writeln!(out, "Before: mapMod = {}", render::map(&map_mod))?;
    aliasing::modify_map(&mut map_mod);
    writeln!(out, "After: mapMod = {}", render::map(&map_mod))?;

    let mut slc_mod = vec![1, 2, 3];
    writeln!(out, "Before: slcMod = {}", render::list(&slc_mod))?;
    aliasing::modify_slice(&mut slc_mod);
    writeln!(out, "After: slcMod = {}", render::list(&slc_mod))?;
    writeln!(out)?;
    Ok(())
}
