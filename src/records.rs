//! Record shapes passed around by the demonstrations.

use std::fmt;
use std::io::Write;

use anyhow::Result;

/// Parameter bag emulating optional, named arguments: set the fields you
/// need and take `..Default::default()` for the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FuncParams {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
}

impl fmt::Display for FuncParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {} {}}}", self.first_name, self.last_name, self.age)
    }
}

pub fn my_func<W: Write>(out: &mut W, params: &FuncParams) -> Result<()> {
    writeln!(out, "Passed parameters: {params}")?;
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str, age: i64) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {} {}}}", self.first_name, self.last_name, self.age)
    }
}

/// Stable ascending sort on the last name.
pub fn sort_by_last_name(people: &mut [Person]) {
    people.sort_by(|a, b| a.last_name.cmp(&b.last_name));
}

/// Stable ascending sort on the age.
pub fn sort_by_age(people: &mut [Person]) {
    people.sort_by_key(|p| p.age);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Person> {
        vec![
            Person::new("John", "Smith", 37),
            Person::new("Jeremy", "Trye", 18),
            Person::new("Jasmine", "Alter", 20),
        ]
    }

    fn last_names(people: &[Person]) -> Vec<&str> {
        people.iter().map(|p| p.last_name.as_str()).collect()
    }

    #[test]
    fn partial_params_take_zero_values() {
        let params = FuncParams {
            last_name: "Smith".into(),
            age: 50,
            ..Default::default()
        };
        assert_eq!(params.to_string(), "{ Smith 50}");

        let mut out = Vec::new();
        my_func(
            &mut out,
            &FuncParams {
                first_name: "Mary".into(),
                last_name: "Smith".into(),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Passed parameters: {Mary Smith 0}\n");
    }

    #[test]
    fn sorts_by_last_name_then_age() {
        let mut people = sample();
        sort_by_last_name(&mut people);
        assert_eq!(last_names(&people), ["Alter", "Smith", "Trye"]);

        sort_by_age(&mut people);
        let ages: Vec<i64> = people.iter().map(|p| p.age).collect();
        assert_eq!(ages, [18, 20, 37]);
        assert_eq!(people[0].to_string(), "{Jeremy Trye 18}");
    }

    #[test]
    fn sorting_is_stable() {
        let mut people = vec![
            Person::new("A", "Same", 30),
            Person::new("B", "Same", 20),
            Person::new("C", "Other", 30),
        ];
        sort_by_last_name(&mut people);
        let firsts: Vec<&str> = people.iter().map(|p| p.first_name.as_str()).collect();
        assert_eq!(firsts, ["C", "A", "B"]);

        sort_by_age(&mut people);
        let firsts: Vec<&str> = people.iter().map(|p| p.first_name.as_str()).collect();
        assert_eq!(firsts, ["B", "C", "A"]);
    }
}
