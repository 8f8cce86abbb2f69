//! Copies versus shared storage at a call boundary.
//!
//! Scalars, strings and records handed over by value are independent of the
//! caller's bindings. A map handed over as `&mut` is the caller's map. A
//! sequence handed over as `&mut [T]` shares its elements but not its
//! length: the callee can rewrite elements in place, yet anything it appends
//! lands in a fresh allocation the caller never sees.

use std::collections::BTreeMap;
use std::fmt;

use tracing::trace;

/// Composite passed by value to [`modify_fails`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Person2 {
    pub age: i64,
    pub name: String,
}

impl fmt::Display for Person2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.age, self.name)
    }
}

/// Mutates its own copies only. Callers pass `s.clone()` and `p.clone()`
/// so their bindings stay untouched.
#[allow(unused_assignments)]
pub fn modify_fails(mut i: i64, mut s: String, mut p: Person2) {
    i *= 2;
    s = "Goodbye".to_string();
    p.name = "Bob".to_string();
    trace!(i, %s, %p, "local copies modified");
}

pub fn modify_map(m: &mut BTreeMap<i64, String>) {
    m.insert(2, "hello".to_string());
    m.insert(3, "goodbye".to_string());
    m.remove(&1);
}

/// Doubles every element of the caller's view, then appends `10` to a
/// local copy. The view has no spare capacity, so the append must
/// reallocate and the caller keeps its original length. Returns the local
/// sequence.
pub fn modify_slice(s: &mut [i64]) -> Vec<i64> {
    for v in s.iter_mut() {
        *v = v.wrapping_mul(2);
    }
    let mut local = Vec::with_capacity(s.len() + 1);
    local.extend_from_slice(s);
    local.push(10);
    local
}
