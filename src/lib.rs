//! Small, self-contained demonstrations of how functions, closures and
//! arguments behave, run in sequence by [`sampler::run`].

pub mod aliasing;
pub mod arith;
pub mod calc;
pub mod cat;
pub mod closures;
pub mod defer;
pub mod records;
pub mod render;
pub mod sampler;

pub type Result<T> = anyhow::Result<T>;

pub use aliasing::{Person2, modify_fails, modify_map, modify_slice};
pub use arith::{ArithError, DivMod, add, add_nums, div, divmod, divmod_named, divs, mul, sub};
pub use calc::{BinaryOp, CalcError, Calculator};
pub use cat::{CHUNK_SIZE, cat_file, copy_chunks};
pub use closures::{TextMeasure, make_mult};
pub use defer::DeferStack;
pub use records::{FuncParams, Person};
pub use sampler::{defer_example, run};
