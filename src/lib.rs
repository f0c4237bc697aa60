//! Small helpers for games on an integer grid.

pub mod dir;

mod raster;
pub use raster::{circle_outline, circle_points, line, thick_line};

mod rng;
pub use rng::{srng, Dice, GameRng, RngExt};

mod seed;
pub use seed::Seed;

mod vec;
pub use vec::{v2, IntVec2};

/// Set with an efficient hash function.
pub use rustc_hash::FxHashSet as HashSet;

type DefaultHashBuilder = std::hash::BuildHasherDefault<rustc_hash::FxHasher>;

/// Insertion order preserving set with an efficient hash function.
pub type IndexSet<V> = indexmap::IndexSet<V, DefaultHashBuilder>;

/// Failures of the checked vector operations.
#[derive(
    Copy, Clone, Eq, PartialEq, Debug, derive_more::Display, derive_more::Error,
)]
pub enum Error {
    /// Vector component index other than 0 or 1.
    #[display("vector component index {_0} out of range")]
    IndexOutOfRange(#[error(not(source))] usize),

    #[display("division by zero")]
    DivideByZero,
}

pub type Result<T> = std::result::Result<T, Error>;
