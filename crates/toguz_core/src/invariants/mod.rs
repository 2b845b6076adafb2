//! Checkable invariants over core state.
//!
//! Each invariant lives in its own module with its own tests; integration
//! tests re-check them over full play-outs.

mod dense_plies;
mod seed_conservation;

pub use dense_plies::DensePlies;
pub use seed_conservation::SeedConservation;

/// A property of `T` that must hold at every observable point.
pub trait Invariant<T> {
    /// Whether the property holds for `value`.
    fn holds(value: &T) -> bool;

    /// Human-readable statement of the property.
    fn description() -> &'static str;
}
