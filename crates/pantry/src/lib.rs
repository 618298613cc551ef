//! # Pantry
//!
//! Deterministic sample data for documentation examples.
//!
//! Pantry provides a fixed set of sample ingredient names, either as a plain
//! sequence or wrapped in a [`Table`] that renders like a dataframe `repr`
//! (right-aligned columns, positional row labels). The output never varies,
//! so example transcripts in documentation stay true forever.
//!
//! ## Layout
//!
//! - **Sample Data Provider**: [`get_ingredients`] and friends
//! - **Tabular wrapper**: [`Table`], an ordered set of named string columns
//! - **Errors**: [`TableError`] for fallible table construction and lookup
//!
//! ## Example
//!
//! ```
//! let ingredients = pantry::get_ingredients();
//! assert_eq!(ingredients, ["shells", "gorgonzola", "parsley"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ingredients;
pub mod table;

// Re-export main types
pub use error::{Result, TableError};
pub use ingredients::{
    get_ingredients, get_ingredients_table, get_ingredients_table_with, get_ingredients_with,
    IngredientRequest,
};
pub use table::Table;

/// Pantry version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
