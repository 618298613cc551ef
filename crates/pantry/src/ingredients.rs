//! Sample data provider: deterministic ingredient sequences

use serde::{Deserialize, Serialize};

use crate::table::Table;

/// The fixed sample sequence every provider call returns.
const SAMPLE_INGREDIENTS: [&str; 3] = ["shells", "gorgonzola", "parsley"];

/// Parameters accepted by the parameterized provider calls.
///
/// The request exists for signature compatibility with callers that pass a
/// count and a country. Neither field affects the output: the provider is
/// deterministic by design and always returns the same sample sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRequest {
    /// Number of ingredients to return (inert; see type docs)
    pub count: usize,

    /// Home country of the food (inert; see type docs)
    pub country: String,
}

impl Default for IngredientRequest {
    fn default() -> Self {
        Self {
            count: 3,
            country: "italy".to_string(),
        }
    }
}

impl IngredientRequest {
    /// Create a request with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ingredient count (builder pattern).
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the country (builder pattern).
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }
}

/// Return the sample ingredients as a sequence of strings.
///
/// Equivalent to calling [`get_ingredients_with`] with a default request
/// (`count = 3`, `country = "italy"`).
///
/// # Examples
///
/// ```
/// let ingredients = pantry::get_ingredients();
/// assert_eq!(ingredients, ["shells", "gorgonzola", "parsley"]);
/// ```
pub fn get_ingredients() -> Vec<String> {
    get_ingredients_with(&IngredientRequest::default())
}

/// Return the sample ingredients for an explicit request.
///
/// The request's fields do not affect the output; see [`IngredientRequest`].
///
/// # Examples
///
/// ```
/// use pantry::IngredientRequest;
///
/// let request = IngredientRequest::new().with_count(5).with_country("france");
/// let ingredients = pantry::get_ingredients_with(&request);
/// assert_eq!(ingredients, ["shells", "gorgonzola", "parsley"]);
/// ```
pub fn get_ingredients_with(_request: &IngredientRequest) -> Vec<String> {
    SAMPLE_INGREDIENTS.iter().map(|s| s.to_string()).collect()
}

/// Return the sample ingredients as a single-column [`Table`].
///
/// The table has one column named `"0"` and positional row labels.
///
/// # Examples
///
/// ```
/// let table = pantry::get_ingredients_table();
/// assert_eq!(table.num_rows(), 3);
/// assert_eq!(table.num_columns(), 1);
/// assert_eq!(
///     table.to_string(),
///     "            0\n\
///      0      shells\n\
///      1  gorgonzola\n\
///      2     parsley"
/// );
/// ```
pub fn get_ingredients_table() -> Table {
    get_ingredients_table_with(&IngredientRequest::default())
}

/// Return the sample ingredient table for an explicit request.
///
/// The request's fields do not affect the output; see [`IngredientRequest`].
///
/// # Examples
///
/// ```
/// use pantry::IngredientRequest;
///
/// let request = IngredientRequest::new().with_count(1);
/// let table = pantry::get_ingredients_table_with(&request);
/// assert_eq!(table.labels(), ["0", "1", "2"]);
/// ```
pub fn get_ingredients_table_with(request: &IngredientRequest) -> Table {
    Table::from_values(get_ingredients_with(request))
}
