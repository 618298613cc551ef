//! Tests for the sample data provider

use pretty_assertions::assert_eq;

use pantry::*;

#[test]
fn test_get_ingredients_literal_sequence() {
    assert_eq!(get_ingredients(), ["shells", "gorgonzola", "parsley"]);
}

#[test]
fn test_arguments_do_not_affect_output() {
    let requests = [
        IngredientRequest::default(),
        IngredientRequest::new().with_count(0),
        IngredientRequest::new().with_count(100).with_country("japan"),
        IngredientRequest::new().with_country(""),
    ];

    for request in &requests {
        assert_eq!(
            get_ingredients_with(request),
            ["shells", "gorgonzola", "parsley"]
        );
    }
}

#[test]
fn test_defaults_equivalent_to_explicit_arguments() {
    let explicit = IngredientRequest::new().with_count(3).with_country("italy");
    assert_eq!(get_ingredients(), get_ingredients_with(&explicit));
    assert_eq!(
        get_ingredients_table(),
        get_ingredients_table_with(&explicit)
    );
}

#[test]
fn test_repeated_calls_return_equal_results() {
    let first = get_ingredients();
    let second = get_ingredients();
    assert_eq!(first, second);

    let first = get_ingredients_table();
    let second = get_ingredients_table();
    assert_eq!(first, second);
}

#[test]
fn test_ingredients_table_shape() {
    let table = get_ingredients_table();

    assert_eq!(table.num_columns(), 1);
    assert_eq!(table.num_rows(), 3);
    assert_eq!(table.column_names(), ["0"]);
    assert_eq!(table.labels(), ["0", "1", "2"]);
    assert_eq!(
        table.column("0").unwrap(),
        ["shells", "gorgonzola", "parsley"]
    );
}

#[test]
fn test_ingredients_table_rendering() {
    let rendered = get_ingredients_table().to_string();
    let expected = "            0\n\
                    0      shells\n\
                    1  gorgonzola\n\
                    2     parsley";
    assert_eq!(rendered, expected);
}

#[test]
fn test_end_to_end_scenario() {
    // Sequence form
    assert_eq!(get_ingredients(), ["shells", "gorgonzola", "parsley"]);

    // Tabular form: 3x1 with positional labels
    let table = get_ingredients_table();
    assert_eq!(table.cell(0, "0").unwrap(), "shells");
    assert_eq!(table.cell(1, "0").unwrap(), "gorgonzola");
    assert_eq!(table.cell(2, "0").unwrap(), "parsley");
}
