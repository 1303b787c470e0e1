use crate::page::ExtractedFields;

/// Build the code-generation instruction for one spreadsheet function.
///
/// The wording here is part of the contract with the chat model: it pins the
/// required code shape (a variadic function over `pl.Expr` arguments that
/// returns a single expression, plus an embedded `test` function) and warns
/// the model that the code runs inside an `exec`-style namespace, so it has
/// to carry its own imports.
pub fn build_prompt(fields: &ExtractedFields) -> String {
    let name = &fields.title;
    let description = &fields.description;
    let extra = &fields.examples;

    format!(
        r#"
        Given the Microsoft Excel function {name}, with description: {description}, and the following extra information: {extra}.

Implement a method in Python using the polars package, that takes as argument as many pl.Expressions as arguments the function has, and returns a single Expression, being this the result of the operation.

Regardless of the number or arguments, the argument of the function should always be an expanded argument: *args

Moreover, using the example in "extra", create a test case for the function that asserts the result of the function with the expected result.

Return only the function definition and the test case - wrapped in a function called `test` (starting with def and ending with the last line of the function definition).

Then execute the test function. Bear in mind that the whole code will be run in an `exec` function, so make sure to import the necessary libraries and functions.
"#
    )
}
