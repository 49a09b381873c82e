//! Command documents shared by unit tests.
//!
//! Fixtures are loaded at compile time using `include_str!`.
//!
//! ## Available Fixtures
//!
//! - [`FREE_TEXT_INT`] - Query text with one integer placeholder
//! - [`FREE_TEXT_STRING`] - Query text with one string placeholder
//! - [`PROCEDURE_WITH_OUTPUT`] - Procedure call with every parameter direction
//! - [`PROCEDURE_WITH_TABLE`] - Procedure call with a two-row table-valued parameter

/// `select * from products where productid = @id` with `@id = 1`.
pub const FREE_TEXT_INT: &str = include_str!("free_text_int.json");

/// `select * from products where productname = @name` with `@name = 'myname'`.
pub const FREE_TEXT_STRING: &str = include_str!("free_text_string.json");

/// `GetProductName` on database `Shop`.
///
/// Contains a return value, an integer input `@id = 5`, a varchar output
/// `@out` and an integer input/output `@attempts = 3`.
pub const PROCEDURE_WITH_OUTPUT: &str = include_str!("procedure_with_output.json");

/// `ImportProducts` with table `@p` of type `MyTableType`
/// (columns id, name, added, active), a bit input and an integer output.
pub const PROCEDURE_WITH_TABLE: &str = include_str!("procedure_with_table.json");
