mod line;
mod variables;

pub use line::{classify_line, parse_lines, significant_lines};
pub use variables::{variable_references, VariableRef};
