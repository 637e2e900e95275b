pub mod parse_color;
pub mod substitute_placeholders;
