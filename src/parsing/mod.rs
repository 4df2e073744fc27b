pub mod card_parser;
pub mod tag_extractor;

// Re-export the main parsing functions for convenience
pub use card_parser::parse_card_fields;
pub use tag_extractor::extract_text_between_tag;
