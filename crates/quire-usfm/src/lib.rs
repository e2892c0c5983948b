//! USFM syntax: tokenizing, number parsing, attributes and the book table.
//!
//! The tokenizer only separates syntax. It knows nothing about what a marker
//! means; that is the job of the style registry and the converter.
//!
//! # Example
//!
//! ```
//! use quire_usfm::{Token, tokenize};
//!
//! let tokens = tokenize("\\v 1 In the beginning");
//! let joined: String = tokens.iter().map(Token::as_str).collect();
//! assert_eq!(joined, "\\v 1 In the beginning\n");
//! ```

mod attributes;
mod books;
mod figure;
mod token;
mod tokenizer;
mod verse;

pub use attributes::{WordAttributes, parse_word_attributes};
pub use books::{Book, book_by_id, book_id_from_usfm, books, english_name, passage_display};
pub use figure::Figure;
pub use token::{Marker, MilestoneEdge, Token};
pub use tokenizer::{Normalized, normalize, tokenize};
pub use verse::{parse_chapter_number, peek_verse_number, verse_number_to_int};
