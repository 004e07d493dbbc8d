pub mod table;
pub mod translator;

pub use table::TranslationTable;
pub use translator::{TranslatedRow, Translator};
