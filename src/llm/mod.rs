

pub mod tagging;

pub use tagging::{
    CategorySuggester, CategorySuggestion, ImageInput, ImageTagger, LabelPayload, TaggingError,
    parse_label,
};
