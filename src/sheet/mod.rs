// ABOUTME: Sheet fragment generation for the Ars Magica 5th edition Roll20 sheet
// ABOUTME: Exports the domain lists, fragment builders, widgets, and the fragment dictionary

pub mod data;
pub mod documentation;
pub mod error;
pub mod fatigue;
pub mod fragments;
pub mod repeat;
pub mod rolls;
pub mod rows;
pub mod translations;
pub mod widgets;

pub use data::{Die, CHARACTERISTICS, FORMS, TECHNIQUES};
pub use documentation::render_markdown;
pub use error::{Result, SheetError};
pub use fragments::{Fragments, GENERATED_HEADER};
pub use repeat::{capitalize, enumerate_helper, repeat_template, RepeatSource};
pub use rolls::RollKind;
pub use widgets::{xp, AlertLevel, AlertRegistry, XpSuffixes};
