pub mod fsm;
mod language;
mod view;

pub use fsm::{TranslationEvent, TranslationState, TranslationStateMachine};
pub use language::Language;
pub use view::TranslationViewState;
