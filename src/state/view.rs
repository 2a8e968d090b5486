use super::fsm::{TranslationEvent, TranslationState, TranslationStateMachine};
use super::language::Language;
use crate::{
    Result,
    imaging::{ImageSource, MenuImage},
    translate::{DishRecord, TranslatedMenu},
};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Per-screen state observed by the presentation layer.
///
/// The view is the only writer; observers get snapshots through
/// [`TranslationViewState::subscribe`].
pub struct TranslationViewState {
    image: Option<MenuImage>,
    image_source: ImageSource,
    selected_language: Language,
    machine: TranslationStateMachine,
    updates: watch::Sender<TranslationState>,
}

impl TranslationViewState {
    /// Creates the state for a new screen, defaulting the target language
    /// from the device locale tag.
    pub fn new(locale: Option<&str>) -> Self {
        let selected_language = Language::from_locale(locale);
        debug!("New translation view, default language {}", selected_language);

        let (updates, _) = watch::channel(TranslationState::Idle);
        Self {
            image: None,
            image_source: ImageSource::default(),
            selected_language,
            machine: TranslationStateMachine::new(),
            updates,
        }
    }

    pub fn select_image(&mut self, image: MenuImage, source: ImageSource) {
        debug!(
            "Selected {}x{} image from {:?}",
            image.width(),
            image.height(),
            source
        );
        self.image = Some(image);
        self.image_source = source;
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    pub fn select_language(&mut self, language: Language) {
        self.selected_language = language;
    }

    pub fn image(&self) -> Option<&MenuImage> {
        self.image.as_ref()
    }

    pub fn image_source(&self) -> ImageSource {
        self.image_source
    }

    pub fn selected_language(&self) -> Language {
        self.selected_language
    }

    pub fn state(&self) -> &TranslationState {
        self.machine.current_state()
    }

    pub fn subscribe(&self) -> watch::Receiver<TranslationState> {
        self.updates.subscribe()
    }

    pub fn is_translating(&self) -> bool {
        self.machine.is_in_flight()
    }

    pub fn can_translate(&self) -> bool {
        self.image.is_some() && !self.is_translating()
    }

    /// Dishes of the last successful translation, empty otherwise.
    pub fn dishes(&self) -> &[DishRecord] {
        match self.state() {
            TranslationState::Success(menu) => menu.dishes.as_slice(),
            _ => &[],
        }
    }

    /// Human-readable outcome of the last translation, if one finished.
    pub fn status_message(&self) -> Option<&str> {
        match self.state() {
            TranslationState::Success(menu) => Some(menu.status_message()),
            TranslationState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Enters `InFlight`, discarding any previous result or error.
    pub fn begin_translation(&mut self) -> Result<()> {
        self.apply(TranslationEvent::Submit)
    }

    /// Leaves `InFlight` with the outcome of the request.
    pub fn finish_translation(&mut self, outcome: Result<TranslatedMenu>) -> Result<()> {
        let event = match outcome {
            Ok(menu) => {
                info!(
                    "Translation finished with {} dishes: {}",
                    menu.dishes.len(),
                    menu.status_message()
                );
                TranslationEvent::Completed(menu)
            }
            Err(e) => {
                warn!("Translation failed: {}", e);
                TranslationEvent::Failed(e.user_message())
            }
        };
        self.apply(event)
    }

    fn apply(&mut self, event: TranslationEvent) -> Result<()> {
        self.machine.transition(event)?;
        self.updates.send_replace(self.machine.current_state().clone());
        Ok(())
    }
}

impl Default for TranslationViewState {
    fn default() -> Self {
        Self::new(None)
    }
}
