use contracts::domain::common::{ApiEnvelope, Record, RecordId, Resource};
use contracts::shared::indicators::Indicator;

/// Create or edit of a concrete record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

/// Состояние модального окна формы
///
/// `Closed -> Open -> Submitting -> Closed`, a failed submit goes back to
/// `Open`. Nothing closes the modal while a request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(FormMode),
    Submitting(FormMode),
}

impl ModalState {
    /// Ignored while submitting
    pub fn open(&mut self, mode: FormMode) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = ModalState::Open(mode);
        true
    }

    /// Mode to submit with, or `None` when no form is open
    pub fn begin_submit(&mut self) -> Option<FormMode> {
        match *self {
            ModalState::Open(mode) => {
                *self = ModalState::Submitting(mode);
                Some(mode)
            }
            _ => None,
        }
    }

    pub fn submit_succeeded(&mut self) {
        if self.is_submitting() {
            *self = ModalState::Closed;
        }
    }

    pub fn submit_failed(&mut self) {
        if let ModalState::Submitting(mode) = *self {
            *self = ModalState::Open(mode);
        }
    }

    /// Returns whether the modal is closed afterwards
    pub fn close(&mut self) -> bool {
        match self {
            ModalState::Submitting(_) => false,
            _ => {
                *self = ModalState::Closed;
                true
            }
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, ModalState::Submitting(_))
    }

    pub fn mode(&self) -> Option<FormMode> {
        match *self {
            ModalState::Closed => None,
            ModalState::Open(mode) | ModalState::Submitting(mode) => Some(mode),
        }
    }
}

/// Данные страницы списка
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R: Resource> {
    pub records: Vec<Record<R>>,
    pub loading: bool,
    pub error: Option<String>,
    /// Records are `R::sample()`, shown because loading failed
    pub showing_sample: bool,
    pub editing_id: Option<RecordId>,
    /// Draft handed to the form modal
    pub form_data: R,
}

impl<R: Resource> Default for ListState<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: false,
            error: None,
            showing_sample: false,
            editing_id: None,
            form_data: R::default(),
        }
    }
}

impl<R: Resource> ListState<R> {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Success replaces the records. Failure keeps the error for the banner
    /// and falls back to the sample dataset when the resource has one.
    pub fn apply_load(&mut self, envelope: ApiEnvelope<Vec<Record<R>>>) {
        self.loading = false;
        match envelope.into_result() {
            Ok(records) => {
                self.records = records.unwrap_or_default();
                self.error = None;
                self.showing_sample = false;
            }
            Err(error) => {
                self.error = Some(error);
                let sample = R::sample();
                if !sample.is_empty() {
                    self.records = sample
                        .into_iter()
                        .enumerate()
                        .map(|(i, dto)| Record::sample(i, dto))
                        .collect();
                    self.showing_sample = true;
                }
            }
        }
    }

    pub fn summary(&self) -> Vec<Indicator> {
        R::summary(&self.records)
    }

    pub fn start_create(&mut self) -> FormMode {
        self.editing_id = None;
        self.form_data = R::default();
        FormMode::Create
    }

    /// Copies the row into the draft. Sample rows are read-only.
    pub fn start_edit(&mut self, id: RecordId) -> Option<FormMode> {
        let record = self.records.iter().find(|r| r.id == id && !r.is_sample())?;
        self.form_data = record.data.clone();
        self.editing_id = Some(id);
        Some(FormMode::Edit(id))
    }

    pub fn remove(&mut self, id: RecordId) {
        self.records.retain(|r| r.id != id);
    }
}
