use contracts::domain::common::Resource;
use leptos::prelude::*;

use super::draft::FormDraft;
use super::state::{FormMode, ModalState};
use crate::shared::resource_client::{HttpTransport, ResourceClient};

/// Итог отправки формы
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Client-side check failed, nothing was sent
    Rejected(String),
    /// No open form, or a request is already in flight
    Ignored,
    /// Saved; carries the client's success message
    Saved(Option<String>),
    Failed(String),
}

/// Required fields, number parsing and `R::validate`, in that order
pub fn check_draft<R: Resource>(draft: &FormDraft<R>) -> Result<R, String> {
    let missing = draft.missing_required();
    if !missing.is_empty() {
        return Err(format!("Please fill in: {}", missing.join(", ")));
    }
    let dto = draft.to_dto()?;
    dto.validate()?;
    Ok(dto)
}

/// Checks the draft, then creates or updates depending on the modal mode.
/// The modal goes to `Submitting` for the duration of the request and ends
/// `Closed` on success or back to `Open` on failure.
pub async fn submit_draft<R: Resource, T: HttpTransport>(
    client: &ResourceClient<R, T>,
    draft: &FormDraft<R>,
    modal: RwSignal<ModalState>,
) -> SubmitOutcome {
    let dto = match check_draft(draft) {
        Ok(dto) => dto,
        Err(e) => return SubmitOutcome::Rejected(e),
    };

    let mut mode = None;
    modal.update(|m| mode = m.begin_submit());
    let Some(mode) = mode else {
        return SubmitOutcome::Ignored;
    };

    let envelope = match mode {
        FormMode::Create => client.create(&dto).await,
        FormMode::Edit(id) => client.update(id, &dto).await,
    };
    if envelope.success {
        modal.update(|m| m.submit_succeeded());
        SubmitOutcome::Saved(envelope.message)
    } else {
        modal.update(|m| m.submit_failed());
        SubmitOutcome::Failed(envelope.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::AppConfig;
    use crate::shared::resource_client::{ClientError, HttpMethod, HttpReply};
    use chrono::Utc;
    use contracts::domain::a002_claim::aggregate::ClaimDto;
    use contracts::domain::common::Record;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Answers every request with the same reply and records what was sent
    struct CountingTransport {
        reply: HttpReply,
        sent: RefCell<Vec<(HttpMethod, String)>>,
    }

    impl CountingTransport {
        fn replying(status: u16, body: impl Into<String>) -> Self {
            Self {
                reply: HttpReply::new(status, body),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl HttpTransport for &CountingTransport {
        async fn send(
            &self,
            method: HttpMethod,
            url: &str,
            _body: Option<String>,
        ) -> Result<HttpReply, ClientError> {
            self.sent.borrow_mut().push((method, url.to_string()));
            Ok(self.reply.clone())
        }
    }

    fn stored_claim() -> String {
        let now = Utc::now();
        let record = Record::new(
            7,
            ClaimDto {
                customer_name: "A Corp".into(),
                product_code: "P1".into(),
                product_name: "Widget".into(),
                ..Default::default()
            },
            now,
            now,
        );
        serde_json::to_string(&record).unwrap()
    }

    fn client(transport: &CountingTransport) -> ResourceClient<ClaimDto, &CountingTransport> {
        ResourceClient::with_transport(AppConfig::new("http://test", "/api"), transport)
    }

    fn filled() -> FormDraft<ClaimDto> {
        let mut draft = FormDraft::<ClaimDto>::from_dto(&ClaimDto::default());
        draft.set_input("customerName", "A Corp".into());
        draft.set_input("productCode", "P1".into());
        draft.set_input("productName", "Widget".into());
        draft
    }

    fn open(mode: FormMode) -> RwSignal<ModalState> {
        RwSignal::new(ModalState::Open(mode))
    }

    #[test]
    fn test_blank_required_field_sends_nothing() {
        let owner = Owner::new();
        owner.with(|| {
            let transport = CountingTransport::replying(201, stored_claim());
            let modal = open(FormMode::Create);
            let mut draft = filled();
            draft.set_input("customerName", "  ".into());

            let outcome = block_on(submit_draft(&client(&transport), &draft, modal));
            assert_eq!(outcome, SubmitOutcome::Rejected("Please fill in: Customer".into()));
            assert_eq!(transport.calls(), 0);
            assert_eq!(modal.get_untracked(), ModalState::Open(FormMode::Create));
        });
    }

    #[test]
    fn test_invalid_values_send_nothing() {
        let owner = Owner::new();
        owner.with(|| {
            let transport = CountingTransport::replying(201, stored_claim());
            let modal = open(FormMode::Create);

            let mut draft = filled();
            draft.set_input("quantity", "abc".into());
            let outcome = block_on(submit_draft(&client(&transport), &draft, modal));
            assert_eq!(outcome, SubmitOutcome::Rejected("Quantity must be a number".into()));

            let mut draft = filled();
            draft.set_input("quantity", "-1".into());
            let outcome = block_on(submit_draft(&client(&transport), &draft, modal));
            assert!(matches!(outcome, SubmitOutcome::Rejected(_)));

            assert_eq!(transport.calls(), 0);
        });
    }

    #[test]
    fn test_create_closes_modal() {
        let owner = Owner::new();
        owner.with(|| {
            let transport = CountingTransport::replying(201, stored_claim());
            let modal = open(FormMode::Create);

            let outcome = block_on(submit_draft(&client(&transport), &filled(), modal));
            assert_eq!(outcome, SubmitOutcome::Saved(Some("Claim created".into())));
            assert_eq!(
                transport.sent.borrow().as_slice(),
                &[(HttpMethod::Post, "http://test/api/claims".to_string())]
            );
            assert_eq!(modal.get_untracked(), ModalState::Closed);
        });
    }

    #[test]
    fn test_edit_patches_record() {
        let owner = Owner::new();
        owner.with(|| {
            let transport = CountingTransport::replying(200, stored_claim());
            let modal = open(FormMode::Edit(7));

            let outcome = block_on(submit_draft(&client(&transport), &filled(), modal));
            assert_eq!(outcome, SubmitOutcome::Saved(Some("Claim updated".into())));
            assert_eq!(
                transport.sent.borrow().as_slice(),
                &[(HttpMethod::Patch, "http://test/api/claims/7".to_string())]
            );
        });
    }

    #[test]
    fn test_server_rejection_reopens_form() {
        let owner = Owner::new();
        owner.with(|| {
            let transport = CountingTransport::replying(422, r#"{"error":"Customer is required"}"#);
            let modal = open(FormMode::Create);

            let outcome = block_on(submit_draft(&client(&transport), &filled(), modal));
            assert_eq!(
                outcome,
                SubmitOutcome::Failed(r#"HTTP 422: {"error":"Customer is required"}"#.into())
            );
            assert_eq!(transport.calls(), 1);
            assert_eq!(modal.get_untracked(), ModalState::Open(FormMode::Create));
        });
    }

    #[test]
    fn test_second_submit_is_ignored_while_in_flight() {
        let owner = Owner::new();
        owner.with(|| {
            let transport = CountingTransport::replying(201, stored_claim());
            let modal = RwSignal::new(ModalState::Submitting(FormMode::Create));

            let outcome = block_on(submit_draft(&client(&transport), &filled(), modal));
            assert_eq!(outcome, SubmitOutcome::Ignored);
            assert_eq!(transport.calls(), 0);
        });
    }
}
