use std::rc::Rc;

use gloo_net::http::Request;
use thiserror::Error;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

pub const SUBMIT_LABEL: &str = "Отправить заявку";
pub const BUSY_LABEL: &str = "Отправка...";
pub const SUCCESS_TEXT: &str = "Спасибо! Заявка отправлена, мы скоро свяжемся с вами.";
pub const ERROR_TEXT: &str = "Ошибка при отправке! Проверьте интернет или попробуйте позже.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("could not read form fields: {0}")]
    Form(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("endpoint answered with HTTP {0}")]
    Status(u16),
}

pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Status(status))
    }
}

/// Posts every field of `form` as multipart form data. One attempt, no retry.
pub async fn submit_form(endpoint: &str, form: &HtmlFormElement) -> Result<(), SubmitError> {
    let body = FormData::new_with_form(form).map_err(|e| SubmitError::Form(format!("{:?}", e)))?;
    let response = Request::post(endpoint)
        .body(body)
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;
    check_status(response.status())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: &'static str,
}

impl StatusMessage {
    pub fn class(&self) -> &'static str {
        match self.kind {
            StatusKind::Success => "form-alert success",
            StatusKind::Error => "form-alert error",
        }
    }
}

pub enum ContactAction {
    Submit,
    Completed(Result<(), SubmitError>),
    /// Hide the status shown for the given submission, if it is still current.
    HideStatus(u32),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub busy: bool,
    pub status: Option<StatusMessage>,
    /// Number of submissions started so far.
    pub submission: u32,
    /// Bumped after every successful submission; the form resets on change.
    pub cleared: u32,
}

impl ContactFormState {
    pub fn button_label(&self) -> &'static str {
        if self.busy {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}

impl Reducible for ContactFormState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Submit => {
                next.busy = true;
                next.status = None;
                next.submission += 1;
            }
            ContactAction::Completed(result) => {
                next.busy = false;
                next.status = Some(match result {
                    Ok(()) => {
                        next.cleared += 1;
                        StatusMessage {
                            kind: StatusKind::Success,
                            text: SUCCESS_TEXT,
                        }
                    }
                    Err(_) => StatusMessage {
                        kind: StatusKind::Error,
                        text: ERROR_TEXT,
                    },
                });
            }
            ContactAction::HideStatus(submission) => {
                if submission != self.submission || self.busy {
                    return self;
                }
                next.status = None;
            }
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted() -> Rc<ContactFormState> {
        Rc::new(ContactFormState::default()).reduce(ContactAction::Submit)
    }

    #[test]
    fn submit_disables_button_and_shows_busy_label() {
        let state = submitted();
        assert!(state.busy);
        assert_eq!(state.button_label(), BUSY_LABEL);
        assert_eq!(state.submission, 1);
    }

    #[test]
    fn success_clears_form_and_restores_button() {
        let state = submitted().reduce(ContactAction::Completed(Ok(())));
        assert!(!state.busy);
        assert_eq!(state.button_label(), SUBMIT_LABEL);
        assert_eq!(state.cleared, 1);
        assert_eq!(state.status.map(|s| s.kind), Some(StatusKind::Success));
    }

    #[test]
    fn http_error_keeps_fields_and_restores_button() {
        let state = submitted().reduce(ContactAction::Completed(check_status(503)));
        assert!(!state.busy);
        assert_eq!(state.cleared, 0);
        assert_eq!(state.status.map(|s| s.text), Some(ERROR_TEXT));
    }

    #[test]
    fn transport_error_looks_the_same_to_the_user() {
        let failed = Err(SubmitError::Transport("TypeError: Failed to fetch".into()));
        let state = submitted().reduce(ContactAction::Completed(failed));
        assert!(!state.busy);
        assert_eq!(state.cleared, 0);
        assert_eq!(
            state.status,
            Some(StatusMessage {
                kind: StatusKind::Error,
                text: ERROR_TEXT
            })
        );
    }

    #[test]
    fn hide_timer_clears_current_status() {
        let state = submitted()
            .reduce(ContactAction::Completed(Ok(())))
            .reduce(ContactAction::HideStatus(1));
        assert_eq!(state.status, None);
        assert_eq!(state.cleared, 1);
    }

    #[test]
    fn stale_hide_timer_leaves_newer_status_alone() {
        let state = submitted()
            .reduce(ContactAction::Completed(Ok(())))
            .reduce(ContactAction::Submit)
            .reduce(ContactAction::Completed(Err(SubmitError::Status(500))))
            .reduce(ContactAction::HideStatus(1));
        assert_eq!(state.status.map(|s| s.kind), Some(StatusKind::Error));
    }

    #[test]
    fn new_submission_hides_previous_status() {
        let state = submitted()
            .reduce(ContactAction::Completed(Ok(())))
            .reduce(ContactAction::Submit);
        assert_eq!(state.status, None);
        assert!(state.busy);
    }

    #[test]
    fn only_2xx_counts_as_success() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(check_status(302), Err(SubmitError::Status(302)));
        assert_eq!(check_status(404), Err(SubmitError::Status(404)));
        assert_eq!(
            SubmitError::Status(404).to_string(),
            "endpoint answered with HTTP 404"
        );
    }

    #[test]
    fn status_variants_are_styled() {
        let ok = StatusMessage {
            kind: StatusKind::Success,
            text: SUCCESS_TEXT,
        };
        assert_eq!(ok.class(), "form-alert success");
    }
}
