use super::*;

fn filled() -> ContactState {
    ContactState {
        open: true,
        form: ContactForm {
            name: "Ada".to_owned(),
            email: "ada@example.test".to_owned(),
            subject: "Hello".to_owned(),
            message: "Nice site".to_owned(),
        },
        sending: false,
        message: None,
        ..ContactState::default()
    }
}

// =============================================================
// Open / close
// =============================================================

#[test]
fn default_state_is_closed_and_idle() {
    let state = ContactState::default();
    assert!(!state.open);
    assert!(!state.sending);
    assert_eq!(state.message, None);
}

#[test]
fn close_resets_fields_and_message() {
    let mut state = filled();
    state.message = Some(FormMessage::Failure);
    state.close();
    assert!(!state.open);
    assert_eq!(state.form, ContactForm::default());
    assert_eq!(state.message, None);
}

#[test]
fn close_during_send_keeps_sending_flag() {
    let mut state = filled();
    state.begin_send();
    state.close();
    assert!(state.sending);
    state.finish_send(true);
    assert!(!state.sending);
    assert_eq!(state.message, Some(FormMessage::Success));
}

#[test]
fn delayed_close_applies_to_the_same_showing() {
    let mut state = filled();
    state.open();
    state.begin_send();
    state.finish_send(true);
    let session = state.session();

    assert!(state.close_if_session(session));
    assert!(!state.open);
}

#[test]
fn delayed_close_ignores_a_reopened_modal() {
    let mut state = ContactState::default();
    state.open();
    state.begin_send();
    state.finish_send(true);
    let session = state.session();

    state.close();
    state.open();
    state.form.name = "Grace".to_owned();

    assert!(!state.close_if_session(session));
    assert!(state.open);
    assert_eq!(state.form.name, "Grace");
}

#[test]
fn delayed_hide_ignores_a_later_showing() {
    let mut state = ContactState::default();
    state.open();
    state.begin_send();
    state.finish_send(true);
    let first = state.session();

    assert!(state.hide_message_if_session(first));
    assert_eq!(state.message, None);

    state.close();
    state.open();
    state.begin_send();
    state.finish_send(false);
    assert!(!state.hide_message_if_session(first));
    assert_eq!(state.message, Some(FormMessage::Failure));
}

// =============================================================
// Sending
// =============================================================

#[test]
fn begin_send_snapshots_fields_and_hides_message() {
    let mut state = filled();
    state.message = Some(FormMessage::Failure);
    let snapshot = state.begin_send().unwrap();
    assert_eq!(snapshot, filled().form);
    assert!(state.sending);
    assert_eq!(state.message, None);
}

#[test]
fn second_submit_while_sending_is_ignored() {
    let mut state = filled();
    assert!(state.begin_send().is_some());
    assert!(state.begin_send().is_none());
}

#[test]
fn success_resets_form_and_shows_success() {
    let mut state = filled();
    state.begin_send();
    state.finish_send(true);
    assert_eq!(state.form, ContactForm::default());
    assert_eq!(state.message, Some(FormMessage::Success));
    assert!(state.open);
}

#[test]
fn failure_keeps_fields_and_modal_open() {
    let mut state = filled();
    state.begin_send();
    state.finish_send(false);
    assert_eq!(state.form, filled().form);
    assert_eq!(state.message, Some(FormMessage::Failure));
    assert!(state.open);
    assert!(!state.sending);
}

#[test]
fn message_text_and_class() {
    assert_eq!(FormMessage::Success.text(), SUCCESS_MESSAGE);
    assert!(FormMessage::Failure.text().contains("try again"));
    assert_eq!(FormMessage::Failure.class(), "form-message error");
}
