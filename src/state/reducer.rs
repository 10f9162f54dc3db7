//! Pure state transitions for the registration form

use super::field::FieldId;
use super::form::FormState;
use crate::validate;

/// Events the form reacts to, one per UI interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Append a character to a field's value.
    Input(FieldId, char),
    /// Remove the last character from a field's value.
    Backspace(FieldId),
    /// Re-run every validator and, if all pass, start submission.
    Submit,
}

/// Apply one event to the form, returning the next state.
///
/// Value changes revalidate the edited field as the user types. Editing the
/// password also revalidates the confirmation once it has content, so a
/// mismatch surfaces no matter which of the two changed last. Submit
/// revalidates all four fields unconditionally and only then flips the
/// submitting flag.
pub fn reduce(mut state: FormState, event: FormEvent) -> FormState {
    match event {
        FormEvent::Input(id, c) => {
            state.field_mut(id).value.push(c);
            revalidate(&mut state, id);
        }
        FormEvent::Backspace(id) => {
            state.field_mut(id).value.pop();
            revalidate(&mut state, id);
        }
        FormEvent::Submit => {
            state.name.error = validate::validate_name(&state.name.value);
            state.email.error = validate::validate_email(&state.email.value);
            state.password.error = validate::validate_password(&state.password.value);
            state.confirm.error =
                validate::validate_confirm_password(&state.password.value, &state.confirm.value);
            if !state.submitting && state.is_valid() {
                state.submitting = true;
            }
        }
    }
    state
}

fn revalidate(state: &mut FormState, id: FieldId) {
    match id {
        FieldId::Name => state.name.error = validate::validate_name(&state.name.value),
        FieldId::Email => state.email.error = validate::validate_email(&state.email.value),
        FieldId::Password => {
            state.password.error = validate::validate_password(&state.password.value);
            // An untouched confirmation stays quiet; once it has content a
            // password edit must update the mismatch state too.
            if !state.confirm.is_empty() {
                state.confirm.error = validate::validate_confirm_password(
                    &state.password.value,
                    &state.confirm.value,
                );
            }
        }
        FieldId::Confirm => {
            state.confirm.error =
                validate::validate_confirm_password(&state.password.value, &state.confirm.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(mut state: FormState, id: FieldId, text: &str) -> FormState {
        for c in text.chars() {
            state = reduce(state, FormEvent::Input(id, c));
        }
        state
    }

    fn valid_form() -> FormState {
        let state = FormState::default();
        let state = type_str(state, FieldId::Name, "Ada Lovelace");
        let state = type_str(state, FieldId::Email, "ada@example.com");
        let state = type_str(state, FieldId::Password, "Abc12345");
        type_str(state, FieldId::Confirm, "Abc12345")
    }

    mod value_changes {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn input_appends_and_validates_the_field() {
            let state = reduce(FormState::default(), FormEvent::Input(FieldId::Name, 'A'));
            assert_eq!(state.name.value, "A");
            assert_eq!(state.name.error, Some("Name must be at least 2 characters"));

            let state = reduce(state, FormEvent::Input(FieldId::Name, 'd'));
            assert_eq!(state.name.value, "Ad");
            assert_eq!(state.name.error, None);
        }

        #[test]
        fn backspace_pops_and_revalidates() {
            let state = type_str(FormState::default(), FieldId::Name, "Ad");
            assert_eq!(state.name.error, None);

            let state = reduce(state, FormEvent::Backspace(FieldId::Name));
            assert_eq!(state.name.value, "A");
            assert_eq!(state.name.error, Some("Name must be at least 2 characters"));
        }

        #[test]
        fn backspace_on_empty_field_is_a_noop_edit() {
            let state = reduce(FormState::default(), FormEvent::Backspace(FieldId::Email));
            assert_eq!(state.email.value, "");
            assert_eq!(state.email.error, Some("Email is required"));
        }

        #[test]
        fn editing_one_field_leaves_the_others_untouched() {
            let state = type_str(FormState::default(), FieldId::Email, "ada@example.com");
            assert_eq!(state.name.error, None);
            assert_eq!(state.password.error, None);
            assert_eq!(state.confirm.error, None);
        }
    }

    mod cross_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn password_edit_updates_confirm_error_when_confirm_has_content() {
            let state = type_str(FormState::default(), FieldId::Password, "Abc12345");
            let state = type_str(state, FieldId::Confirm, "Abc12345");
            assert_eq!(state.confirm.error, None);

            // One more password character breaks the match
            let state = reduce(state, FormEvent::Input(FieldId::Password, '6'));
            assert_eq!(state.confirm.error, Some("Passwords do not match"));

            // And removing it restores the match
            let state = reduce(state, FormEvent::Backspace(FieldId::Password));
            assert_eq!(state.confirm.error, None);
        }

        #[test]
        fn password_edit_leaves_an_empty_confirm_untouched() {
            let state = type_str(FormState::default(), FieldId::Password, "Abc12345");
            assert_eq!(state.confirm.error, None);
        }

        #[test]
        fn confirm_edits_always_validate_against_the_password() {
            let state = type_str(FormState::default(), FieldId::Password, "Abc12345");
            let state = type_str(state, FieldId::Confirm, "Abc1234");
            assert_eq!(state.confirm.error, Some("Passwords do not match"));

            let state = reduce(state, FormEvent::Input(FieldId::Confirm, '5'));
            assert_eq!(state.confirm.error, None);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn submit_validates_every_field() {
            let state = reduce(FormState::default(), FormEvent::Submit);
            assert_eq!(state.name.error, Some("Name is required"));
            assert_eq!(state.email.error, Some("Email is required"));
            assert_eq!(state.password.error, Some("Password is required"));
            assert_eq!(state.confirm.error, Some("Confirm your password"));
            assert!(!state.submitting);
        }

        #[test]
        fn submit_with_one_invalid_field_does_not_start_submission() {
            let mut state = valid_form();
            state = reduce(state, FormEvent::Backspace(FieldId::Confirm));
            state = reduce(state, FormEvent::Submit);
            assert_eq!(state.confirm.error, Some("Passwords do not match"));
            assert!(!state.submitting);
        }

        #[test]
        fn submit_with_all_fields_valid_starts_submission() {
            let state = reduce(valid_form(), FormEvent::Submit);
            assert!(state.is_valid());
            assert!(state.submitting);
        }

        #[test]
        fn second_submit_is_a_noop() {
            let state = reduce(valid_form(), FormEvent::Submit);
            let again = reduce(state.clone(), FormEvent::Submit);
            assert_eq!(again, state);
        }
    }
}
