use relay_models::{
    contact::{ContactSubmission, SubmissionMessage, SubmissionName, SUBMISSION_NAME_REGEX},
    email_address::EmailAddress,
};

use crate::models::contact::{ApiFieldError, RawContactPayload};

pub const NAME_REQUIRED: &str = "Nome é obrigatório";
pub const NAME_LENGTH: &str = "Nome deve ter entre 2 e 100 caracteres";
pub const NAME_CHARSET: &str = "Nome contém caracteres inválidos";
pub const EMAIL_INVALID: &str = "Email inválido";
pub const EMAIL_TOO_LONG: &str = "Email muito longo";
pub const MESSAGE_REQUIRED: &str = "Mensagem é obrigatória";
pub const MESSAGE_LENGTH: &str = "Mensagem deve ter entre 10 e 2000 caracteres";

/// Validate a raw payload into a [`ContactSubmission`].
///
/// Rules are checked independently and every violation is collected, so a
/// client fixing its form sees all problems in one round trip. The error
/// order is stable: name rules first, then email, then message.
pub fn validate(payload: RawContactPayload) -> Result<ContactSubmission, Vec<ApiFieldError>> {
    let mut errors = Vec::new();
    let mut fail = |field, message, value: &str| {
        errors.push(ApiFieldError {
            field,
            message,
            value: value.to_owned(),
        });
    };

    let name = payload.name.trim();
    let name_chars = name.chars().count();
    if name.is_empty() {
        fail("name", NAME_REQUIRED, name);
    }
    if name_chars < SubmissionName::MIN_CHARS || name_chars > SubmissionName::MAX_CHARS {
        fail("name", NAME_LENGTH, name);
    }
    if !SUBMISSION_NAME_REGEX.is_match(name) {
        fail("name", NAME_CHARSET, name);
    }

    let email = payload.email.trim().to_lowercase();
    let parsed_email = EmailAddress::parse_normalized(&email);
    if parsed_email.is_err() {
        fail("email", EMAIL_INVALID, &email);
    }
    if email.chars().count() > EmailAddress::MAX_CHARS {
        fail("email", EMAIL_TOO_LONG, &email);
    }

    let message = payload.message.trim();
    let message_chars = message.chars().count();
    if message.is_empty() {
        fail("message", MESSAGE_REQUIRED, message);
    }
    if message_chars < SubmissionMessage::MIN_CHARS || message_chars > SubmissionMessage::MAX_CHARS {
        fail("message", MESSAGE_LENGTH, message);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // The checks above mirror the domain type rules, so constructing the
    // types cannot fail at this point; the guard below keeps a drift
    // between the two from turning into a panic.
    let (Ok(name), Ok(email), Ok(message)) = (
        SubmissionName::try_new(name.to_owned()),
        parsed_email,
        SubmissionMessage::try_new(message.to_owned()),
    ) else {
        return Err(vec![ApiFieldError {
            field: "body",
            message: "Dados inválidos",
            value: String::new(),
        }]);
    };

    Ok(ContactSubmission {
        name,
        email,
        message,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn payload(name: &str, email: &str, message: &str) -> RawContactPayload {
        RawContactPayload {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    fn messages_for<'a>(errors: &'a [ApiFieldError], field: &str) -> Vec<&'a str> {
        errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn valid_payload_is_normalized() {
        let submission = validate(payload(
            "  João Silva  ",
            " Joao@Exemplo.COM ",
            "Olá! Gostaria de saber mais.",
        ))
        .unwrap();

        assert_eq!(&*submission.name, "João Silva");
        assert_eq!(submission.email.as_str(), "joao@exemplo.com");
        assert_eq!(&*submission.message, "Olá! Gostaria de saber mais.");
    }

    #[test]
    fn empty_payload_reports_every_field() {
        let errors = validate(RawContactPayload::default()).unwrap_err();

        assert_eq!(
            messages_for(&errors, "name"),
            [NAME_REQUIRED, NAME_LENGTH, NAME_CHARSET]
        );
        assert_eq!(messages_for(&errors, "email"), [EMAIL_INVALID]);
        assert_eq!(
            messages_for(&errors, "message"),
            [MESSAGE_REQUIRED, MESSAGE_LENGTH]
        );
        // Name errors come first, message errors last.
        assert_eq!(errors.first().unwrap().field, "name");
        assert_eq!(errors.last().unwrap().field, "message");
    }

    #[test]
    fn name_length_boundaries() {
        let ok = validate(payload("ab", "a@b.co", "long enough message"));
        assert!(ok.is_ok());

        let errors = validate(payload("a", "a@b.co", "long enough message")).unwrap_err();
        assert_eq!(messages_for(&errors, "name"), [NAME_LENGTH]);

        let errors =
            validate(payload(&"a".repeat(101), "a@b.co", "long enough message")).unwrap_err();
        assert_eq!(messages_for(&errors, "name"), [NAME_LENGTH]);
    }

    #[test]
    fn name_charset_is_enforced() {
        let errors = validate(payload("João123", "a@b.co", "long enough message")).unwrap_err();
        assert_eq!(messages_for(&errors, "name"), [NAME_CHARSET]);
    }

    #[test]
    fn overlong_email_is_flagged() {
        let label = "a".repeat(60);
        let email = format!("user@{label}.{label}.{label}.{label}.{label}.com");
        assert!(email.len() > EmailAddress::MAX_CHARS);

        let errors = validate(payload("João", &email, "long enough message")).unwrap_err();
        assert!(messages_for(&errors, "email").contains(&EMAIL_TOO_LONG));
    }

    #[test]
    fn message_length_boundaries() {
        assert!(validate(payload("João", "a@b.co", &"m".repeat(10))).is_ok());
        assert!(validate(payload("João", "a@b.co", &"m".repeat(2000))).is_ok());

        let errors = validate(payload("João", "a@b.co", &"m".repeat(9))).unwrap_err();
        assert_eq!(messages_for(&errors, "message"), [MESSAGE_LENGTH]);

        let errors = validate(payload("João", "a@b.co", &"m".repeat(2001))).unwrap_err();
        assert_eq!(messages_for(&errors, "message"), [MESSAGE_LENGTH]);
    }

    #[test]
    fn rejected_values_are_echoed_back_trimmed() {
        let errors = validate(payload("  x  ", "not-an-email", "short")).unwrap_err();
        let name_error = errors.iter().find(|e| e.field == "name").unwrap();
        assert_eq!(name_error.value, "x");
        let email_error = errors.iter().find(|e| e.field == "email").unwrap();
        assert_eq!(email_error.value, "not-an-email");
    }
}
