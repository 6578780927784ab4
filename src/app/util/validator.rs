use validator::ValidationErrors;

/// Returns the message of the first failing field, falling back to the full report.
pub fn first_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    for (_, field_errors) in fields {
        for error in field_errors {
            if let Some(message) = &error.message {
                return message.to_string();
            }
        }
    }

    errors.to_string()
}
