use std::borrow::Cow;

use validator::ValidationError;

pub fn is_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() || email.chars().count() > 255 {
        return Err(ValidationError::new("email_length")
            .with_message(Cow::from("Email must contain between 1 and 255 characters")));
    }

    Ok(())
}

pub fn is_name(name: &str) -> Result<(), ValidationError> {
    let length = name.trim().chars().count();

    if !(1..=64).contains(&length) {
        return Err(ValidationError::new("name_length")
            .with_message(Cow::from("Name must contain between 1 and 64 characters")));
    }

    Ok(())
}
