//! Account-related form drafts: login, registration and password recovery.

use super::{is_valid_email, present, FieldErrors};

fn check_email(errors: &mut FieldErrors, email: &str) {
    if !present(email) {
        errors.insert("email", "Email is required".to_string());
    } else if !is_valid_email(email) {
        errors.insert("email", "Email is not valid".to_string());
    }
}

fn check_password(errors: &mut FieldErrors, password: &str) {
    if !present(password) {
        errors.insert("password", "Password is required".to_string());
    } else if password.len() < 6 {
        errors.insert(
            "password",
            "Password must be at least 6 characters".to_string(),
        );
    }
}

/// Login screen draft.
///
#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub const FIELD_COUNT: usize = 2;
    pub const FIELD_NAMES: [&'static str; Self::FIELD_COUNT] = ["email", "password"];

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);
        errors
    }

    pub fn fields_mut(&mut self) -> [&mut String; Self::FIELD_COUNT] {
        [&mut self.email, &mut self.password]
    }

    pub fn clear(&mut self) {
        *self = LoginForm::default();
    }
}

/// Registration screen draft.
///
#[derive(Debug, Default, Clone)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub const FIELD_COUNT: usize = 4;
    pub const FIELD_NAMES: [&'static str; Self::FIELD_COUNT] =
        ["fullName", "email", "password", "confirmPassword"];

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if !present(&self.full_name) {
            errors.insert("fullName", "Full name is required".to_string());
        } else if self.full_name.trim().len() < 3 {
            errors.insert(
                "fullName",
                "Full name must be at least 3 characters".to_string(),
            );
        }

        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);

        if !present(&self.confirm_password) {
            errors.insert("confirmPassword", "Confirm your password".to_string());
        } else if self.password != self.confirm_password {
            errors.insert("confirmPassword", "Passwords do not match".to_string());
        }

        errors
    }

    pub fn fields_mut(&mut self) -> [&mut String; Self::FIELD_COUNT] {
        [
            &mut self.full_name,
            &mut self.email,
            &mut self.password,
            &mut self.confirm_password,
        ]
    }

    pub fn clear(&mut self) {
        *self = RegisterForm::default();
    }
}

/// Set-new-password screen draft.
///
#[derive(Debug, Default, Clone)]
pub struct NewPasswordForm {
    pub new_password: String,
    pub confirm_password: String,
}

impl NewPasswordForm {
    pub const FIELD_COUNT: usize = 2;
    pub const FIELD_NAMES: [&'static str; Self::FIELD_COUNT] = ["newPassword", "confirmPassword"];

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if !present(&self.new_password) {
            errors.insert("newPassword", "New password is required".to_string());
        } else if self.new_password.len() < 6 {
            errors.insert(
                "newPassword",
                "Password must be at least 6 characters".to_string(),
            );
        } else if !has_required_character_classes(&self.new_password) {
            errors.insert(
                "newPassword",
                "Password must contain at least one uppercase letter, one lowercase letter and one digit"
                    .to_string(),
            );
        }

        if !present(&self.confirm_password) {
            errors.insert("confirmPassword", "Confirm your new password".to_string());
        } else if self.new_password != self.confirm_password {
            errors.insert("confirmPassword", "Passwords do not match".to_string());
        }

        errors
    }

    pub fn fields_mut(&mut self) -> [&mut String; Self::FIELD_COUNT] {
        [&mut self.new_password, &mut self.confirm_password]
    }

    pub fn clear(&mut self) {
        *self = NewPasswordForm::default();
    }
}

fn has_required_character_classes(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Forgot-password screen draft.
///
#[derive(Debug, Default, Clone)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub const FIELD_COUNT: usize = 1;
    pub const FIELD_NAMES: [&'static str; Self::FIELD_COUNT] = ["email"];

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, &self.email);
        errors
    }

    pub fn fields_mut(&mut self) -> [&mut String; Self::FIELD_COUNT] {
        [&mut self.email]
    }

    pub fn clear(&mut self) {
        *self = ForgotPasswordForm::default();
    }
}
