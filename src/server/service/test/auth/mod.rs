use crate::server::{
    error::{auth::AuthError, validation::ValidationError, AppError, EntityKind},
    model::user::{LoginParam, SignupParam},
    service::auth::AuthService,
};
use test_utils::{builder::TestBuilder, factory};

mod get_user;
mod login;

fn signup_param(email: &str, password: &str) -> SignupParam {
    SignupParam {
        email: email.to_string(),
        name: "Writer".to_string(),
        password: password.to_string(),
    }
}

fn login_param(email: &str, password: &str) -> LoginParam {
    LoginParam {
        email: email.to_string(),
        password: password.to_string(),
    }
}
