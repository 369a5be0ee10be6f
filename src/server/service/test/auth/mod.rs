use crate::server::{
    error::{auth::AuthError, AppError},
    service::{auth::AuthService, login_code::LoginCodeService},
};
use std::time::Duration;
use test_utils::{builder::TestBuilder, factory};

mod issue_login;

fn login_codes() -> LoginCodeService {
    LoginCodeService::new(Duration::from_secs(60))
}
