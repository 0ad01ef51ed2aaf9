use crate::server::error::AppError;
use test_utils::{builder::TestBuilder, factory};


const AVATAR_BASE: &str = "https://avatars.test/";

fn assert_bad_request<T: std::fmt::Debug>(result: Result<T, AppError>, expected: &str) {
    match result {
        Err(AppError::BadRequest(message)) => assert_eq!(message, expected),
        other => panic!("expected BadRequest({:?}), got {:?}", expected, other),
    }
}

fn assert_not_found<T: std::fmt::Debug>(result: Result<T, AppError>, expected: &str) {
    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, expected),
        other => panic!("expected NotFound({:?}), got {:?}", expected, other),
    }
}
