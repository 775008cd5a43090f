pub mod login_service;
pub mod session_check_service;
