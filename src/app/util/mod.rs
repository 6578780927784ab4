pub mod reqwest;
pub mod retry;
pub mod shutdown;
pub mod validator;
