pub mod http;
pub mod recaptcha;
