pub mod recaptcha;
pub mod resend;
