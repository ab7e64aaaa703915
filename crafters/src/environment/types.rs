use crafters_core_careers_impl::CareersFeatureServiceImpl;
use crafters_core_contact_impl::ContactFeatureServiceImpl;
use crafters_core_health_impl::HealthFeatureServiceImpl;
use crafters_email_impl::EmailServiceImpl;
use crafters_extern_impl::recaptcha::RecaptchaApiServiceImpl;
use crafters_shared_impl::captcha::CaptchaServiceImpl;

// API
pub type RestServer<Email = EmailServiceImpl> =
    crafters_api_rest::RestServer<Health<Email>, Contact<Email>, Careers<Email>>;

// Extern
pub type RecaptchaApi = RecaptchaApiServiceImpl;

// Shared
pub type Captcha = CaptchaServiceImpl<RecaptchaApi>;

// Core
pub type Health<Email = EmailServiceImpl> = HealthFeatureServiceImpl<Email>;
pub type Contact<Email = EmailServiceImpl> = ContactFeatureServiceImpl<Captcha, Email>;
pub type Careers<Email = EmailServiceImpl> = CareersFeatureServiceImpl<Captcha, Email>;
