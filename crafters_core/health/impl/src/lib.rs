use crafters_core_health_contracts::{HealthFeatureService, HealthStatus};
use crafters_email_contracts::EmailService;
use tracing::error;

#[derive(Debug, Clone)]
pub struct HealthFeatureServiceImpl<Email> {
    email: Option<Email>,
}

impl<Email> HealthFeatureServiceImpl<Email> {
    pub fn new(email: Option<Email>) -> Self {
        Self { email }
    }
}

impl<Email> HealthFeatureService for HealthFeatureServiceImpl<Email>
where
    Email: EmailService,
{
    async fn get_status(&self) -> HealthStatus {
        let email = match &self.email {
            Some(email) => email
                .ping()
                .await
                .inspect_err(|err| error!("Failed to ping email transport: {err:#}"))
                .is_ok(),
            None => false,
        };

        HealthStatus { email }
    }
}

#[cfg(test)]
mod tests {
    use crafters_email_contracts::MockEmailService;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn healthy() {
        // Arrange
        let email = MockEmailService::new().with_ping(true);
        let sut = HealthFeatureServiceImpl::new(Some(email));

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(result, HealthStatus { email: true });
        assert!(result.healthy());
    }

    #[tokio::test]
    async fn email_unreachable() {
        // Arrange
        let email = MockEmailService::new().with_ping(false);
        let sut = HealthFeatureServiceImpl::new(Some(email));

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(result, HealthStatus { email: false });
    }

    #[tokio::test]
    async fn no_email_transport() {
        // Arrange
        let sut = HealthFeatureServiceImpl::<MockEmailService>::new(None);

        // Act
        let result = sut.get_status().await;

        // Assert
        assert!(!result.healthy());
    }
}
