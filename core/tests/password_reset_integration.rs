//! Integration tests for the password reset flow over the fallback mailer

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use atom_core::domain::value_objects::{DeliveryReceipt, OutboundMessage};
    use atom_core::errors::{DomainError, MailError};
    use atom_core::repositories::MockUserRepository;
    use atom_core::services::auth::{AuthService, AuthServiceConfig, SignupInput};
    use atom_core::services::mail::{FallbackMailer, MailTransport};
    use atom_core::services::otp::{OtpStore, OtpVerification};

    // Transport that always refuses the connection
    struct RefusingTransport(&'static str);

    #[async_trait]
    impl MailTransport for RefusingTransport {
        fn name(&self) -> &str {
            self.0
        }

        async fn send(&self, _message: &OutboundMessage) -> Result<DeliveryReceipt, MailError> {
            Err(MailError::transport(self.0, "connection refused"))
        }
    }

    // Transport that keeps delivered messages in memory
    struct InboxTransport {
        inbox: Arc<Mutex<Vec<OutboundMessage>>>,
    }

    #[async_trait]
    impl MailTransport for InboxTransport {
        fn name(&self) -> &str {
            "inbox"
        }

        async fn send(&self, message: &OutboundMessage) -> Result<DeliveryReceipt, MailError> {
            self.inbox.lock().unwrap().push(message.clone());
            Ok(DeliveryReceipt::new("inbox", Some("<1@inbox>".to_string()), "250 OK"))
        }
    }

    fn extract_code(message: &OutboundMessage) -> String {
        message
            .html_body
            .split(|c: char| !c.is_ascii_digit())
            .find(|chunk| chunk.len() == 6)
            .unwrap()
            .to_string()
    }

    async fn signed_up_service(
        transports: Vec<Box<dyn MailTransport>>,
    ) -> AuthService<MockUserRepository, FallbackMailer> {
        let service = AuthService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(OtpStore::default()),
            Arc::new(FallbackMailer::new(transports, Some(Duration::from_secs(5)))),
            AuthServiceConfig { bcrypt_cost: 4 },
        );
        service
            .signup(SignupInput {
                username: "Meena".to_string(),
                email: "meena@psg.test".to_string(),
                mobile: "9988776655".to_string(),
                password: "First#Pass1".to_string(),
                college: Some("PSG Tech".to_string()),
            })
            .await
            .unwrap();
        service
    }

    #[tokio::test]
    async fn test_reset_flow_after_transport_fallback() {
        let inbox = Arc::new(Mutex::new(Vec::new()));
        let service = signed_up_service(vec![
            Box::new(RefusingTransport("smtp:465")),
            Box::new(RefusingTransport("smtp:587")),
            Box::new(InboxTransport {
                inbox: inbox.clone(),
            }),
        ])
        .await;

        let receipt = service.forgot_password("Meena@PSG.test").await.unwrap();
        assert_eq!(receipt.transport, "inbox");

        let code = extract_code(&inbox.lock().unwrap()[0]);
        service.verify_otp("meena@psg.test", &code).await.unwrap();
        service
            .reset_password("meena@psg.test", &code, "Second#Pass2")
            .await
            .unwrap();

        assert!(service.login("meena@psg.test", "Second#Pass2").await.is_ok());
        assert_eq!(
            service.otp_store().verify("meena@psg.test", &code),
            OtpVerification::Invalid
        );
    }

    #[tokio::test]
    async fn test_total_delivery_failure_surfaces_last_error() {
        let service = signed_up_service(vec![
            Box::new(RefusingTransport("smtp:465")),
            Box::new(RefusingTransport("smtp:25")),
        ])
        .await;

        let err = service.forgot_password("meena@psg.test").await.unwrap_err();
        match err {
            DomainError::Mail(MailError::Transport { transport, .. }) => {
                assert_eq!(transport, "smtp:25");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
