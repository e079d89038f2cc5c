use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::get_config;

#[derive(Clone)]
pub struct MailService {
    mailer: Option<SmtpTransport>,
    from_email: Option<String>,
}

impl MailService {
    pub fn new() -> Self {
        let config = get_config();
        let mailer = match (&config.smtp_server, &config.smtp_user, &config.smtp_pass) {
            (Some(server), Some(user), Some(pass)) => match SmtpTransport::relay(server) {
                Ok(builder) => Some(
                    builder
                        .credentials(Credentials::new(user.clone(), pass.clone()))
                        .build(),
                ),
                Err(e) => {
                    tracing::warn!("Invalid SMTP relay {}: {}", server, e);
                    None
                }
            },
            _ => None,
        };

        Self {
            mailer,
            from_email: config.from_email.clone(),
        }
    }

    /// Fire-and-forget OTP delivery; sign-up does not fail when the
    /// relay is down or unconfigured.
    pub fn send_otp(&self, name: &str, email: &str, code: &str) {
        let Some(mailer) = self.mailer.clone() else {
            tracing::warn!("SMTP is not configured; skipping OTP delivery to {}", email);
            return;
        };
        let from = self
            .from_email
            .clone()
            .unwrap_or_else(|| "no-reply@localhost".to_string());
        let to = format!("{} <{}>", name, email);
        let body = format!(
            "Your verification code is {}. It expires in 10 minutes.",
            code
        );

        tokio::task::spawn_blocking(move || {
            let result = (|| -> anyhow::Result<()> {
                let message = Message::builder()
                    .from(from.parse()?)
                    .to(to.parse()?)
                    .subject("Verify your account")
                    .header(ContentType::TEXT_PLAIN)
                    .body(body)?;
                mailer.send(&message)?;
                Ok(())
            })();

            match result {
                Ok(()) => tracing::info!("OTP email sent"),
                Err(e) => tracing::error!("Could not send OTP email: {:?}", e),
            }
        });
    }
}
