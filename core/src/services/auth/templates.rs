//! Email templates

use crate::domain::value_objects::OutboundMessage;

pub const PASSWORD_RESET_SUBJECT: &str = "ATOM 2K26 | Your Password Reset OTP";

/// Password reset email carrying the one-time password
pub fn password_reset_email(to: &str, username: &str, code: &str, ttl_minutes: i64) -> OutboundMessage {
    let body = format!(
        r#"<div style="font-family:Arial,sans-serif;max-width:500px;margin:auto;border:1px solid #d4af37;border-radius:10px;overflow:hidden">
  <div style="background:#0a0a1e;padding:24px;text-align:center">
    <h2 style="color:#f4d97a;margin:0;font-size:22px;">ATOM 2K26 Password Reset</h2>
  </div>
  <div style="padding:28px;background:#111;color:#cfd8ff;">
    <p>Hello <strong>{username}</strong>,</p>
    <p>Use the OTP below to reset your password. It expires in <strong>{ttl_minutes} minutes</strong>.</p>
    <div style="text-align:center;margin:28px 0">
      <span style="font-size:36px;font-weight:bold;letter-spacing:10px;color:#f4d97a;background:#1a1a2e;padding:14px 28px;border-radius:8px;border:1px solid #d4af37">{code}</span>
    </div>
    <p style="font-size:13px;color:#888">If you did not request this, please ignore this email.</p>
  </div>
</div>"#,
        username = html_escape(username),
        ttl_minutes = ttl_minutes,
        code = code,
    );

    OutboundMessage::new(to, PASSWORD_RESET_SUBJECT, body)
}

fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_email_contains_code_and_ttl() {
        let message = password_reset_email("ravi@x.io", "Ravi", "482913", 10);
        assert_eq!(message.to, "ravi@x.io");
        assert_eq!(message.subject, PASSWORD_RESET_SUBJECT);
        assert!(message.html_body.contains("482913"));
        assert!(message.html_body.contains("10 minutes"));
        assert!(message.html_body.contains("<strong>Ravi</strong>"));
    }

    #[test]
    fn test_username_is_escaped() {
        let message = password_reset_email("x@x.io", "<script>", "111111", 10);
        assert!(message.html_body.contains("&lt;script&gt;"));
        assert!(!message.html_body.contains("<script>"));
    }
}
