//! Renders the plain-text and HTML bodies. Both carry the same
//! information: sender name, email, message, and a trailer explaining how
//! to reply.

/// Plain-text rendering.
pub(crate) fn text_body(name: &str, email: &str, message: &str) -> String {
    format!(
        "Nova mensagem recebida do site!\n\
         \n\
         👤 Nome: {name}\n\
         📧 Email: {email}\n\
         📝 Mensagem:\n\
         {message}\n\
         \n\
         ---\n\
         Esta mensagem foi enviada através do formulário de contato do seu site.\n\
         Para responder, use o email: {email}"
    )
}

/// HTML rendering, equivalent to [`text_body`] up to formatting. User
/// content is escaped; message line breaks become `<br>`.
pub(crate) fn html_body(name: &str, email: &str, message: &str) -> String {
    let name = escape(name);
    let email = escape(email);
    let message = escape(message).replace('\n', "<br>\n");

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <h2 style="margin: 0 0 20px 0;">🎉 Nova mensagem do site!</h2>
  <div style="background: #f8f9fa; padding: 30px; border-radius: 10px; border: 1px solid #e9ecef;">
    <p><strong>👤 Nome:</strong> {name}</p>
    <p><strong>📧 Email:</strong> <a href="mailto:{email}">{email}</a></p>
    <p><strong>📝 Mensagem:</strong></p>
    <div style="background: white; padding: 15px; border-radius: 8px; border-left: 4px solid #007bff; line-height: 1.6;">
      {message}
    </div>
    <div style="border-top: 1px solid #dee2e6; margin-top: 20px; padding-top: 20px; color: #6c757d; font-size: 14px;">
      <p>Esta mensagem foi enviada através do formulário de contato do seu site.</p>
      <p>Para responder, use o email: <a href="mailto:{email}">{email}</a></p>
    </div>
  </div>
</div>"#
    )
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn text_body_carries_all_fields() {
        let body = text_body("João Silva", "joao@exemplo.com", "Olá!\nTudo bem?");
        assert!(body.contains("👤 Nome: João Silva"));
        assert!(body.contains("📧 Email: joao@exemplo.com"));
        assert!(body.contains("Olá!\nTudo bem?"));
        assert!(body.contains("Para responder, use o email: joao@exemplo.com"));
    }

    #[test]
    fn html_body_converts_line_breaks() {
        let body = html_body("João Silva", "joao@exemplo.com", "linha um\nlinha dois");
        assert!(body.contains("linha um<br>\nlinha dois"));
        assert!(body.contains(r#"<a href="mailto:joao@exemplo.com">joao@exemplo.com</a>"#));
    }

    #[test]
    fn html_body_escapes_user_content() {
        let body = html_body("O'Neil", "joao@exemplo.com", "<script>alert(1)</script> & more");
        assert!(body.contains("O&#39;Neil"));
        assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; more"));
        assert!(!body.contains("<script>"));
    }

    #[test]
    fn escape_is_idempotent_on_clean_input() {
        assert_eq!(escape("texto simples, sem marcação"), "texto simples, sem marcação");
    }
}
