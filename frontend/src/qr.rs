//! QR 码生成模块
//!
//! 购票时同步把票面文本编码为可扫描图片（SVG 的 data URL），
//! 附到 ticket 记录里提交。不涉及任何网络调用。

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use qrcode::render::svg;
use qrcode::{QrCode, types::QrError};

/// 票面 QR 的明文载荷
pub fn ticket_qr_payload(event_name: &str, buyer_name: &str) -> String {
    format!("Event: {event_name}\nName: {buyer_name}")
}

/// 生成票面 QR 码的 data URL（`data:image/svg+xml;base64,...`）
pub fn ticket_qr_data_url(event_name: &str, buyer_name: &str) -> Result<String, QrError> {
    let code = QrCode::new(ticket_qr_payload(event_name, buyer_name).as_bytes())?;
    let image = code
        .render::<svg::Color>()
        .min_dimensions(200, 200)
        .build();
    Ok(format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(image.as_bytes())
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_puts_event_first_then_buyer() {
        assert_eq!(
            ticket_qr_payload("Rust Meetup", "Alice"),
            "Event: Rust Meetup\nName: Alice"
        );
    }

    #[test]
    fn data_url_is_base64_svg() {
        let url = ticket_qr_data_url("Rust Meetup", "Alice").unwrap();
        let rest = url.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let decoded = STANDARD.decode(rest).unwrap();
        let svg_text = String::from_utf8(decoded).unwrap();
        assert!(svg_text.contains("<svg"));
    }

    #[test]
    fn same_input_is_deterministic() {
        let a = ticket_qr_data_url("E", "N").unwrap();
        let b = ticket_qr_data_url("E", "N").unwrap();
        assert_eq!(a, b);
    }
}
