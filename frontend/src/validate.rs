//! 表单校验模块
//!
//! 纯函数、无状态：输入字段值，输出「字段 -> 错误信息」映射，
//! 空映射即通过。规则彼此独立，除必填检查外没有跨字段依赖。
//! 错误在字段值变化时只被清除、不重新校验，下次提交才会重新出现。

use std::collections::HashMap;

/// 字段级错误映射
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(HashMap<&'static str, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<String> {
        self.0.get(field).cloned()
    }

    /// 清除单个字段的错误（输入变化时调用，不做重新校验）
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }
}

// =========================================================
// 字段规则 (Field Rules)
// =========================================================

/// 邮箱形状检查：`^[^\s@]+@[^\s@]+\.[^\s@]+$`
///
/// 只验证形状（恰好一个 @，域名内部含点，无空白），不做 DNS 级校验。
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    // 域名里至少有一个前后都有字符的点
    let bytes = domain.as_bytes();
    bytes
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'.' && i > 0 && i + 1 < bytes.len())
}

/// 恰好 `len` 位数字
pub fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// `MM/YY` 形状检查，不校验日历有效性（"13/99" 也通过）
pub fn is_valid_expiry(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 5
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'/'
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit()
}

/// 票价：可解析为数字且 >= 0
pub fn is_valid_ticket_price(value: &str) -> bool {
    match value.trim().parse::<f64>() {
        Ok(price) => price.is_finite() && price >= 0.0,
        Err(_) => false,
    }
}

fn require(errors: &mut FormErrors, field: &'static str, value: &str, message: &'static str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

// =========================================================
// 组合校验 (Composite Validators)
// =========================================================

/// 创建 / 编辑活动表单的输入快照
pub struct EventFormInput<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub organized_by: &'a str,
    pub event_date: &'a str,
    pub event_time: &'a str,
    pub hour: &'a str,
    pub location: &'a str,
    pub ticket_price: &'a str,
}

pub fn validate_event_form(input: &EventFormInput<'_>) -> FormErrors {
    let mut errors = FormErrors::new();
    require(&mut errors, "title", input.title, "Title is required");
    require(
        &mut errors,
        "description",
        input.description,
        "Description is required",
    );
    require(
        &mut errors,
        "organizedBy",
        input.organized_by,
        "Organizer name is required",
    );
    require(
        &mut errors,
        "eventDate",
        input.event_date,
        "Event date is required",
    );
    require(
        &mut errors,
        "eventTime",
        input.event_time,
        "Event time is required",
    );
    require(&mut errors, "hour", input.hour, "Duration is required");
    require(
        &mut errors,
        "location",
        input.location,
        "Location is required",
    );
    if !is_valid_ticket_price(input.ticket_price) {
        errors.insert("ticketPrice", "Valid ticket price is required");
    }
    errors
}

/// 支付页买家 + 卡面字段的输入快照
pub struct PaymentInput<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub contact_no: &'a str,
    pub card_number: &'a str,
    pub expiry_date: &'a str,
    pub cvv: &'a str,
}

pub fn validate_payment(input: &PaymentInput<'_>) -> FormErrors {
    let mut errors = FormErrors::new();
    require(&mut errors, "name", input.name, "Name is required");
    if !is_valid_email(input.email) {
        errors.insert("email", "Invalid email format");
    }
    if !is_digits(input.contact_no, 10) {
        errors.insert("contactNo", "Invalid contact number");
    }
    if !is_digits(input.card_number, 16) {
        errors.insert("cardNumber", "Card number must be 16 digits");
    }
    if !is_valid_expiry(input.expiry_date) {
        errors.insert("expiryDate", "Use MM/YY format");
    }
    if !is_digits(input.cvv, 3) {
        errors.insert("cvv", "CVV must be 3 digits");
    }
    errors
}

// =========================================================
// 单元测试
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_event_input() -> EventFormInput<'static> {
        EventFormInput {
            title: "Rust Meetup",
            description: "monthly meetup",
            organized_by: "Community",
            event_date: "2026-09-01",
            event_time: "18:00",
            hour: "2",
            location: "Colombo",
            ticket_price: "500",
        }
    }

    fn valid_payment_input() -> PaymentInput<'static> {
        PaymentInput {
            name: "Alice",
            email: "alice@example.com",
            contact_no: "0711234567",
            card_number: "4242424242424242",
            expiry_date: "09/27",
            cvv: "123",
        }
    }

    #[test]
    fn valid_forms_produce_no_errors() {
        assert!(validate_event_form(&valid_event_input()).is_empty());
        assert!(validate_payment(&valid_payment_input()).is_empty());
    }

    #[test]
    fn email_needs_at_and_dotted_domain() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.example.com"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@com."));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn card_number_must_be_sixteen_digits() {
        for bad in ["", "1234", "123456789012345", "12345678901234567", "4242-4242-4242-4242"] {
            let errors = validate_payment(&PaymentInput {
                card_number: bad,
                ..valid_payment_input()
            });
            assert_eq!(
                errors.get("cardNumber").as_deref(),
                Some("Card number must be 16 digits"),
                "card {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn expiry_checks_shape_not_calendar() {
        assert!(is_valid_expiry("01/26"));
        // 没有日历校验，13 月也通过
        assert!(is_valid_expiry("13/99"));
        assert!(!is_valid_expiry("1/26"));
        assert!(!is_valid_expiry("01-26"));
        assert!(!is_valid_expiry("01/2026"));
    }

    #[test]
    fn contact_and_cvv_lengths() {
        assert!(is_digits("0711234567", 10));
        assert!(!is_digits("071123456", 10));
        assert!(!is_digits("07112345678", 10));
        assert!(!is_digits("07112345a7", 10));
        assert!(is_digits("007", 3));
        assert!(!is_digits("77", 3));
    }

    #[test]
    fn negative_ticket_price_is_blocked() {
        let errors = validate_event_form(&EventFormInput {
            ticket_price: "-5",
            ..valid_event_input()
        });
        assert_eq!(
            errors.get("ticketPrice").as_deref(),
            Some("Valid ticket price is required")
        );

        for bad in ["", "abc", "NaN"] {
            assert!(!is_valid_ticket_price(bad), "{bad:?} should be invalid");
        }
        assert!(is_valid_ticket_price("0"));
        assert!(is_valid_ticket_price("99.5"));
    }

    #[test]
    fn required_fields_reject_whitespace_only() {
        let errors = validate_event_form(&EventFormInput {
            title: "   ",
            ..valid_event_input()
        });
        assert_eq!(errors.get("title").as_deref(), Some("Title is required"));
    }

    #[test]
    fn clearing_a_field_removes_only_that_error() {
        let mut errors = validate_payment(&PaymentInput {
            card_number: "12",
            cvv: "9",
            ..valid_payment_input()
        });
        assert!(errors.get("cardNumber").is_some());
        assert!(errors.get("cvv").is_some());

        // 输入变化只清除该字段，值仍然非法也不立即复查
        errors.clear("cardNumber");
        assert!(errors.get("cardNumber").is_none());
        assert!(errors.get("cvv").is_some());
    }
}
