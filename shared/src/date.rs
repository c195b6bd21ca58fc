//! 日期逻辑模块
//!
//! 提供活动日期解析与「今日 / 即将到来」分桶。
//! 所有函数都以显式的 `now` 作为输入，便于在测试中注入固定时刻。

use crate::EventRecord;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// 解析后端返回的活动日期字符串
///
/// 依次尝试 RFC3339、无时区的 ISO 日期时间、纯日期（按 UTC 零点处理）。
/// 解析失败返回 `None`，对应的活动会被分桶逻辑静默丢弃。
pub fn parse_event_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&day.and_hms_opt(0, 0, 0)?));
    }
    None
}

/// 首页的两个活动分桶
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventBuckets {
    /// 今天、且尚未开始的活动
    pub today: Vec<EventRecord>,
    /// 严格晚于今天的活动
    pub upcoming: Vec<EventRecord>,
}

/// 按日期把活动分为「今日」与「即将到来」
///
/// 规则：
/// - 与 `now` 同一自然日且仍在未来 -> today
/// - 晚于 `now` 且不在同一自然日 -> upcoming
/// - 已经过去或无法解析 -> 两个桶都不进
pub fn bucket_events(events: &[EventRecord], now: DateTime<Utc>) -> EventBuckets {
    let mut buckets = EventBuckets::default();
    for event in events {
        let Some(when) = parse_event_date(&event.date) else {
            continue;
        };
        if when <= now {
            continue;
        }
        if when.date_naive() == now.date_naive() {
            buckets.today.push(event.clone());
        } else {
            buckets.upcoming.push(event.clone());
        }
    }
    buckets
}

/// 格式化为列表展示用的本地化字符串，解析失败时原样返回
pub fn format_display(raw: &str) -> String {
    match parse_event_date(raw) {
        Some(when) => when.format("%d/%m/%Y %H:%M").to_string(),
        None => raw.to_string(),
    }
}

/// 取 `<input type="date">` 需要的 `YYYY-MM-DD` 部分
pub fn date_input_value(raw: &str) -> String {
    raw.split_once('T')
        .map(|(day, _)| day.to_string())
        .unwrap_or_else(|| raw.to_string())
}

// =========================================================
// 单元测试
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventStatus;

    fn event(id: &str, date: &str) -> EventRecord {
        EventRecord {
            id: id.to_string(),
            title: format!("event {id}"),
            description: String::new(),
            organized_by: String::new(),
            date: date.to_string(),
            event_time: String::new(),
            hour: 1.0,
            location: String::new(),
            ticket_price: 0.0,
            image: String::new(),
            status: EventStatus::Approved,
            owner: String::new(),
            likes: 0,
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap()
    }

    fn ids(bucket: &[EventRecord]) -> Vec<&str> {
        bucket.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn later_today_lands_in_today_bucket() {
        let events = vec![event("a", "2026-08-29T18:00:00Z")];
        let buckets = bucket_events(&events, noon());
        assert_eq!(ids(&buckets.today), ["a"]);
        assert!(buckets.upcoming.is_empty());
    }

    #[test]
    fn earlier_today_is_dropped_from_both_buckets() {
        let events = vec![event("a", "2026-08-29T08:00:00Z")];
        let buckets = bucket_events(&events, noon());
        assert!(buckets.today.is_empty());
        assert!(buckets.upcoming.is_empty());
    }

    #[test]
    fn future_calendar_day_is_upcoming() {
        let events = vec![
            event("tomorrow", "2026-08-30T00:30:00Z"),
            event("next-month", "2026-09-15"),
        ];
        let buckets = bucket_events(&events, noon());
        assert!(buckets.today.is_empty());
        assert_eq!(ids(&buckets.upcoming), ["tomorrow", "next-month"]);
    }

    #[test]
    fn past_and_unparseable_are_dropped() {
        let events = vec![
            event("yesterday", "2026-08-28T20:00:00Z"),
            // 纯日期按零点处理，到了中午就算已开始
            event("today-midnight", "2026-08-29"),
            event("garbage", "not a date"),
        ];
        let buckets = bucket_events(&events, noon());
        assert!(buckets.today.is_empty());
        assert!(buckets.upcoming.is_empty());
    }

    #[test]
    fn parse_accepts_common_backend_shapes() {
        assert!(parse_event_date("2026-09-01T18:00:00.000Z").is_some());
        assert!(parse_event_date("2026-09-01T18:00:00").is_some());
        assert!(parse_event_date("2026-09-01T18:00").is_some());
        assert!(parse_event_date("2026-09-01").is_some());
        assert!(parse_event_date("").is_none());
    }

    #[test]
    fn date_input_value_strips_time_component() {
        assert_eq!(date_input_value("2026-09-01T18:00:00.000Z"), "2026-09-01");
        assert_eq!(date_input_value("2026-09-01"), "2026-09-01");
    }
}
