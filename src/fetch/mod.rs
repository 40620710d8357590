//! Hot-search feed acquisition and raw snapshots
//!
//! The upstream feed comes in several shapes depending on whether it is the
//! TianAPI endpoint itself, a proxy wrapping it, or a pre-shaped mock feed.
//! [`normalize_response`] folds all of them into an ordered topic list.

pub mod tianapi;

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::analysis::models::{parse_heat, Topic};
use crate::{Error, Result};

pub use tianapi::{FetcherConfig, HotSearchFetcher, DEFAULT_API_URL};

/// Status code TianAPI returns on success.
pub const TIANAPI_OK: i64 = 200;

/// One entry as TianAPI reports it.
#[derive(Debug, Default, Deserialize)]
struct RawHotItem {
    #[serde(default)]
    hotword: Option<String>,
    #[serde(default)]
    hotwordnum: Option<Value>,
    #[serde(default)]
    hotnum: Option<Value>,
    #[serde(default)]
    hottag: Option<String>,
}

impl RawHotItem {
    fn into_topic(self, rank: u32) -> Topic {
        let heat = self
            .hotwordnum
            .or(self.hotnum)
            .map(|v| heat_from_value(&v))
            .unwrap_or(0);
        Topic {
            title: self.hotword.unwrap_or_default(),
            heat,
            tags: self.hottag.unwrap_or_default().trim().to_string(),
            rank,
        }
    }
}

fn heat_from_value(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => parse_heat(s),
        _ => 0,
    }
}

fn raw_list_to_topics(list: &Value) -> Result<Vec<Topic>> {
    let items: Vec<RawHotItem> = serde_json::from_value(list.clone())?;
    Ok(items
        .into_iter()
        .enumerate()
        .map(|(i, item)| item.into_topic(i as u32 + 1))
        .collect())
}

fn shaped_list_to_topics(list: &Value) -> Result<Vec<Topic>> {
    let mut topics: Vec<Topic> = serde_json::from_value(list.clone())?;
    for (i, topic) in topics.iter_mut().enumerate() {
        if topic.rank == 0 {
            topic.rank = i as u32 + 1;
        }
    }
    Ok(topics)
}

/// Normalize any supported feed payload into topics.
///
/// Accepted shapes, checked in order:
/// 1. `{"code": 200, "result": {"list": [...]}}` (TianAPI)
/// 2. `{"data": {"result": {"list": [...]}}}` (proxied TianAPI)
/// 3. `{"data": [Topic, ...]}` (snapshot or mock feed)
/// 4. `[Topic, ...]`
pub fn normalize_response(payload: Value) -> Result<Vec<Topic>> {
    if let Some(code) = payload.get("code") {
        let code = code.as_i64().unwrap_or(-1);
        if code != TIANAPI_OK {
            let message = payload
                .get("msg")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(Error::ApiError { code, message });
        }
        return match payload.pointer("/result/list") {
            Some(list) => raw_list_to_topics(list),
            None => Ok(Vec::new()),
        };
    }

    if let Some(list) = payload.pointer("/data/result/list") {
        return raw_list_to_topics(list);
    }

    match &payload {
        Value::Object(map) => match map.get("data") {
            Some(list @ Value::Array(_)) => shaped_list_to_topics(list),
            _ => Err(Error::SerializationError(
                "unrecognized hot-search payload: expected result.list or data array".to_string(),
            )),
        },
        Value::Array(_) => shaped_list_to_topics(&payload),
        _ => Err(Error::SerializationError(
            "unrecognized hot-search payload".to_string(),
        )),
    }
}

/// Raw fetch result persisted before analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub fetch_time: DateTime<Local>,
    pub total_count: usize,
    pub data: Vec<Topic>,
}

impl Snapshot {
    pub fn new(data: Vec<Topic>, fetch_time: DateTime<Local>) -> Self {
        Self {
            fetch_time,
            total_count: data.len(),
            data,
        }
    }

    /// Write the snapshot as pretty-printed UTF-8 JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!(path = %path.display(), count = self.total_count, "Snapshot saved");
        Ok(())
    }
}

/// Read topics from a snapshot, a mock feed or a raw API dump.
pub fn load_topics(path: &Path) -> Result<Vec<Topic>> {
    let content = fs::read_to_string(path)?;
    let payload: Value = serde_json::from_str(&content)?;
    normalize_response(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn normalizes_tianapi_payload() {
        let topics = normalize_response(json!({
            "code": 200,
            "msg": "success",
            "result": {"list": [
                {"hotword": "华为发布新手机", "hotwordnum": " 1,234,567", "hottag": " 新 "},
                {"hotword": "台风登陆", "hotnum": 890123, "hottag": null},
                {"hotword": "某剧开播", "hotwordnum": "剧集 4567"}
            ]}
        }))
        .unwrap();

        assert_eq!(topics.len(), 3);
        assert_eq!(topics[0], Topic::new("华为发布新手机", 1_234_567, "新", 1));
        assert_eq!(topics[1], Topic::new("台风登陆", 890_123, "", 2));
        assert_eq!(topics[2].heat, 4567);
        assert_eq!(topics[2].rank, 3);
    }

    #[test]
    fn api_error_code_is_surfaced() {
        let err = normalize_response(json!({"code": 230, "msg": "key错误或为空"})).unwrap_err();
        match err {
            Error::ApiError { code, message } => {
                assert_eq!(code, 230);
                assert_eq!(message, "key错误或为空");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn normalizes_proxied_payload() {
        let topics = normalize_response(json!({
            "data": {"result": {"list": [{"hotword": "高铁票开售", "hotwordnum": "2000"}]}}
        }))
        .unwrap();
        assert_eq!(topics, vec![Topic::new("高铁票开售", 2000, "", 1)]);
    }

    #[test]
    fn normalizes_pre_shaped_and_bare_arrays() {
        let wrapped = normalize_response(json!({
            "data": [{"title": "A", "heat": 5, "tags": "x", "rank": 9}, {"title": "B"}]
        }))
        .unwrap();
        assert_eq!(wrapped[0].rank, 9);
        assert_eq!(wrapped[1].rank, 2);
        assert_eq!(wrapped[1].heat, 0);

        let bare = normalize_response(json!([{"title": "C", "heat": "1,000"}])).unwrap();
        assert_eq!(bare, vec![Topic::new("C", 1000, "", 1)]);
    }

    #[test]
    fn empty_list_is_not_an_error() {
        let topics = normalize_response(json!({"code": 200, "result": {"list": []}})).unwrap();
        assert!(topics.is_empty());
    }

    #[test]
    fn unknown_shape_is_rejected() {
        assert!(matches!(
            normalize_response(json!({"items": []})),
            Err(Error::SerializationError(_))
        ));
        assert!(normalize_response(json!("hello")).is_err());
    }

    #[test]
    fn snapshot_round_trips_through_load_topics() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("251222_weibo_analysis_data.json");
        let fetch_time = Local.with_ymd_and_hms(2025, 12, 22, 9, 30, 0).unwrap();
        let topics = vec![Topic::new("成都地震", 100, "", 1), Topic::new("个税", 50, "", 2)];

        Snapshot::new(topics.clone(), fetch_time).save(&path).unwrap();

        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["total_count"], 2);
        assert!(fs::read_to_string(&path).unwrap().contains("成都地震"));
        assert_eq!(load_topics(&path).unwrap(), topics);
    }

    #[test]
    fn load_topics_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = load_topics(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }
}
