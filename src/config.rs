//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Jako 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JakoConfig {
    /// 기본 대상 언어 ("ko" 또는 "ja")
    #[serde(default = "default_lang")]
    pub default_lang: String,
    /// 사용자 사전 항목 (일본어, 한국어) - 내장 사전과 합쳐져 적용됨
    #[serde(default)]
    pub user_words: Vec<(String, String)>,
}

fn default_lang() -> String {
    "ko".to_string()
}

impl Default for JakoConfig {
    fn default() -> Self {
        Self {
            default_lang: default_lang(),
            user_words: Vec::new(),
        }
    }
}

/// 설정 파일 경로: ~/.config/jako/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백 (쓰기 가능, /tmp보다 안전)
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("jako").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> JakoConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
            JakoConfig::default()
        }),
        Err(_) => JakoConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &JakoConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
