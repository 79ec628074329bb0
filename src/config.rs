//! 활용기 설정 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 활용기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ConjugatorConfig {
    /// 태그 없는 ㅅ 받침 어간을 ㅅ 불규칙으로 볼지 (짓 + 어 -> 지어)
    #[serde(default = "default_untagged_s_irregular")]
    pub untagged_s_irregular: bool,
    /// 좋 이외의 ㅎ 받침 어간을 표지 없이도 ㅎ 불규칙으로 볼지 (파랗 + 아 -> 파래)
    #[serde(default = "default_untagged_h_irregular")]
    pub untagged_h_irregular: bool,
    /// 르 불규칙 사전 파일 경로 (없으면 내장 목록)
    #[serde(default)]
    pub reu_stems_path: Option<PathBuf>,
    /// 사전에 더할 르 불규칙 어간
    #[serde(default)]
    pub extra_reu_stems: Vec<String>,
}

fn default_untagged_s_irregular() -> bool {
    true
}

fn default_untagged_h_irregular() -> bool {
    true
}

impl Default for ConjugatorConfig {
    fn default() -> Self {
        Self {
            untagged_s_irregular: default_untagged_s_irregular(),
            untagged_h_irregular: default_untagged_h_irregular(),
            reu_stems_path: None,
            extra_reu_stems: Vec::new(),
        }
    }
}

impl ConjugatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 태그 없는 ㅅ 받침 어간 처리 방식
    pub fn with_untagged_s_irregular(mut self, enabled: bool) -> Self {
        self.untagged_s_irregular = enabled;
        self
    }

    /// 표지 없는 ㅎ 받침 어간 처리 방식
    pub fn with_untagged_h_irregular(mut self, enabled: bool) -> Self {
        self.untagged_h_irregular = enabled;
        self
    }

    /// 르 불규칙 사전 파일 경로
    pub fn with_reu_stems_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.reu_stems_path = Some(path.into());
        self
    }

    /// 르 불규칙 어간 추가
    pub fn with_extra_reu_stem(mut self, stem: impl Into<String>) -> Self {
        self.extra_reu_stems.push(stem.into());
        self
    }
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config(path: impl AsRef<Path>) -> ConjugatorConfig {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            ConjugatorConfig::default()
        }),
        Err(e) => {
            log::warn!("설정 파일 읽기 실패, 기본값 사용 ({}): {}", path.display(), e);
            ConjugatorConfig::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_config(config: &ConjugatorConfig, path: impl AsRef<Path>) -> Result<(), String> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
