//! 르 불규칙 어간 사전
//!
//! 한 줄에 어간 하나인 텍스트 파일에서 읽는다. 빈 줄과 `#` 주석은 무시한다.
//! 파일이 없으면 내장 어간 목록을 쓴다.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// 내장 르 불규칙 어간 (따르/치르는 으 탈락이라 제외)
const BUILTIN_STEMS: [&str; 19] = [
    "흐르", "부르", "오르", "고르", "누르", "자르", "모르", "이르", "다르", "빠르", "마르",
    "바르", "기르", "가르", "구르", "서두르", "게으르", "지르", "찌르",
];

/// 사전 로드 에러
#[derive(Debug)]
pub enum DictionaryError {
    /// 파일은 있지만 읽을 수 없음
    Io(std::io::Error),
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryError::Io(e) => write!(f, "사전 파일 읽기 오류: {}", e),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DictionaryError::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for DictionaryError {
    fn from(e: std::io::Error) -> Self {
        DictionaryError::Io(e)
    }
}

/// 르 불규칙 어간 집합 (생성 후 읽기 전용)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReuDictionary {
    stems: HashSet<String>,
}

impl ReuDictionary {
    /// 내장 어간 목록
    pub fn builtin() -> Self {
        Self {
            stems: BUILTIN_STEMS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// 텍스트에서 파싱
    pub fn parse(text: &str) -> Self {
        Self {
            stems: text.lines().filter_map(parse_line).collect(),
        }
    }

    /// 줄 단위 입력에서 읽기
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut stems = HashSet::new();
        for line in reader.lines() {
            if let Some(stem) = parse_line(&line?) {
                stems.insert(stem);
            }
        }
        Ok(Self { stems })
    }

    /// 파일에서 로드 (파일이 없으면 내장 목록)
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::warn!("사전 파일 없음, 내장 목록 사용: {}", path.display());
                return Ok(Self::builtin());
            }
            Err(e) => return Err(e.into()),
        };

        let dictionary = Self::from_reader(BufReader::new(file))?;
        log::info!("르 불규칙 사전 로드: {}개 ({})", dictionary.len(), path.display());
        Ok(dictionary)
    }

    pub fn contains(&self, stem: &str) -> bool {
        self.stems.contains(stem)
    }

    pub fn len(&self) -> usize {
        self.stems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }

    /// 어간 추가 (공백 제거, 빈 문자열 무시)
    pub fn extend<I, S>(&mut self, stems: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stems
            .extend(stems.into_iter().filter_map(|s| parse_line(s.as_ref())));
    }
}

fn parse_line(line: &str) -> Option<String> {
    let stem = line.trim();
    if stem.is_empty() || stem.starts_with('#') {
        return None;
    }
    Some(stem.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin() {
        let dict = ReuDictionary::builtin();
        assert_eq!(dict.len(), 19);
        assert!(dict.contains("흐르"));
        assert!(dict.contains("서두르"));
        assert!(!dict.contains("따르"));
        assert!(!dict.contains("치르"));
        assert!(!dict.contains("가"));
    }

    #[test]
    fn test_parse() {
        let dict = ReuDictionary::parse("# 르 불규칙\n흐르\n\n  부르  \n#주석\n");
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("흐르"));
        assert!(dict.contains("부르"));
        assert!(!dict.contains("#주석"));
    }

    #[test]
    fn test_empty_source() {
        let dict = ReuDictionary::parse("");
        assert!(dict.is_empty());
        assert!(!dict.contains("흐르"));
    }

    #[test]
    fn test_from_reader() {
        let dict = ReuDictionary::from_reader("모르\r\n다르\r\n".as_bytes()).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("모르"));
        assert!(dict.contains("다르"));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "흐르").unwrap();
        writeln!(file, "누르").unwrap();

        let dict = ReuDictionary::load(file.path()).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("누르"));
        assert!(!dict.contains("모르"));
    }

    #[test]
    fn test_missing_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let dict = ReuDictionary::load(dir.path().join("없음.txt")).unwrap();
        assert_eq!(dict, ReuDictionary::builtin());
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ReuDictionary::load(dir.path());
        assert!(matches!(result, Err(DictionaryError::Io(_))));
    }

    #[test]
    fn test_extend() {
        let mut dict = ReuDictionary::parse("흐르");
        dict.extend(["게으르", " ", "찌르"]);
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("게으르"));
    }
}
