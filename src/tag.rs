//! 형태소 분석 태그 해석
//!
//! `VV+ㅅ불규칙` 처럼 `+`로 이어진 태그에서 품사와 불규칙 표지를 뽑는다.
//! 알아볼 수 없는 태그는 태그가 없는 것과 똑같이 취급한다.

/// 용언 품사
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// VV 동사
    Verb,
    /// VA 형용사
    Adjective,
    /// VX 보조 용언
    Auxiliary,
    /// VCP 긍정 지정사 (이다)
    Copula,
    /// VCN 부정 지정사 (아니다)
    NegativeCopula,
    /// XSV 동사 파생 접미사
    VerbSuffix,
    /// XSA 형용사 파생 접미사
    AdjectiveSuffix,
}

impl Category {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "VV" => Some(Category::Verb),
            "VA" => Some(Category::Adjective),
            "VX" => Some(Category::Auxiliary),
            "VCP" => Some(Category::Copula),
            "VCN" => Some(Category::NegativeCopula),
            "XSV" => Some(Category::VerbSuffix),
            "XSA" => Some(Category::AdjectiveSuffix),
            _ => None,
        }
    }
}

/// 태그로만 알 수 있는 불규칙 활용 부류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrregularClass {
    S,
    D,
    B,
    Reo,
    H,
}

impl IrregularClass {
    /// 태그에 쓰이는 표지 문자열
    pub fn marker(self) -> &'static str {
        match self {
            IrregularClass::S => "ㅅ불규칙",
            IrregularClass::D => "ㄷ불규칙",
            IrregularClass::B => "ㅂ불규칙",
            IrregularClass::Reo => "러불규칙",
            IrregularClass::H => "ㅎ불규칙",
        }
    }

    const ALL: [IrregularClass; 5] = [
        IrregularClass::S,
        IrregularClass::D,
        IrregularClass::B,
        IrregularClass::Reo,
        IrregularClass::H,
    ];
}

/// 해석된 태그
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tag {
    pub category: Option<Category>,
    pub irregular: Option<IrregularClass>,
}

impl Tag {
    /// 태그 문자열 해석 (None이나 빈 문자열은 빈 태그)
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        let mut parts = raw.split('+').map(str::trim);
        let category = parts.next().and_then(Category::from_code);
        let irregular = IrregularClass::ALL
            .into_iter()
            .find(|class| raw.contains(class.marker()));

        Self {
            category,
            irregular,
        }
    }

    /// 알아볼 수 있는 내용이 하나도 없으면 true (태그 없음과 같음)
    pub fn is_absent(&self) -> bool {
        self.category.is_none() && self.irregular.is_none()
    }

    /// 해당 불규칙 표지가 있는지 확인
    pub fn marks(&self, class: IrregularClass) -> bool {
        self.irregular == Some(class)
    }
}
