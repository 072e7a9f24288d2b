use std::fmt;

use serde::{Deserialize, Serialize};

/// 매우 양호 구간의 상한 (포함)
pub const EXCELLENT_MAX: i64 = 16;
/// 양호·소견 있음 구간의 상한 (포함)
pub const GOOD_MINOR_MAX: i64 = 39;
/// 주의 구간의 상한 (포함)
pub const CAUTION_MAX: i64 = 62;
/// 문제성 구간의 상한 (포함). 이보다 크면 심각.
pub const PROBLEMATIC_MAX: i64 = 84;

/// 총점(TOTAL_SHT)에 따른 5단계 판정
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    Excellent,
    GoodMinor,
    Caution,
    Problematic,
    Severe,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Excellent,
        Level::GoodMinor,
        Level::Caution,
        Level::Problematic,
        Level::Severe,
    ];

    /// 구간은 상한을 포함하며 빈틈 없이 이어진다. 음수 총점은 선택지 번호가
    /// 범위를 벗어났을 때만 생기며 첫 구간으로 분류된다.
    pub fn from_total(total: i64) -> Self {
        match total {
            total if total <= EXCELLENT_MAX => Level::Excellent,
            total if total <= GOOD_MINOR_MAX => Level::GoodMinor,
            total if total <= CAUTION_MAX => Level::Caution,
            total if total <= PROBLEMATIC_MAX => Level::Problematic,
            _ => Level::Severe,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.code() == code)
    }

    pub fn code(self) -> &'static str {
        match self {
            Level::Excellent => "EXCELLENT",
            Level::GoodMinor => "GOOD_MINOR",
            Level::Caution => "CAUTION",
            Level::Problematic => "PROBLEMATIC",
            Level::Severe => "SEVERE",
        }
    }

    pub fn label_ko(self) -> &'static str {
        match self {
            Level::Excellent => "매우 양호",
            Level::GoodMinor => "양호·소견 있음",
            Level::Caution => "주의",
            Level::Problematic => "문제성",
            Level::Severe => "심각",
        }
    }

    pub fn label_en(self) -> &'static str {
        match self {
            Level::Excellent => "Excellent",
            Level::GoodMinor => "Good minor concerns",
            Level::Caution => "Caution",
            Level::Problematic => "Problematic",
            Level::Severe => "Severe",
        }
    }

    /// 결과 문구 조회용 키
    pub fn text_key(self) -> &'static str {
        match self {
            Level::Excellent => "SHT_EXCELLENT",
            Level::GoodMinor => "SHT_GOOD_MINOR",
            Level::Caution => "SHT_CAUTION",
            Level::Problematic => "SHT_PROBLEMATIC",
            Level::Severe => "SHT_SEVERE",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
