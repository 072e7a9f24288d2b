//! 결과 화면에서 쓰는 고정 문구와 색상. 채점 로직은 이 모듈을 참조하지 않는다.

use crate::flag::FlagType;
use crate::level::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelDisplay {
    pub level: Level,
    /// 강조 색 (#RRGGBB)
    pub color: &'static str,
    pub message_ko: &'static str,
    pub message_en: &'static str,
}

pub static LEVEL_DISPLAYS: [LevelDisplay; 5] = [
    LevelDisplay {
        level: Level::Excellent,
        color: "#2E7D32",
        message_ko: "수면 건강이 매우 좋습니다. 지금의 생활 습관을 유지해 주세요.",
        message_en: "Your sleep health is excellent. Keep up your current habits.",
    },
    LevelDisplay {
        level: Level::GoodMinor,
        color: "#7CB342",
        message_ko: "수면 건강은 양호하지만 일부 항목에서 개선할 점이 보입니다.",
        message_en: "Your sleep health is good, with a few areas worth improving.",
    },
    LevelDisplay {
        level: Level::Caution,
        color: "#F9A825",
        message_ko: "수면 문제가 일상에 영향을 주기 시작했습니다. 수면 습관을 점검해 보세요.",
        message_en: "Sleep problems are starting to affect your day. Review your sleep habits.",
    },
    LevelDisplay {
        level: Level::Problematic,
        color: "#EF6C00",
        message_ko: "수면 문제가 뚜렷합니다. 전문가 상담을 권장합니다.",
        message_en: "You show clear sleep problems. A consultation with a specialist is recommended.",
    },
    LevelDisplay {
        level: Level::Severe,
        color: "#C62828",
        message_ko: "수면 건강이 심각한 상태입니다. 가능한 한 빨리 수면 전문의와 상담하세요.",
        message_en: "Your sleep health is severely affected. Please see a sleep specialist soon.",
    },
];

pub fn level_display(level: Level) -> &'static LevelDisplay {
    match level {
        Level::Excellent => &LEVEL_DISPLAYS[0],
        Level::GoodMinor => &LEVEL_DISPLAYS[1],
        Level::Caution => &LEVEL_DISPLAYS[2],
        Level::Problematic => &LEVEL_DISPLAYS[3],
        Level::Severe => &LEVEL_DISPLAYS[4],
    }
}

/// 저장된 RESULT_TEXT_KEY로 문구를 찾는다
pub fn by_text_key(text_key: &str) -> Option<&'static LevelDisplay> {
    LEVEL_DISPLAYS
        .iter()
        .find(|display| display.level.text_key() == text_key)
}

pub fn flag_message_ko(kind: FlagType) -> &'static str {
    match kind {
        FlagType::OsaRisk => "수면 무호흡이 의심됩니다.",
        FlagType::RlsRisk => "하지불안 증후군이 의심됩니다.",
        FlagType::SleepMedRisk => "수면제에 의존하고 있을 수 있습니다.",
        FlagType::DaytimeSleepyRisk => "낮 동안의 졸림이 심합니다.",
        FlagType::ChronicManagePoor => "만성질환 관리가 충분하지 않습니다.",
    }
}

pub fn flag_message_en(kind: FlagType) -> &'static str {
    match kind {
        FlagType::OsaRisk => "Possible obstructive sleep apnea.",
        FlagType::RlsRisk => "Possible restless legs syndrome.",
        FlagType::SleepMedRisk => "Possible reliance on sleep medication.",
        FlagType::DaytimeSleepyRisk => "Excessive daytime sleepiness.",
        FlagType::ChronicManagePoor => "Chronic conditions are not well managed.",
    }
}
