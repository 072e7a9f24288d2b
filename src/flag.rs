use serde::{Deserialize, Serialize};

use crate::answers::Answers;

/// 단일 증상 문항에서 위험 신호로 보는 최소 선택지 번호
pub const FLAG_CHOICE_MIN: i32 = 4;
/// 만성질환 관리 신호: 질환 수 문항의 최소 선택지 번호 (1개 이상)
pub const CHRONIC_COUNT_MIN: i32 = 2;
/// 만성질환 관리 신호: 관리 문항의 최소 선택지 번호
pub const CHRONIC_MANAGE_MIN: i32 = 4;

/// 코골이·수면 중 호흡 정지
pub const OSA_QUESTION: u32 = 12;
/// 하지불안
pub const RLS_QUESTION: u32 = 13;
/// 수면제 복용
pub const SLEEP_MED_QUESTION: u32 = 14;
/// 주간 졸림 상황별 문항. 15번(전반적 피로)은 포함하지 않는다.
pub const DAYTIME_QUESTIONS: [u32; 6] = [16, 17, 18, 19, 20, 21];
pub const CHRONIC_COUNT_QUESTION: u32 = 29;
pub const CHRONIC_MANAGE_QUESTION: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlagType {
    OsaRisk,
    RlsRisk,
    SleepMedRisk,
    DaytimeSleepyRisk,
    ChronicManagePoor,
}

impl FlagType {
    pub fn code(self) -> &'static str {
        match self {
            FlagType::OsaRisk => "OSA_RISK",
            FlagType::RlsRisk => "RLS_RISK",
            FlagType::SleepMedRisk => "SLEEP_MED_RISK",
            FlagType::DaytimeSleepyRisk => "DAYTIME_SLEEPY_RISK",
            FlagType::ChronicManagePoor => "CHRONIC_MANAGE_POOR",
        }
    }
}

/// 임상적으로 눈여겨볼 회답 하나를 가리키는 위험 신호
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    #[serde(rename = "type")]
    pub kind: FlagType,
    #[serde(rename = "questionNo")]
    pub question_no: u32,
    #[serde(rename = "choiceNo")]
    pub choice_no: i32,
}

impl Flag {
    fn new(kind: FlagType, question_no: u32, choice_no: i32) -> Self {
        Self {
            kind,
            question_no,
            choice_no,
        }
    }
}

/// 위험 신호를 표시 순서대로 뽑는다.
///
/// 1. 12번 ≥ 4 → OSA_RISK
/// 2. 13번 ≥ 4 → RLS_RISK
/// 3. 14번 ≥ 4 → SLEEP_MED_RISK
/// 4. 16~21번 중 선택지 번호가 가장 큰 한 문항이 ≥ 4 → DAYTIME_SLEEPY_RISK 하나
/// 5. 29번 ≥ 2 이고 30번 ≥ 4 → CHRONIC_MANAGE_POOR (30번 기준)
pub fn derive(answers: &Answers) -> Vec<Flag> {
    let mut flags = Vec::new();

    for (kind, question_no) in [
        (FlagType::OsaRisk, OSA_QUESTION),
        (FlagType::RlsRisk, RLS_QUESTION),
        (FlagType::SleepMedRisk, SLEEP_MED_QUESTION),
    ] {
        if let Some(choice_no) = answers.get(question_no) {
            if choice_no >= FLAG_CHOICE_MIN {
                flags.push(Flag::new(kind, question_no, choice_no));
            }
        }
    }

    if let Some((question_no, choice_no)) = daytime_peak(answers) {
        if choice_no >= FLAG_CHOICE_MIN {
            flags.push(Flag::new(FlagType::DaytimeSleepyRisk, question_no, choice_no));
        }
    }

    if let (Some(count), Some(manage)) = (
        answers.get(CHRONIC_COUNT_QUESTION),
        answers.get(CHRONIC_MANAGE_QUESTION),
    ) {
        if count >= CHRONIC_COUNT_MIN && manage >= CHRONIC_MANAGE_MIN {
            flags.push(Flag::new(
                FlagType::ChronicManagePoor,
                CHRONIC_MANAGE_QUESTION,
                manage,
            ));
        }
    }

    flags
}

/// 주간 졸림 문항 중 최댓값. 같은 값이면 번호가 작은 문항이 남는다.
fn daytime_peak(answers: &Answers) -> Option<(u32, i32)> {
    DAYTIME_QUESTIONS
        .iter()
        .filter_map(|&question_no| {
            answers
                .get(question_no)
                .map(|choice_no| (question_no, choice_no))
        })
        .fold(None, |peak, (question_no, choice_no)| match peak {
            Some((_, max)) if choice_no <= max => peak,
            _ => Some((question_no, choice_no)),
        })
}
