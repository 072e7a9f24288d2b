//! 수면 건강 설문 채점
//!
//! 회답 1건마다 점수는 `선택지 번호 - 1`(0~4점)이며, 회답이 없는 설문은 0점으로
//! 본다. 총점(TOTAL_SHT)은 1~28번만 더하고, 29·30번(만성질환)은 총점에서 빠지며
//! 위험 신호와 그대로 싣는 값으로만 쓰인다.
//!
//! 하위 척도는 서로 겹칠 수 있다. 예를 들어 2·3번은 수면의 질과 불면 양쪽에
//! 들어간다.
//!
//! | 하위 척도 | 설문 |
//! |---|---|
//! | 수면의 질 | 1~5, 8~14 |
//! | 주간 졸림 | 15~21 |
//! | 불면 | 2, 3, 7, 22~24 |
//! | 스트레스 | 25~28 |
//!
//! 선택지 번호의 범위는 검사하지 않는다. 9를 넣으면 8점이 그대로 더해진다.

use serde::{Deserialize, Serialize};

use crate::answers::Answers;
use crate::error::Error;
use crate::flag::{self, Flag, CHRONIC_COUNT_QUESTION, CHRONIC_MANAGE_QUESTION};
use crate::level::Level;

/// 총점에 들어가는 마지막 설문 번호
pub const TOTAL_LAST_QUESTION: u32 = 28;

const SLEEP_QUALITY: [u32; 12] = [1, 2, 3, 4, 5, 8, 9, 10, 11, 12, 13, 14];
const DAYTIME_SLEEPINESS: [u32; 7] = [15, 16, 17, 18, 19, 20, 21];
const INSOMNIA: [u32; 6] = [2, 3, 7, 22, 23, 24];
const STRESS: [u32; 4] = [25, 26, 27, 28];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubScale {
    SleepQuality,
    DaytimeSleepiness,
    Insomnia,
    Stress,
}

impl SubScale {
    pub const ALL: [SubScale; 4] = [
        SubScale::SleepQuality,
        SubScale::DaytimeSleepiness,
        SubScale::Insomnia,
        SubScale::Stress,
    ];

    pub fn questions(self) -> &'static [u32] {
        match self {
            SubScale::SleepQuality => &SLEEP_QUALITY,
            SubScale::DaytimeSleepiness => &DAYTIME_SLEEPINESS,
            SubScale::Insomnia => &INSOMNIA,
            SubScale::Stress => &STRESS,
        }
    }

    /// 결과 페이로드의 필드 이름
    pub fn field(self) -> &'static str {
        match self {
            SubScale::SleepQuality => "SUB_SLEEP_QUALITY",
            SubScale::DaytimeSleepiness => "SUB_DAYTIME_SLEEPINESS",
            SubScale::Insomnia => "SUB_INSOMNIA",
            SubScale::Stress => "SUB_STRESS",
        }
    }
}

/// 채점 결과. 한 번 만들어지면 표시와 저장에만 쓰이고 바뀌지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResult {
    #[serde(rename = "TOTAL_SHT")]
    pub total: i64,
    #[serde(rename = "LEVEL_CODE")]
    pub level: Level,
    #[serde(rename = "LEVEL_LABEL_KO")]
    pub level_label_ko: String,
    #[serde(rename = "LEVEL_LABEL_EN")]
    pub level_label_en: String,
    #[serde(rename = "SUB_SLEEP_QUALITY")]
    pub sleep_quality: i64,
    #[serde(rename = "SUB_DAYTIME_SLEEPINESS")]
    pub daytime_sleepiness: i64,
    #[serde(rename = "SUB_INSOMNIA")]
    pub insomnia: i64,
    #[serde(rename = "SUB_STRESS")]
    pub stress: i64,
    #[serde(rename = "FLAGS_JSON")]
    pub flags: Vec<Flag>,
    #[serde(
        rename = "CHRONIC_COUNT_CHOICE_NO",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub chronic_count_choice_no: Option<i32>,
    #[serde(
        rename = "CHRONIC_MANAGE_CHOICE_NO",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub chronic_manage_choice_no: Option<i32>,
    #[serde(rename = "RESULT_TEXT_KEY")]
    pub result_text_key: String,
}

impl SurveyResult {
    pub fn sub_score(&self, scale: SubScale) -> i64 {
        match scale {
            SubScale::SleepQuality => self.sleep_quality,
            SubScale::DaytimeSleepiness => self.daytime_sleepiness,
            SubScale::Insomnia => self.insomnia,
            SubScale::Stress => self.stress,
        }
    }

    /// 저장용 행. FLAGS_JSON은 JSON 문자열로 직렬화된다.
    pub fn to_record(&self) -> Result<ResultRecord, Error> {
        Ok(ResultRecord {
            total: self.total,
            level_code: self.level.code().to_string(),
            level_label_ko: self.level_label_ko.clone(),
            level_label_en: self.level_label_en.clone(),
            sleep_quality: self.sleep_quality,
            daytime_sleepiness: self.daytime_sleepiness,
            insomnia: self.insomnia,
            stress: self.stress,
            flags_json: serde_json::to_string(&self.flags)?,
            chronic_count_choice_no: self.chronic_count_choice_no,
            chronic_manage_choice_no: self.chronic_manage_choice_no,
            result_text_key: self.result_text_key.clone(),
        })
    }
}

/// 저장소에 쓰는 형태의 결과 행
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ResultRecord {
    #[serde(rename = "TOTAL_SHT")]
    pub total: i64,
    pub level_code: String,
    pub level_label_ko: String,
    pub level_label_en: String,
    #[serde(rename = "SUB_SLEEP_QUALITY")]
    pub sleep_quality: i64,
    #[serde(rename = "SUB_DAYTIME_SLEEPINESS")]
    pub daytime_sleepiness: i64,
    #[serde(rename = "SUB_INSOMNIA")]
    pub insomnia: i64,
    #[serde(rename = "SUB_STRESS")]
    pub stress: i64,
    pub flags_json: String,
    pub chronic_count_choice_no: Option<i32>,
    pub chronic_manage_choice_no: Option<i32>,
    pub result_text_key: String,
}

/// 설문 번호 목록의 점수 합. 회답이 없는 설문은 0점.
///
/// 점수는 `i64`로 더한다. 30문항 모두 `i32` 끝값이어도 넘치지 않는다.
pub fn sum(answers: &Answers, questions: impl IntoIterator<Item = u32>) -> i64 {
    questions
        .into_iter()
        .filter_map(|question_no| answers.get(question_no))
        .map(|choice_no| i64::from(choice_no) - 1)
        .sum()
}

pub fn total(answers: &Answers) -> i64 {
    sum(answers, 1..=TOTAL_LAST_QUESTION)
}

fn sub_sum(answers: &Answers, scale: SubScale) -> i64 {
    sum(answers, scale.questions().iter().copied())
}

/// 회답 전체를 채점한다. 빈 회답이나 일부만 채운 회답도 실패하지 않는다.
pub fn score(answers: &Answers) -> SurveyResult {
    let total = total(answers);
    let level = Level::from_total(total);

    SurveyResult {
        total,
        level,
        level_label_ko: level.label_ko().to_string(),
        level_label_en: level.label_en().to_string(),
        sleep_quality: sub_sum(answers, SubScale::SleepQuality),
        daytime_sleepiness: sub_sum(answers, SubScale::DaytimeSleepiness),
        insomnia: sub_sum(answers, SubScale::Insomnia),
        stress: sub_sum(answers, SubScale::Stress),
        flags: flag::derive(answers),
        chronic_count_choice_no: answers.get(CHRONIC_COUNT_QUESTION),
        chronic_manage_choice_no: answers.get(CHRONIC_MANAGE_QUESTION),
        result_text_key: level.text_key().to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::flag::FlagType;

    fn all(choice_no: i32) -> Answers {
        (1..=30).map(|question_no| (question_no, choice_no)).collect()
    }

    /// 1~28번 점수 합이 `target`이 되도록 앞 설문부터 4점씩 채운다.
    fn with_total(target: i32) -> Answers {
        let mut remaining = target;
        (1..=TOTAL_LAST_QUESTION)
            .map(|question_no| {
                let points = remaining.min(4);
                remaining -= points;
                (question_no, points + 1)
            })
            .collect()
    }

    #[test]
    fn test_empty() {
        let result = score(&Answers::new());
        assert_eq!(result.total, 0);
        for scale in SubScale::ALL {
            assert_eq!(result.sub_score(scale), 0);
        }
        assert_eq!(result.level, Level::Excellent);
        assert!(result.flags.is_empty());
        assert_eq!(result.chronic_count_choice_no, None);
        assert_eq!(result.chronic_manage_choice_no, None);
        assert_eq!(result.result_text_key, "SHT_EXCELLENT");
    }

    #[test]
    fn test_all_lowest() {
        let result = score(&all(1));
        assert_eq!(result.total, 0);
        assert_eq!(result.level, Level::Excellent);
        assert_eq!(result.chronic_count_choice_no, Some(1));
        assert_eq!(result.chronic_manage_choice_no, Some(1));
    }

    #[test]
    fn test_full_score() {
        let answers: Answers = (1..=28).map(|question_no| (question_no, 5)).collect();
        let result = score(&answers);
        assert_eq!(result.total, 112);
        assert_eq!(result.level, Level::Severe);
        assert_eq!(result.level_label_ko, "심각");
        assert_eq!(result.level_label_en, "Severe");
        assert_eq!(result.sleep_quality, 12 * 4);
        assert_eq!(result.daytime_sleepiness, 7 * 4);
        assert_eq!(result.insomnia, 6 * 4);
        assert_eq!(result.stress, 4 * 4);
    }

    #[test]
    fn test_chronic_excluded_from_total() {
        let result = score(&Answers::from([(29, 5), (30, 5)]));
        assert_eq!(result.total, 0);
        assert_eq!(result.chronic_count_choice_no, Some(5));
        assert_eq!(result.chronic_manage_choice_no, Some(5));
        assert_eq!(
            result.flags.iter().map(|f| f.kind).collect::<Vec<_>>(),
            vec![FlagType::ChronicManagePoor]
        );
    }

    #[test]
    fn test_overlapping_sub_scales() {
        let result = score(&Answers::from([(2, 5), (3, 3)]));
        assert_eq!(result.total, 6);
        assert_eq!(result.sleep_quality, 6);
        assert_eq!(result.insomnia, 6);
        assert_eq!(result.daytime_sleepiness, 0);
        assert_eq!(result.stress, 0);
    }

    #[test]
    fn test_question_outside_sub_scales() {
        let result = score(&Answers::from([(6, 5)]));
        assert_eq!(result.total, 4);
        for scale in SubScale::ALL {
            assert_eq!(result.sub_score(scale), 0);
        }
    }

    #[test]
    fn test_boundary_totals() {
        assert_eq!(score(&with_total(16)).total, 16);
        assert_eq!(score(&with_total(16)).level, Level::Excellent);
        assert_eq!(score(&with_total(17)).level, Level::GoodMinor);
        assert_eq!(score(&with_total(39)).level, Level::GoodMinor);
        assert_eq!(score(&with_total(40)).level, Level::Caution);
        assert_eq!(score(&with_total(62)).level, Level::Caution);
        assert_eq!(score(&with_total(63)).level, Level::Problematic);
        assert_eq!(score(&with_total(84)).level, Level::Problematic);
        assert_eq!(score(&with_total(85)).level, Level::Severe);
    }

    #[test]
    fn test_boundary_with_varied_choices() {
        // 2+3+1+4+0+2+4 = 16
        let answers = Answers::from([(1, 3), (5, 4), (9, 2), (15, 5), (20, 1), (22, 3), (27, 5)]);
        assert_eq!(score(&answers).total, 16);
        assert_eq!(score(&answers).level, Level::Excellent);

        let mut answers = answers;
        answers.insert(28, 2);
        assert_eq!(score(&answers).total, 17);
        assert_eq!(score(&answers).level, Level::GoodMinor);
    }

    #[test]
    fn test_deterministic() {
        let answers = Answers::from([(12, 5), (17, 4), (29, 3), (30, 4), (2, 2)]);
        let first = score(&answers);
        let second = score(&answers.clone());
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_monotonic() {
        let base = all(2);
        let before = score(&base);
        for question_no in 1..=30 {
            for choice_no in 3..=5 {
                let mut answers = base.clone();
                answers.insert(question_no, choice_no);
                let after = score(&answers);
                assert!(after.total >= before.total);
                for scale in SubScale::ALL {
                    if scale.questions().contains(&question_no) {
                        assert!(after.sub_score(scale) > before.sub_score(scale));
                    } else {
                        assert_eq!(after.sub_score(scale), before.sub_score(scale));
                    }
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_propagates() {
        let result = score(&Answers::from([(1, 9), (99, 5)]));
        assert_eq!(result.total, 8);
        assert_eq!(result.sleep_quality, 8);

        let result = score(&Answers::from([(1, 0)]));
        assert_eq!(result.total, -1);
        assert_eq!(result.level, Level::Excellent);
    }

    #[test]
    fn test_extreme_choices_do_not_overflow() {
        let result = score(&Answers::from([(1, i32::MIN)]));
        assert_eq!(result.total, i64::from(i32::MIN) - 1);
        assert_eq!(result.sleep_quality, i64::from(i32::MIN) - 1);
        assert_eq!(result.level, Level::Excellent);

        let result = score(&Answers::from([(1, i32::MAX), (2, i32::MAX)]));
        assert_eq!(result.total, 2 * (i64::from(i32::MAX) - 1));
        assert_eq!(result.insomnia, i64::from(i32::MAX) - 1);
        assert_eq!(result.level, Level::Severe);

        let every: Answers = (1..=30).map(|question_no| (question_no, i32::MAX)).collect();
        assert_eq!(score(&every).total, 28 * (i64::from(i32::MAX) - 1));
    }

    #[test]
    fn test_sum_accepts_ranges() {
        let answers = Answers::from([(1, 3), (2, 4), (3, 5), (40, 5)]);
        assert_eq!(sum(&answers, 1..=2), 5);
        assert_eq!(sum(&answers, [3, 40, 7]), 8);
        assert_eq!(total(&answers), 9);
    }

    #[test]
    fn test_payload_field_names() {
        let result = score(&Answers::from([(12, 4)]));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["TOTAL_SHT"], 3);
        assert_eq!(value["LEVEL_CODE"], "EXCELLENT");
        assert_eq!(value["LEVEL_LABEL_KO"], "매우 양호");
        assert_eq!(value["SUB_SLEEP_QUALITY"], 3);
        assert_eq!(
            value["FLAGS_JSON"],
            serde_json::json!([{"type": "OSA_RISK", "questionNo": 12, "choiceNo": 4}])
        );
        assert!(value.get("CHRONIC_COUNT_CHOICE_NO").is_none());
        assert!(value.get("CHRONIC_MANAGE_CHOICE_NO").is_none());
        assert_eq!(value["RESULT_TEXT_KEY"], "SHT_EXCELLENT");
    }

    #[test]
    fn test_record() {
        let result = score(&Answers::from([(17, 5), (29, 2)]));
        let record = result.to_record().unwrap();
        assert_eq!(record.level_code, "EXCELLENT");
        assert_eq!(
            record.flags_json,
            r#"[{"type":"DAYTIME_SLEEPY_RISK","questionNo":17,"choiceNo":5}]"#
        );
        assert_eq!(record.chronic_count_choice_no, Some(2));
        assert_eq!(record.chronic_manage_choice_no, None);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["SUB_DAYTIME_SLEEPINESS"], 4);
        assert_eq!(value["LEVEL_LABEL_EN"], "Excellent");
        assert!(value["FLAGS_JSON"].is_string());
    }
}
