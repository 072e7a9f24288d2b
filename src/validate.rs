//! 채점 전에 회답을 검사하는 경계 계층.
//!
//! 채점 함수 자체는 아무것도 검사하지 않는다. 화면이나 일괄 입력처럼 외부에서
//! 회답이 들어오는 곳에서 [`score_checked`]로 감싸 한 번만 검사한다.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::answers::Answers;
use crate::error::Error;
use crate::questions::QUESTION_COUNT;
use crate::score::{score, SurveyResult};

pub const CHOICE_MIN: i32 = 1;
pub const CHOICE_MAX: i32 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// 선택지 번호를 그대로 채점한다
    #[default]
    Permissive,
    /// 1~5 밖의 선택지 번호를 가장 가까운 값으로 맞춘다
    Clamp,
    /// 1~5 밖의 선택지 번호가 있으면 거부한다
    Strict,
}

/// 1~30 밖의 설문 번호는 어떤 정책이든 버리고 기록만 남긴다.
pub fn sanitize(answers: &Answers, policy: Policy) -> Result<Answers, Error> {
    let mut sanitized = Answers::new();
    for (question_no, choice_no) in answers.iter() {
        if !(1..=QUESTION_COUNT).contains(&question_no) {
            warn!(question_no, choice_no, "ignoring answer to unknown question");
            continue;
        }
        let choice_no = match policy {
            Policy::Permissive => choice_no,
            _ if (CHOICE_MIN..=CHOICE_MAX).contains(&choice_no) => choice_no,
            Policy::Clamp => {
                let clamped = choice_no.clamp(CHOICE_MIN, CHOICE_MAX);
                warn!(question_no, choice_no, clamped, "clamping out-of-range choice");
                clamped
            }
            Policy::Strict => {
                return Err(Error::IllegalAnswer {
                    question_no,
                    choice_no,
                })
            }
        };
        sanitized.insert(question_no, choice_no);
    }
    Ok(sanitized)
}

pub fn score_checked(answers: &Answers, policy: Policy) -> Result<SurveyResult, Error> {
    let sanitized = sanitize(answers, policy)?;
    let result = score(&sanitized);
    debug!(
        ?policy,
        answered = sanitized.len(),
        total = result.total,
        level = %result.level,
        flags = result.flags.len(),
        "scored survey"
    );
    Ok(result)
}
