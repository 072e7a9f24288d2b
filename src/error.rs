use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// 30설문 범위 밖의 설문 번호
    #[error("question {0} is not part of the survey")]
    IllegalQuestion(u32),
    /// 선택지 번호 위반
    #[error("question {question_no}: choice {choice_no} is outside 1..=5")]
    IllegalAnswer { question_no: u32, choice_no: i32 },
    /// 입력 값이 숫자가 아님
    #[error("cannot parse '{value}' as a number")]
    Parse { value: String },
    #[error("missing id column in bulk input")]
    MissingId,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
