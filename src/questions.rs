use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::score::SubScale;

/// 설문 마스터. 빌드 시점에 포함되며 최초 접근 시 한 번만 파싱한다.
pub static QUESTIONS: Lazy<SleepSurvey> = Lazy::new(|| {
    serde_json::from_str(include_str!("../resources/sleep_survey.json"))
        .expect("resources/sleep_survey.json must be a valid survey master")
});

/// 설문 수
pub const QUESTION_COUNT: u32 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub choice: i32,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub choices: Vec<Choice>,
}

impl Question {
    /// 이 설문이 속한 하위 척도. 하나의 설문이 여러 척도에 속할 수 있다.
    pub fn sub_scales(&self) -> Vec<SubScale> {
        SubScale::ALL
            .into_iter()
            .filter(|scale| scale.questions().contains(&self.id))
            .collect()
    }

    pub fn choice_text(&self, choice_no: i32) -> Option<&str> {
        self.choices
            .iter()
            .find(|choice| choice.choice == choice_no)
            .map(|choice| choice.text.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct Section {
    /// 하위 안내문. 증상 문항처럼 별도 안내가 필요한 묶음에만 있다.
    pub title: Option<String>,
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
pub struct Theme {
    /// 안내문
    pub theme: String,
    pub questions: Vec<Section>,
}

/// 수면 건강 설문 30문항의 마스터 표현
#[derive(Debug, Deserialize)]
pub struct SleepSurvey {
    pub sleep_survey: Vec<Theme>,
}

impl SleepSurvey {
    fn walk(&self) -> impl Iterator<Item = &Question> {
        self.sleep_survey
            .iter()
            .flat_map(|theme| theme.questions.iter())
            .flat_map(|section| section.questions.iter())
    }

    pub fn get(&self, index: usize) -> Option<Question> {
        self.walk().nth(index).cloned()
    }

    /// 설문 번호로 설문을 가져온다
    pub fn question(&self, id: u32) -> Option<Question> {
        self.walk().find(|question| question.id == id).cloned()
    }

    /// 30문항 전체
    pub fn questions(&self) -> Vec<Question> {
        self.walk().cloned().collect()
    }
}
