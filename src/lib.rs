//! 수면 건강 설문(30문항) 채점 라이브러리.
//!
//! 회답([`Answers`])을 받아 총점, 하위 척도 점수, 5단계 판정, 위험 신호를 담은
//! 결과([`SurveyResult`])를 만든다. 채점은 부작용 없는 순수 함수이며 저장과
//! 표시는 [`store`]와 [`presentation`]이 맡는다.

pub mod answers;
pub mod bulk;
pub mod error;
pub mod flag;
pub mod level;
pub mod presentation;
pub mod questions;
pub mod score;
pub mod store;
pub mod validate;

pub use answers::Answers;
pub use bulk::read_bulk;
pub use error::Error;
pub use flag::{Flag, FlagType};
pub use level::Level;
pub use questions::{Question, QUESTIONS};
pub use score::{score, ResultRecord, SubScale, SurveyResult};
pub use store::{JsonLinesStore, MemoryStore, ResultStore};
pub use validate::{score_checked, Policy};

/// 바이너리 공통 로그 초기화. 레벨은 `RUST_LOG`로 바꾼다.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
