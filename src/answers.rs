use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 설문 번호 → 선택지 번호.
///
/// 화면이 설문을 진행하면서 하나씩 채워 넣는다. 값은 검증하지 않고 그대로
/// 보관하며, 범위 검사는 [`crate::validate`]에서 경계에 한 번만 한다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    values: BTreeMap<u32, i32>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// 회답을 저장한다. 같은 설문에 다시 회답하면 덮어쓴다.
    pub fn insert(&mut self, question_no: u32, choice_no: i32) -> Option<i32> {
        self.values.insert(question_no, choice_no)
    }

    pub fn remove(&mut self, question_no: u32) -> Option<i32> {
        self.values.remove(&question_no)
    }

    pub fn get(&self, question_no: u32) -> Option<i32> {
        self.values.get(&question_no).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 설문 번호 오름차순
    pub fn iter(&self) -> impl Iterator<Item = (u32, i32)> + '_ {
        self.values.iter().map(|(&question_no, &choice_no)| (question_no, choice_no))
    }
}

impl FromIterator<(u32, i32)> for Answers {
    fn from_iter<T: IntoIterator<Item = (u32, i32)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<u32, i32>> for Answers {
    fn from(values: BTreeMap<u32, i32>) -> Self {
        Self { values }
    }
}

impl<const N: usize> From<[(u32, i32); N]> for Answers {
    fn from(pairs: [(u32, i32); N]) -> Self {
        pairs.into_iter().collect()
    }
}
