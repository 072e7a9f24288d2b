use std::io::Write;

use serde::Serialize;
use tracing::info;

use crate::error::Error;
use crate::score::ResultRecord;

/// 채점 결과를 사용자 단위로 보관하는 저장소
pub trait ResultStore {
    fn store(&mut self, owner_id: &str, record: &ResultRecord) -> Result<(), Error>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<(String, ResultRecord)>,
}

impl MemoryStore {
    pub fn rows(&self) -> &[(String, ResultRecord)] {
        &self.rows
    }

    /// 해당 사용자의 가장 최근 결과
    pub fn latest(&self, owner_id: &str) -> Option<&ResultRecord> {
        self.rows
            .iter()
            .rev()
            .find(|(owner, _)| owner == owner_id)
            .map(|(_, record)| record)
    }
}

impl ResultStore for MemoryStore {
    fn store(&mut self, owner_id: &str, record: &ResultRecord) -> Result<(), Error> {
        self.rows.push((owner_id.to_string(), record.clone()));
        Ok(())
    }
}

#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "OWNER_ID")]
    owner_id: &'a str,
    #[serde(flatten)]
    record: &'a ResultRecord,
}

/// 한 줄에 결과 하나씩 JSON으로 쓴다
pub struct JsonLinesStore<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonLinesStore<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(mut self) -> Result<W, Error> {
        self.writer.flush()?;
        info!(rows = self.written, "results flushed");
        Ok(self.writer)
    }
}

impl<W: Write> ResultStore for JsonLinesStore<W> {
    fn store(&mut self, owner_id: &str, record: &ResultRecord) -> Result<(), Error> {
        serde_json::to_writer(&mut self.writer, &Row { owner_id, record })?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }
}
