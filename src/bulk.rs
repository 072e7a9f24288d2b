use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::warn;

use crate::answers::Answers;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Id,
    Question(u32),
    Ignored,
}

fn column(header: &str) -> Column {
    if header.eq_ignore_ascii_case("id") {
        return Column::Id;
    }
    let number = header
        .strip_prefix('q')
        .or_else(|| header.strip_prefix('Q'))
        .unwrap_or(header);
    match number.parse::<u32>() {
        Ok(question_no) => Column::Question(question_no),
        Err(_) => {
            warn!(header, "ignoring unknown column");
            Column::Ignored
        }
    }
}

fn parse_row(columns: &[Column], record: &StringRecord) -> Result<(String, Answers), Error> {
    let mut id = None;
    let mut answers = Answers::new();
    for (column, value) in columns.iter().zip(record.iter()) {
        match column {
            Column::Id => id = Some(value.to_string()),
            Column::Question(_) if value.is_empty() => {}
            Column::Question(question_no) => {
                let choice_no = value.parse::<i32>().map_err(|_| Error::Parse {
                    value: value.to_string(),
                })?;
                answers.insert(*question_no, choice_no);
            }
            Column::Ignored => {}
        }
    }
    let id = id.filter(|id| !id.is_empty()).ok_or(Error::MissingId)?;
    Ok((id, answers))
}

/// 일괄 회답 CSV를 읽는다.
///
/// 헤더는 `id,q1,...,q30` 형식이며 설문 열은 일부만 있어도, 순서가 달라도 된다.
/// 빈 칸은 회답 없음으로 본다. 숫자가 아닌 칸은 그 행만 오류가 된다.
pub fn read_bulk<R: Read>(
    reader: R,
) -> Result<impl Iterator<Item = Result<(String, Answers), Error>>, Error> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let columns: Vec<Column> = reader.headers()?.iter().map(column).collect();
    if !columns.contains(&Column::Id) {
        return Err(Error::MissingId);
    }
    Ok(reader
        .into_records()
        .map(move |record| parse_row(&columns, &record?)))
}
