use clap::Parser;
use sleep_survey::{read_bulk, score_checked, Error, JsonLinesStore, Policy, ResultStore};
use std::fs::File;
use std::io::{stdout, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// 회답 CSV를 일괄 채점해 JSON Lines로 출력한다
#[derive(Parser)]
struct Args {
    /// `id,q1,...,q30` 헤더를 가진 CSV
    path: PathBuf,

    /// 선택지 번호 검사 정책
    #[arg(long, value_enum, default_value_t = Policy::Permissive)]
    policy: Policy,

    /// 출력 파일 (생략하면 표준 출력)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), Error> {
    sleep_survey::init_tracing();

    let args = Args::parse();
    let reader = BufReader::new(File::open(&args.path)?);
    let writer: Box<dyn Write> = match args.out {
        Some(ref path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(stdout().lock())),
    };
    let mut store = JsonLinesStore::new(writer);

    let mut skipped = 0usize;
    for (line, row) in read_bulk(reader)?.enumerate() {
        let scored = row.and_then(|(id, answers)| {
            let record = score_checked(&answers, args.policy)?.to_record()?;
            store.store(&id, &record)
        });
        if let Err(e) = scored {
            warn!(row = line + 1, error = %e, "skipping row");
            skipped += 1;
        }
    }

    info!(scored = store.written(), skipped, policy = ?args.policy, "bulk scoring finished");
    store.into_inner()?;
    Ok(())
}
