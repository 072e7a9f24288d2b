use std::io::{stdin, stdout, BufRead, Write};

use sleep_survey::presentation::{flag_message_en, flag_message_ko, level_display};
use sleep_survey::validate::{CHOICE_MAX, CHOICE_MIN};
use sleep_survey::{score_checked, Answers, Error, Policy, Question, SubScale, QUESTIONS};

fn main() -> Result<(), Error> {
    sleep_survey::init_tracing();

    let mut input = stdin().lock();
    let mut answers = Answers::new();

    'survey: for theme in &QUESTIONS.sleep_survey {
        println!("{}", theme.theme);
        for section in &theme.questions {
            if let Some(ref title) = section.title {
                println!("{}", title);
            }
            for question in &section.questions {
                match ask(&mut input, question)? {
                    Answer::Choice(choice_no) => {
                        answers.insert(question.id, choice_no);
                    }
                    Answer::Skipped => {}
                    Answer::Closed => break 'survey,
                }
                println!();
            }
        }
    }

    let result = score_checked(&answers, Policy::Strict)?;
    let display = level_display(result.level);

    println!("총점: {} ({} / {})", result.total, result.level_label_ko, result.level_label_en);
    println!("{}\n{}", display.message_ko, display.message_en);
    for scale in SubScale::ALL {
        println!("  {} = {}", scale.field(), result.sub_score(scale));
    }
    for flag in &result.flags {
        let choice = QUESTIONS
            .question(flag.question_no)
            .and_then(|q| q.choice_text(flag.choice_no).map(str::to_string))
            .unwrap_or_else(|| flag.choice_no.to_string());
        println!(
            "  [{}] {}번 = {}: {} ({})",
            flag.kind.code(),
            flag.question_no,
            choice,
            flag_message_ko(flag.kind),
            flag_message_en(flag.kind)
        );
    }
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Answer {
    Choice(i32),
    Skipped,
    Closed,
}

fn ask(input: &mut impl BufRead, question: &Question) -> Result<Answer, Error> {
    let mut buffer = String::new();
    println!("{}. {}", question.id, question.text);
    for choice in &question.choices {
        print!("  {} => {}", choice.choice, choice.text);
    }
    loop {
        println!();
        stdout().flush()?;
        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            return Ok(Answer::Closed);
        }
        match parse_answer(question.id, buffer.trim()) {
            Ok(answer) => return Ok(answer),
            Err(_) => println!("회답은 {}~{} 사이의 숫자로 입력해 주세요.", CHOICE_MIN, CHOICE_MAX),
        }
    }
}

fn parse_answer(question_no: u32, value: &str) -> Result<Answer, Error> {
    if value.is_empty() {
        return Ok(Answer::Skipped);
    }
    let choice_no = value.parse::<i32>().map_err(|_| Error::Parse {
        value: value.to_string(),
    })?;
    if (CHOICE_MIN..=CHOICE_MAX).contains(&choice_no) {
        Ok(Answer::Choice(choice_no))
    } else {
        Err(Error::IllegalAnswer {
            question_no,
            choice_no,
        })
    }
}
