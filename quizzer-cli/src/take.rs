//! Line-driven quiz taking.
//!
//! Shows one question at a time and reads one answer line per question:
//!
//! - text equal to an option selects that option
//! - otherwise a single letter selects the option with that letter
//! - an empty line moves on, keeping whatever answer the question already has
//! - `-` clears the answer and moves on
//! - `<` goes back one question
//!
//! Answering the last question, or reaching end of input, finishes the quiz.

use std::io::{self, BufRead, Write};

use quizzer_babel::model::option_letter;
use quizzer_babel::session::QuizSession;

pub fn run<R: BufRead, W: Write>(
    mut session: QuizSession<'_>,
    input: R,
    mut output: W,
) -> io::Result<Vec<String>> {
    let mut lines = input.lines();

    loop {
        let question = session.current();
        writeln!(
            output,
            "\n{}/{} {}",
            session.index() + 1,
            session.len(),
            question.text()
        )?;
        for (position, option) in question.options().iter().enumerate() {
            let mark = if session.selected() == Some(option.as_str()) {
                '*'
            } else {
                ' '
            };
            let letter = option_letter(position).unwrap_or('?');
            writeln!(output, " {mark} {letter}) {option}")?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            "" => {}
            "-" => session.skip(),
            "<" => {
                if !session.previous_question() {
                    writeln!(output, "Already at the first question")?;
                }
                continue;
            }
            answer => {
                let mut chars = answer.chars();
                let selected = match (chars.next(), chars.next()) {
                    (Some(letter), None)
                        if letter.is_ascii_alphabetic()
                            && session.current().option_position(answer).is_none() =>
                    {
                        session.select_letter(letter).map(|_| ())
                    }
                    _ => session.select(answer),
                };
                if let Err(err) = selected {
                    writeln!(output, "{err}")?;
                    continue;
                }
            }
        }

        if !session.next_question() {
            break;
        }
    }

    Ok(session.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizzer_babel::{parse_quiz_text, Quiz};
    use std::io::Cursor;

    fn quiz() -> Quiz {
        Quiz::new(
            "geo",
            parse_quiz_text(
                "# Capital of France?\n- Paris\n- Lyon\n\n# Largest ocean?\n- Atlantic\n- Pacific\n\n# Longest river?\n- Nile\n- Amazon",
            ),
        )
    }

    fn take(quiz: &Quiz, input: &str) -> (Vec<String>, String) {
        let session = QuizSession::start(quiz).unwrap();
        let mut output = Vec::new();
        let responses = run(session, Cursor::new(input), &mut output).unwrap();
        (responses, String::from_utf8(output).unwrap())
    }

    #[test]
    fn letters_and_text_select_options() {
        let quiz = quiz();
        let (responses, output) = take(&quiz, "b\nPacific\nA\n");
        assert_eq!(responses, vec!["Lyon", "Pacific", "Nile"]);
        assert!(output.contains("1/3 Capital of France?"));
        assert!(output.contains("   a) Paris"));
    }

    #[test]
    fn blank_line_leaves_question_unanswered() {
        let quiz = quiz();
        let (responses, _) = take(&quiz, "\na\n\n");
        assert_eq!(responses, vec!["", "Atlantic", ""]);
    }

    #[test]
    fn end_of_input_finishes_early() {
        let quiz = quiz();
        let (responses, _) = take(&quiz, "a\n");
        assert_eq!(responses, vec!["Paris", "", ""]);
    }

    #[test]
    fn invalid_answers_are_asked_again() {
        let quiz = quiz();
        let (responses, output) = take(&quiz, "z\nBerlin\na\nb\nb\n");
        assert_eq!(responses, vec!["Paris", "Pacific", "Amazon"]);
        assert!(output.contains("no option labelled 'z'"));
        assert!(output.contains("'Berlin' is not an option of the current question"));
    }

    #[test]
    fn going_back_changes_an_answer() {
        let quiz = quiz();
        let (responses, output) = take(&quiz, "<\na\n<\n-\nb\na\n");
        assert!(output.contains("Already at the first question"));
        assert_eq!(responses, vec!["", "Pacific", "Nile"]);
    }

    #[test]
    fn single_letter_options_match_by_text_first() {
        let quiz = Quiz::new(
            "vf",
            parse_quiz_text("# El sol es una estrella\n- V\n- F\n\n# Tiene tres lunas\n- V\n- F"),
        );
        let (responses, _) = take(&quiz, "F\nb\n");
        assert_eq!(responses, vec!["F", "F"]);

        let quiz = Quiz::new("mixed", parse_quiz_text("# Pick\n- b\n- a"));
        let (responses, _) = take(&quiz, "a\n");
        assert_eq!(responses, vec!["a"]);
    }

    #[test]
    fn resumed_answers_are_marked() {
        let quiz = quiz().with_responses(vec!["Lyon".into()]);
        let session = QuizSession::resume(&quiz).unwrap();
        let mut output = Vec::new();
        let responses = run(session, Cursor::new("\n"), &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains(" * b) Lyon"));
        assert_eq!(responses, vec!["Lyon", "", ""]);
    }
}
