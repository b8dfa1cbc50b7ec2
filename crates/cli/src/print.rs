use std::io::{self, Write};

use termseg::{Options, Segment, Segmenter, Stepper, Unit};

use crate::Mode;

fn unit(mode: Mode) -> Option<Unit> {
    match mode {
        Mode::Grapheme => Some(Unit::Grapheme),
        Mode::Word => Some(Unit::Word),
        Mode::Sentence => Some(Unit::Sentence),
        Mode::Line => Some(Unit::Line),
        Mode::Step => None,
    }
}

/// Print one line per segment: byte range, width, the escaped text and for
/// line segments the break opportunity at the end.
pub(crate) fn segments<W: Write>(
    out: &mut W,
    input: &[u8],
    mode: Mode,
    options: &Options,
) -> io::Result<()> {
    match unit(mode) {
        Some(unit) => {
            for step in Segmenter::with_options(input, unit, options) {
                write_segment(out, &step.segment, step.width)?;
                if let Some(op) = step.line_break {
                    write!(out, " {}", op.as_ref())?;
                }
                writeln!(out)?;
            }
        }
        None => {
            for step in Stepper::with_options(input, options) {
                write_segment(out, &step.cluster, step.width)?;
                if step.word_boundary {
                    write!(out, " word")?;
                }
                if step.sentence_boundary {
                    write!(out, " sentence")?;
                }
                writeln!(out, " {}", step.line_break.as_ref())?;
            }
        }
    }

    Ok(())
}

/// Print the number of segments and the total width
pub(crate) fn totals<W: Write>(
    out: &mut W,
    input: &[u8],
    mode: Mode,
    options: &Options,
) -> io::Result<()> {
    let (count, width) = match unit(mode) {
        Some(unit) => Segmenter::with_options(input, unit, options)
            .fold((0usize, 0), |(count, width), step| (count + 1, width + step.width)),
        None => Stepper::with_options(input, options)
            .fold((0usize, 0), |(count, width), step| (count + 1, width + step.width)),
    };

    writeln!(out, "{} {count} {width}", mode.as_ref())
}

fn write_segment<W: Write>(out: &mut W, segment: &Segment, width: usize) -> io::Result<()> {
    write!(
        out,
        "{}..{} {} {:?}",
        segment.start(),
        segment.end(),
        width,
        segment.to_string()
    )
}

#[cfg(test)]
mod test {
    use super::*;

    fn print(input: &str, mode: Mode) -> String {
        let mut out = vec![];
        segments(&mut out, input.as_bytes(), mode, &Options::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn graphemes() {
        assert_eq!("0..1 1 \"a\"\n1..9 2 \"🇩🇪\"\n", print("a🇩🇪", Mode::Grapheme));
    }

    #[test]
    fn lines() {
        assert_eq!(
            "0..3 3 \"ab \" allowed\n3..5 1 \"c\\n\" mandatory\n",
            print("ab c\n", Mode::Line)
        );
    }

    #[test]
    fn steps() {
        assert_eq!(
            "0..1 1 \"a\" word prohibited\n1..2 1 \".\" word sentence mandatory\n",
            print("a.", Mode::Step)
        );
    }

    #[test]
    fn total() {
        let mut out = vec![];
        totals(&mut out, "日本 go".as_bytes(), Mode::Word, &Options::default()).unwrap();
        assert_eq!("word 4 7\n", String::from_utf8(out).unwrap());
    }
}
