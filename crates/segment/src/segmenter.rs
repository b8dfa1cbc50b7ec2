use strum_macros::AsRefStr;

use crate::{
    chars::Chars,
    error::SegmentError,
    grapheme::GraphemeBreaker,
    line::{BreakOpportunity, LineBreaker},
    options::Options,
    segment::{Segment, Split},
    sentence::SentenceBreaker,
    width::cluster_width,
    word::WordBreaker,
};

/// Kind of segments a segmenter produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Unit {
    Grapheme,
    Word,
    Sentence,
    Line,
}

/// One segment produced by [`Segmenter::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'a> {
    pub segment: Segment<'a>,
    /// Display width of the segment
    pub width: usize,
    /// Break opportunity at the end of the segment, only for line segments
    pub line_break: Option<BreakOpportunity>,
}

#[derive(Debug, Clone)]
enum Engine<'a> {
    Grapheme(Split<'a, GraphemeBreaker>),
    Word(Split<'a, WordBreaker>),
    Sentence(Split<'a, SentenceBreaker>),
    Line(Split<'a, LineBreaker>),
}

impl<'a> Engine<'a> {
    fn new(text: &'a [u8], unit: Unit, options: &Options) -> Engine<'a> {
        match unit {
            Unit::Grapheme => Engine::Grapheme(Split::new(text, GraphemeBreaker::new())),
            Unit::Word => Engine::Word(Split::new(text, WordBreaker::new())),
            Unit::Sentence => Engine::Sentence(Split::new(
                text,
                SentenceBreaker::new(&options.sentence),
            )),
            Unit::Line => Engine::Line(Split::new(text, LineBreaker::new())),
        }
    }

    fn next(&mut self) -> Option<(Segment<'a>, Option<BreakOpportunity>)> {
        match self {
            Engine::Grapheme(split) => split.next_segment().map(|(s, _)| (s, None)),
            Engine::Word(split) => split.next_segment().map(|(s, _)| (s, None)),
            Engine::Sentence(split) => split.next_segment().map(|(s, _)| (s, None)),
            Engine::Line(split) => split.next_segment().map(|(s, op)| (s, Some(op))),
        }
    }

    fn pos(&self) -> usize {
        match self {
            Engine::Grapheme(split) => split.pos(),
            Engine::Word(split) => split.pos(),
            Engine::Sentence(split) => split.pos(),
            Engine::Line(split) => split.pos(),
        }
    }
}

/// Where a segmenter is in its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Progress {
    Running,
    /// End of input has been reported
    Ended,
}

/// Produces the segments of a text one at a time.
///
/// After the last segment `advance` reports the end of input once, advancing
/// further is an error until the segmenter is [`reset`](Segmenter::reset).
#[derive(Debug, Clone)]
pub struct Segmenter<'a> {
    unit: Unit,
    options: Options,
    engine: Engine<'a>,
    progress: Progress,
}

impl<'a> Segmenter<'a> {
    pub fn new<T: AsRef<[u8]> + ?Sized>(text: &'a T, unit: Unit) -> Segmenter<'a> {
        Segmenter::with_options(text, unit, &Options::default())
    }

    pub fn with_options<T: AsRef<[u8]> + ?Sized>(
        text: &'a T,
        unit: Unit,
        options: &Options,
    ) -> Segmenter<'a> {
        let text = text.as_ref();
        log::debug!("New {} segmenter over {} bytes", unit.as_ref(), text.len());

        Segmenter {
            unit,
            options: options.clone(),
            engine: Engine::new(text, unit, options),
            progress: Progress::Running,
        }
    }

    /// Restart on a new input, all state of the previous input is dropped
    pub fn reset<T: AsRef<[u8]> + ?Sized>(&mut self, text: &'a T) {
        let text = text.as_ref();
        log::debug!("Reset {} segmenter to {} bytes", self.unit.as_ref(), text.len());

        self.engine = Engine::new(text, self.unit, &self.options);
        self.progress = Progress::Running;
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Byte position where the next segment starts
    pub fn position(&self) -> usize {
        self.engine.pos()
    }

    /// Produce the next segment, `Ok(None)` at the end of input.
    pub fn advance(&mut self) -> Result<Option<Step<'a>>, SegmentError> {
        if self.progress == Progress::Ended {
            log::warn!("{} segmenter advanced past the end", self.unit.as_ref());
            return Err(SegmentError::Exhausted);
        }

        match self.engine.next() {
            Some((segment, line_break)) => Ok(Some(Step {
                segment,
                width: segment.width_with(&self.options.width),
                line_break,
            })),
            None => {
                self.progress = Progress::Ended;
                Ok(None)
            }
        }
    }
}

impl<'a> Iterator for Segmenter<'a> {
    type Item = Step<'a>;

    fn next(&mut self) -> Option<Step<'a>> {
        match self.progress {
            Progress::Running => self.advance().ok().flatten(),
            Progress::Ended => None,
        }
    }
}

impl<'a> std::iter::FusedIterator for Segmenter<'a> {}

/// One grapheme cluster produced by [`Stepper::advance`] and the boundaries
/// of the other segment kinds at its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterStep<'a> {
    pub cluster: Segment<'a>,
    pub width: usize,
    /// A word ends after the cluster
    pub word_boundary: bool,
    /// A sentence ends after the cluster
    pub sentence_boundary: bool,
    /// Line break opportunity after the cluster
    pub line_break: BreakOpportunity,
}

/// Advances one grapheme cluster at a time while running every boundary
/// engine over the same text.
///
/// Word, sentence and line boundaries that fall inside a grapheme cluster are
/// not reported.
#[derive(Debug, Clone)]
pub struct Stepper<'a> {
    text: &'a [u8],
    chars: Chars<'a>,
    options: Options,

    grapheme: GraphemeBreaker,
    word: WordBreaker,
    sentence: SentenceBreaker,
    line: LineBreaker,

    /// Start of the next cluster
    start: usize,
    progress: Progress,
}

impl<'a> Stepper<'a> {
    pub fn new<T: AsRef<[u8]> + ?Sized>(text: &'a T) -> Stepper<'a> {
        Stepper::with_options(text, &Options::default())
    }

    pub fn with_options<T: AsRef<[u8]> + ?Sized>(text: &'a T, options: &Options) -> Stepper<'a> {
        let text = text.as_ref();
        log::debug!("New stepper over {} bytes", text.len());

        Stepper {
            text,
            chars: Chars::new(text),
            options: options.clone(),
            grapheme: GraphemeBreaker::new(),
            word: WordBreaker::new(),
            sentence: SentenceBreaker::new(&options.sentence),
            line: LineBreaker::new(),
            start: 0,
            progress: Progress::Running,
        }
    }

    /// Restart on a new input
    pub fn reset<T: AsRef<[u8]> + ?Sized>(&mut self, text: &'a T) {
        let text = text.as_ref();
        log::debug!("Reset stepper to {} bytes", text.len());
        *self = Stepper::with_options(text, &self.options);
    }

    /// Byte position where the next cluster starts
    pub fn position(&self) -> usize {
        self.start
    }

    /// Produce the next grapheme cluster, `Ok(None)` at the end of input.
    pub fn advance(&mut self) -> Result<Option<ClusterStep<'a>>, SegmentError> {
        if self.progress == Progress::Ended {
            log::warn!("Stepper advanced past the end");
            return Err(SegmentError::Exhausted);
        }

        if self.start >= self.text.len() {
            self.progress = Progress::Ended;
            return Ok(None);
        }

        while let Some((start, _, ch)) = self.chars.next() {
            let grapheme = self.grapheme.feed(ch);
            let word = self.word.feed(ch, &self.chars);
            let sentence = self.sentence.feed(ch, &self.chars);
            let line = self.line.feed(ch, &self.chars);

            if grapheme && start > self.start {
                let step = self.step(start, word, sentence, line);
                self.start = start;
                return Ok(Some(step));
            }
        }

        // End of text is a boundary for everything
        let end = self.text.len();
        let step = self.step(end, true, true, BreakOpportunity::Mandatory);
        self.start = end;
        Ok(Some(step))
    }

    fn step(
        &self,
        end: usize,
        word_boundary: bool,
        sentence_boundary: bool,
        line_break: BreakOpportunity,
    ) -> ClusterStep<'a> {
        let cluster = Segment::new(self.start, &self.text[self.start..end]);
        ClusterStep {
            cluster,
            width: cluster_width(cluster.chars(), &self.options.width),
            word_boundary,
            sentence_boundary,
            line_break,
        }
    }
}

impl<'a> Iterator for Stepper<'a> {
    type Item = ClusterStep<'a>;

    fn next(&mut self) -> Option<ClusterStep<'a>> {
        match self.progress {
            Progress::Running => self.advance().ok().flatten(),
            Progress::Ended => None,
        }
    }
}

impl<'a> std::iter::FusedIterator for Stepper<'a> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{options::SentenceOptions, width::WidthOptions};

    #[test]
    fn advance_until_exhausted() {
        let mut segmenter = Segmenter::new("ab", Unit::Grapheme);
        assert_eq!(0, segmenter.position());

        let step = segmenter.advance().unwrap().unwrap();
        assert!(step.segment == "a");
        assert_eq!(1, step.width);
        assert_eq!(None, step.line_break);
        assert_eq!(1, segmenter.position());

        let step = segmenter.advance().unwrap().unwrap();
        assert!(step.segment == "b");

        assert_eq!(Ok(None), segmenter.advance());
        assert_eq!(Err(SegmentError::Exhausted), segmenter.advance());
        assert_eq!(Err(SegmentError::Exhausted), segmenter.advance());
    }

    const UNITS: [Unit; 4] = [Unit::Grapheme, Unit::Word, Unit::Sentence, Unit::Line];

    #[test]
    fn empty_input() {
        for unit in UNITS {
            let mut segmenter = Segmenter::new("", unit);
            assert_eq!(Ok(None), segmenter.advance());
            assert_eq!(Err(SegmentError::Exhausted), segmenter.advance());
        }
    }

    #[test]
    fn reset() {
        let mut segmenter = Segmenter::new("a", Unit::Word);
        assert!(segmenter.advance().unwrap().is_some());
        assert_eq!(Ok(None), segmenter.advance());
        assert!(segmenter.advance().is_err());

        segmenter.reset("x y");
        let words: Vec<String> = segmenter.by_ref().map(|s| s.segment.to_string()).collect();
        assert_eq!(vec!["x", " ", "y"], words);
        assert_eq!(Err(SegmentError::Exhausted), segmenter.advance());
    }

    #[test]
    fn iterator_is_fused() {
        let mut segmenter = Segmenter::new("a", Unit::Sentence);
        assert!(segmenter.next().is_some());
        assert!(segmenter.next().is_none());
        assert!(segmenter.next().is_none());
    }

    #[test]
    fn units() {
        let text = "Mr. Smith left. He did.";
        let count = |unit| Segmenter::new(text, unit).count();
        assert_eq!(text.len(), count(Unit::Grapheme));
        assert_eq!(2, count(Unit::Sentence));
        assert_eq!(12, count(Unit::Word));
        assert_eq!(5, count(Unit::Line));

        let options = Options {
            sentence: SentenceOptions::none(),
            ..Options::default()
        };
        assert_eq!(3, Segmenter::with_options(text, Unit::Sentence, &options).count());
    }

    #[test]
    fn line_steps() {
        let steps: Vec<Step> = Segmenter::new("日本 go", Unit::Line).collect();
        assert_eq!(3, steps.len());
        assert_eq!(2, steps[0].width);
        assert_eq!(Some(BreakOpportunity::Allowed), steps[0].line_break);
        assert_eq!(3, steps[1].width);
        assert_eq!(2, steps[2].width);
        assert_eq!(Some(BreakOpportunity::Mandatory), steps[2].line_break);
    }

    #[test]
    fn wide_ambiguous() {
        let options = Options {
            width: WidthOptions::wide(),
            ..Options::default()
        };
        let step = Segmenter::with_options("±", Unit::Grapheme, &options)
            .next()
            .unwrap();
        assert_eq!(2, step.width);
    }

    #[test]
    fn stepper() {
        let text = "Hi 👋🏽. Go";
        let steps: Vec<ClusterStep> = Stepper::new(text).collect();
        let clusters: Vec<String> = steps.iter().map(|s| s.cluster.to_string()).collect();
        assert_eq!(vec!["H", "i", " ", "👋🏽", ".", " ", "G", "o"], clusters);

        let words: Vec<bool> = steps.iter().map(|s| s.word_boundary).collect();
        assert_eq!(
            vec![false, true, true, true, true, true, false, true],
            words
        );

        let sentences: Vec<bool> = steps.iter().map(|s| s.sentence_boundary).collect();
        assert_eq!(
            vec![false, false, false, false, false, true, false, true],
            sentences
        );

        let lines: Vec<BreakOpportunity> = steps.iter().map(|s| s.line_break).collect();
        use BreakOpportunity::*;
        assert_eq!(
            vec![
                Prohibited, Prohibited, Allowed, Prohibited, Prohibited, Allowed, Prohibited,
                Mandatory
            ],
            lines
        );

        assert_eq!(2, steps[3].width);
    }

    #[test]
    fn stepper_exhausted() {
        let mut stepper = Stepper::new("a");
        assert!(stepper.advance().unwrap().is_some());
        assert_eq!(Ok(None), stepper.advance());
        assert_eq!(Err(SegmentError::Exhausted), stepper.advance());

        stepper.reset("bc");
        assert_eq!(2, stepper.count());
    }
}
