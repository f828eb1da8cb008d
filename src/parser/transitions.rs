//! Parser states and the static transition tables between them

use std::fmt;

use super::config::QuoteStyle;
use super::pattern::match_pattern;

/// Parsing modes of the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Inside an opening (or self-closing) tag name
    ElementNameStart,
    /// Inside a closing tag name
    ElementNameEnd,
    /// Inside an attribute name
    AttributeName,
    /// Inside an attribute value
    AttributeValue,
    /// Inside element body text
    ElementBody,
    /// Inside a comment
    Comment,
    /// Past the end of the document
    End,
}

impl State {
    pub const COUNT: usize = 7;

    /// All states in table order. Ties between equally long matches go to the
    /// target that comes first here.
    pub const ALL: [Self; Self::COUNT] = [
        Self::ElementNameStart,
        Self::ElementNameEnd,
        Self::AttributeName,
        Self::AttributeValue,
        Self::ElementBody,
        Self::Comment,
        Self::End,
    ];

    pub const fn index(self) -> usize {
        match self {
            Self::ElementNameStart => 0,
            Self::ElementNameEnd => 1,
            Self::AttributeName => 2,
            Self::AttributeValue => 3,
            Self::ElementBody => 4,
            Self::Comment => 5,
            Self::End => 6,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ElementNameStart => "element-name-start",
            Self::ElementNameEnd => "element-name-end",
            Self::AttributeName => "attribute-name",
            Self::AttributeValue => "attribute-value",
            Self::ElementBody => "element-body",
            Self::Comment => "comment",
            Self::End => "end",
        };
        f.write_str(name)
    }
}

/// A recognized transition out of the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<'p> {
    pub target: State,
    /// The pattern text that matched
    pub pattern: &'p str,
    /// Bytes of input to skip before continuing in `target`
    pub consumed: usize,
}

impl Transition<'_> {
    /// Whether the matched text closes the current tag with `/>`.
    pub fn is_self_closing(&self) -> bool {
        self.pattern.contains("/>")
    }
}

type Candidates = &'static [&'static str];
type Row = [Candidates; State::COUNT];

const NONE: Candidates = &[];

/// Candidate patterns for every `(from, to)` state pair
#[derive(Debug)]
pub struct TransitionTable {
    rows: [Row; State::COUNT],
}

/// Table for `name="value"` attributes.
pub static DOUBLE_QUOTED: TransitionTable = TransitionTable {
    rows: [
        // ElementNameStart
        [
            &["s>s<a", "s/>s<a"],
            &["s>s</a", "s/>s</a"],
            &["Ssa"],
            NONE,
            &["s>sA", "s/>sA"],
            &["s>s<!--sA", "s/>s<!--sA"],
            &["s/>s0"],
        ],
        // ElementNameEnd
        [
            &["s>s<a"],
            &["s>s</a"],
            NONE,
            NONE,
            &["s>sA"],
            &["s>s<!--"],
            &["s>s0"],
        ],
        // AttributeName
        [NONE, NONE, NONE, &["=\"sA", "=\"\""], NONE, NONE, NONE],
        // AttributeValue
        [
            &["\"s>s<a", "\"s/>s<a"],
            &["\"s>s</a", "\"s/>s</a"],
            &["\"Ssa"],
            NONE,
            &["\"s>sA", "\"s/>sA"],
            &["\"s>s<!--sA", "\"s/>s<!--sA"],
            &["\"s/>s0"],
        ],
        // ElementBody
        [&["s<a"], &["s</a"], NONE, NONE, NONE, &["<!--sA"], NONE],
        // Comment
        [
            &["-->s<a"],
            &["-->s</a"],
            NONE,
            NONE,
            &["-->sA"],
            &["-->s<!--sA"],
            &["-->s0"],
        ],
        // End
        [NONE; State::COUNT],
    ],
};

/// Table for `name='value'` attributes.
pub static SINGLE_QUOTED: TransitionTable = TransitionTable {
    rows: [
        // ElementNameStart
        [
            &["s>s<a", "s/>s<a"],
            &["s>s</a", "s/>s</a"],
            &["Ssa"],
            NONE,
            &["s>sA", "s/>sA"],
            &["s>s<!--sA", "s/>s<!--sA"],
            &["s/>s0"],
        ],
        // ElementNameEnd
        [
            &["s>s<a"],
            &["s>s</a"],
            NONE,
            NONE,
            &["s>sA"],
            &["s>s<!--"],
            &["s>s0"],
        ],
        // AttributeName
        [NONE, NONE, NONE, &["='sA", "=''"], NONE, NONE, NONE],
        // AttributeValue
        [
            &["'s>s<a", "'s/>s<a"],
            &["'s>s</a", "'s/>s</a"],
            &["'Ssa"],
            NONE,
            &["'s>sA", "'s/>sA"],
            &["'s>s<!--sA", "'s/>s<!--sA"],
            &["'s/>s0"],
        ],
        // ElementBody
        [&["s<a"], &["s</a"], NONE, NONE, NONE, &["<!--sA"], NONE],
        // Comment
        [
            &["-->s<a"],
            &["-->s</a"],
            NONE,
            NONE,
            &["-->sA"],
            &["-->s<!--sA"],
            &["-->s0"],
        ],
        // End
        [NONE; State::COUNT],
    ],
};

impl TransitionTable {
    pub fn for_quote_style(style: QuoteStyle) -> &'static Self {
        match style {
            QuoteStyle::Double => &DOUBLE_QUOTED,
            QuoteStyle::Single => &SINGLE_QUOTED,
        }
    }

    /// Every `(target, pattern)` pair leaving `from`, in scan order.
    pub fn candidates(&self, from: State) -> impl Iterator<Item = (State, &'static str)> + '_ {
        self.rows
            .get(from.index())
            .into_iter()
            .flat_map(|row| State::ALL.into_iter().zip(row.iter().copied()))
            .flat_map(|(target, patterns)| patterns.iter().map(move |pattern| (target, *pattern)))
    }

    /// The transition out of `from` that matches `input`, if any.
    pub fn next(&self, from: State, input: &[u8]) -> Option<Transition<'static>> {
        select_longest(self.candidates(from), input)
    }
}

/// Picks the candidate that consumes the most input. On a tie the earliest
/// candidate wins.
pub fn select_longest<'p, I>(candidates: I, input: &[u8]) -> Option<Transition<'p>>
where
    I: IntoIterator<Item = (State, &'p str)>,
{
    let mut best: Option<Transition<'p>> = None;

    for (target, pattern) in candidates {
        let Some(consumed) = match_pattern(input, pattern) else {
            continue;
        };
        if best.is_none_or(|current| consumed > current.consumed) {
            best = Some(Transition {
                target,
                pattern,
                consumed,
            });
        }
    }

    best
}
