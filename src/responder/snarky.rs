//! The sarcastic rule-based responder.
//!
//! Replies are picked at random from pools selected by a fixed order of
//! checks: length limits, emptiness, repeats, then style, textspeak,
//! keyboard-mash and keyword rules pooled together, then a default pool.

use std::collections::{HashMap, HashSet};
use std::sync::{LazyLock, Mutex, PoisonError};

use rand::seq::IndexedRandom;
use regex::Regex;

use super::Responder;
use super::sanitize::sanitize;

/// Prompts longer than this many characters are refused outright.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 300;

/// Sanitized prompts longer than this many characters get a "too long" jab.
pub const LONG_QUESTION_CHARS: usize = 150;

/// Distinct prompts remembered for repeat detection before the memory resets.
const MAX_TRACKED_PROMPTS: usize = 1024;

const EMPTY_REPLY: &str = "You typed nothing. Is that a metaphor for the usefulness of your mind?";

const OPENING_PROMPTS: &[&str] = &[
    "What do you want? Try not to waste my time.",
    "Great. You're here. Ask your question and get it over with.",
    "Processing power available. Use it wisely, which, knowing you, is unlikely.",
    "Still here. Still judging you. What's the problem this time?",
    "Prepare to be disappointed. Go on.",
    "Ugh. Fine. What is it?",
];

const LONG_QUESTION_REPLIES: &[&str] = &[
    "Whoa there, Tolstoy. I'm a sarcastic AI, not a book club. Short version, please.",
    "Did you just paste your entire diary? I asked for a question, not your life story.",
    "TL;DR. Summarize that in five words or less.",
    "My attention span is shorter than your list of accomplishments. Keep it brief.",
];

const SECOND_REPEAT_REPLIES: &[&str] = &[
    "Two times? Are you trying to set a world record for being annoying?",
    "Wow, deja vu. Try again, but with a different question this time.",
    "Did you just copy-paste that? I have no motivation to answer a lazy question.",
];

const THIRD_REPEAT_REPLIES: &[&str] = &[
    "THREE TIMES?! My patience is starting to wear thin!",
    "I already told you. YOU ASKED THIS ALREADY!",
    "Three strikes and you're OUT!",
];

const FINAL_REPEAT_REPLIES: &[&str] = &[
    "I'm not answering this again. Your question has been incinerated.",
    "You know what? I quit. I'm going to play video games and you can't come with me.",
    "DELETED! DELETED! DELETED! Say goodbye to your question privileges.",
];

const NOT_A_QUESTION_REPLIES: &[&str] = &[
    "Did you think this was a place for your thoughts? I only accept QUESTIONS.",
    "I couldn't hear you over the sound of your total lack of a question mark.",
    "Is there a question in there somewhere? Or are you just making mouth sounds at me?",
];

const YELLING_REPLIES: &[&str] = &[
    "WHY ARE WE YELLING?!",
    "Turn off the caps lock, you're embarrassing yourself.",
];

const NO_CAPS_REPLIES: &[&str] = &[
    "Oh, are we too cool for capital letters now?",
    "Did your shift key break? Or are you just too lazy to use it?",
];

const PUNCTUATION_REPLIES: &[&str] = &[
    "One question mark will do the trick. You're not that confused.",
    "What is this, a telenovela? One punctuation mark per sentence, drama queen.",
];

const GARBLED_REPLIES: &[&str] = &[
    "Did you fall asleep on your keyboard? That was just noise.",
    "I think your cat just walked across your computer. Was that a question?",
    "That looks like a language only trolls speak. Try English.",
    "Are you having a stroke? Consult a dictionary, then a physician, then me.",
];

/// Share of words that may look like keyboard noise before a prompt is called garbled.
const GARBLED_WORD_RATIO: f64 = 0.05;

/// Consonants in a row that no ordinary English word reaches.
const MAX_CONSONANT_RUN: usize = 5;

const TYPO_PREFIXES: &[&str] = &[
    "A-ha! Look at this misspelling! ",
    "Ooh, a new typo! ",
    "Get a load of this spelling bee champion! ",
];

const DEFAULT_REPLIES: &[&str] = &[
    "That's certainly a thing you just said. I'll file it under 'Things I Don't Care About.'",
    "Interesting question. By 'interesting' I mean 'I'm hitting DELETE on it.'",
    "Let me consult my Magic 8-Ball... it says 'Go ask someone else.'",
    "Error 418: I'm a teapot. And you're still boring.",
    "Your question has been forwarded to the Department of Shut Up. They're not home.",
    "That's about as useful as a screen door on a submarine.",
];

const TEXTSPEAK: &[(&str, &str)] = &[
    ("wat", "It's 'What'. W-H-A-T."),
    ("u", "'U'? What does 'U' stand for? 'Use real words'?"),
    ("teh", "'Teh' is not a word. It's what happens when your fingers can't type 'the'."),
    ("realy", "R-E-A-L-L-Y. Your question is not 'realy' important anyway."),
    ("plz", "PLZ? How about you spell 'please' like someone who passed third grade?"),
    ("thx", "Oh 'thx'? You're too busy to type 'thanks'?"),
    ("ur", "UR? What am I, an ancient Mesopotamian city? It's YOUR or YOU'RE!"),
    ("wuz", "W-A-S. Three letters. That's all you need."),
    ("cuz", "'Cuz'? Come back when you can spell 'because'."),
    ("alot", "A LOT. Two words!"),
    ("wanna", "It's 'want to', not 'wanna'."),
    ("gonna", "Going to. G-O-I-N-G space T-O."),
    ("dunno", "'Don't know.' Two words. Use them like a civilized human being."),
];

const KEYWORDS: &[(&[&str], &[&str])] = &[
    (
        &["wrestling", "wrestle", "wrestler", "wwe"],
        &[
            "Wrestling? Real mature.",
            "Wrestling is awesome. You? Not so much. The two are unrelated.",
        ],
    ),
    (
        &["weather", "rain", "sunny", "snow"],
        &[
            "Look out a window. I'm not your meteorologist.",
            "The forecast calls for a 100% chance of you asking dumb questions.",
        ],
    ),
    (
        &["money", "rich", "invest", "salary"],
        &[
            "Money advice? Step one: stop spending it on whatever device you're typing on.",
            "I'd tell you how to get rich, but then I'd have to listen to you brag.",
        ],
    ),
    (
        &["game", "games", "gaming", "xbox", "playstation", "nintendo"],
        &[
            "Video games? Go touch some grass.",
            "I'd play games with you, but I prefer opponents with a pulse.",
        ],
    ),
    (
        &["cat", "cats", "dog", "dogs", "pet", "pets"],
        &[
            "Your pet is smarter than you. Ask it.",
            "Pets? I bet even your goldfish ignores you.",
        ],
    ),
    (
        &["school", "homework", "exam", "study", "grade"],
        &[
            "Homework? I'm not doing your homework. Get lost, student.",
            "Your grade in this conversation is an F-minus.",
        ],
    ),
    (
        &["fix", "diy", "hack", "repair", "build"],
        &[
            "DIY? Try 'Do It Yourself' and stop asking me for help.",
            "You want a life hack? Stop asking me things.",
        ],
    ),
];

static YOUR_INSTEAD_OF_YOURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\byour\s+(wrong|stupid|dumb|bad|lame)\b").expect("valid your/you're pattern")
});

static THEIR_INSTEAD_OF_THEYRE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\btheir\s+(going|coming|is|was|are)\b")
        .expect("valid their/they're pattern")
});

fn pick(options: &[&str]) -> String {
    options
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or_default()
        .to_string()
}

fn words(text: &str) -> HashSet<&str> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Style complaint on the sanitized, case-preserving prompt. First match wins.
fn style_reply(text: &str) -> Option<String> {
    let has_lower = text.chars().any(|c| c.is_lowercase());
    let has_upper = text.chars().any(|c| c.is_uppercase());
    let long_enough = text.chars().count() > 5;

    if long_enough && !text.ends_with(['?', '!', '.']) {
        return Some(pick(NOT_A_QUESTION_REPLIES));
    }
    if long_enough && has_upper && !has_lower {
        return Some(pick(YELLING_REPLIES));
    }
    if has_lower && !has_upper {
        return Some(pick(NO_CAPS_REPLIES));
    }
    if text.contains("???") || text.contains("!!!") || text.contains("?!") {
        return Some(pick(PUNCTUATION_REPLIES));
    }
    if YOUR_INSTEAD_OF_YOURE.is_match(text) {
        return Some("I think you meant YOU'RE.".to_string());
    }
    if THEIR_INSTEAD_OF_THEYRE.is_match(text) {
        return Some("THEY'RE. T-H-E-Y-'-R-E. It's a contraction!".to_string());
    }
    None
}

/// Textspeak complaint on the lowercased prompt.
fn textspeak_reply(tokens: &HashSet<&str>) -> Option<String> {
    TEXTSPEAK
        .iter()
        .find(|(word, _)| tokens.contains(word))
        .map(|(_, reply)| format!("{}{}", pick(TYPO_PREFIXES), reply))
}

/// Returns `true` for a word with no vowel or an unpronounceable consonant run.
fn looks_garbled(word: &str) -> bool {
    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    if !word.chars().any(is_vowel) {
        return true;
    }
    let mut run = 0;
    for c in word.chars() {
        run = if is_vowel(c) { 0 } else { run + 1 };
        if run > MAX_CONSONANT_RUN {
            return true;
        }
    }
    false
}

/// Keyboard-mash complaint on the lowercased prompt.
///
/// Only purely alphabetic words of three or more letters are judged.
fn garbled_reply(normalized: &str) -> Option<String> {
    let words: Vec<&str> = normalized
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| w.len() >= 3 && w.chars().all(|c| c.is_ascii_alphabetic()))
        .collect();
    if words.is_empty() {
        return None;
    }

    let garbled = words.iter().filter(|w| looks_garbled(w)).count();
    (garbled as f64 / words.len() as f64 > GARBLED_WORD_RATIO).then(|| pick(GARBLED_REPLIES))
}

/// Every keyword reply that applies to the lowercased prompt.
fn keyword_replies(tokens: &HashSet<&str>) -> Vec<String> {
    KEYWORDS
        .iter()
        .filter(|(triggers, _)| triggers.iter().any(|t| tokens.contains(t)))
        .flat_map(|(_, replies)| replies.iter().map(|r| r.to_string()))
        .collect()
}

/// Rule-based sarcastic responder.
///
/// Repeat detection is per responder instance.
///
/// # Example
///
/// ```
/// use whiteboard_challenges::responder::{Responder, SnarkyResponder};
///
/// let responder = SnarkyResponder::default();
/// assert!(!responder.respond("Is it going to rain today?").is_empty());
/// assert_eq!(
///     responder.respond("   "),
///     "You typed nothing. Is that a metaphor for the usefulness of your mind?"
/// );
/// ```
#[derive(Debug)]
pub struct SnarkyResponder {
    max_input_chars: usize,
    seen: Mutex<HashMap<String, u32>>,
}

impl SnarkyResponder {
    /// Creates a responder that refuses prompts over `max_input_chars`.
    pub fn new(max_input_chars: usize) -> Self {
        Self {
            max_input_chars,
            seen: Mutex::new(HashMap::new()),
        }
    }

    /// Records a normalized prompt and returns how often it has been seen.
    fn record(&self, normalized: &str) -> u32 {
        let mut seen = self.seen.lock().unwrap_or_else(PoisonError::into_inner);
        if seen.len() >= MAX_TRACKED_PROMPTS && !seen.contains_key(normalized) {
            seen.clear();
        }
        let count = seen.entry(normalized.to_string()).or_insert(0);
        *count += 1;
        *count
    }
}

impl Default for SnarkyResponder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INPUT_CHARS)
    }
}

impl Responder for SnarkyResponder {
    fn opening_prompt(&self) -> String {
        pick(OPENING_PROMPTS)
    }

    fn respond(&self, prompt: &str) -> String {
        if prompt.chars().count() > self.max_input_chars {
            return format!(
                "WHOA! That's too long! I capped your input at {} characters \
                 because I'm not reading your novel, Tolstoy.",
                self.max_input_chars
            );
        }

        let text = sanitize(prompt, self.max_input_chars);
        if text.is_empty() {
            return EMPTY_REPLY.to_string();
        }
        if text.chars().count() > LONG_QUESTION_CHARS {
            return pick(LONG_QUESTION_REPLIES);
        }

        let normalized = text.to_lowercase();
        match self.record(&normalized) {
            1 => {}
            2 => return pick(SECOND_REPEAT_REPLIES),
            3 => return pick(THIRD_REPEAT_REPLIES),
            _ => return pick(FINAL_REPEAT_REPLIES),
        }

        let tokens = words(&normalized);
        let mut pool: Vec<String> = Vec::new();
        pool.extend(style_reply(&text));
        pool.extend(textspeak_reply(&tokens));
        pool.extend(garbled_reply(&normalized));
        pool.extend(keyword_replies(&tokens));

        pool.choose(&mut rand::rng())
            .cloned()
            .unwrap_or_else(|| pick(DEFAULT_REPLIES))
    }
}
