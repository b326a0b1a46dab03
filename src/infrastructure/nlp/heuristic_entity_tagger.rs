use async_trait::async_trait;

use crate::application::ports::{EntityTagger, EntityTaggerError};
use crate::domain::{Entity, EntityLabel};

const HONORIFICS: &[&str] = &[
    "mr", "mrs", "ms", "miss", "mx", "dr", "prof", "sir", "dame", "madam", "lord", "lady",
];

/// Compared case-insensitively against the last word of a span.
const ORGANIZATION_SUFFIXES: &[&str] = &[
    "inc", "incorporated", "corp", "corporation", "co", "company", "ltd", "limited", "llc", "llp",
    "plc", "gmbh", "ag", "sa", "group", "holdings", "bank", "university", "college", "institute",
    "foundation", "association", "agency", "authority", "partners", "technologies", "systems",
    "industries", "labs", "ventures", "capital", "ministry", "department", "council",
    "committee", "commission", "organization", "organisation", "society", "trust", "fund",
    "airlines", "motors", "pharmaceuticals", "consulting", "solutions", "services",
];

/// Spans opening with one of these and containing "of" name an organization.
const ORGANIZATION_PREFIXES: &[&str] = &[
    "university", "bank", "ministry", "department", "institute", "college", "bureau", "office",
];

/// Abbreviations whose trailing period does not end a span.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "mx", "dr", "prof", "st", "jr", "sr", "inc", "corp", "co", "ltd",
];

const CONNECTORS: &[&str] = &["of", "&", "de", "van", "von", "der", "la", "du"];

/// Capitalized words that open sentences without naming anything.
const SENTENCE_OPENERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "it", "its", "we", "our", "they",
    "their", "he", "she", "his", "her", "i", "in", "on", "at", "for", "from", "by", "with",
    "as", "after", "before", "during", "if", "when", "while", "but", "and", "or", "so", "yet",
    "however", "please", "dear", "contact", "thanks", "thank", "total", "net", "overall", "all",
    "each", "every", "some", "many", "most", "no", "not", "there", "here", "what", "who",
];

/// Acronyms that look like organizations but are not.
const ACRONYM_STOPLIST: &[&str] = &[
    "I", "OK", "CEO", "CFO", "COO", "CTO", "VP", "HR", "PR", "USD", "EUR", "GBP", "JPY", "PDF",
    "FAQ", "AM", "PM", "TV", "ID", "USA", "UK", "EU", "US", "YOY", "QOQ", "EBITDA", "EPS", "ROI",
    "NB", "PS", "RE", "FYI", "ASAP", "TBD",
];

const GIVEN_NAMES: &[&str] = &[
    "aaron", "adam", "aisha", "alan", "albert", "alex", "alexander", "alice", "amanda", "amy",
    "andrew", "angela", "anna", "anne", "anthony", "arthur", "barbara", "ben", "benjamin",
    "brian", "carlos", "carol", "catherine", "charles", "charlotte", "chris", "christopher",
    "claire", "daniel", "david", "deborah", "diana", "donald", "dorothy", "edward", "elena",
    "elizabeth", "emily", "emma", "eric", "fatima", "frank", "gary", "george", "hannah", "helen",
    "henry", "isabella", "jack", "james", "jane", "jason", "jennifer", "jessica", "john",
    "jonathan", "jose", "joseph", "joshua", "julia", "karen", "kevin", "laura", "linda", "lisa",
    "lucas", "maria", "mary", "matthew", "michael", "michelle", "mohammed", "nancy", "nicholas",
    "olivia", "patricia", "paul", "peter", "priya", "rachel", "raj", "rebecca", "richard",
    "robert", "ryan", "sarah", "sophia", "stephen", "steven", "susan", "thomas", "timothy",
    "victoria", "william", "wei", "yuki",
];

/// Rule-based tagger over capitalized word spans.
///
/// A span becomes a person when it follows an honorific or opens with a known
/// given name, an organization when it ends with a corporate suffix or is a
/// bare acronym. A span that is neither but contains a given name or honorific
/// after a leading title keeps only the name as a person. Anything else
/// capitalized is tagged `Other`.
#[derive(Default)]
pub struct HeuristicEntityTagger;

impl HeuristicEntityTagger {
    pub fn new() -> Self {
        Self
    }

    pub fn tag_text(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        for line in text.lines() {
            let tokens = tokenize_line(line);
            let mut span: Vec<&Token> = Vec::new();

            for (index, token) in tokens.iter().enumerate() {
                if token.breaks_before {
                    flush(&mut span, &mut entities);
                }

                if token.is_capitalized() {
                    span.push(token);
                } else if token.is_connector()
                    && !span.is_empty()
                    && !span.last().is_some_and(|t| t.breaks_after)
                    && tokens.get(index + 1).is_some_and(|next| {
                        next.is_capitalized() && !next.breaks_before
                    })
                {
                    span.push(token);
                    continue;
                } else {
                    flush(&mut span, &mut entities);
                    continue;
                }

                if token.breaks_after {
                    flush(&mut span, &mut entities);
                }
            }

            flush(&mut span, &mut entities);
        }

        entities
    }
}

#[async_trait]
impl EntityTagger for HeuristicEntityTagger {
    #[tracing::instrument(skip(self, text), fields(chars = text.len()))]
    async fn tag(&self, text: &str) -> Result<Vec<Entity>, EntityTaggerError> {
        let entities = self.tag_text(text);
        tracing::debug!(entities = entities.len(), "Entity tagging complete");
        Ok(entities)
    }
}

#[derive(Debug)]
struct Token {
    word: String,
    sentence_start: bool,
    breaks_before: bool,
    breaks_after: bool,
}

impl Token {
    fn is_capitalized(&self) -> bool {
        self.word.chars().next().is_some_and(char::is_uppercase)
            && self.word.chars().all(|c| c.is_alphabetic() || matches!(c, '\'' | '-' | '.' | '&'))
    }

    fn is_connector(&self) -> bool {
        CONNECTORS.contains(&self.word.as_str())
    }

    fn lowered(&self) -> String {
        self.word.to_lowercase()
    }
}

fn tokenize_line(line: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut sentence_start = true;

    for raw in line.split_whitespace() {
        let is_word_char = |c: char| c.is_alphanumeric() || c == '&';

        let leading = raw.trim_start_matches(|c: char| !is_word_char(c));
        let core = leading.trim_end_matches(|c: char| !is_word_char(c));
        let trailing = &leading[core.len()..];

        if core.is_empty() {
            if let Some(last) = tokens.last_mut() {
                last.breaks_after = true;
            }
            sentence_start = sentence_start || raw.contains(['.', '!', '?']);
            continue;
        }

        let (word, possessive) = match core
            .strip_suffix("'s")
            .or_else(|| core.strip_suffix("\u{2019}s"))
        {
            Some(stem) => (stem, true),
            None => (core, false),
        };

        let lowered = word.to_lowercase();
        let abbreviation = trailing.starts_with('.') && ABBREVIATIONS.contains(&lowered.as_str());
        let ends_sentence = !abbreviation && trailing.contains(['.', '!', '?', ':']);
        // "Acme Corp." closes the name even when the sentence goes on.
        let closes_name = abbreviation && ORGANIZATION_SUFFIXES.contains(&lowered.as_str());

        tokens.push(Token {
            word: word.to_string(),
            sentence_start,
            breaks_before: leading.len() != raw.len(),
            breaks_after: possessive || closes_name || (!trailing.is_empty() && !abbreviation),
        });

        sentence_start = ends_sentence;
    }

    tokens
}

fn flush(span: &mut Vec<&Token>, entities: &mut Vec<Entity>) {
    if let Some(entity) = classify(span) {
        entities.push(entity);
    }
    span.clear();
}

fn classify(span: &[&Token]) -> Option<Entity> {
    let mut words: Vec<&Token> = span.to_vec();

    while words
        .first()
        .is_some_and(|t| t.sentence_start && SENTENCE_OPENERS.contains(&t.lowered().as_str()))
    {
        words.remove(0);
        if let Some(next) = words.first() {
            if next.is_connector() {
                words.remove(0);
            }
        }
    }

    while words.last().is_some_and(|t| t.is_connector()) {
        words.pop();
    }

    let first = words.first()?;
    let last = words.last()?;

    if HONORIFICS.contains(&first.lowered().as_str()) {
        let name = join_words(&words[1..]);
        return (!name.is_empty()).then(|| Entity::new(name, EntityLabel::Person));
    }

    let text = join_words(&words);

    if words.len() > 1 && ORGANIZATION_SUFFIXES.contains(&last.lowered().as_str()) {
        return Some(Entity::new(text, EntityLabel::Organization));
    }

    if words.len() > 2
        && ORGANIZATION_PREFIXES.contains(&first.lowered().as_str())
        && words.iter().any(|t| t.word == "of")
    {
        return Some(Entity::new(text, EntityLabel::Organization));
    }

    if words.len() == 1 && is_acronym(&first.word) {
        return Some(Entity::new(text, EntityLabel::Organization));
    }

    let opens_with_given_name = GIVEN_NAMES.contains(&first.lowered().as_str());
    let all_name_words = words.iter().all(|t| !t.is_connector() && !is_acronym(&t.word));

    if opens_with_given_name && all_name_words && words.len() <= 3 {
        return Some(Entity::new(text, EntityLabel::Person));
    }

    // "CEO Jane Smith", "Yesterday John Carter": the name is the tail of the span.
    if let Some(name) = trailing_person(&words) {
        return Some(Entity::new(name, EntityLabel::Person));
    }

    Some(Entity::new(text, EntityLabel::Other))
}

/// Name starting at the first honorific or given name after the span's first word.
fn trailing_person(words: &[&Token]) -> Option<String> {
    let start = words.iter().skip(1).position(|t| {
        let lowered = t.lowered();
        HONORIFICS.contains(&lowered.as_str()) || GIVEN_NAMES.contains(&lowered.as_str())
    })? + 1;

    let name_start = if HONORIFICS.contains(&words[start].lowered().as_str()) {
        start + 1
    } else {
        start
    };
    let name = &words[name_start..];

    let plausible = (1..=3).contains(&name.len())
        && name
            .iter()
            .all(|t| !t.is_connector() && !is_acronym(&t.word));

    plausible.then(|| join_words(name))
}

fn is_acronym(word: &str) -> bool {
    let len = word.chars().count();
    (2..=6).contains(&len)
        && word.chars().all(|c| c.is_ascii_uppercase())
        && !ACRONYM_STOPLIST.contains(&word)
}

fn join_words(words: &[&Token]) -> String {
    words
        .iter()
        .map(|t| t.word.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
