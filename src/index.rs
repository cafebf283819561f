use std::collections::HashMap;

/// One timestamped dialogue unit of the subtitle track.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleBlock {
    pub sequence: u32,
    /// Block start in whole seconds from the top of the movie
    pub start: u32,
    /// Block end in whole seconds
    pub end: u32,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockError {
    MissingFields,
    BadSequence,
    BadTimestamp,
}

/// Word-to-timestamp index over a subtitle track.
///
/// Maps each normalized dialogue word to the start times of every block it
/// appears in, and records the ordered universe of block start times so
/// scoring can seed its weight table before any lookups happen.
pub struct SubtitleIndex {
    words: HashMap<String, Vec<u32>>,
    seeds: Vec<u32>,
    skipped: usize,
}

impl SubtitleIndex {
    /// Build the index from raw subtitle text.
    ///
    /// The track uses blank-line-separated blocks; once line terminators are
    /// flattened to spaces the blocks split on a double space. Blocks that
    /// fail to parse are counted and dropped so one bad line doesn't take
    /// the rest of the track with it.
    pub fn build(raw: &str) -> Self {
        let flattened = raw.replace('\r', "").replace('\n', " ");

        let mut words: HashMap<String, Vec<u32>> = HashMap::new();
        let mut seeds: Vec<u32> = Vec::new();
        let mut skipped = 0usize;

        for chunk in flattened.split("  ") {
            if chunk.trim().is_empty() {
                continue;
            }

            let block = match parse_block(chunk) {
                Ok(block) => block,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };

            if !seeds.contains(&block.start) {
                seeds.push(block.start);
            }

            for token in block.text.split(' ') {
                let word = normalize_word(token);
                if word.is_empty() {
                    continue;
                }
                words.entry(word).or_default().push(block.start);
            }
        }

        Self {
            words,
            seeds,
            skipped,
        }
    }

    /// Start times of every block the word occurs in, in track order.
    /// Unknown words yield an empty slice.
    pub fn candidates(&self, word: &str) -> &[u32] {
        self.words.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every block start time, in order of first appearance.
    pub fn seeds(&self) -> &[u32] {
        &self.seeds
    }

    /// Number of malformed blocks dropped during the build.
    pub fn skipped_blocks(&self) -> usize {
        self.skipped
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}

/// Parse one flattened subtitle block.
///
/// Fields after flattening: sequence, start, "-->", end, dialogue words.
/// The dialogue may legitimately be empty.
pub fn parse_block(chunk: &str) -> Result<SubtitleBlock, BlockError> {
    let fields: Vec<&str> = chunk.trim().split(' ').collect();
    if fields.len() < 4 {
        return Err(BlockError::MissingFields);
    }

    let sequence = fields[0].parse::<u32>().map_err(|_| BlockError::BadSequence)?;
    let start = parse_timestamp(fields[1]).ok_or(BlockError::BadTimestamp)?;
    let end = parse_timestamp(fields[3]).ok_or(BlockError::BadTimestamp)?;
    let text = fields[4..].join(" ");

    Ok(SubtitleBlock {
        sequence,
        start,
        end,
        text,
    })
}

/// Parse an `HH:MM:SS,fraction` subtitle timestamp into whole seconds.
/// The sub-second fraction is deliberately discarded.
pub fn parse_timestamp(ts: &str) -> Option<u32> {
    let (clock, _fraction) = ts.split_once(',')?;

    let parts: Vec<&str> = clock.split(':').collect();
    if parts.len() != 3 {
        return None;
    }

    let hours: u32 = parts[0].parse().ok()?;
    let minutes: u32 = parts[1].parse().ok()?;
    let seconds: u32 = parts[2].parse().ok()?;

    Some(hours * 3600 + minutes * 60 + seconds)
}

/// Normalize a dialogue or query token for index lookup: lowercase and strip
/// `, ? - ! .` wherever they occur in the token.
pub fn normalize_word(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ',' | '?' | '-' | '!' | '.'))
        .collect()
}
