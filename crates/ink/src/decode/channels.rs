//! Per-trace sample group decoding
//!
//! A trace's text is a comma-separated list of sample groups. Each group holds
//! one value per channel, encoded in one of three modes:
//!
//! | Mode              | Form                      | Meaning                          |
//! |-------------------|---------------------------|----------------------------------|
//! | Explicit          | `10 20 0 0 0 0 80 0`      | absolute values                  |
//! | First difference  | `'1'-2'0'0'0'0'3'0`       | delta to the previous sample     |
//! | Second difference | `"1"0"0"0"0"0"-1"0`       | delta to the running velocity    |
//!
//! The quoted group that opens second-difference mode restarts the velocity
//! at its own values. Later groups drop the quotes, add to that velocity, and
//! may omit the space before a negative sign (`1-2 0 0 0 0 3 0`).

use crate::constants::CHANNEL_COUNT;

/// Channel values of one decoded group.
pub type Channels = [f64; CHANNEL_COUNT];

/// Channel positions within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Channel {
    X = 0,
    Y,
    F,
    Z,
    OTx,
    OTy,
    W,
    T,
}

/// Encoding of a sample group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingMode {
    Explicit,
    FirstDiff,
    SecondDiff,
}

impl EncodingMode {
    /// Modes a group may use after a group in `last` mode.
    ///
    /// `None` is the start of a trace.
    pub fn allowed_after(last: Option<EncodingMode>) -> &'static [EncodingMode] {
        match last {
            None => &[EncodingMode::Explicit],
            Some(EncodingMode::Explicit) => &[EncodingMode::Explicit, EncodingMode::FirstDiff],
            Some(EncodingMode::FirstDiff) => &[EncodingMode::SecondDiff],
            Some(EncodingMode::SecondDiff) => &[EncodingMode::SecondDiff],
        }
    }
}

/// Decoding state for one trace.
///
/// Created fresh for every trace; nothing is shared between traces.
#[derive(Debug, Default)]
pub struct GroupDecoder {
    last_mode: Option<EncodingMode>,
    previous: Channels,
    velocity: Channels,
}

impl GroupDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_mode(&self) -> Option<EncodingMode> {
        self.last_mode
    }

    /// Decode one group into absolute channel values.
    ///
    /// Returns None when the group does not fit any mode legal after the
    /// previous group; the caller stops decoding the trace there.
    pub fn decode(&mut self, group: &str) -> Option<Channels> {
        let group = group.trim();
        let (mode, values) = self.classify(group)?;

        match mode {
            EncodingMode::Explicit => self.previous = values,
            EncodingMode::FirstDiff => add_assign(&mut self.previous, &values),
            // the quoted group opening the mode restarts the velocity
            EncodingMode::SecondDiff if self.last_mode != Some(EncodingMode::SecondDiff) => {
                self.velocity = values;
                add_assign(&mut self.previous, &self.velocity);
            }
            EncodingMode::SecondDiff => {
                add_assign(&mut self.velocity, &values);
                add_assign(&mut self.previous, &self.velocity);
            }
        }

        self.last_mode = Some(mode);
        Some(self.previous)
    }

    /// Pick the mode for `group` and parse its fields.
    fn classify(&self, group: &str) -> Option<(EncodingMode, Channels)> {
        let allowed = EncodingMode::allowed_after(self.last_mode);

        let (mode, values) = match group.chars().next()? {
            '\'' => (EncodingMode::FirstDiff, parse_prefixed(group, '\'')?),
            '"' => {
                // A quoted group only opens second-difference mode.
                if self.last_mode == Some(EncodingMode::SecondDiff) {
                    return None;
                }
                (EncodingMode::SecondDiff, parse_prefixed(group, '"')?)
            }
            _ if self.last_mode == Some(EncodingMode::SecondDiff) => {
                (EncodingMode::SecondDiff, parse_compact(group)?)
            }
            _ => (EncodingMode::Explicit, parse_spaced(group)?),
        };

        allowed.contains(&mode).then_some((mode, values))
    }
}

/// `a b c ...` with exactly one value per channel.
fn parse_spaced(group: &str) -> Option<Channels> {
    collect_channels(group.split_whitespace())
}

/// `'a'b'c...`: the delimiter precedes every field, so splitting yields an
/// empty leading piece plus one piece per channel.
fn parse_prefixed(group: &str, delimiter: char) -> Option<Channels> {
    let mut pieces = group.split(delimiter);
    if !pieces.next()?.trim().is_empty() {
        return None;
    }
    collect_channels(pieces.map(str::trim))
}

/// Unquoted second differences with the space before `-` possibly missing.
fn parse_compact(group: &str) -> Option<Channels> {
    let mut spaced = String::with_capacity(group.len() + CHANNEL_COUNT);
    for (i, c) in group.chars().enumerate() {
        if c == '-' && i > 0 {
            spaced.push(' ');
        }
        spaced.push(c);
    }
    parse_spaced(&spaced)
}

fn collect_channels<'a>(fields: impl Iterator<Item = &'a str>) -> Option<Channels> {
    let mut values = [0.0; CHANNEL_COUNT];
    let mut count = 0;
    for field in fields {
        if count == CHANNEL_COUNT {
            return None;
        }
        values[count] = field.parse::<f64>().ok()?;
        count += 1;
    }
    (count == CHANNEL_COUNT).then_some(values)
}

fn add_assign(target: &mut Channels, delta: &Channels) {
    for (t, d) in target.iter_mut().zip(delta) {
        *t += d;
    }
}
