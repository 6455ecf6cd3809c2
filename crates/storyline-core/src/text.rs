//! Injected text generation with canned fallback.
//!
//! Interactives ask for text by canned key; in demo mode, or whenever the live
//! source fails, they get the canned entry instead. Callers always receive a
//! string.

use core::fmt;

use log::{debug, warn};

pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const FALLBACK_KEY: &str = "fallback";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AppMode {
    #[default]
    Demo,
    Live,
}

impl AppMode {
    /// Live only with a non-empty credential.
    pub fn from_credential(credential: Option<&str>) -> Self {
        match credential {
            Some(value) if !value.is_empty() => Self::Live,
            _ => Self::Demo,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Live => "live",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TextRequest<'a> {
    pub canned_key: &'a str,
    pub prompt: &'a str,
    pub system: Option<&'a str>,
    pub max_tokens: u32,
}

impl<'a> TextRequest<'a> {
    pub const fn new(canned_key: &'a str, prompt: &'a str) -> Self {
        Self {
            canned_key,
            prompt,
            system: None,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub const fn with_system(mut self, system: &'a str) -> Self {
        self.system = Some(system);
        self
    }

    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextResponse {
    pub mode: AppMode,
    pub output: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextError {
    MissingCredential,
    Status(u16),
    EmptyResponse,
    Unavailable,
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredential => f.write_str("no credential configured"),
            Self::Status(code) => write!(f, "upstream returned status {code}"),
            Self::EmptyResponse => f.write_str("response carried no text"),
            Self::Unavailable => f.write_str("no live transport available"),
        }
    }
}

impl std::error::Error for TextError {}

pub trait TextSource {
    type Error: fmt::Display;

    fn request_text(&mut self, request: &TextRequest<'_>) -> Result<String, Self::Error>;
}

/// Source for hosts without a live transport; every request fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineSource;

impl TextSource for OfflineSource {
    type Error = TextError;

    fn request_text(&mut self, _request: &TextRequest<'_>) -> Result<String, Self::Error> {
        Err(TextError::Unavailable)
    }
}

const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    (
        "hs2-before-tests",
        "PASS  src/payments/__tests__/checkout.test.ts (2 tests)\n  \
         ✓ creates a checkout session\n  \
         ✓ handles missing product ID\n\n\
         Test Suites: 1 passed, 1 total\n\
         Tests:       2 passed, 2 total\n\
         Coverage:    20.3%",
    ),
    (
        "hs3-mcp-flow",
        "[context] Reading Jira ticket PROJ-1234...\n\
         [context] Pulling linked Slack thread #incident-db-timeout...\n\
         [context] Checking GitHub blame for src/db/pool.ts...\n\
         [plan]    Root cause: connection pool max set to 5, needs 20 under load\n\
         [edit]    Updated src/db/pool.ts, pool.max: 5 → 20, added health check\n\
         [test]    All 47 tests passing, load test confirms fix\n\
         [update]  Jira PROJ-1234 → Done, linked PR #892",
    ),
    (
        FALLBACK_KEY,
        "Demo output — this interactive is using canned data.",
    ),
];

#[derive(Clone, Copy, Debug)]
pub struct CannedText {
    entries: &'static [(&'static str, &'static str)],
}

impl Default for CannedText {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRIES)
    }
}

impl CannedText {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    fn lookup(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find_map(|(candidate, text)| (*candidate == key).then_some(*text))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Unknown keys resolve to the fallback entry, or "" without one.
    pub fn get(&self, key: &str) -> &'static str {
        self.lookup(key)
            .or_else(|| self.lookup(FALLBACK_KEY))
            .unwrap_or("")
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }
}

/// Never fails: live errors and empty replies degrade to canned output while
/// the response keeps reporting the live mode.
pub fn query<S: TextSource>(
    mode: AppMode,
    source: &mut S,
    canned: &CannedText,
    request: &TextRequest<'_>,
) -> TextResponse {
    let output = match mode {
        AppMode::Demo => canned.get(request.canned_key).to_owned(),
        AppMode::Live => match source.request_text(request) {
            Ok(text) if !text.is_empty() => {
                debug!("text: live reply key={} bytes={}", request.canned_key, text.len());
                text
            }
            Ok(_) => {
                warn!("text: {} key={}", TextError::EmptyResponse, request.canned_key);
                canned.get(request.canned_key).to_owned()
            }
            Err(err) => {
                warn!("text: live request failed key={} err={err}", request.canned_key);
                canned.get(request.canned_key).to_owned()
            }
        },
    };

    TextResponse { mode, output }
}
