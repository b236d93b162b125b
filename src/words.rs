use crate::error::HangmanError;

pub const WORDS: &[&str] = &[
    "about", "account", "across", "addition", "after", "again", "against", "almost", "alone",
    "along", "already", "although", "always", "among", "amount", "animal", "another", "answer",
    "anything", "appear", "argument", "around", "array", "assembly", "attempt", "backend",
    "balance", "banana", "because", "become", "before", "behind", "believe", "between", "binary",
    "bitwise", "boolean", "border", "bottom", "branch", "bridge", "bright", "broken", "browser",
    "bucket", "buffer", "button", "cache", "callback", "camera", "cargo", "castle", "center",
    "change", "channel", "charge", "choice", "circle", "class", "clean", "client", "closure",
    "cloud", "cluster", "coffee", "column", "comment", "commit", "common", "compile", "compute",
    "console", "constant", "cookie", "corner", "cosmic", "country", "course", "cursor", "daemon",
    "debug", "decimal", "default", "deploy", "design", "detail", "device", "digital", "dinner",
    "display", "docker", "domain", "double", "dragon", "driver", "during", "dynamic", "editor",
    "element", "engine", "enough", "error", "event", "export", "factor", "family", "feature",
    "fetch", "field", "filter", "finger", "flower", "folder", "follow", "forest", "format",
    "frame", "friend", "function", "galaxy", "garden", "gather", "generic", "github", "global",
    "gradient", "graph", "guitar", "hammer", "handle", "harbor", "header", "health", "height",
    "hidden", "history", "holiday", "import", "income", "index", "inline", "input", "insert",
    "island", "iterator", "jacket", "journey", "jungle", "kernel", "keyboard", "kitchen", "ladder",
    "lambda", "laptop", "layout", "library", "lifetime", "linker", "listen", "little", "logic",
    "machine", "macro", "market", "matrix", "memory", "method", "middle", "module", "monitor",
    "mountain", "museum", "mutex", "native", "network", "number", "object", "ocean", "office",
    "option", "orange", "output", "packet", "parser", "pattern", "pencil", "people", "pickle",
    "pixel", "planet", "plugin", "pocket", "pointer", "popular", "portal", "powder", "process",
    "program", "promise", "python", "query", "queue", "random", "reason", "record", "reducer",
    "refactor", "region", "remote", "render", "report", "router", "runtime", "rust", "sandbox",
    "schema", "screen", "script", "search", "second", "server", "shadow", "signal", "silver",
    "socket", "source", "spring", "stack", "static", "stream", "string", "struct", "summer",
    "switch", "symbol", "syntax", "system", "target", "tensor", "template", "terminal", "thread",
    "ticket", "token", "tomato", "trait", "travel", "tunnel", "tuple", "unicode", "update",
    "vector", "version", "village", "virtual", "window", "winter", "wizard", "wrapper", "yellow",
];

/// Validated, read-only pool the secret word is drawn from.
#[derive(Debug, Clone)]
pub struct WordPool
{
    words: Vec<String>,
}

impl WordPool
{
    /// Checks every entry once so the game never has to handle a bad word later.
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<Self, HangmanError>
    {
        if words.is_empty() {
            return Err(HangmanError::EmptyWordList);
        }
        let mut checked = Vec::with_capacity(words.len());
        for (index, word) in words.iter().enumerate() {
            let word = word.as_ref();
            if !is_playable(word) {
                return Err(HangmanError::InvalidWord {
                    index,
                    word: word.to_string(),
                });
            }
            checked.push(word.to_string());
        }
        Ok(Self { words: checked })
    }

    pub fn builtin() -> Result<Self, HangmanError>
    {
        Self::new(WORDS)
    }

    pub fn words(&self) -> &[String]
    {
        &self.words
    }

    pub fn len(&self) -> usize
    {
        self.words.len()
    }

    #[cfg(test)]
    pub fn contains(&self, word: &str) -> bool
    {
        self.words.iter().any(|candidate| candidate == word)
    }
}

fn is_playable(word: &str) -> bool
{
    !word.is_empty() && word.chars().all(|ch| ch.is_ascii_lowercase())
}
