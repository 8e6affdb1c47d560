//! Syntax highlighting manager
//!
//! This module provides the SyntaxManager that ties the registry,
//! tokenizer, compositor and render cache together behind a single
//! `get_or_compute` call.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::{debug, info};

use super::cache::{ContentHash, MemoCache, RenderKey};
use super::compositor;
use super::registry::PatternRegistry;
use super::style::AnnotatedText;
use super::theme::{palette_for, ThemeMode};
use super::tokenizer::Tokenizer;
use crate::config::Config;
use crate::error::{HighlightError, Result};

static SHARED: Lazy<SyntaxManager> = Lazy::new(|| {
    // Built-in patterns are fixed; failing here is a build defect
    match SyntaxManager::new(&Config::default()) {
        Ok(manager) => manager,
        Err(e) => panic!("built-in syntax patterns are invalid: {}", e),
    }
});

/// Snapshot of cache activity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub token_hits: u64,
    pub token_misses: u64,
    pub token_entries: usize,
    pub render_hits: u64,
    pub render_misses: u64,
    pub render_entries: usize,
    /// Uncached tokenizations performed
    pub tokenize_runs: u64,
    /// Compositor invocations performed
    pub compose_runs: u64,
}

/// Main syntax highlighting manager
pub struct SyntaxManager {
    tokenizer: Tokenizer,
    /// Fully styled output per (language, content, size, theme)
    render_cache: MemoCache<RenderKey, AnnotatedText>,
    compose_runs: AtomicU64,
}

impl SyntaxManager {
    /// Create a manager with the built-in languages
    pub fn new(config: &Config) -> Result<Self> {
        let registry = Arc::new(PatternRegistry::builtin()?);
        info!(
            token_cache = config.token_cache_capacity,
            render_cache = config.render_cache_capacity,
            "syntax manager ready"
        );
        Ok(Self::with_registry(
            registry,
            config.token_cache_capacity,
            config.render_cache_capacity,
        ))
    }

    /// Create a manager over an existing registry
    pub fn with_registry(
        registry: Arc<PatternRegistry>,
        token_capacity: usize,
        render_capacity: usize,
    ) -> Self {
        Self {
            tokenizer: Tokenizer::new(registry, token_capacity),
            render_cache: MemoCache::new(render_capacity),
            compose_runs: AtomicU64::new(0),
        }
    }

    /// Process-wide manager with default capacities
    pub fn shared() -> &'static SyntaxManager {
        &SHARED
    }

    /// Styled text for the given inputs, computed at most once per key
    pub fn get_or_compute(
        &self,
        language: &str,
        text: &str,
        font_size: f32,
        mode: ThemeMode,
    ) -> Result<Arc<AnnotatedText>> {
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(HighlightError::InvalidFontSize(font_size));
        }

        let theme = palette_for(mode);
        let key = RenderKey {
            language: language.to_string(),
            content: ContentHash::of(text),
            font_size_bits: font_size.to_bits(),
            theme_key: theme.key(),
        };

        if let Some(hit) = self.render_cache.get(&key) {
            return Ok(hit);
        }

        debug!(language, len = text.len(), theme = theme.key(), "render cache miss");
        let spans = self.tokenizer.tokenize(text, language);
        self.compose_runs.fetch_add(1, Ordering::Relaxed);
        let annotated = Arc::new(compositor::compose(text, &spans, font_size, theme));
        self.render_cache.insert(key, Arc::clone(&annotated));
        Ok(annotated)
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Current cache counters
    pub fn stats(&self) -> CacheStats {
        let tokens = self.tokenizer.cache();
        CacheStats {
            token_hits: tokens.hits(),
            token_misses: tokens.misses(),
            token_entries: tokens.len(),
            render_hits: self.render_cache.hits(),
            render_misses: self.render_cache.misses(),
            render_entries: self.render_cache.len(),
            tokenize_runs: self.tokenizer.runs(),
            compose_runs: self.compose_runs.load(Ordering::Relaxed),
        }
    }

    /// Release every cached entry
    pub fn clear(&self) {
        self.tokenizer.cache().clear();
        self.render_cache.clear();
    }
}
