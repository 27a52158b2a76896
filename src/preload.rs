use crate::error::AppError;
use governor::clock::{Clock, DefaultClock};
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

const IMAGE_TIMEOUT_SECS: u64 = 10;

/// Fetches a single image so later display is instant.
pub trait ImageLoader: Sync {
    fn load(&self, url: &str) -> Result<(), AppError>;
}

/// Loads `http(s)` URLs over the network and everything else from disk.
pub struct AssetLoader {
    agent: ureq::Agent,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    clock: DefaultClock,
}

impl AssetLoader {
    pub fn new(loads_per_second: u32) -> Self {
        let per_second = NonZeroU32::new(loads_per_second).unwrap_or(NonZeroU32::MIN);
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(IMAGE_TIMEOUT_SECS))
            .build();
        AssetLoader {
            agent,
            rate_limiter: RateLimiter::direct(Quota::per_second(per_second)),
            clock: DefaultClock::default(),
        }
    }

    fn wait_for_slot(&self) {
        while let Err(not_until) = self.rate_limiter.check() {
            thread::sleep(not_until.wait_time_from(self.clock.now()));
        }
    }

    fn fetch_remote(&self, url: &str) -> Result<(), AppError> {
        self.wait_for_slot();
        let response = self.agent.get(url).call().map_err(|e| AppError::ImageLoad {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        io::copy(&mut response.into_reader(), &mut io::sink()).map_err(|e| {
            AppError::ImageLoad {
                url: url.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(())
    }
}

impl ImageLoader for AssetLoader {
    fn load(&self, url: &str) -> Result<(), AppError> {
        if url.starts_with("http://") || url.starts_with("https://") {
            self.fetch_remote(url)
        } else {
            fs::read(url).map(|_| ()).map_err(|e| AppError::ImageLoad {
                url: url.to_string(),
                reason: e.to_string(),
            })
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PreloadReport {
    /// Loads issued for this page.
    pub requested: usize,
    /// URLs whose load failed. They still count as preloaded.
    pub failed: Vec<String>,
}

/// Image URLs already requested during this session.
#[derive(Debug, Default)]
pub struct PreloadSet {
    loaded: HashSet<String>,
}

impl PreloadSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.loaded.contains(url)
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }

    /// Distinct URLs from `urls` that have not been requested yet.
    pub fn pending<'a>(&self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut pending: Vec<String> = Vec::new();
        for url in urls {
            if !self.loaded.contains(url) && !pending.iter().any(|p| p == url) {
                pending.push(url.to_string());
            }
        }
        pending
    }

    /// Loads every new URL concurrently and returns once all of them have
    /// settled.
    pub fn preload<'a, L>(&mut self, urls: impl IntoIterator<Item = &'a str>, loader: &L) -> PreloadReport
    where
        L: ImageLoader + ?Sized,
    {
        let pending = self.pending(urls);
        if pending.is_empty() {
            return PreloadReport::default();
        }
        debug!(count = pending.len(), "preloading images");

        let results: Vec<(String, Result<(), AppError>)> = pending
            .into_par_iter()
            .map(|url| {
                let result = loader.load(&url);
                (url, result)
            })
            .collect();

        let mut report = PreloadReport {
            requested: results.len(),
            failed: Vec::new(),
        };
        for (url, result) in results {
            if let Err(e) = result {
                warn!("{}", e);
                report.failed.push(url.clone());
            }
            self.loaded.insert(url);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLoader {
        seen: Mutex<Vec<String>>,
    }

    impl ImageLoader for RecordingLoader {
        fn load(&self, url: &str) -> Result<(), AppError> {
            self.seen.lock().unwrap().push(url.to_string());
            if url.contains("broken") {
                return Err(AppError::ImageLoad {
                    url: url.to_string(),
                    reason: "404".to_string(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn never_reloads_a_known_url() {
        let loader = RecordingLoader::default();
        let mut set = PreloadSet::new();

        let first = set.preload(["a.png", "b.png", "a.png"], &loader);
        assert_eq!(first.requested, 2);

        let second = set.preload(["b.png", "c.png"], &loader);
        assert_eq!(second.requested, 1);

        let mut seen = loader.seen.lock().unwrap().clone();
        seen.sort();
        assert_eq!(seen, ["a.png", "b.png", "c.png"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn failures_are_reported_but_not_retried() {
        let loader = RecordingLoader::default();
        let mut set = PreloadSet::new();

        let report = set.preload(["ok.png", "broken.png"], &loader);
        assert_eq!(report.requested, 2);
        assert_eq!(report.failed, ["broken.png"]);
        assert!(set.contains("broken.png"));

        let again = set.preload(["broken.png"], &loader);
        assert_eq!(again, PreloadReport::default());
    }

    #[test]
    fn missing_local_file_is_a_load_error() {
        let loader = AssetLoader::new(5);
        let err = loader.load("./definitely/not/here.png").unwrap_err();
        assert!(matches!(err, AppError::ImageLoad { .. }));
    }
}
