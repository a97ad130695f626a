// src/shared/section/view_cache.rs
use serde::Serialize;

use crate::shared::http::RequestError;

/// Last fetched data for one section.
///
/// A failed fetch leaves the default value in place and records the message.
#[derive(Debug, Clone, Serialize)]
pub struct ViewCache<T> {
    data: T,
    loading: bool,
    last_error: Option<String>,
}

impl<T: Default> Default for ViewCache<T> {
    fn default() -> Self {
        Self {
            data: T::default(),
            loading: false,
            last_error: None,
        }
    }
}

impl<T: Default> ViewCache<T> {
    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(&mut self, result: Result<T, RequestError>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = data;
                self.last_error = None;
            }
            Err(e) => {
                self.data = T::default();
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Drops the cached data. The caller is expected to refetch.
    pub fn invalidate(&mut self) {
        self.data = T::default();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_load_degrades_to_default_data() {
        let mut cache: ViewCache<Vec<u32>> = ViewCache::default();
        cache.finish_load(Ok(vec![1, 2, 3]));

        cache.begin_load();
        cache.finish_load(Err(RequestError::Transport("connection refused".to_string())));

        assert!(cache.data().is_empty());
        assert!(!cache.is_loading());
        assert_eq!(
            cache.last_error(),
            Some("Network error: connection refused")
        );
    }

    #[test]
    fn successful_load_clears_previous_error() {
        let mut cache: ViewCache<Vec<u32>> = ViewCache::default();
        cache.finish_load(Err(RequestError::Decode("bad".to_string())));

        cache.finish_load(Ok(vec![7]));

        assert_eq!(cache.data(), &vec![7]);
        assert!(cache.last_error().is_none());
    }

    #[test]
    fn begin_load_sets_loading_flag() {
        let mut cache: ViewCache<Option<String>> = ViewCache::default();

        cache.begin_load();

        assert!(cache.is_loading());
    }
}
