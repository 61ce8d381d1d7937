//! Best-effort list state for pages.
//!
//! DESIGN
//! ======
//! A failed list fetch degrades to an empty list plus a captured message.
//! Each page decides whether to show that message or just the empty state.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::future::Future;

use rest::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub error: Option<String>,
}

impl<T> Default for Loaded<T> {
    fn default() -> Self {
        Self { items: Vec::new(), error: None }
    }
}

impl<T> Loaded<T> {
    pub fn from_result(result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(items) => Self { items, error: None },
            Err(e) => Self { items: Vec::new(), error: Some(e.message()) },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A single record fetched for a detail or edit page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Lookup<T> {
    #[default]
    Loading,
    Found(T),
    Missing,
}

impl<T> Lookup<T> {
    /// State while the record for a route id is fetched: loading when there
    /// is an id, missing when the route has none.
    pub fn pending_for(id: Option<&str>) -> Self {
        if id.is_some() { Self::Loading } else { Self::Missing }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Self::Found)
    }
}

/// Await a list call and never fail.
pub async fn best_effort<T, F>(call: F) -> Loaded<T>
where
    F: Future<Output = Result<Vec<T>, ApiError>>,
{
    Loaded::from_result(call.await)
}

/// Await a single-record call. Any failure is treated as "not found".
pub async fn find_one<T, F>(call: F) -> Option<T>
where
    F: Future<Output = Result<T, ApiError>>,
{
    call.await.ok()
}
